//! MessageService: validated message operations over a store handle.

mod messages;
mod validation;
pub use messages::MessageService;
pub use validation::RequestValidator;
