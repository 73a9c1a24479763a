//! HTTP handlers for the message resource.

pub mod messages;
pub use messages::*;
