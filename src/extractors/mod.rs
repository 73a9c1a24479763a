pub mod message_id;
pub mod payload;

pub use message_id::MessageId;
pub use payload::JsonPayload;
