//! Message board: a single `Message` resource over REST, stored in PostgreSQL or in memory.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod message;
pub mod migration;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Settings, StoreBackend};
pub use error::{AppError, ConfigError};
pub use message::{Message, MessagePatch, NewMessage};
pub use migration::apply_migrations;
pub use routes::{app_router, common_routes, message_routes};
pub use service::MessageService;
pub use state::AppState;
pub use store::{ensure_database_exists, MemoryMessageStore, MessageStore, PgMessageStore};
