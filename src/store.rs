//! Message persistence: the store handle passed to every request, plus its backends.

use crate::error::AppError;
use crate::message::{Message, NewMessage};
use async_trait::async_trait;

mod memory;
mod postgres;

pub use memory::MemoryMessageStore;
pub use postgres::{ensure_database_exists, PgMessageStore};

/// Storage operations for messages. Each call is one statement against the backend and is committed on return.
/// Lookups and mutations on unknown ids yield `None` / `false`; callers decide what not-found means.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// All messages, oldest `created_at` first (ties by id).
    async fn list(&self) -> Result<Vec<Message>, AppError>;

    /// Insert and return the stored row. `created_at == updated_at` on the returned value.
    async fn insert(&self, new: &NewMessage) -> Result<Message, AppError>;

    async fn find(&self, id: i64) -> Result<Option<Message>, AppError>;

    /// Replace `body` and refresh `updated_at`.
    async fn update_body(&self, id: i64, body: &str) -> Result<Option<Message>, AppError>;

    /// Hard delete. Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Cheap connectivity check for `/ready`.
    async fn ping(&self) -> Result<(), AppError>;
}
