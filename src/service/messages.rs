//! Message operations on top of a [`MessageStore`]: validation and the not-found mapping.

use crate::error::AppError;
use crate::message::Message;
use crate::service::RequestValidator;
use crate::store::MessageStore;
use serde_json::{Map, Value};

pub struct MessageService;

impl MessageService {
    /// Every message, oldest first.
    pub async fn list(store: &dyn MessageStore) -> Result<Vec<Message>, AppError> {
        store.list().await
    }

    /// Validate and insert. Nothing is written when validation fails.
    pub async fn create(
        store: &dyn MessageStore,
        payload: Option<&Map<String, Value>>,
    ) -> Result<Message, AppError> {
        let new = RequestValidator::new_message(payload)?;
        let msg = store.insert(&new).await?;
        tracing::info!(id = msg.id, username = %msg.username, "message created");
        Ok(msg)
    }

    /// Existence is checked before the payload, so an unknown id wins over a malformed body.
    pub async fn update(
        store: &dyn MessageStore,
        id: i64,
        payload: Option<&Map<String, Value>>,
    ) -> Result<Message, AppError> {
        let current = store
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        let patch = RequestValidator::patch(payload)?;
        let Some(body) = patch.body else {
            return Ok(current);
        };
        let msg = store
            .update_body(id, &body)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        tracing::info!(id, "message updated");
        Ok(msg)
    }

    pub async fn delete(store: &dyn MessageStore, id: i64) -> Result<(), AppError> {
        if !store.delete(id).await? {
            return Err(AppError::NotFound(id.to_string()));
        }
        tracing::info!(id, "message deleted");
        Ok(())
    }
}
