//! Message handlers: list, create, update, delete.

use crate::error::AppError;
use crate::extractors::{JsonPayload, MessageId};
use crate::response;
use crate::service::MessageService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// GET /messages
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = MessageService::list(state.store.as_ref()).await?;
    Ok(response::ok_many(rows))
}

/// POST /messages
pub async fn create(
    State(state): State<AppState>,
    payload: JsonPayload,
) -> Result<impl IntoResponse, AppError> {
    let msg = MessageService::create(state.store.as_ref(), payload.as_object()).await?;
    Ok(response::created(msg))
}

/// PATCH /messages/:id
pub async fn update(
    State(state): State<AppState>,
    MessageId(id): MessageId,
    payload: JsonPayload,
) -> Result<impl IntoResponse, AppError> {
    let msg = MessageService::update(state.store.as_ref(), id, payload.as_object()).await?;
    Ok(response::ok(msg))
}

/// DELETE /messages/:id
pub async fn delete(
    State(state): State<AppState>,
    MessageId(id): MessageId,
) -> Result<impl IntoResponse, AppError> {
    MessageService::delete(state.store.as_ref(), id).await?;
    Ok(response::deleted())
}
