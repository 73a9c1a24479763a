//! Extract the message id from the `/messages/:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Numeric message id. A segment that is not a decimal integer names no message, so it is a 404.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for MessageId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound(String::new()))?;
        parse_id(&raw).map(MessageId)
    }
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound(raw.to_string()));
    }
    raw.parse().map_err(|_| AppError::NotFound(raw.to_string()))
}
