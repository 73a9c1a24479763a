//! Lenient JSON body extractor: only an oversized body is rejected, so handlers can order their own checks.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};

/// Request body decoded as a JSON object. `None` when the body is missing, malformed,
/// sent without a JSON content type, or is valid JSON but not an object.
/// A body over the configured size limit is rejected with 413.
#[derive(Clone, Debug, Default)]
pub struct JsonPayload(pub Option<Map<String, Value>>);

impl JsonPayload {
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.0.as_ref()
    }
}

#[async_trait]
impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let object = match Json::<Value>::from_request(req, state).await {
            Ok(Json(Value::Object(map))) => Some(map),
            Ok(Json(other)) => {
                tracing::debug!(kind = json_kind(&other), "request body is not a JSON object");
                None
            }
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                tracing::debug!(%rejection, "request body over limit");
                return Err(AppError::PayloadTooLarge);
            }
            Err(rejection) => {
                tracing::debug!(%rejection, "unreadable JSON body");
                None
            }
        };
        Ok(JsonPayload(object))
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
