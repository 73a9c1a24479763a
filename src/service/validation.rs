//! Presence checks on decoded request bodies.

use crate::error::AppError;
use crate::message::{MessagePatch, NewMessage};
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// Create needs both `body` and `username` as non-empty strings. Extra keys are ignored.
    pub fn new_message(payload: Option<&Map<String, Value>>) -> Result<NewMessage, AppError> {
        let payload = payload.ok_or(AppError::InvalidInput)?;
        Ok(NewMessage {
            body: required_text(payload, "body")?,
            username: required_text(payload, "username")?,
        })
    }

    /// Update may omit `body`; when present it must be a string, possibly empty.
    pub fn patch(payload: Option<&Map<String, Value>>) -> Result<MessagePatch, AppError> {
        let payload = payload.ok_or(AppError::InvalidInput)?;
        let body = match payload.get("body") {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => return Err(AppError::InvalidInput),
        };
        Ok(MessagePatch { body })
    }
}

fn required_text(payload: &Map<String, Value>, field: &str) -> Result<String, AppError> {
    match payload.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(AppError::InvalidInput),
    }
}
