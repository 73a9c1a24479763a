//! Response helpers shared by the message handlers.

use crate::message::Message;
use axum::{http::StatusCode, Json};
use serde::Serialize;

pub const DELETED: &str = "Message deleted successfully.";

/// Body returned after a successful delete.
#[derive(Serialize)]
pub struct Confirmation {
    pub message: &'static str,
}

pub fn created(msg: Message) -> (StatusCode, Json<Message>) {
    (StatusCode::CREATED, Json(msg))
}

pub fn ok(msg: Message) -> (StatusCode, Json<Message>) {
    (StatusCode::OK, Json(msg))
}

pub fn ok_many(msgs: Vec<Message>) -> (StatusCode, Json<Vec<Message>>) {
    (StatusCode::OK, Json(msgs))
}

pub fn deleted() -> (StatusCode, Json<Confirmation>) {
    (StatusCode::OK, Json(Confirmation { message: DELETED }))
}
