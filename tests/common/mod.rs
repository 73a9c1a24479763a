#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use message_board::{app_router, AppState, MemoryMessageStore, Settings};
use serde_json::Value;
use tower::ServiceExt;

/// Router over a fresh in-memory store and default settings.
pub fn app() -> Router {
    let settings = Settings::from_lookup(|key| match key {
        "DATABASE_URL" => Some("memory://".to_string()),
        _ => None,
    })
    .expect("default settings");
    app_router(AppState::new(MemoryMessageStore::new()), &settings)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text)
            .unwrap_or_else(|e| panic!("not json ({e}): {}", self.text))
    }
}

pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: Body,
) -> TestResponse {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        req = req.header(header::CONTENT_TYPE, ct);
    }
    send_request(app, req.body(body).expect("request")).await
}

pub async fn send_request(app: &Router, req: Request<Body>) -> TestResponse {
    let res = app
        .clone()
        .oneshot(req)
        .await
        .expect("infallible router");
    let status = res.status();
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.expect("body");
    TestResponse {
        status,
        content_type,
        text: String::from_utf8(bytes.to_vec()).expect("utf-8 body"),
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    match body {
        Some(v) => {
            let body = Body::from(v.to_string());
            send_raw(app, method, uri, Some("application/json"), body).await
        }
        None => send_raw(app, method, uri, None, Body::empty()).await,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}
