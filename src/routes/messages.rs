//! Message CRUD routes: the collection path and the per-id path.

use crate::handlers::{create, delete as delete_handler, list, update};
use crate::state::AppState;
use axum::{routing::get, routing::patch, Router};

pub fn message_routes(state: AppState) -> Router {
    Router::new()
        .route("/messages", get(list).post(create))
        .route("/messages/:id", patch(update).delete(delete_handler))
        .with_state(state)
}
