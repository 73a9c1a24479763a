//! Shared application state for all routes.

use crate::store::MessageStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Store handle handed to every request; Postgres or in-memory.
    pub store: Arc<dyn MessageStore>,
}

impl AppState {
    pub fn new<S: MessageStore + 'static>(store: S) -> Self {
        AppState { store: Arc::new(store) }
    }
}
