//! Router assembly and the middleware stack.

mod common;
mod messages;

pub use common::common_routes;
pub use messages::message_routes;

use crate::config::Settings;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application: common and message routes behind a body size limit, tracing, and permissive CORS.
/// The limit layer sits outermost; `Cors` needs a `Default` response body, which the limit body is not.
pub fn app_router(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(message_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(RequestBodyLimitLayer::new(settings.body_limit_bytes))
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
