use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the router. Every request falls through to the document handler.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(handlers::serve_document)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
