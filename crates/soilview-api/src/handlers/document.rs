use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::Response,
};

use crate::error::FatalServerError;
use crate::state::AppState;

/// Any method, any path: 200 with the static document
pub async fn serve_document(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Result<Response, FatalServerError> {
    tracing::debug!(method = %method, path = %uri.path(), "Serving document");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, state.content_type.as_str())
        .body(Body::from(state.document.clone()))
        .map_err(|e| {
            let error = FatalServerError::from(e);
            state.report_fault(&error);
            error
        })
}
