use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Unrecoverable document server fault.
///
/// Raised from a request handler it aborts that request with a 500 and a
/// closed connection, and the server shuts down. Raised from startup or the
/// accept loop it ends the process.
#[derive(Debug, Error)]
pub enum FatalServerError {
    #[error("Failed to build response: {0}")]
    Response(#[from] axum::http::Error),

    #[error("Request handler failed: {reason}")]
    Handler { reason: String },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl IntoResponse for FatalServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request handling failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONNECTION, "close")],
            "Internal Server Error",
        )
            .into_response()
    }
}
