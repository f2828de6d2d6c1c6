use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::FatalServerError;
use crate::router::create_router;
use crate::state::AppState;

/// Static document server.
///
/// Runs until the accept loop fails or a handler reports a fault. A fault
/// stops the server and is returned as an error, so the process exits.
pub struct DocumentServer {
    state: Arc<AppState>,
}

impl DocumentServer {
    pub fn new(state: AppState) -> Self {
        Self { state: Arc::new(state) }
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    pub fn router(&self) -> Router {
        create_router(self.state.clone())
    }

    /// Bind the configured address and serve
    pub async fn bind_and_run(self, config: &ServerConfig) -> Result<(), FatalServerError> {
        let addr = config.bind_address();
        let listener = TcpListener::bind(&addr).await.map_err(|source| FatalServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

        tracing::info!("Server is listening at port {}", config.port);
        self.run(listener).await
    }

    /// Serve on an already bound listener
    pub async fn run(self, listener: TcpListener) -> Result<(), FatalServerError> {
        let mut faults = self.state.subscribe_faults();
        let app = self.router();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                while faults.changed().await.is_ok() {
                    if faults.borrow().is_some() {
                        break;
                    }
                }
            })
            .await
            .map_err(FatalServerError::Serve)?;

        match self.state.fault() {
            Some(reason) => Err(FatalServerError::Handler { reason }),
            None => Ok(()),
        }
    }
}

impl Default for DocumentServer {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
