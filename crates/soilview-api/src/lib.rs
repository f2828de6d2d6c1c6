pub mod config;
pub mod document;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::FatalServerError;
pub use router::create_router;
pub use server::DocumentServer;
pub use state::AppState;
