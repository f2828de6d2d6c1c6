use std::env;

/// Document server configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = match env::var("SOILVIEW_PORT") {
            Ok(p) => p.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid SOILVIEW_PORT value '{}': expected a port number", p);
                defaults.port
            }),
            Err(_) => defaults.port,
        };

        let host = env::var("SOILVIEW_HOST")
            .ok()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);

        Self { host, port }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
