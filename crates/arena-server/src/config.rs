//! HTTP server configuration.

use serde::{Deserialize, Serialize};

/// Leaderboard API server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Basic auth username (empty = disabled).
    #[serde(default)]
    pub username: String,
    /// Basic auth password (empty = disabled).
    #[serde(default)]
    pub password: String,
    /// Answer CORS preflights from any origin.
    #[serde(default = "default_cors_allow_any")]
    pub cors_allow_any: bool,
}

fn default_port() -> u16 {
    8080
}

fn default_cors_allow_any() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            username: String::new(),
            password: String::new(),
            cors_allow_any: default_cors_allow_any(),
        }
    }
}

impl ServerConfig {
    /// Check if basic auth is enabled.
    pub fn auth_enabled(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}
