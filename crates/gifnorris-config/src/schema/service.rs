//! Joke service connection settings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where jokes are fetched from and how the request is authenticated.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Scheme and host, e.g. `https://example.com`.
    pub host: String,
    /// Path prepended to every endpoint suffix.
    pub base_path: String,
    pub api_key: String,
    /// Name of the header carrying `api_key`.
    pub header_name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "https://matchilling-chuck-norris-jokes-v1.p.mashape.com".into(),
            base_path: "/jokes".into(),
            api_key: String::new(),
            header_name: "X-Mashape-Key".into(),
        }
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("host", &self.host)
            .field("base_path", &self.base_path)
            .field("api_key", &"[REDACTED]")
            .field("header_name", &self.header_name)
            .finish()
    }
}
