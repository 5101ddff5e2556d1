//! Fetcher configuration.

use std::fmt;

pub const DEFAULT_HEADER_NAME: &str = "X-Mashape-Key";

/// Target host, base path and credential for every request.
#[derive(Clone)]
pub struct FetcherConfig {
    pub host: String,
    pub base_path: String,
    pub api_key: String,
    pub header_name: String,
}

impl fmt::Debug for FetcherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetcherConfig")
            .field("host", &self.host)
            .field("base_path", &self.base_path)
            .field("api_key", &"[REDACTED]")
            .field("header_name", &self.header_name)
            .finish()
    }
}

impl FetcherConfig {
    pub fn new(
        host: impl Into<String>,
        base_path: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            base_path: base_path.into(),
            api_key: api_key.into(),
            header_name: DEFAULT_HEADER_NAME.to_string(),
        }
    }

    pub fn with_header_name(mut self, header_name: impl Into<String>) -> Self {
        self.header_name = header_name.into();
        self
    }
}
