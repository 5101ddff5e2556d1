//! HTTP transport seam.
//!
//! The fetcher only needs "GET this URL with these headers and give me the
//! status and body". Production uses [`ReqwestTransport`]; tests script
//! responses without touching the network.

use std::fmt;

use async_trait::async_trait;
use tracing::debug;

use crate::error::TransportError;

/// A fully-resolved GET request.
#[derive(Clone, PartialEq, Eq)]
pub struct TextRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl TextRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

// Header values carry the API key, so only names are printed.
impl fmt::Debug for TextRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.headers.iter().map(|(n, _)| n.as_str()).collect();
        f.debug_struct("TextRequest")
            .field("url", &self.url)
            .field("headers", &names)
            .finish()
    }
}

/// What came back from the server.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransportResponse {
    pub status: Option<u16>,
    pub body: Option<Vec<u8>>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: Some(status),
            body: Some(body.into()),
        }
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform one GET. Dropping the returned future aborts the request.
    async fn get(&self, request: &TextRequest) -> Result<TransportResponse, TransportError>;
}

/// reqwest-backed transport. Adds no timeout of its own.
///
/// [`new`](Self::new) keeps reqwest's default redirect policy (up to 10
/// hops), so a 3xx only reaches the caller when it cannot be followed: a
/// 304, a missing `Location`, or a redirect loop.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| TransportError::new(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http })
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: &TextRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self.http.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let body = match response.bytes().await {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(e) => {
                debug!(status, error = %e, "failed to read response body");
                None
            }
        };

        Ok(TransportResponse {
            status: Some(status),
            body,
        })
    }
}
