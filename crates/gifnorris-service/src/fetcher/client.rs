//! Joke fetcher: request building and response classification.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::endpoint::Endpoint;
use crate::error::{RequestError, TransportError};
use crate::transport::{HttpTransport, ReqwestTransport, TextRequest, TransportResponse};

use super::config::FetcherConfig;

const ACCEPT_TEXT: &str = "text/plain";

/// Fetches one joke per call.
pub struct JokeFetcher {
    config: FetcherConfig,
    transport: Arc<dyn HttpTransport>,
}

impl JokeFetcher {
    pub fn new(config: FetcherConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Fetcher over a default [`ReqwestTransport`].
    pub fn with_reqwest(config: FetcherConfig) -> Result<Self, TransportError> {
        Ok(Self::new(config, Arc::new(ReqwestTransport::new()?)))
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// `<host><base-path><suffix>`, concatenated verbatim.
    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!(
            "{}{}{}",
            self.config.host,
            self.config.base_path,
            endpoint.suffix()
        )
    }

    pub fn request_for(&self, endpoint: Endpoint) -> TextRequest {
        TextRequest {
            url: self.url_for(endpoint),
            headers: vec![
                (self.config.header_name.clone(), self.config.api_key.clone()),
                ("Accept".to_string(), ACCEPT_TEXT.to_string()),
            ],
        }
    }

    /// Fetch one joke from `endpoint`.
    ///
    /// Resolves to exactly one text or one [`RequestError`]. Dropping the
    /// future before it resolves aborts the request.
    pub async fn fetch(&self, endpoint: Endpoint) -> Result<String, RequestError> {
        let request = self.request_for(endpoint);
        debug!(%endpoint, url = %request.url, "joke request");

        let response = match self.transport.get(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(%endpoint, error = %e, "joke request failed before a response");
                return Err(RequestError::GenericError);
            }
        };

        decode_response(response).inspect_err(|kind| {
            warn!(%endpoint, %kind, "joke request failed");
        })
    }
}

/// Turn a transport response into joke text.
///
/// The status decides first; only a 0-299 response gets its body decoded,
/// and a missing or non-UTF-8 body is a `GenericError`.
pub(crate) fn decode_response(response: TransportResponse) -> Result<String, RequestError> {
    if let Some(error) = RequestError::from_status(response.status) {
        debug!(status = ?response.status, "classified status");
        return Err(error);
    }

    let body = response.body.ok_or(RequestError::GenericError)?;
    String::from_utf8(body).map_err(|_| RequestError::GenericError)
}
