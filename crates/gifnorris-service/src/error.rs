//! Request outcome classification.

/// Classified failure of a single joke request.
///
/// Every variant is terminal for a poll loop; none is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RequestError {
    #[error("redirection (3xx)")]
    Redirection,
    #[error("client error (4xx)")]
    ClientError,
    #[error("server error (5xx)")]
    ServerError,
    #[error("request failed")]
    GenericError,
}

impl RequestError {
    /// Classify an HTTP status code.
    ///
    /// Returns `None` for 0-299. A missing code means the transport never
    /// produced a response and is a `GenericError`, as is any code past 599.
    pub fn from_status(code: Option<u16>) -> Option<Self> {
        let code = match code {
            Some(code) => code,
            None => return Some(RequestError::GenericError),
        };

        match code {
            0..=299 => None,
            300..=399 => Some(RequestError::Redirection),
            400..=499 => Some(RequestError::ClientError),
            500..=599 => Some(RequestError::ServerError),
            _ => Some(RequestError::GenericError),
        }
    }
}

/// Failure below HTTP: DNS, connect, TLS, or a broken response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
