//! Joke polling service for GifNorris.
//!
//! Provides:
//! - A [`JokeFetcher`] that performs one GET per call and classifies the
//!   HTTP outcome into a [`RequestError`]
//! - A [`JokePoller`] that repeats the fetch after a fixed delay and ends
//!   its stream on the first failure
//! - An [`HttpTransport`] seam with a reqwest implementation

pub mod endpoint;
pub mod error;
pub mod fetcher;
pub mod poller;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use endpoint::{Endpoint, UnknownEndpoint};
pub use error::{RequestError, TransportError};
pub use fetcher::{FetcherConfig, JokeFetcher};
pub use poller::{JokePoller, PollHandle, PollItem, PollState, Termination, DEFAULT_POLL_DELAY};
pub use transport::{HttpTransport, ReqwestTransport, TextRequest, TransportResponse};

/// A source of an endless stream of short texts.
pub trait RandomTextGenerator: Send + Sync {
    /// Start a fresh, independent polling stream.
    fn poll_for_text(&self) -> PollHandle;
}
