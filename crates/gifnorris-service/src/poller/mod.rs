//! Fixed-delay joke polling.
//!
//! Each [`JokePoller::start`] spawns its own loop: fetch, emit, wait, repeat.
//! The first failed fetch ends the stream with that error. Cancelling or
//! dropping the [`PollHandle`] stops the loop and suppresses anything not
//! yet delivered.

mod handle;
mod run;
mod state;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

use crate::endpoint::Endpoint;
use crate::error::RequestError;
use crate::fetcher::JokeFetcher;
use crate::RandomTextGenerator;

pub use handle::PollHandle;
pub use state::{PollState, Termination};

use run::PollLoop;

/// Wait between the emission of one joke and the next fetch.
pub const DEFAULT_POLL_DELAY: Duration = Duration::from_secs(15);

/// One stream item. An `Err` is always the last item.
pub type PollItem = Result<String, RequestError>;

/// Starts independent polling loops over a shared fetcher.
#[derive(Clone)]
pub struct JokePoller {
    fetcher: Arc<JokeFetcher>,
    endpoint: Endpoint,
    delay: Duration,
}

impl JokePoller {
    pub fn new(fetcher: Arc<JokeFetcher>) -> Self {
        Self {
            fetcher,
            endpoint: Endpoint::Random,
            delay: DEFAULT_POLL_DELAY,
        }
    }

    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Spawn a new poll loop on the current tokio runtime.
    ///
    /// Panics if called outside a runtime, like `tokio::spawn`.
    pub fn start(&self) -> PollHandle {
        let (items_tx, items_rx) = mpsc::channel(1);
        let (state_tx, state_rx) = watch::channel(PollState::Idle);
        let cancel = CancellationToken::new();

        let poll_loop = PollLoop {
            fetcher: Arc::clone(&self.fetcher),
            endpoint: self.endpoint,
            delay: self.delay,
            items: items_tx,
            state: state_tx,
            cancel: cancel.clone(),
        };
        tokio::spawn(poll_loop.run());

        PollHandle::new(items_rx, state_rx, cancel)
    }
}

impl RandomTextGenerator for JokePoller {
    fn poll_for_text(&self) -> PollHandle {
        self.start()
    }
}
