//! The loop behind one [`PollHandle`](super::PollHandle).

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::endpoint::Endpoint;
use crate::fetcher::JokeFetcher;

use super::state::{PollState, Termination};
use super::PollItem;

pub(super) struct PollLoop {
    pub(super) fetcher: Arc<JokeFetcher>,
    pub(super) endpoint: Endpoint,
    pub(super) delay: Duration,
    pub(super) items: mpsc::Sender<PollItem>,
    pub(super) state: watch::Sender<PollState>,
    pub(super) cancel: CancellationToken,
}

impl PollLoop {
    pub(super) async fn run(self) {
        info!(endpoint = %self.endpoint, delay = ?self.delay, "poll loop started");

        let termination = self.drive().await;

        // Publish the terminal state before the error item so a consumer
        // holding the error already sees `Terminated`.
        self.state.send_replace(PollState::Terminated(termination));

        match termination {
            Termination::Cancelled => info!(endpoint = %self.endpoint, "poll loop cancelled"),
            Termination::Failed(error) => {
                warn!(endpoint = %self.endpoint, %error, "poll loop stopped");
                self.emit(Err(error)).await;
            }
        }
    }

    /// Fetch, emit, wait; repeat until a fetch fails or the token fires.
    async fn drive(&self) -> Termination {
        loop {
            self.state.send_replace(PollState::Fetching);

            let outcome = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => return Termination::Cancelled,
                outcome = self.fetcher.fetch(self.endpoint) => outcome,
            };

            let text = match outcome {
                Ok(text) => text,
                Err(error) => return Termination::Failed(error),
            };

            if !self.emit(Ok(text)).await {
                return Termination::Cancelled;
            }

            self.state.send_replace(PollState::Waiting);
            debug!(delay = ?self.delay, "waiting before next fetch");

            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => return Termination::Cancelled,
                _ = tokio::time::sleep(self.delay) => {}
            }
        }
    }

    /// Hand one item to the consumer. `false` if it is gone or cancelled.
    async fn emit(&self, item: PollItem) -> bool {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => false,
            sent = self.items.send(item) => sent.is_ok(),
        }
    }
}
