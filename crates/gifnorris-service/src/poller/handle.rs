//! Consumer side of a poll loop.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

use super::state::{PollState, Termination};
use super::PollItem;

/// Live stream of jokes from one poll loop, and the only way to stop it.
///
/// Dropping the handle cancels the loop.
pub struct PollHandle {
    items: mpsc::Receiver<PollItem>,
    state: watch::Receiver<PollState>,
    cancel: CancellationToken,
}

impl PollHandle {
    pub(super) fn new(
        items: mpsc::Receiver<PollItem>,
        state: watch::Receiver<PollState>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            items,
            state,
            cancel,
        }
    }

    /// Next joke, the terminal error, or `None` once the stream has ended.
    ///
    /// Cancel-safe. Always `None` after [`cancel`](Self::cancel), even if an
    /// item was already buffered.
    pub async fn next(&mut self) -> Option<PollItem> {
        if self.cancel.is_cancelled() {
            return None;
        }

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => None,
            item = self.items.recv() => item,
        }
    }

    /// Stop the loop. Idempotent.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// A token that cancels this loop from elsewhere, e.g. a signal handler.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Current phase of the loop.
    pub fn state(&self) -> PollState {
        *self.state.borrow()
    }

    /// Wait until the loop has stopped and report why.
    ///
    /// Never resolves for a healthy loop that is not cancelled.
    pub async fn terminated(&self) -> Termination {
        let mut state = self.state.clone();
        let termination = state
            .wait_for(PollState::is_terminated)
            .await
            .ok()
            .and_then(|state| state.termination());
        // The loop task only vanishes without a terminal state when the
        // runtime shuts down under it.
        termination.unwrap_or(Termination::Cancelled)
    }
}

impl Stream for PollHandle {
    type Item = PollItem;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.cancel.is_cancelled() {
            return Poll::Ready(None);
        }
        self.items.poll_recv(cx)
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
