//! Renders jokes from a poll stream to a writer.

use std::io::Write;

use futures_util::{Stream, StreamExt};
use gifnorris_common::Result;
use gifnorris_service::{PollItem, RequestError};

/// How a render session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    LimitReached,
    Failed(RequestError),
    /// The stream closed without an error (it was cancelled).
    Ended,
}

/// Print each joke on its own line until the stream fails, ends, or
/// `limit` jokes have been printed.
pub async fn render<S, W>(
    stream: &mut S,
    out: &mut W,
    limit: Option<u64>,
) -> Result<RenderOutcome>
where
    S: Stream<Item = PollItem> + Unpin,
    W: Write,
{
    let mut shown: u64 = 0;

    while limit.map_or(true, |limit| shown < limit) {
        match stream.next().await {
            Some(Ok(joke)) => {
                writeln!(out, "{}", joke.trim_end())?;
                out.flush()?;
                shown += 1;
                tracing::debug!(shown, "joke displayed");
            }
            Some(Err(error)) => return Ok(RenderOutcome::Failed(error)),
            None => return Ok(RenderOutcome::Ended),
        }
    }

    Ok(RenderOutcome::LimitReached)
}
