//! Tests for the poll loop. Time is paused, so every fetch completes
//! instantly and sleeps advance the clock deterministically.

use std::collections::HashSet;
use std::time::Duration;

use futures_util::StreamExt;
use tokio::time::{timeout, Instant};

use super::*;
use crate::testing::{fetcher_with, ok, status, ScriptedTransport, Scripted};

fn poller(transport: &ScriptedTransport) -> JokePoller {
    JokePoller::new(fetcher_with(transport))
}

/// Let the spawned loop run until it parks on something.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

#[test]
fn defaults() {
    let p = poller(&ScriptedTransport::default());
    assert_eq!(p.endpoint(), Endpoint::Random);
    assert_eq!(p.delay(), Duration::from_secs(15));
    assert_eq!(DEFAULT_POLL_DELAY, Duration::from_secs(15));
}

#[tokio::test(start_paused = true)]
async fn first_joke_is_emitted_immediately() {
    let transport = ScriptedTransport::new([ok("first")]);
    let mut handle = poller(&transport).start();
    let start = Instant::now();

    assert_eq!(handle.next().await, Some(Ok("first".to_string())));
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn second_joke_waits_for_the_fixed_delay() {
    let transport = ScriptedTransport::new([ok("first"), ok("second")]);
    let mut handle = poller(&transport).start();
    let start = Instant::now();

    assert_eq!(handle.next().await, Some(Ok("first".to_string())));

    let early = timeout(Duration::from_secs(14), handle.next()).await;
    assert!(early.is_err(), "second joke arrived before the delay");
    assert_eq!(transport.request_count(), 1);
    assert_eq!(handle.state(), PollState::Waiting);

    assert_eq!(handle.next().await, Some(Ok("second".to_string())));
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(15), "elapsed {elapsed:?}");
    assert!(elapsed < Duration::from_secs(16), "elapsed {elapsed:?}");
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn custom_delay_and_endpoint() {
    let transport = ScriptedTransport::new([ok("a"), ok("b")]);
    let mut handle = poller(&transport)
        .with_delay(Duration::from_secs(2))
        .with_endpoint(Endpoint::Food)
        .start();
    let start = Instant::now();

    assert_eq!(handle.next().await, Some(Ok("a".to_string())));
    assert_eq!(handle.next().await, Some(Ok("b".to_string())));
    assert_eq!(start.elapsed(), Duration::from_secs(2));

    for request in transport.requests() {
        assert_eq!(request.url, "https://jokes.test/jokes/random?category=food");
    }
}

#[tokio::test(start_paused = true)]
async fn failure_ends_the_stream_with_its_error() {
    let transport = ScriptedTransport::new([ok("only"), status(404), ok("never")]);
    let mut handle = poller(&transport).start();

    assert_eq!(handle.next().await, Some(Ok("only".to_string())));
    assert_eq!(handle.next().await, Some(Err(RequestError::ClientError)));
    assert_eq!(
        handle.state(),
        PollState::Terminated(Termination::Failed(RequestError::ClientError))
    );
    assert_eq!(handle.next().await, None);

    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(transport.request_count(), 2);
    assert_eq!(
        handle.terminated().await,
        Termination::Failed(RequestError::ClientError)
    );
}

#[tokio::test(start_paused = true)]
async fn failure_on_first_fetch() {
    let transport = ScriptedTransport::new([Scripted::Fail("dns lookup failed")]);
    let mut handle = poller(&transport).start();

    assert_eq!(handle.next().await, Some(Err(RequestError::GenericError)));
    assert_eq!(handle.next().await, None);
}

#[tokio::test(start_paused = true)]
async fn each_status_class_terminates_with_matching_error() {
    let cases = [
        (302, RequestError::Redirection),
        (401, RequestError::ClientError),
        (500, RequestError::ServerError),
    ];
    for (code, expected) in cases {
        let transport = ScriptedTransport::new([status(code)]);
        let mut handle = poller(&transport).start();
        assert_eq!(handle.next().await, Some(Err(expected)), "status {code}");
        assert_eq!(handle.terminated().await, Termination::Failed(expected));
    }
}

#[tokio::test(start_paused = true)]
async fn chuck_norris_scenario() {
    let transport =
        ScriptedTransport::new([ok("Chuck Norris can divide by zero."), status(503)]);
    let mut handle = poller(&transport).start();

    assert_eq!(
        handle.next().await,
        Some(Ok("Chuck Norris can divide by zero.".to_string()))
    );
    assert_eq!(handle.next().await, Some(Err(RequestError::ServerError)));
    assert_eq!(handle.next().await, None);

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests
        .iter()
        .all(|r| r.url == "https://jokes.test/jokes/random"));
}

#[tokio::test(start_paused = true)]
async fn cancel_during_delay_stops_everything() {
    let transport = ScriptedTransport::new([ok("a"), ok("b")]);
    let mut handle = poller(&transport).start();

    assert_eq!(handle.next().await, Some(Ok("a".to_string())));
    settle().await;
    assert_eq!(handle.state(), PollState::Waiting);

    handle.cancel();
    assert_eq!(handle.terminated().await, Termination::Cancelled);

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(handle.next().await, None);
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn cancel_during_fetch_suppresses_result() {
    let transport = ScriptedTransport::new([Scripted::Hang]);
    let mut handle = poller(&transport).start();

    settle().await;
    assert_eq!(handle.state(), PollState::Fetching);
    assert_eq!(transport.request_count(), 1);

    handle.cancel();
    assert!(handle.is_cancelled());
    assert_eq!(handle.next().await, None);
    assert_eq!(handle.terminated().await, Termination::Cancelled);
}

#[tokio::test(start_paused = true)]
async fn cancel_drops_an_already_buffered_joke() {
    let transport = ScriptedTransport::new([ok("buffered")]);
    let mut handle = poller(&transport).start();

    // The loop has fetched and buffered the joke but nobody has read it.
    settle().await;
    assert_eq!(transport.request_count(), 1);

    handle.cancel();
    assert_eq!(handle.next().await, None);
}

#[tokio::test(start_paused = true)]
async fn cancel_from_token_wakes_a_waiting_consumer() {
    let transport = ScriptedTransport::new([ok("a"), Scripted::Hang]);
    let mut handle = poller(&transport).start();
    assert_eq!(handle.next().await, Some(Ok("a".to_string())));

    let token = handle.cancellation_token();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(20)).await;
        token.cancel();
    });

    assert_eq!(handle.next().await, None);
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_stops_the_loop() {
    let transport = ScriptedTransport::new([ok("a"), ok("b"), ok("c")]);
    let mut handle = poller(&transport).start();
    assert_eq!(handle.next().await, Some(Ok("a".to_string())));

    drop(handle);
    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn each_start_is_an_independent_loop() {
    let transport = ScriptedTransport::new([ok("a"), ok("b"), ok("c")]);
    let p = poller(&transport);
    let mut first = p.start();
    let mut second = p.start();

    let mut seen = HashSet::new();
    seen.insert(first.next().await.unwrap().unwrap());
    seen.insert(second.next().await.unwrap().unwrap());
    assert_eq!(seen, HashSet::from(["a".to_string(), "b".to_string()]));

    first.cancel();
    assert_eq!(second.next().await, Some(Ok("c".to_string())));
    assert_eq!(first.next().await, None);
    assert_eq!(transport.request_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn works_as_a_stream() {
    let transport = ScriptedTransport::new([ok("one"), ok("two"), status(500)]);
    let handle = poller(&transport).start();

    let items: Vec<PollItem> = handle.collect().await;
    assert_eq!(
        items,
        vec![
            Ok("one".to_string()),
            Ok("two".to_string()),
            Err(RequestError::ServerError),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn random_text_generator_starts_a_loop() {
    let transport = ScriptedTransport::new([ok("via trait")]);
    let generator: Box<dyn RandomTextGenerator> = Box::new(poller(&transport));
    let mut handle = generator.poll_for_text();
    assert_eq!(handle.next().await, Some(Ok("via trait".to_string())));
}

#[tokio::test(start_paused = true)]
async fn state_starts_idle_before_the_loop_runs() {
    let transport = ScriptedTransport::new([Scripted::Hang]);
    let handle = poller(&transport).start();
    // Current-thread runtime: the spawned loop has not been polled yet.
    assert_eq!(handle.state(), PollState::Idle);
    settle().await;
    assert_eq!(handle.state(), PollState::Fetching);
}
