//! Scripted transport shared by the fetcher and poller tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::TransportError;
use crate::fetcher::{FetcherConfig, JokeFetcher};
use crate::transport::{HttpTransport, TextRequest, TransportResponse};

pub(crate) enum Scripted {
    Respond(TransportResponse),
    Fail(&'static str),
    /// Never completes.
    Hang,
}

pub(crate) fn ok(body: &str) -> Scripted {
    Scripted::Respond(TransportResponse::new(200, body))
}

pub(crate) fn status(code: u16) -> Scripted {
    Scripted::Respond(TransportResponse::new(code, Vec::new()))
}

#[derive(Default)]
struct Script {
    responses: VecDeque<Scripted>,
    requests: Vec<TextRequest>,
}

/// Replays responses in call order. Once the script runs out every call
/// fails at the transport level.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub(crate) fn new(responses: impl IntoIterator<Item = Scripted>) -> Self {
        let transport = Self::default();
        transport.script.lock().unwrap().responses = responses.into_iter().collect();
        transport
    }

    pub(crate) fn requests(&self) -> Vec<TextRequest> {
        self.script.lock().unwrap().requests.clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.script.lock().unwrap().requests.len()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, request: &TextRequest) -> Result<TransportResponse, TransportError> {
        let next = {
            let mut script = self.script.lock().unwrap();
            script.requests.push(request.clone());
            script.responses.pop_front()
        };

        match next {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Fail(message)) => Err(TransportError::new(message)),
            Some(Scripted::Hang) => std::future::pending().await,
            None => Err(TransportError::new("script exhausted")),
        }
    }
}

pub(crate) fn test_config() -> FetcherConfig {
    FetcherConfig::new("https://jokes.test", "/jokes", "test-key").with_header_name("X-Test-Key")
}

pub(crate) fn fetcher_with(transport: &ScriptedTransport) -> Arc<JokeFetcher> {
    Arc::new(JokeFetcher::new(test_config(), Arc::new(transport.clone())))
}
