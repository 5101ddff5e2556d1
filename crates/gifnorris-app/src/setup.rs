//! Turns loaded config into service objects.

use std::sync::Arc;
use std::time::Duration;

use gifnorris_common::{GifNorrisError, Result};
use gifnorris_config::{GifNorrisConfig, JokeCategory, ServiceConfig};
use gifnorris_service::{Endpoint, FetcherConfig, JokeFetcher, JokePoller};

pub fn fetcher_config(service: &ServiceConfig) -> FetcherConfig {
    FetcherConfig::new(&service.host, &service.base_path, &service.api_key)
        .with_header_name(&service.header_name)
}

pub fn endpoint_for(category: JokeCategory) -> Endpoint {
    match category {
        JokeCategory::Random => Endpoint::Random,
        JokeCategory::Science => Endpoint::Science,
        JokeCategory::Food => Endpoint::Food,
    }
}

/// Build the fetcher over reqwest.
pub fn build_fetcher(config: &GifNorrisConfig) -> Result<Arc<JokeFetcher>> {
    if config.service.api_key.is_empty() {
        tracing::warn!(
            "no API key configured; set {} or service.api_key",
            gifnorris_config::API_KEY_ENV
        );
    }

    let fetcher = JokeFetcher::with_reqwest(fetcher_config(&config.service))
        .map_err(|e| GifNorrisError::Transport(e.to_string()))?;
    Ok(Arc::new(fetcher))
}

pub fn build_poller(
    fetcher: Arc<JokeFetcher>,
    config: &GifNorrisConfig,
    endpoint: Endpoint,
) -> JokePoller {
    JokePoller::new(fetcher)
        .with_endpoint(endpoint)
        .with_delay(Duration::from_secs(config.polling.delay_secs))
}
