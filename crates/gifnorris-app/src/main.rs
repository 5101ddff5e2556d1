mod cli;
mod display;
mod logging;
mod setup;

use std::io::Write;
use std::process::ExitCode;

use gifnorris_common::{GifNorrisError, Result};
use gifnorris_config::{ConfigSource, GifNorrisConfig};
use gifnorris_service::RandomTextGenerator;

use display::RenderOutcome;

async fn run(args: &cli::Args, config: &GifNorrisConfig) -> Result<()> {
    let endpoint = args
        .category
        .unwrap_or_else(|| setup::endpoint_for(config.polling.category));
    let fetcher = setup::build_fetcher(config)?;

    let mut stdout = std::io::stdout().lock();

    if args.once {
        let joke = fetcher
            .fetch(endpoint)
            .await
            .map_err(|e| GifNorrisError::Poll(e.to_string()))?;
        writeln!(stdout, "{}", joke.trim_end())?;
        return Ok(());
    }

    let poller = setup::build_poller(fetcher, config, endpoint);
    tracing::info!(
        %endpoint,
        delay_secs = config.polling.delay_secs,
        "polling for jokes (Ctrl-C to stop)"
    );

    let mut handle = poller.poll_for_text();
    let outcome = tokio::select! {
        outcome = display::render(&mut handle, &mut stdout, args.count) => Some(outcome?),
        _ = tokio::signal::ctrl_c() => None,
    };
    handle.cancel();

    match outcome {
        None => tracing::info!("interrupted"),
        Some(RenderOutcome::LimitReached) => tracing::info!("joke limit reached"),
        Some(RenderOutcome::Ended) => tracing::info!("polling ended"),
        Some(RenderOutcome::Failed(error)) => {
            return Err(GifNorrisError::Poll(error.to_string()));
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Loaded before logging so the config can pick the log level. Where it
    // came from is logged once the subscriber is installed.
    let (config, source) = match gifnorris_config::load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("gifnorris: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(args.log_level.as_deref(), config.logging.level);
    tracing::info!("GifNorris v{} starting...", env!("CARGO_PKG_VERSION"));
    match &source {
        ConfigSource::File(_) => tracing::info!("{source}"),
        ConfigSource::CreatedDefault(_) => tracing::info!(
            "{source}; set service.api_key there or in {}",
            gifnorris_config::API_KEY_ENV
        ),
    }
    tracing::debug!(service = ?config.service, "config loaded");

    match run(&args, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
