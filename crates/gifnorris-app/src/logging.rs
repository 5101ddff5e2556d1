//! Tracing filter selection.
//!
//! Precedence: `--log-level` on top of everything, then `RUST_LOG`, then the
//! config file's `[logging] level` applied to the gifnorris crates.

use gifnorris_config::LogLevel;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

pub fn env_filter(
    override_directive: Option<&str>,
    rust_log: Option<&str>,
    level: LogLevel,
) -> EnvFilter {
    let from_env = rust_log
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| match EnvFilter::try_new(value) {
            Ok(filter) => Some(filter),
            Err(e) => {
                eprintln!("gifnorris: ignoring invalid {}: {e}", EnvFilter::DEFAULT_ENV);
                None
            }
        });

    let override_directive =
        override_directive.and_then(|value| match value.parse::<Directive>() {
            Ok(directive) => Some(directive),
            Err(e) => {
                eprintln!("gifnorris: ignoring invalid log directive {value:?}: {e}");
                None
            }
        });

    match (override_directive, from_env) {
        (Some(directive), Some(filter)) => filter.add_directive(directive),
        (Some(directive), None) => EnvFilter::default().add_directive(directive),
        (None, Some(filter)) => filter,
        (None, None) => EnvFilter::new(format!("gifnorris={}", level.as_str())),
    }
}

/// Install the global subscriber. stdout carries only jokes, so logs go to stderr.
pub fn init(override_directive: Option<&str>, level: LogLevel) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(override_directive, rust_log.as_deref(), level))
        .init();
}
