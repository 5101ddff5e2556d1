//! GifNorris configuration system.
//!
//! TOML-based configuration for the joke service, the polling loop and
//! logging. Every section has defaults so partial configs work out of the
//! box.
//!
//! ```rust,no_run
//! let (config, source) = gifnorris_config::load_config(None).expect("failed to load config");
//! println!("{source}; polling every {}s", config.polling.delay_secs);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{GifNorrisConfig, JokeCategory, LogLevel, ServiceConfig};
pub use toml_loader::ConfigSource;

use std::path::Path;

use gifnorris_common::ConfigError;

/// Environment variable that overrides `service.api_key`.
pub const API_KEY_ENV: &str = "GIFNORRIS_API_KEY";

/// Load config from `path`, or from the platform default path when `None`.
///
/// An explicit path must exist; the default path is created with
/// documented defaults on first run. `GIFNORRIS_API_KEY` is applied last.
pub fn load_config(path: Option<&Path>) -> Result<(GifNorrisConfig, ConfigSource), ConfigError> {
    let (mut config, source) = match path {
        Some(path) => (
            toml_loader::load_from_path(path)?,
            ConfigSource::File(path.to_path_buf()),
        ),
        None => toml_loader::load_default()?,
    };

    apply_api_key_override(&mut config, std::env::var(API_KEY_ENV).ok());
    validation::validate(&config)?;
    Ok((config, source))
}

fn apply_api_key_override(config: &mut GifNorrisConfig, key: Option<String>) {
    if let Some(key) = key.filter(|k| !k.is_empty()) {
        tracing::debug!("using API key from {API_KEY_ENV}");
        config.service.api_key = key;
    }
}
