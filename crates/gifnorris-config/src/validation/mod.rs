//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator runs them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod service;


use crate::schema::GifNorrisConfig;
use gifnorris_common::ConfigError;

use helpers::validate_range;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GifNorrisConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    service::validate_service(&mut errors, config);
    validate_range(
        &mut errors,
        "polling.delay_secs",
        config.polling.delay_secs,
        1,
        3600,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
