//! Configuration schema types for GifNorris.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod polling;
mod service;

pub use logging::*;
pub use polling::*;
pub use service::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GifNorrisConfig {
    pub service: ServiceConfig,
    pub polling: PollingConfig,
    pub logging: LoggingConfig,
}
