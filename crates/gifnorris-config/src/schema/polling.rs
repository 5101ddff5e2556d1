//! Polling loop settings.

use serde::{Deserialize, Serialize};

/// Joke category, selecting the endpoint the poller targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum JokeCategory {
    #[default]
    Random,
    Science,
    Food,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Seconds to wait after each joke before fetching the next (valid range: 1-3600).
    pub delay_secs: u64,
    pub category: JokeCategory,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            delay_secs: 15,
            category: JokeCategory::Random,
        }
    }
}
