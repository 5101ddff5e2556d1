//! Joke API endpoints.

use std::fmt;
use std::str::FromStr;

/// One of the fixed joke endpoints, identified by its URL suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endpoint {
    #[default]
    Random,
    Science,
    Food,
}

impl Endpoint {
    pub const ALL: [Endpoint; 3] = [Endpoint::Random, Endpoint::Science, Endpoint::Food];

    /// Path suffix appended to `<host><base-path>`.
    pub fn suffix(self) -> &'static str {
        match self {
            Endpoint::Random => "/random",
            Endpoint::Science => "/random?category=science",
            Endpoint::Food => "/random?category=food",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Random => "random",
            Endpoint::Science => "science",
            Endpoint::Food => "food",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown joke category {0:?} (expected random, science or food)")]
pub struct UnknownEndpoint(pub String);

impl FromStr for Endpoint {
    type Err = UnknownEndpoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownEndpoint(s.to_string()))
    }
}
