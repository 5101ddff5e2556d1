//! Single-shot joke fetching.
//!
//! One call, one GET, one classified result.

mod client;
mod config;

pub use client::JokeFetcher;
pub use config::FetcherConfig;
