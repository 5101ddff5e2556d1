use std::path::PathBuf;

use clap::Parser;
use gifnorris_service::Endpoint;

/// GifNorris: prints a fresh Chuck Norris joke every few seconds.
#[derive(Parser, Debug)]
#[command(name = "gifnorris", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. debug, gifnorris=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Joke category: random, science or food.
    #[arg(short = 'c', long)]
    pub category: Option<Endpoint>,

    /// Stop after printing this many jokes.
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub count: Option<u64>,

    /// Fetch a single joke and exit.
    #[arg(long, conflicts_with = "count")]
    pub once: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
