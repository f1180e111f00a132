//! Command-line arguments for the quote client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::time::Duration;

use clap::Parser;
use quote_common::OverlapPolicy;
use quote_common::net::{
    DEFAULT_QUOTE_URL, DEFAULT_REFRESH_INTERVAL_MS, DEFAULT_REQUEST_TIMEOUT_MS,
    DEFAULT_SETTLE_DELAY_MS,
};
use quote_rotator::RotatorConfig;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Endpoint answering `GET` with `{ "quote": ..., "author": ... }`.
    #[clap(long, default_value = DEFAULT_QUOTE_URL)]
    pub url: String,

    /// Milliseconds between two refresh cycles.
    #[clap(long, default_value_t = DEFAULT_REFRESH_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Milliseconds to keep the quote hidden before requesting the next one.
    #[clap(long, default_value_t = DEFAULT_SETTLE_DELAY_MS)]
    pub settle_ms: u64,

    /// Request timeout in milliseconds.
    #[clap(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// What to do with cycles still running when the next one starts.
    #[clap(long, value_enum, default_value_t = OverlapPolicy::Overlap)]
    pub overlap: OverlapPolicy,

    /// Tear the rotator down after this many seconds instead of waiting for Ctrl+C.
    #[clap(long)]
    pub run_secs: Option<u64>,

    /// Run a single cycle, print the quote and exit.
    #[clap(long)]
    pub once: bool,

    /// With `--once`, fail on a source error instead of printing the fallback quote.
    #[clap(long, requires = "once")]
    pub strict: bool,
}

impl Args {
    /// Rotator settings described by these arguments.
    pub fn rotator_config(&self) -> RotatorConfig {
        RotatorConfig {
            url: self.url.trim().to_string(),
            refresh_interval: Duration::from_millis(self.interval_ms),
            settle_delay: Duration::from_millis(self.settle_ms),
            request_timeout: Duration::from_millis(self.timeout_ms),
            overlap: self.overlap,
        }
    }

    /// How long to keep the rotator mounted, if bounded.
    pub fn run_for(&self) -> Option<Duration> {
        self.run_secs.map(Duration::from_secs)
    }
}
