//! Rotator configuration.

use std::time::Duration;

use quote_common::net::{
    DEFAULT_QUOTE_URL, DEFAULT_REFRESH_INTERVAL_MS, DEFAULT_REQUEST_TIMEOUT_MS,
    DEFAULT_SETTLE_DELAY_MS,
};
use quote_common::{OverlapPolicy, QuoteError, Result};

/// Settings for one rotator instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotatorConfig {
    /// Quote source endpoint.
    pub url: String,
    /// Time between cycle starts. Must be non-zero.
    pub refresh_interval: Duration,
    /// Pause between hiding the quote and issuing the request.
    pub settle_delay: Duration,
    /// Upper bound on a single request.
    pub request_timeout: Duration,
    /// Treatment of cycles still in flight when the next one starts.
    pub overlap: OverlapPolicy,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        RotatorConfig {
            url: String::from(DEFAULT_QUOTE_URL),
            refresh_interval: Duration::from_millis(DEFAULT_REFRESH_INTERVAL_MS),
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            overlap: OverlapPolicy::default(),
        }
    }
}

impl RotatorConfig {
    /// Reject settings the rotator cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.refresh_interval.is_zero() {
            return Err(QuoteError::Config(String::from(
                "refresh interval must be greater than zero",
            )));
        }
        if self.url.trim().is_empty() {
            return Err(QuoteError::Config(String::from("quote URL must not be empty")));
        }
        if self.request_timeout.is_zero() {
            return Err(QuoteError::Config(String::from(
                "request timeout must be greater than zero",
            )));
        }
        Ok(())
    }
}
