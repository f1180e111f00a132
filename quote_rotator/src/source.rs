//! Quote sources.
//!
//! The quote source is an unreliable, rate-unbounded collaborator: one `GET`, no
//! parameters, no auth, expected to answer with `{ "quote": string, "author": string }`.
//! A source only reports what went wrong; deciding what to show is the controller's job.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use quote_common::{FetchError, QuoteError, QuotePayload, Result};

use crate::config::RotatorConfig;

/// Something that can produce one random quote payload per call.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Issue a single request. No retries.
    async fn fetch(&self) -> Result<QuotePayload, FetchError>;
}

/// `QuoteSource` backed by an HTTP endpoint.
pub struct HttpQuoteSource {
    client: reqwest::Client,
    url: String,
}

impl HttpQuoteSource {
    /// Create a source for `url` whose requests give up after `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QuoteError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Create a source from the URL and timeout in `config`.
    pub fn from_config(config: &RotatorConfig) -> Result<Self> {
        Self::new(config.url.clone(), config.request_timeout)
    }

    /// Endpoint this source queries.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch(&self) -> Result<QuotePayload, FetchError> {
        debug!("GET {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        QuotePayload::from_json(&body)
    }
}
