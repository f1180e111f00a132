//! Fetch-and-fallback controller.
//!
//! A cycle has two suspension points: the settle delay, then the request. The controller
//! hands each one out as a boxed future yielding a `CycleStep`, so the event loop can
//! apply the matching state transition as soon as a step completes. Whatever the source
//! does, a settled cycle always carries a quote: failures of any kind become
//! `Quote::fallback()` here and go no further.

use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use log::{debug, warn};
use quote_common::{CycleId, FetchError, Quote, QuotePayload, Result};

use crate::source::QuoteSource;

/// Completion of one step of a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleStep {
    /// The settle delay of `CycleId` has fully elapsed; the request may be issued.
    SettleElapsed(CycleId),
    /// The request of `CycleId` settled and produced the quote to display.
    Settled(CycleId, Quote),
}

/// Runs the steps of refresh cycles against one quote source.
#[derive(Clone)]
pub struct CycleController {
    source: Arc<dyn QuoteSource>,
    settle_delay: Duration,
}

impl CycleController {
    /// Create a controller that waits `settle_delay` before each request to `source`.
    pub fn new(source: Arc<dyn QuoteSource>, settle_delay: Duration) -> Self {
        Self {
            source,
            settle_delay,
        }
    }

    /// First step: wait for the fade-out to finish.
    pub fn settle(&self, cycle: CycleId) -> BoxFuture<'static, CycleStep> {
        let delay = self.settle_delay;
        async move {
            tokio::time::sleep(delay).await;
            CycleStep::SettleElapsed(cycle)
        }
        .boxed()
    }

    /// Second step: exactly one request, resolved to a quote.
    pub fn fetch(&self, cycle: CycleId) -> BoxFuture<'static, CycleStep> {
        let source = Arc::clone(&self.source);
        async move {
            debug!("Cycle {}: requesting a quote", cycle);
            let outcome = source.fetch().await;
            CycleStep::Settled(cycle, resolve(cycle, outcome))
        }
        .boxed()
    }

    /// Run both steps of a single cycle back to back.
    pub async fn run_cycle(&self, cycle: CycleId) -> Quote {
        tokio::time::sleep(self.settle_delay).await;
        resolve(cycle, self.source.fetch().await)
    }

    /// Like `run_cycle`, but surfaces the failure to the caller instead of the fallback.
    pub async fn fetch_strict(&self, cycle: CycleId) -> Result<Quote> {
        tokio::time::sleep(self.settle_delay).await;
        let payload = self.source.fetch().await?;
        Ok(payload.into_quote(cycle)?)
    }
}

/// Turn a request outcome into the quote to display. Never fails.
pub fn resolve(cycle: CycleId, outcome: Result<QuotePayload, FetchError>) -> Quote {
    match outcome.and_then(|payload| payload.into_quote(cycle)) {
        Ok(quote) => quote,
        Err(e) => {
            warn!("Cycle {}: quote source unavailable ({}), showing fallback", cycle, e);
            Quote::fallback()
        }
    }
}
