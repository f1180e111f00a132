//! Shared test utilities: a scripted quote source and event helpers.

#![allow(dead_code)]

pub mod mock_source;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use crossbeam_channel::Receiver;
use quote_common::{FetchError, QuotePayload};
use quote_rotator::{FadeState, QuoteSource, RotatorEvent};
use tokio::time::Instant;

/// One scripted answer: how long the request takes and what it returns.
#[derive(Debug, Clone)]
pub struct Scripted {
    pub latency: Duration,
    pub outcome: Result<QuotePayload, FetchError>,
}

impl Scripted {
    pub fn ok(quote: &str, latency_ms: u64) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
            outcome: Ok(QuotePayload::new(quote, "Tester")),
        }
    }

    pub fn err(error: FetchError, latency_ms: u64) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
            outcome: Err(error),
        }
    }
}

/// Source answering from a script in call order; once the script is exhausted every
/// call succeeds immediately with `"default"`.
pub struct ScriptedSource {
    script: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<Instant>>,
    completed: Mutex<usize>,
}

impl ScriptedSource {
    pub fn new(script: Vec<Scripted>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
            completed: Mutex::new(0),
        })
    }

    /// Instants at which `fetch` was called.
    pub fn calls(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls that ran to completion (were not dropped mid-flight).
    pub fn completed(&self) -> usize {
        *self.completed.lock().unwrap()
    }
}

#[async_trait]
impl QuoteSource for ScriptedSource {
    async fn fetch(&self) -> Result<QuotePayload, FetchError> {
        self.calls.lock().unwrap().push(Instant::now());
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Scripted::ok("default", 0));
        tokio::time::sleep(next.latency).await;
        *self.completed.lock().unwrap() += 1;
        next.outcome
    }
}

/// Every event received so far, without blocking.
pub fn drain(events: &Receiver<RotatorEvent>) -> Vec<RotatorEvent> {
    events.try_iter().collect()
}

/// Only the states among `events`.
pub fn states(events: &[RotatorEvent]) -> Vec<FadeState> {
    events
        .iter()
        .filter_map(|event| match event {
            RotatorEvent::State(state) => Some(state.clone()),
            RotatorEvent::Shutdown => None,
        })
        .collect()
}

/// Latest state among everything received so far.
pub fn latest(events: &Receiver<RotatorEvent>, previous: Option<FadeState>) -> Option<FadeState> {
    states(&drain(events)).pop().or(previous)
}

/// Sleep (virtual or real time) until `ms` after `start`.
pub async fn at(start: Instant, ms: u64) {
    tokio::time::sleep_until(start + Duration::from_millis(ms)).await;
}

/// Assert that `actual - start` lies in `[expected_ms, expected_ms + 5]`.
pub fn assert_near(start: Instant, actual: Instant, expected_ms: u64) {
    let elapsed = actual.duration_since(start);
    let expected = Duration::from_millis(expected_ms);
    assert!(
        elapsed >= expected && elapsed <= expected + Duration::from_millis(5),
        "expected ~{:?} after start, got {:?}",
        expected,
        elapsed
    );
}

/// Poll `events` until a state satisfies `pred`, giving up after `timeout` of real time.
pub async fn wait_for_state(
    events: &Receiver<RotatorEvent>,
    timeout: Duration,
    pred: impl Fn(&FadeState) -> bool,
) -> Option<FadeState> {
    let deadline = std::time::Instant::now() + timeout;
    while std::time::Instant::now() < deadline {
        for event in drain(events) {
            if let RotatorEvent::State(state) = event {
                if pred(&state) {
                    return Some(state);
                }
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    None
}
