//! Rotator event loop, mount and teardown.
//!
//! `QuoteRotator::mount` spawns one task that owns the `FadeState` and multiplexes three
//! sources of events with `tokio::select!`:
//!
//! - the teardown signal from `RotatorHandle`,
//! - `RotationScheduler` ticks, each starting a cycle,
//! - completed `CycleStep`s of every cycle in flight (`FuturesUnordered`).
//!
//! Every transition is broadcast to subscribers as `RotatorEvent::State`. Subscribers get
//! plain `crossbeam_channel` receivers so that a renderer thread can consume them without
//! touching the async runtime; a subscriber whose receiver is gone is dropped from the list.
//!
//! Overlap: with `OverlapPolicy::Overlap` a tick never waits for, nor cancels, earlier
//! cycles. If a settle delay plus a request outlast the interval, two cycles are in flight
//! at once and their quotes are applied in completion order, so a slow older request can
//! replace a newer quote. `OverlapPolicy::CancelOnNextTick` drops the in-flight cycles
//! instead.
//!
//! Teardown: the loop stops the scheduler and drops every in-flight step, which abandons
//! pending delays and requests. Nothing they would have produced reaches the state, and
//! `RotatorEvent::Shutdown` is the last event subscribers see.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, unbounded};
use futures_util::StreamExt;
use futures_util::future::BoxFuture;
use futures_util::stream::FuturesUnordered;
use log::{debug, info, warn};
use quote_common::{OverlapPolicy, QuoteError, Result};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::config::RotatorConfig;
use crate::controller::{CycleController, CycleStep};
use crate::fade::{FadeIntent, FadeReducer, FadeState};
use crate::scheduler::RotationScheduler;
use crate::source::QuoteSource;

/// Message sent by the rotator to its subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotatorEvent {
    /// State after a transition.
    State(FadeState),
    /// The rotator was torn down; no more events follow.
    Shutdown,
}

/// A quote rotator that has not been mounted yet.
pub struct QuoteRotator {
    config: RotatorConfig,
    controller: CycleController,
    subscribers: Vec<Sender<RotatorEvent>>,
}

impl QuoteRotator {
    /// Create a rotator fetching from `source`. Fails if `config` is invalid.
    pub fn new(config: RotatorConfig, source: Arc<dyn QuoteSource>) -> Result<Self> {
        config.validate()?;
        let controller = CycleController::new(source, config.settle_delay);
        Ok(Self {
            config,
            controller,
            subscribers: Vec::new(),
        })
    }

    /// Register a subscriber for state changes.
    pub fn subscribe(&mut self) -> Receiver<RotatorEvent> {
        let (tx, rx) = unbounded::<RotatorEvent>();
        self.subscribers.push(tx);
        rx
    }

    /// Spawn the event loop on the current tokio runtime. The first cycle starts at once.
    pub fn mount(self) -> RotatorHandle {
        let (teardown_tx, teardown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(self.run(teardown_rx));
        RotatorHandle {
            teardown_tx: Some(teardown_tx),
            task: Some(task),
        }
    }

    async fn run(mut self, mut teardown: oneshot::Receiver<()>) -> FadeState {
        let mut scheduler = RotationScheduler::new(self.config.refresh_interval);
        let mut in_flight: FuturesUnordered<BoxFuture<'static, CycleStep>> =
            FuturesUnordered::new();
        let mut state = FadeState::default();

        info!(
            "Quote rotator mounted: every {:?}, settle {:?}, overlap policy {}",
            self.config.refresh_interval, self.config.settle_delay, self.config.overlap
        );

        loop {
            tokio::select! {
                biased;

                // A dropped handle closes the channel, which also ends the loop.
                _ = &mut teardown => break,

                cycle = scheduler.tick() => {
                    if self.config.overlap == OverlapPolicy::CancelOnNextTick && !in_flight.is_empty() {
                        let dropped = in_flight.len();
                        in_flight = FuturesUnordered::new();
                        warn!("Cycle {}: abandoning {} unfinished cycle(s)", cycle, dropped);
                        state = self.apply(state, FadeIntent::CyclesDropped(dropped));
                    }
                    debug!("Cycle {} started", cycle);
                    in_flight.push(self.controller.settle(cycle));
                    state = self.apply(state, FadeIntent::CycleStarted(cycle));
                }

                Some(step) = in_flight.next(), if !in_flight.is_empty() => match step {
                    CycleStep::SettleElapsed(cycle) => {
                        debug!("Cycle {}: settle delay elapsed", cycle);
                        in_flight.push(self.controller.fetch(cycle));
                        state = self.apply(state, FadeIntent::SettleElapsed(cycle));
                    }
                    CycleStep::Settled(cycle, quote) => {
                        debug!("Cycle {} settled with quote {}", cycle, quote.id);
                        state = self.apply(state, FadeIntent::FetchSettled(cycle, quote));
                    }
                },
            }
        }

        if !in_flight.is_empty() {
            debug!("Discarding {} in-flight step(s) on teardown", in_flight.len());
        }
        drop(in_flight);
        self.broadcast(RotatorEvent::Shutdown);
        info!("Quote rotator torn down");
        state
    }

    fn apply(&mut self, state: FadeState, intent: FadeIntent) -> FadeState {
        let next = FadeReducer::reduce(state, intent);
        self.broadcast(RotatorEvent::State(next.clone()));
        next
    }

    fn broadcast(&mut self, event: RotatorEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }
}

/// Handle to a mounted rotator.
///
/// Dropping the handle stops the rotator as well, without waiting for it.
pub struct RotatorHandle {
    teardown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<FadeState>>,
}

impl RotatorHandle {
    /// Stop the rotator and wait for its loop to exit.
    ///
    /// Returns the final state, or `None` if the rotator was already torn down.
    pub async fn teardown(&mut self) -> Result<Option<FadeState>> {
        if let Some(tx) = self.teardown_tx.take() {
            // The loop may already be gone; that is fine.
            let _ = tx.send(());
        }
        match self.task.take() {
            Some(task) => {
                let state = task.await.map_err(|e| QuoteError::Join(e.to_string()))?;
                Ok(Some(state))
            }
            None => Ok(None),
        }
    }

    /// Returns `true` until `teardown` has been called.
    pub fn is_mounted(&self) -> bool {
        self.task.is_some()
    }
}
