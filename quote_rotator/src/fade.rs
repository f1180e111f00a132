//! Visibility/fade state machine.
//!
//! ```text
//! Shown ──CycleStarted──→ Hiding ──SettleElapsed──→ Fetching ──FetchSettled──→ Shown
//! ```
//!
//! `FadeReducer::reduce` is the only place the state changes. Intents are accepted from
//! any phase because overlapping cycles interleave their events: a cycle may settle while
//! a newer one is still hiding, and the view then shows the older cycle's quote.

use quote_common::{CycleId, Quote};
use strum_macros::Display;

/// Visual phase of the widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Phase {
    /// Quote visible (or nothing yet, before the first cycle settles).
    #[default]
    Shown,
    /// Quote hidden, waiting for the settle delay.
    Hiding,
    /// Quote hidden, request in flight.
    Fetching,
}

/// Everything needed to render the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FadeState {
    /// Current phase.
    pub phase: Phase,
    /// Whether the quote text is visible.
    pub visible: bool,
    /// Quote on display; `None` only until the first cycle settles.
    pub current: Option<Quote>,
    /// Cycles started but not yet settled.
    pub pending: usize,
}

impl Default for FadeState {
    fn default() -> Self {
        FadeState {
            phase: Phase::Shown,
            visible: true,
            current: None,
            pending: 0,
        }
    }
}

impl FadeState {
    /// A loading indicator is due only while nothing has been shown yet.
    pub fn is_loading(&self) -> bool {
        self.current.is_none() && self.pending > 0
    }
}

/// Events that move the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FadeIntent {
    /// The scheduler started a cycle.
    CycleStarted(CycleId),
    /// A cycle's settle delay elapsed and its request was issued.
    SettleElapsed(CycleId),
    /// A cycle's request settled with the quote to show.
    FetchSettled(CycleId, Quote),
    /// In-flight cycles were abandoned before settling.
    CyclesDropped(usize),
}

/// Pure transition function for `FadeState`.
pub struct FadeReducer;

impl FadeReducer {
    /// Apply `intent` to `state` and return the new state.
    pub fn reduce(state: FadeState, intent: FadeIntent) -> FadeState {
        match intent {
            FadeIntent::CycleStarted(_) => FadeState {
                phase: Phase::Hiding,
                visible: false,
                pending: state.pending + 1,
                ..state
            },
            FadeIntent::SettleElapsed(_) => FadeState {
                phase: Phase::Fetching,
                visible: false,
                ..state
            },
            FadeIntent::FetchSettled(_, quote) => FadeState {
                phase: Phase::Shown,
                visible: true,
                current: Some(quote),
                pending: state.pending.saturating_sub(1),
            },
            FadeIntent::CyclesDropped(count) => FadeState {
                pending: state.pending.saturating_sub(count),
                ..state
            },
        }
    }
}
