//!
//! Quote rotator: shows one quote at a time and refreshes it from an HTTP source.
//!
//! Every refresh is a *cycle*: the current quote is hidden, a short settle delay lets the
//! fade-out finish, one request goes to the quote source, and the result (or the fallback
//! quote on any failure) is shown again. Cycles start immediately on mount and then on a
//! fixed interval until the rotator is torn down.
//!
//! Building blocks:
//! - `config` — `RotatorConfig` with the interval, settle delay, timeout and overlap policy.
//! - `source` — the `QuoteSource` trait and its reqwest-backed `HttpQuoteSource`.
//! - `controller` — `CycleController`, which runs the steps of one cycle and folds every
//!   failure into the fallback quote.
//! - `fade` — the pure visibility state machine (`FadeState`, `FadeIntent`, `FadeReducer`).
//! - `scheduler` — `RotationScheduler`, the recurring trigger.
//! - `rotator` — `QuoteRotator`, the event loop that owns the state, plus `RotatorHandle`
//!   for teardown and `RotatorEvent` for subscribers.
//!
//! Concurrency: the event loop is a single tokio task. It is the only place the state is
//! mutated, so there are no locks around it. Cycles that outlive the refresh interval
//! overlap by default and the last one to settle wins, even when it started first.
#![warn(missing_docs)]
pub mod config;
pub mod controller;
pub mod fade;
pub mod rotator;
pub mod scheduler;
pub mod source;

pub use config::RotatorConfig;
pub use controller::{CycleController, CycleStep};
pub use fade::{FadeIntent, FadeReducer, FadeState, Phase};
pub use rotator::{QuoteRotator, RotatorEvent, RotatorHandle};
pub use scheduler::RotationScheduler;
pub use source::{HttpQuoteSource, QuoteSource};
