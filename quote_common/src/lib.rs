//!
//! Common types and utilities shared by the quote rotator and its front end.
//!
//! This crate aggregates:
//! - `error` — the `FetchError` taxonomy of quote source failures and the unified
//!   `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the displayed `Quote`, the wire `QuotePayload` and the fallback quote.
//! - `policy` — how overlapping refresh cycles are treated.
//! - `net` — endpoint and timing defaults.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod policy;
pub mod quote;
pub mod result;

pub use error::{FetchError, QuoteError};
pub use policy::OverlapPolicy;
pub use quote::{CycleId, Quote, QuotePayload};
pub use result::Result;
