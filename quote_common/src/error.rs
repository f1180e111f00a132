//! Error types shared between the rotator and the client.
//!
//! `FetchError` describes why a single request to the quote source could not be turned
//! into a quote. Those failures never leave the rotator: they are folded into the fallback
//! quote at the controller boundary. `QuoteError` covers everything else (configuration,
//! runtime setup, signal handling) and is what functions in the workspace propagate.
use std::io;

use thiserror::Error;

/// Reasons a quote source request failed.
///
/// Every variant is treated the same way by the rotator: the fallback quote is shown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// DNS, connection, TLS or timeout failure before a response arrived.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The source answered with a non-success HTTP status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body was empty, not JSON, or not a JSON object.
    #[error("malformed body: {0}")]
    MalformedBody(String),

    /// The JSON object lacks a required non-empty field.
    #[error("missing or empty field `{0}`")]
    MissingField(&'static str),
}

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library or the async runtime.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid rotator or client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A quote source failure surfaced outside the rotator (e.g. a one-shot fetch).
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// The Ctrl+C handler could not be installed.
    #[error("Signal handler error: {0}")]
    Signal(String),

    /// The rotator task panicked or was aborted before teardown completed.
    #[error("Rotator task failed: {0}")]
    Join(String),
}
