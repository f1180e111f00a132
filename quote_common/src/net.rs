//! Endpoint and timing defaults for the quote rotator.

/// Public endpoint returning one random quote as `{ "quote": ..., "author": ... }`.
pub const DEFAULT_QUOTE_URL: &str = "https://quotes-api-self.vercel.app/quote";
/// Time between two refresh cycles.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 25_000;
/// Pause between hiding the current quote and issuing the request.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 500;
/// Upper bound on a single request; hitting it counts as a transport failure.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
