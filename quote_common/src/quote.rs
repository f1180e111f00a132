//! Quote data model and JSON decoding helpers.
//!
//! A `Quote` is what the widget displays: an id, the quote body and its author. It is
//! built either from a `QuotePayload` returned by the quote source or synthesized
//! locally as the fallback quote. Only the current quote is ever kept; each refresh cycle
//! replaces it wholesale.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Monotonic number of a refresh cycle, starting at 1 on mount.
pub type CycleId = u64;

/// Id carried by the fallback quote.
pub const FALLBACK_ID: &str = "fallback";
/// Body of the fallback quote.
pub const FALLBACK_CONTENT: &str = "Hope is the thing with feathers that perches in the soul - and sings the tune without the words - and never stops at all.";
/// Author of the fallback quote.
pub const FALLBACK_AUTHOR: &str = "Emily Dickinson";

/// A displayed quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// `api-<unix millis>-<cycle>` for fetched quotes, `fallback` for the fallback.
    pub id: String,
    /// Quote body, never empty.
    pub content: String,
    /// Attribution, never empty.
    pub author: String,
}

impl Quote {
    /// The quote shown whenever the source cannot be used. Always identical.
    pub fn fallback() -> Self {
        Quote {
            id: String::from(FALLBACK_ID),
            content: String::from(FALLBACK_CONTENT),
            author: String::from(FALLBACK_AUTHOR),
        }
    }

    /// Build a quote received during `cycle`, stamping it with the current time.
    pub fn fetched(content: String, author: String, cycle: CycleId) -> Self {
        Quote {
            id: format!("api-{}-{}", Utc::now().timestamp_millis(), cycle),
            content,
            author,
        }
    }

    /// Returns `true` if this is the fallback quote.
    pub fn is_fallback(&self) -> bool {
        self.id == FALLBACK_ID
    }
}

/// Body returned by the quote source.
///
/// Both fields are optional at decode time so that a missing field surfaces as
/// `FetchError::MissingField` instead of a generic decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotePayload {
    /// Quote body.
    #[serde(default)]
    pub quote: Option<String>,
    /// Attribution.
    #[serde(default)]
    pub author: Option<String>,
}

impl QuotePayload {
    /// Convenience constructor for a complete payload.
    pub fn new(quote: &str, author: &str) -> Self {
        QuotePayload {
            quote: Some(String::from(quote)),
            author: Some(String::from(author)),
        }
    }

    /// Decode a response body. Anything but a JSON object is `MalformedBody`.
    pub fn from_json(bytes: &[u8]) -> Result<Self, FetchError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| FetchError::MalformedBody(e.to_string()))?;
        if !value.is_object() {
            return Err(FetchError::MalformedBody(String::from(
                "expected a JSON object",
            )));
        }
        serde_json::from_value(value).map_err(|e| FetchError::MalformedBody(e.to_string()))
    }

    /// Validate the payload and turn it into the quote for `cycle`.
    ///
    /// `quote` maps to `content` and `author` to `author`; both must be present and
    /// non-empty.
    pub fn into_quote(self, cycle: CycleId) -> Result<Quote, FetchError> {
        let content = non_empty(self.quote).ok_or(FetchError::MissingField("quote"))?;
        let author = non_empty(self.author).ok_or(FetchError::MissingField("author"))?;
        Ok(Quote::fetched(content, author, cycle))
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_stable() {
        let first = Quote::fallback();
        let second = Quote::fallback();
        assert_eq!(first, second);
        assert_eq!(first.content, FALLBACK_CONTENT);
        assert_eq!(first.author, "Emily Dickinson");
        assert!(first.is_fallback());
    }

    #[test]
    fn payload_maps_quote_and_author() {
        let quote = QuotePayload::new("X", "Y").into_quote(3).unwrap();
        assert_eq!(quote.content, "X");
        assert_eq!(quote.author, "Y");
        assert_ne!(quote.id, FALLBACK_ID);
        assert!(quote.id.starts_with("api-"));
        assert!(quote.id.ends_with("-3"));
    }

    #[test]
    fn missing_or_empty_fields_are_rejected() {
        let no_author = QuotePayload {
            quote: Some(String::from("X")),
            author: None,
        };
        assert_eq!(
            no_author.into_quote(1),
            Err(FetchError::MissingField("author"))
        );

        let empty_quote = QuotePayload {
            quote: Some(String::new()),
            author: Some(String::from("Y")),
        };
        assert_eq!(
            empty_quote.into_quote(1),
            Err(FetchError::MissingField("quote"))
        );
    }

    #[test]
    fn whitespace_fields_are_kept_as_is() {
        let payload = QuotePayload::from_json(br#"{"quote":"   ","author":"Y"}"#).unwrap();
        let quote = payload.into_quote(2).unwrap();
        assert_eq!(quote.content, "   ");
        assert_eq!(quote.author, "Y");
        assert!(!quote.is_fallback());
    }

    #[test]
    fn decodes_object_and_ignores_extra_fields() {
        let payload =
            QuotePayload::from_json(br#"{"quote":"X","author":"Y","tags":["a"]}"#).unwrap();
        assert_eq!(payload, QuotePayload::new("X", "Y"));

        let partial = QuotePayload::from_json(br#"{"author":"Y"}"#).unwrap();
        assert_eq!(partial.quote, None);
    }

    #[test]
    fn rejects_empty_and_non_object_bodies() {
        let bodies: [&[u8]; 5] = [b"", b"not json", b"[\"X\",\"Y\"]", b"null", br#"{"quote":42}"#];
        for body in bodies {
            assert!(
                matches!(QuotePayload::from_json(body), Err(FetchError::MalformedBody(_))),
                "body {:?} should be malformed",
                String::from_utf8_lossy(body)
            );
        }
    }
}
