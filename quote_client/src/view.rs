//! Plain-text rendering of the quote section.
//!
//! The block mirrors the landing page section: a caption, the quote area and a short
//! divider. While the rotator is hidden the quote area is blank, and a single dot stands
//! in for the loading ping before the very first quote arrives.
use quote_rotator::FadeState;

/// Caption above the quote.
pub const CAPTION: &str = "CREATIVE SPARK OF THE DAY";
/// Loading indicator, shown only while no quote has been displayed yet.
pub const LOADER: &str = "·";
/// Divider under the quote area.
pub const DIVIDER: &str = "────────────";

/// Render `state` as a text block.
pub fn render(state: &FadeState) -> String {
    let mut lines: Vec<String> = vec![String::from(CAPTION), String::new()];

    match &state.current {
        Some(quote) if state.visible => {
            lines.push(format!("\"{}\"", quote.content));
            lines.push(format!("— {}", quote.author));
        }
        _ if state.is_loading() => {
            lines.push(String::from(LOADER));
            lines.push(String::new());
        }
        _ => {
            lines.push(String::new());
            lines.push(String::new());
        }
    }

    lines.push(String::new());
    lines.push(String::from(DIVIDER));
    lines.join("\n")
}
