//! Treatment of refresh cycles that overlap.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// What happens to cycles still in flight when the next tick fires.
///
/// `Overlap` keeps them running: whichever cycle settles last decides the displayed
/// quote, even if it started earlier. `CancelOnNextTick` drops them so only the newest
/// cycle can update the view.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum OverlapPolicy {
    /// Let every cycle run to completion; last to settle wins.
    #[default]
    Overlap,
    /// Abandon in-flight cycles when a new one starts.
    CancelOnNextTick,
}
