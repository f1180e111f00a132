//! Recurring trigger for refresh cycles.

use std::time::Duration;

use quote_common::CycleId;
use tokio::time::{Interval, MissedTickBehavior, interval};

/// Fires immediately when created, then once per period, numbering each cycle.
///
/// There is no jitter and no skip-if-busy: a tick fires whether or not earlier cycles
/// have settled. Dropping the scheduler cancels the trigger. Must be created inside a
/// tokio runtime.
pub struct RotationScheduler {
    interval: Interval,
    next_cycle: CycleId,
}

impl RotationScheduler {
    /// Panics if `period` is zero; `RotatorConfig::validate` rules that out.
    pub fn new(period: Duration) -> Self {
        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            interval,
            next_cycle: 1,
        }
    }

    /// Wait for the next tick and return the id of the cycle it starts.
    ///
    /// Cancel safe: a tick that is not awaited to completion does not consume an id.
    pub async fn tick(&mut self) -> CycleId {
        self.interval.tick().await;
        let cycle = self.next_cycle;
        self.next_cycle += 1;
        cycle
    }

    /// Time between ticks.
    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}
