//! Optional day-fitting rules the packer consults before placing work.
//!
//! Plain generation applies neither rule; enabling one is an explicit caller
//! choice, so presence or absence is always visible in configuration.

use serde::{Deserialize, Serialize};

/// Default is both rules off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPolicy {
    /// Slow-pace plans: defer a Hard topic's start to the next day when the
    /// current day already carries a Hard study chunk.
    pub one_hard_per_day_on_slow: bool,
    /// Reserve a generic 30-minute revision slot on every 7th day after the
    /// start, charged against that day's budget.
    pub weekly_revision_buffer: bool,
}

impl PlanPolicy {
    pub fn strict() -> Self {
        Self {
            one_hard_per_day_on_slow: true,
            weekly_revision_buffer: true,
        }
    }
}
