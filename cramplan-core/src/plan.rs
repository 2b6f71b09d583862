//! Plan parameters: the date window, daily budget, and pace setting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::topic::Difficulty;

/// Learning pace. Scales every topic's base study allocation: a Slow learner
/// gets more minutes per topic, a Fast learner fewer.
///
/// Serialized as the capitalized name ("Slow"/"Medium"/"Fast"), matching the
/// strings the persistence layer stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pace {
    Slow,
    Medium,
    Fast,
}

impl Pace {
    /// Effort multiplier: higher means more time allocated per topic.
    pub fn multiplier(&self) -> f64 {
        match self {
            Pace::Slow => 1.5,
            Pace::Medium => 1.0,
            Pace::Fast => 0.75,
        }
    }

    /// Minutes required to study one topic at this pace, rounded to whole
    /// minutes. All base/multiplier combinations are integral today; rounding
    /// guards against future non-integral multipliers.
    pub fn effective_minutes(&self, difficulty: Difficulty) -> u32 {
        (difficulty.base_minutes() as f64 * self.multiplier()).round() as u32
    }
}

/// Configuration for one schedule-generation request. Not persisted as an
/// entity; the caller reads these off the plan record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleParams {
    pub start_date: NaiveDate,
    pub exam_date: NaiveDate,
    /// Whole hours of study per day; the generator converts to minutes.
    pub daily_hours: u32,
    pub pace: Pace,
}

impl ScheduleParams {
    pub fn new(start_date: NaiveDate, exam_date: NaiveDate, daily_hours: u32, pace: Pace) -> Self {
        Self {
            start_date,
            exam_date,
            daily_hours,
            pace,
        }
    }

    /// Saturates instead of overflowing on absurd hour counts.
    pub fn daily_minutes(&self) -> u32 {
        self.daily_hours.saturating_mul(60)
    }

    /// Whole days between start and exam. Non-positive means the window is
    /// impossible and the schedule is empty.
    pub fn span_days(&self) -> i64 {
        (self.exam_date - self.start_date).num_days()
    }
}
