//! Plan overview aggregation for display layers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::task::ScheduleTask;

/// Aggregate view over one generated schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub task_count: usize,
    pub study_minutes: u32,
    pub revision_minutes: u32,
    pub total_minutes: u32,
    pub days_used: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

impl PlanSummary {
    pub fn from_tasks(tasks: &[ScheduleTask]) -> Self {
        let mut study = 0u32;
        let mut revision = 0u32;
        let mut days: BTreeSet<NaiveDate> = BTreeSet::new();

        for t in tasks {
            if t.is_revision {
                revision += t.duration_minutes;
            } else {
                study += t.duration_minutes;
            }
            days.insert(t.date);
        }

        Self {
            task_count: tasks.len(),
            study_minutes: study,
            revision_minutes: revision,
            total_minutes: study + revision,
            days_used: days.len(),
            first_date: days.first().copied(),
            last_date: days.last().copied(),
        }
    }
}
