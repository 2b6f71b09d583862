//! Scheduled task model: one dated unit of study or revision work.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::topic::Topic;

/// Minutes reserved for every revision task (per-topic and weekly buffer).
pub const REVISION_MINUTES: u32 = 30;

/// Tracking state owned by downstream task tracking, not by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
    Missed,
}

/// One unit of study work placed on a specific calendar day.
///
/// Produced in bulk by the generator; immutable apart from `status`, which a
/// downstream tracker may flip later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTask {
    pub date: NaiveDate,
    pub description: String,
    pub duration_minutes: u32,
    /// Absent for the generic weekly revision buffer.
    pub topic_id: Option<i64>,
    pub is_revision: bool,
    pub status: TaskStatus,
}

impl ScheduleTask {
    /// A study chunk for one topic. `minutes` is whatever the packer allocated,
    /// not necessarily the topic's full requirement.
    pub fn study(date: NaiveDate, topic: &Topic, minutes: u32) -> Self {
        Self {
            date,
            description: format!("Study {} ({}) - Part", topic.name, topic.difficulty),
            duration_minutes: minutes,
            topic_id: Some(topic.id),
            is_revision: false,
            status: TaskStatus::Pending,
        }
    }

    /// The 30-minute revision slot appended after a Hard topic.
    pub fn revision(date: NaiveDate, topic: &Topic) -> Self {
        Self {
            date,
            description: format!("Revision: {}", topic.name),
            duration_minutes: REVISION_MINUTES,
            topic_id: Some(topic.id),
            is_revision: true,
            status: TaskStatus::Pending,
        }
    }

    /// A generic weekly revision buffer slot, tied to no topic.
    pub fn weekly_buffer(date: NaiveDate) -> Self {
        Self {
            date,
            description: "Weekly revision buffer".to_string(),
            duration_minutes: REVISION_MINUTES,
            topic_id: None,
            is_revision: true,
            status: TaskStatus::Pending,
        }
    }
}
