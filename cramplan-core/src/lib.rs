//! cramplan-core: data model and schedule-generation engine for study plans.
//!
//! Pure, synchronous, single-threaded; no I/O. Persistence and transport are
//! the caller's concern.

pub mod plan;
pub mod policy;
pub mod scheduler;
pub mod summary;
pub mod task;
pub mod topic;

pub use plan::{Pace, ScheduleParams};
pub use policy::PlanPolicy;
pub use scheduler::{generate_schedule, generate_schedule_with_policy};
pub use summary::PlanSummary;
pub use task::{ScheduleTask, TaskStatus, REVISION_MINUTES};
pub use topic::{Difficulty, Topic};
