//! Schedule generator: greedy packing of topic effort into day-sized buckets.
//!
//! Topics are processed in syllabus order as one continuous stream. A cursor
//! tracks the day being filled and the minutes already committed to it; each
//! topic resumes packing wherever the previous one left off. Hard topics get
//! a fixed 30-minute revision slot right after their study allocation.

use anyhow::{bail, Result};
use chrono::{Duration, NaiveDate};

use crate::plan::{Pace, ScheduleParams};
use crate::policy::PlanPolicy;
use crate::task::{ScheduleTask, REVISION_MINUTES};
use crate::topic::{Difficulty, Topic};

/// Packing position: the day being filled and the minutes committed to it so
/// far. Local to one generator call; never shared across invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DayCursor {
    date: NaiveDate,
    minutes_used: u32,
}

impl DayCursor {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            minutes_used: 0,
        }
    }

    fn available(&self, budget: u32) -> u32 {
        budget.saturating_sub(self.minutes_used)
    }

    fn next_day(&mut self) {
        self.date += Duration::days(1);
        self.minutes_used = 0;
    }
}

/// Generate a study schedule with no optional day-fitting rules enabled.
pub fn generate_schedule(topics: &[Topic], params: &ScheduleParams) -> Result<Vec<ScheduleTask>> {
    generate_schedule_with_policy(topics, params, PlanPolicy::default())
}

/// Generate a study schedule, consulting `policy` for the optional
/// day-fitting rules.
///
/// Returns an empty schedule for an empty topic list or a non-positive date
/// window (the caller treats that as "impossible window"). Fails fast on a
/// zero daily budget, which would otherwise never fit any task.
pub fn generate_schedule_with_policy(
    topics: &[Topic],
    params: &ScheduleParams,
    policy: PlanPolicy,
) -> Result<Vec<ScheduleTask>> {
    if params.daily_hours == 0 {
        bail!("daily_hours must be positive; a zero budget cannot fit any task");
    }
    if params.span_days() <= 0 {
        return Ok(Vec::new());
    }

    let budget = params.daily_minutes();
    let mut tasks: Vec<ScheduleTask> = Vec::new();
    let mut cursor = DayCursor::new(params.start_date);
    // Most recent day that received a Hard study chunk; drives the slow-pace rule.
    let mut last_hard_day: Option<NaiveDate> = None;

    let mut ordered: Vec<&Topic> = topics.iter().collect();
    ordered.sort_by_key(|t| t.order);

    for topic in ordered {
        if policy.one_hard_per_day_on_slow
            && params.pace == Pace::Slow
            && topic.difficulty == Difficulty::Hard
            && last_hard_day == Some(cursor.date)
        {
            advance_day(&mut cursor, &policy, params.start_date, &mut tasks);
        }

        let mut remaining = params.pace.effective_minutes(topic.difficulty);
        while remaining > 0 {
            let available = cursor.available(budget);
            if available == 0 {
                advance_day(&mut cursor, &policy, params.start_date, &mut tasks);
                continue;
            }

            let chunk = available.min(remaining);
            tasks.push(ScheduleTask::study(cursor.date, topic, chunk));
            if topic.difficulty == Difficulty::Hard {
                last_hard_day = Some(cursor.date);
            }
            cursor.minutes_used += chunk;
            remaining -= chunk;
        }

        if topic.difficulty == Difficulty::Hard {
            // Revision never splits; roll whole days until 30 minutes fit.
            while cursor.available(budget) < REVISION_MINUTES {
                advance_day(&mut cursor, &policy, params.start_date, &mut tasks);
            }
            tasks.push(ScheduleTask::revision(cursor.date, topic));
            cursor.minutes_used += REVISION_MINUTES;
        }
    }

    Ok(tasks)
}

/// Single point through which the cursor enters a new day, so the weekly
/// buffer fires exactly once per entered day. Days are only entered when
/// more work needs placing; a full final day never opens a successor.
fn advance_day(
    cursor: &mut DayCursor,
    policy: &PlanPolicy,
    start_date: NaiveDate,
    tasks: &mut Vec<ScheduleTask>,
) {
    cursor.next_day();

    if !policy.weekly_revision_buffer {
        return;
    }
    let elapsed = (cursor.date - start_date).num_days();
    if elapsed > 0 && elapsed % 7 == 0 {
        tasks.push(ScheduleTask::weekly_buffer(cursor.date));
        cursor.minutes_used += REVISION_MINUTES;
    }
}
