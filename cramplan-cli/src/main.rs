use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use cramplan_core::{
    generate_schedule_with_policy, Pace, PlanPolicy, PlanSummary, ScheduleParams, ScheduleTask,
    Topic,
};
use cramplan_ingest::parse_syllabus_text;

#[derive(Parser, Debug)]
#[command(name = "cramplan", version, about = "Turn a syllabus into a day-by-day study plan")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract topics from a syllabus text file
    Extract {
        /// Path to the syllabus text (already OCR/PDF-extracted)
        file: PathBuf,

        /// Emit JSON instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Extract topics and generate a dated study schedule
    Plan {
        /// Path to the syllabus text
        file: PathBuf,

        /// First study day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Exam day (YYYY-MM-DD); must be after --start
        #[arg(long)]
        exam: NaiveDate,

        /// Study hours per day
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=24))]
        daily_hours: u32,

        /// Learning pace
        #[arg(long, value_enum, default_value_t = PaceArg::Medium)]
        pace: PaceArg,

        /// Slow pace only: keep Hard topics on separate days
        #[arg(long)]
        one_hard_per_day: bool,

        /// Reserve a generic revision slot every 7th day
        #[arg(long)]
        weekly_revision: bool,

        /// Emit tasks as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PaceArg {
    Slow,
    Medium,
    Fast,
}

impl From<PaceArg> for Pace {
    fn from(p: PaceArg) -> Self {
        match p {
            PaceArg::Slow => Pace::Slow,
            PaceArg::Medium => Pace::Medium,
            PaceArg::Fast => Pace::Fast,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Extract { file, json } => extract(file, json),
        Command::Plan {
            file,
            start,
            exam,
            daily_hours,
            pace,
            one_hard_per_day,
            weekly_revision,
            json,
        } => {
            let params = ScheduleParams::new(start, exam, daily_hours, pace.into());
            let policy = PlanPolicy {
                one_hard_per_day_on_slow: one_hard_per_day,
                weekly_revision_buffer: weekly_revision,
            };
            plan(file, params, policy, json)
        }
    }
}

fn load_topics(file: &Path) -> Result<Vec<Topic>> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;

    // Ids are assigned sequentially; a persistence layer would own this.
    Ok(parse_syllabus_text(&text)
        .into_iter()
        .enumerate()
        .map(|(i, t)| t.into_topic(i as i64 + 1))
        .collect())
}

fn extract(file: PathBuf, json: bool) -> Result<()> {
    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("reading {}", file.display()))?;
    let topics = parse_syllabus_text(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&topics)?);
        return Ok(());
    }

    println!("Extracted {} topics from {}\n", topics.len(), file.display());
    for t in &topics {
        println!(
            "{:>3}. [{:?}] {} ({} subtopics)",
            t.order,
            t.difficulty,
            t.name,
            t.subtopics.len()
        );
    }
    Ok(())
}

fn plan(file: PathBuf, params: ScheduleParams, policy: PlanPolicy, json: bool) -> Result<()> {
    let topics = load_topics(&file)?;
    let tasks = generate_schedule_with_policy(&topics, &params, policy)?;

    if tasks.is_empty() {
        bail!(
            "no schedule possible: exam date {} is not after start date {} (or no topics found)",
            params.exam_date,
            params.start_date
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    println!(
        "# Study plan: {} topics, {} min/day, {:?} pace\n",
        topics.len(),
        params.daily_minutes(),
        params.pace
    );

    let mut by_day: BTreeMap<NaiveDate, Vec<&ScheduleTask>> = BTreeMap::new();
    for t in &tasks {
        by_day.entry(t.date).or_default().push(t);
    }

    for (date, day_tasks) in &by_day {
        let total: u32 = day_tasks.iter().map(|t| t.duration_minutes).sum();
        println!("## {date} ({total} min)");
        for t in day_tasks {
            println!("- {:>3} min | {}", t.duration_minutes, t.description);
        }
        println!();
    }

    let summary = PlanSummary::from_tasks(&tasks);
    println!(
        "Total: {} tasks, {} study min + {} revision min over {} days",
        summary.task_count, summary.study_minutes, summary.revision_minutes, summary.days_used
    );
    if let Some(last) = summary.last_date {
        if last >= params.exam_date {
            println!(
                "Warning: plan runs through {last}, past the exam on {}",
                params.exam_date
            );
        }
    }

    Ok(())
}
