//! cramplan-ingest: syllabus text extraction into ordered topic records.

pub mod difficulty_rules;
pub mod syllabus;
pub mod types;

pub use difficulty_rules::infer_difficulty;
pub use syllabus::parse_syllabus_text;
pub use types::ExtractedTopic;
