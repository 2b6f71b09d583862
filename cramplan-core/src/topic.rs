//! Topic model: one syllabus unit with a difficulty rating used to size study effort.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty rating assigned at extraction time.
///
/// Serialized as the capitalized name ("Easy"/"Medium"/"Hard"), matching the
/// strings the persistence layer stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Base study allocation in minutes, before the pace multiplier.
    pub fn base_minutes(&self) -> u32 {
        match self {
            Difficulty::Easy => 60,
            Difficulty::Medium => 120,
            Difficulty::Hard => 180,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(s)
    }
}

/// One syllabus unit.
///
/// Created once by extraction (ids assigned by the persistence collaborator),
/// immutable afterwards; read-only input to the schedule generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub subject: String,
    pub name: String,
    pub subtopics: Vec<String>,
    pub difficulty: Difficulty,
    /// 1-based position within the syllabus; strictly increasing per source document.
    pub order: u32,
}

impl Topic {
    pub fn new(id: i64, name: impl Into<String>, difficulty: Difficulty, order: u32) -> Self {
        Self {
            id,
            subject: "General".to_string(),
            name: name.into(),
            subtopics: Vec::new(),
            difficulty,
            order,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_subtopics(mut self, subtopics: Vec<String>) -> Self {
        self.subtopics = subtopics;
        self
    }
}
