//! Heuristic syllabus parser: raw document text to ordered topics.
//!
//! Header lines like "Unit 3: Graph Theory" open a topic; everything until
//! the next header becomes its subtopics. Deterministic by construction, and
//! that is the whole contract; no semantic understanding is attempted.

use regex::Regex;
use std::sync::LazyLock;

use crate::difficulty_rules::infer_difficulty;
use crate::types::ExtractedTopic;
use cramplan_core::Difficulty;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(unit|chapter|module)\s+\d+[:\s]+(.+)$").expect("header regex")
});

static NOISE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(page|copyright)").expect("noise regex"));

const FALLBACK_LINE_LIMIT: usize = 20;

/// Parse raw syllabus text into topics, `order` assigned 1-based in emission
/// order. Total and deterministic; unparseable input degrades to the
/// single-topic fallback rather than an error.
pub fn parse_syllabus_text(text: &str) -> Vec<ExtractedTopic> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut topics: Vec<ExtractedTopic> = Vec::new();
    let mut current: Option<TopicDraft> = None;
    let mut order: u32 = 1;

    for line in &lines {
        if let Some(caps) = HEADER_RE.captures(line) {
            if let Some(draft) = current.take() {
                topics.push(draft.finalize(order));
                order += 1;
            }
            current = Some(TopicDraft::new(caps[2].trim()));
        } else if let Some(draft) = current.as_mut() {
            if is_meaningful(line) {
                draft.subtopics.push(line.to_string());
            }
        }
    }

    if let Some(draft) = current.take() {
        topics.push(draft.finalize(order));
    }

    // No headers anywhere: emit one catch-all topic from the leading lines.
    // Difficulty stays Medium here; the decision table only applies to
    // header-delimited topics.
    if topics.is_empty() {
        topics.push(ExtractedTopic {
            subject: "General".to_string(),
            name: "Extracted Content".to_string(),
            subtopics: lines
                .iter()
                .take(FALLBACK_LINE_LIMIT)
                .map(|l| l.to_string())
                .collect(),
            difficulty: Difficulty::Medium,
            order: 1,
        });
    }

    topics
}

/// Noise filter: drop very short lines and page/copyright furniture.
fn is_meaningful(line: &str) -> bool {
    line.chars().count() > 5 && !NOISE_RE.is_match(line)
}

struct TopicDraft {
    name: String,
    subtopics: Vec<String>,
}

impl TopicDraft {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            subtopics: Vec::new(),
        }
    }

    fn finalize(self, order: u32) -> ExtractedTopic {
        let difficulty = infer_difficulty(&self.name, &self.subtopics);
        ExtractedTopic {
            subject: "General".to_string(),
            name: self.name,
            subtopics: self.subtopics,
            difficulty,
            order,
        }
    }
}
