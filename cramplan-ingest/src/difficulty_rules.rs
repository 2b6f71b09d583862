//! Difficulty inference as an ordered decision table.
//!
//! Rules run top to bottom over a finalized topic; a later matching rule
//! overrides whatever came before. Keeping them as a named list makes the
//! precedence visible and lets each rule be tested on its own.

use cramplan_core::Difficulty;

const HARD_KEYWORDS: [&str; 5] = [
    "algorithm",
    "optimization",
    "calculus",
    "advanced",
    "architecture",
];

const EASY_KEYWORDS: [&str; 5] = [
    "introduction",
    "overview",
    "basics",
    "definition",
    "history",
];

/// One rule: returns `Some` to override the difficulty decided so far.
pub struct DifficultyRule {
    pub name: &'static str,
    apply: fn(name: &str, subtopics: &[String]) -> Option<Difficulty>,
}

impl DifficultyRule {
    pub fn apply(&self, name: &str, subtopics: &[String]) -> Option<Difficulty> {
        (self.apply)(name, subtopics)
    }
}

/// The table, in precedence order (later overrides earlier).
pub const RULES: [DifficultyRule; 3] = [
    DifficultyRule {
        name: "default-medium",
        apply: |_, _| Some(Difficulty::Medium),
    },
    DifficultyRule {
        name: "subtopic-count",
        apply: |_, subtopics| match subtopics.len() {
            n if n > 5 => Some(Difficulty::Hard),
            n if n < 2 => Some(Difficulty::Easy),
            _ => None,
        },
    },
    DifficultyRule {
        name: "keywords",
        apply: |name, subtopics| {
            let text = combined_text(name, subtopics);
            if HARD_KEYWORDS.iter().any(|k| text.contains(k)) {
                Some(Difficulty::Hard)
            } else if EASY_KEYWORDS.iter().any(|k| text.contains(k)) {
                Some(Difficulty::Easy)
            } else {
                None
            }
        },
    },
];

fn combined_text(name: &str, subtopics: &[String]) -> String {
    let mut text = name.to_lowercase();
    for s in subtopics {
        text.push(' ');
        text.push_str(&s.to_lowercase());
    }
    text
}

/// Run the full table over a topic's name and subtopics.
pub fn infer_difficulty(name: &str, subtopics: &[String]) -> Difficulty {
    RULES
        .iter()
        .filter_map(|rule| rule.apply(name, subtopics))
        .last()
        .unwrap_or(Difficulty::Medium)
}
