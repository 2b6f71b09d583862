//! Extraction output types.

use cramplan_core::{Difficulty, Topic};
use serde::{Deserialize, Serialize};

/// One topic as extracted from raw syllabus text, before the persistence
/// collaborator has assigned it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedTopic {
    pub subject: String,
    pub name: String,
    pub subtopics: Vec<String>,
    pub difficulty: Difficulty,
    /// 1-based emission order; strictly increasing within one document.
    pub order: u32,
}

impl ExtractedTopic {
    /// Bridge into the core model once storage has assigned an id.
    pub fn into_topic(self, id: i64) -> Topic {
        Topic::new(id, self.name, self.difficulty, self.order)
            .with_subject(self.subject)
            .with_subtopics(self.subtopics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_round_trip_keeps_schema_strings() {
        let extracted = ExtractedTopic {
            subject: "General".into(),
            name: "Advanced Algorithms".into(),
            subtopics: vec!["Sorting and optimization details".into()],
            difficulty: Difficulty::Hard,
            order: 3,
        };
        let json = serde_json::to_string(&extracted).unwrap();
        assert!(json.contains("\"Hard\""));

        let back: ExtractedTopic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, extracted);
    }

    #[test]
    fn test_into_topic_keeps_fields() {
        let extracted = ExtractedTopic {
            subject: "General".into(),
            name: "Graphs".into(),
            subtopics: vec!["BFS walkthrough".into()],
            difficulty: Difficulty::Easy,
            order: 2,
        };
        let topic = extracted.into_topic(42);
        assert_eq!(topic.id, 42);
        assert_eq!(topic.name, "Graphs");
        assert_eq!(topic.subtopics, vec!["BFS walkthrough".to_string()]);
        assert_eq!(topic.difficulty, Difficulty::Easy);
        assert_eq!(topic.order, 2);
    }
}
