use serde::{Deserialize, Serialize};

use super::ProgressRecord;

/// Cross-topic overview returned by `GET /api/dashboard`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dashboard {
    pub total_topics: u32,
    /// Minutes, summed over every topic.
    pub total_study_time: u32,
    pub average_completion: f64,
    pub topics: Vec<TopicProgress>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicProgress {
    pub topic: TopicSummary,
    pub progress: ProgressRecord,
}

/// The parts of a topic the client displays next to its progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicSummary {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub num_modules: u32,
    pub num_diagrams: u32,
    pub num_flashcards: u32,
    pub num_quizzes: u32,
}
