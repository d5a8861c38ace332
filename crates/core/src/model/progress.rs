use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{ModuleId, QuizId};

/// Per-topic progress as computed by the backend.
///
/// The client never derives these values itself; it only displays them.
/// Every field falls back to its default when the backend omits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressRecord {
    /// 0–100.
    pub completion_percentage: f64,
    pub modules_completed: Vec<ModuleId>,
    pub quizzes_taken: Vec<QuizAttempt>,
    pub quiz_scores: Vec<f64>,
    /// 0–100.
    pub average_score: f64,
    /// Minutes.
    pub total_study_time: u32,
    pub flashcards_reviewed: u32,
    pub last_studied: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// One recorded quiz attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub quiz_id: QuizId,
    pub score: f64,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}
