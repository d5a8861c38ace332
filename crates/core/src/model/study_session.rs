use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// What the user was doing during a study session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudySessionKind {
    #[default]
    Module,
    Quiz,
    Flashcard,
}

impl StudySessionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Quiz => "quiz",
            Self::Flashcard => "flashcard",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "module" => Some(Self::Module),
            "quiz" => Some(Self::Quiz),
            "flashcard" => Some(Self::Flashcard),
            _ => None,
        }
    }
}

/// Client-side description of a finished study session, posted as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudySessionDraft {
    pub session_type: StudySessionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    pub duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub items_completed: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Study session as stored by the backend.
///
/// `session_type` stays a plain string: the backend echoes whatever type the
/// client posted, including kinds this client does not know.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudySessionRecord {
    pub id: Option<u64>,
    pub session_type: String,
    pub content_id: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub duration_minutes: u32,
    pub score: Option<f64>,
    pub items_completed: u32,
    pub notes: Option<String>,
}
