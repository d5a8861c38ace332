use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use study_core::model::{
    Dashboard, ModuleId, ProgressRecord, QuizId, StudySessionRecord, TopicId,
};
use tracing::error;

use crate::auth::AuthClient;
use crate::error::ApiError;
use crate::transport::RequestOptions;

/// Flashcards counted by a review report when the caller gives no count.
pub const DEFAULT_FLASHCARD_COUNT: u32 = 1;

const DASHBOARD_PATH: &str = "/api/dashboard";

#[derive(Serialize)]
struct ModuleBody<'a> {
    module_id: &'a ModuleId,
}

#[derive(Serialize)]
struct QuizBody<'a> {
    quiz_id: &'a QuizId,
    score: f64,
}

#[derive(Serialize)]
struct FlashcardBody {
    count: u32,
}

/// Reports study activity for a topic and fetches the resulting progress.
///
/// Scores and counts are relayed as given; the backend validates them.
#[derive(Clone)]
pub struct ProgressTracker {
    auth: Arc<AuthClient>,
}

impl ProgressTracker {
    #[must_use]
    pub fn new(auth: Arc<AuthClient>) -> Self {
        Self { auth }
    }

    /// # Errors
    ///
    /// Returns `ApiError` from the authenticated call or the backend's rejection.
    pub async fn get_progress(&self, topic: &TopicId) -> Result<ProgressRecord, ApiError> {
        let path = format!("/api/progress/{topic}");
        let result = self.request(&path, Ok(RequestOptions::get())).await;
        log_failure(result, "fetching progress", Some(topic))
    }

    /// # Errors
    ///
    /// Returns `ApiError` from the authenticated call or the backend's rejection.
    pub async fn mark_module_complete(
        &self,
        topic: &TopicId,
        module: &ModuleId,
    ) -> Result<ProgressRecord, ApiError> {
        let result = self
            .post(topic, "module", &ModuleBody { module_id: module })
            .await;
        log_failure(result, "marking module complete", Some(topic))
    }

    /// # Errors
    ///
    /// Returns `ApiError` from the authenticated call or the backend's rejection.
    pub async fn record_quiz_score(
        &self,
        topic: &TopicId,
        quiz: &QuizId,
        score: f64,
    ) -> Result<ProgressRecord, ApiError> {
        let result = self
            .post(topic, "quiz", &QuizBody {
                quiz_id: quiz,
                score,
            })
            .await;
        log_failure(result, "recording quiz score", Some(topic))
    }

    /// Report reviewed flashcards; `None` counts as [`DEFAULT_FLASHCARD_COUNT`].
    ///
    /// # Errors
    ///
    /// Returns `ApiError` from the authenticated call or the backend's rejection.
    pub async fn update_flashcard_progress(
        &self,
        topic: &TopicId,
        count: Option<u32>,
    ) -> Result<ProgressRecord, ApiError> {
        let body = FlashcardBody {
            count: count.unwrap_or(DEFAULT_FLASHCARD_COUNT),
        };
        let result = self.post(topic, "flashcards", &body).await;
        log_failure(result, "updating flashcard progress", Some(topic))
    }

    /// Log a study session. Any serializable payload is posted unchanged;
    /// `StudySessionDraft` is the shape the backend understands.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` from the authenticated call or the backend's rejection.
    pub async fn create_study_session<S>(
        &self,
        topic: &TopicId,
        session: &S,
    ) -> Result<StudySessionRecord, ApiError>
    where
        S: Serialize + ?Sized + Sync,
    {
        let result = self.post(topic, "session", session).await;
        log_failure(result, "creating study session", Some(topic))
    }

    /// Cross-topic overview for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` from the authenticated call or the backend's rejection.
    pub async fn dashboard(&self) -> Result<Dashboard, ApiError> {
        let result = self
            .request(DASHBOARD_PATH, Ok(RequestOptions::get()))
            .await;
        log_failure(result, "fetching dashboard", None)
    }

    async fn post<B, T>(&self, topic: &TopicId, segment: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let path = format!("/api/progress/{topic}/{segment}");
        self.request(&path, RequestOptions::post().with_json(body))
            .await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: Result<RequestOptions, serde_json::Error>,
    ) -> Result<T, ApiError> {
        let response = self.auth.fetch_with_auth(path, options?).await?;
        response.decode()
    }
}

fn log_failure<T>(
    result: Result<T, ApiError>,
    action: &str,
    topic: Option<&TopicId>,
) -> Result<T, ApiError> {
    if let Err(err) = &result {
        match topic {
            Some(topic) => error!(%topic, error = %err, "error {action}"),
            None => error!(error = %err, "error {action}"),
        }
    }
    result
}
