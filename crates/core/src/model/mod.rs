mod dashboard;
mod ids;
mod progress;
mod session;
mod study_session;
mod user;

pub use ids::{IdError, ModuleId, QuizId, TopicId, UserId};

pub use dashboard::{Dashboard, TopicProgress, TopicSummary};
pub use progress::{ProgressRecord, QuizAttempt};
pub use session::{AccessToken, AuthResponse, RefreshToken, Session};
pub use study_session::{StudySessionDraft, StudySessionKind, StudySessionRecord};
pub use user::User;
