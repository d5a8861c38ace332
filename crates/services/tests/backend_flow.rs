use std::sync::Arc;

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use services::auth::{ACCESS_TOKEN_KEY, LANDING_PATH, REFRESH_TOKEN_KEY, USER_KEY};
use services::{
    ApiError, AppServices, HttpTransport, RecordingNavigator, ReqwestTransport, TransportError,
};
use storage::repository::{InMemoryStore, KeyValueStore, Storage};
use study_core::model::{AccessToken, QuizId, Session, TopicId, User, UserId};

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "a@b.com" && body["password"] == "x" {
        (
            StatusCode::OK,
            Json(json!({
                "access_token": "T1",
                "refresh_token": "R1",
                "user": { "id": 1, "name": "A" }
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid email or password" })),
        )
    }
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok())
}

async fn progress(Path(topic): Path<String>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if bearer(&headers) != Some("Bearer T1") {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "msg": "Token has expired" })),
        );
    }
    if topic != "topic1" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "topic not found" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "modules_completed": ["module_1", "module_2"],
            "quizzes_taken": [],
            "flashcards_reviewed": 8,
            "completion_percentage": 42.6,
            "total_study_time": 75,
            "quiz_scores": [],
            "average_score": 0.0,
            "last_studied": "2024-03-01T10:15:30.123456",
            "updated_at": "2024-03-01T10:15:30.123456"
        })),
    )
}

async fn quiz(
    Path(topic): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if bearer(&headers) != Some("Bearer T1") {
        return (StatusCode::UNAUTHORIZED, Json(json!({})));
    }
    if topic != "topic1" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "topic not found" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({ "quiz_scores": [body["score"].clone()], "average_score": body["score"].clone() })),
    )
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/progress/:topic", get(progress))
        .route("/api/progress/:topic/quiz", post(quiz));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

struct Client {
    services: AppServices,
    store: InMemoryStore,
    navigator: RecordingNavigator,
}

async fn client(base_url: &str) -> Client {
    let store = InMemoryStore::new();
    let navigator = RecordingNavigator::new();
    let transport: Arc<dyn HttpTransport> =
        Arc::new(ReqwestTransport::new(base_url).expect("transport"));
    let storage = Storage {
        items: Arc::new(store.clone()),
    };
    let services = AppServices::assemble(transport, storage, Arc::new(navigator.clone()))
        .await
        .expect("assemble");
    Client {
        services,
        store,
        navigator,
    }
}

#[tokio::test]
async fn login_then_report_against_live_backend() {
    let base_url = spawn_backend().await;
    let c = client(&base_url).await;

    c.services.auth().login("a@b.com", "x").await.unwrap();

    assert!(c.services.sessions().is_authenticated());
    assert_eq!(c.services.sessions().user().unwrap().id, UserId::new(1));
    assert_eq!(
        c.store.get_item(ACCESS_TOKEN_KEY).await.unwrap().as_deref(),
        Some("T1")
    );
    assert_eq!(
        c.store.get_item(REFRESH_TOKEN_KEY).await.unwrap().as_deref(),
        Some("R1")
    );
    assert!(c.store.get_item(USER_KEY).await.unwrap().is_some());

    let topic = TopicId::new("topic1").unwrap();
    let record = c.services.progress().get_progress(&topic).await.unwrap();
    assert_eq!(record.modules_completed.len(), 2);
    assert_eq!(record.total_study_time, 75);

    let updated = c
        .services
        .progress()
        .record_quiz_score(&topic, &QuizId::new("q1").unwrap(), 87.0)
        .await
        .unwrap();
    assert_eq!(updated.quiz_scores, vec![87.0]);
}

#[tokio::test]
async fn unknown_topic_surfaces_backend_message() {
    let base_url = spawn_backend().await;
    let c = client(&base_url).await;
    c.services.auth().login("a@b.com", "x").await.unwrap();

    let err = c
        .services
        .progress()
        .record_quiz_score(
            &TopicId::new("missing").unwrap(),
            &QuizId::new("q1").unwrap(),
            87.0,
        )
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "topic not found");
    assert!(c.services.sessions().is_authenticated());
}

#[tokio::test]
async fn wrong_password_is_rejected_without_signing_in() {
    let base_url = spawn_backend().await;
    let c = client(&base_url).await;

    let err = c.services.auth().login("a@b.com", "nope").await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid email or password");
    assert!(!c.services.sessions().is_authenticated());
    assert!(c.navigator.visits().is_empty());
}

#[tokio::test]
async fn stale_token_signs_out_and_navigates_home() {
    let base_url = spawn_backend().await;
    let c = client(&base_url).await;
    c.services
        .sessions()
        .set_session(Session::new(
            AccessToken::new("stale"),
            None,
            User::new(UserId::new(1), "A"),
        ))
        .await
        .unwrap();

    let err = c
        .services
        .progress()
        .get_progress(&TopicId::new("topic1").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::SessionExpired));
    assert!(!c.services.sessions().is_authenticated());
    assert!(c.store.is_empty().unwrap());
    assert_eq!(c.navigator.visits(), vec![LANDING_PATH.to_owned()]);
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let c = client("http://127.0.0.1:9").await;

    let err = c.services.auth().login("a@b.com", "x").await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::Transport(TransportError::Unavailable(_))
    ));
    assert!(!c.services.sessions().is_authenticated());
}
