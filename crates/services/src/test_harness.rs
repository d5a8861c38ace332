use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use storage::repository::{InMemoryStore, KeyValueStore, StorageError};
use study_core::model::{AccessToken, RefreshToken, Session, User, UserId};

use crate::auth::{AuthClient, SessionStore};
use crate::error::TransportError;
use crate::navigation::RecordingNavigator;
use crate::progress::ProgressTracker;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport};

/// Transport replaying queued responses and recording every request.
#[derive(Default)]
pub(crate) struct FakeTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
}

impl FakeTransport {
    pub(crate) fn respond(&self, status: u16, body: Value) {
        let status = StatusCode::from_u16(status).unwrap();
        let body = serde_json::to_vec(&body).unwrap();
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body)));
    }

    pub(crate) fn fail(&self, reason: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError::Unavailable(reason.to_owned())));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Unavailable("no response queued".into())))
    }
}

/// Switches that make a `FaultyStore` start failing. Clones share state.
#[derive(Clone, Default)]
pub(crate) struct StoreFaults {
    reads: Arc<AtomicBool>,
    removes: Arc<AtomicBool>,
}

impl StoreFaults {
    pub(crate) fn fail_reads(&self) {
        self.reads.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_removes(&self) {
        self.removes.store(true, Ordering::SeqCst);
    }
}

/// `InMemoryStore` wrapper whose reads or removals can be made to fail.
#[derive(Clone)]
pub(crate) struct FaultyStore {
    inner: InMemoryStore,
    faults: StoreFaults,
}

impl FaultyStore {
    pub(crate) fn new(inner: InMemoryStore, faults: StoreFaults) -> Self {
        Self { inner, faults }
    }
}

#[async_trait]
impl KeyValueStore for FaultyStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.faults.reads.load(Ordering::SeqCst) {
            return Err(StorageError::Connection(format!("cannot read {key}")));
        }
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if self.faults.removes.load(Ordering::SeqCst) {
            return Err(StorageError::Connection(format!("cannot remove {key}")));
        }
        self.inner.remove_item(key).await
    }
}

pub(crate) struct Harness {
    pub(crate) store: InMemoryStore,
    pub(crate) faults: StoreFaults,
    pub(crate) navigator: RecordingNavigator,
    pub(crate) transport: Arc<FakeTransport>,
    pub(crate) sessions: Arc<SessionStore>,
    pub(crate) auth: Arc<AuthClient>,
    pub(crate) progress: ProgressTracker,
}

impl Harness {
    pub(crate) async fn new() -> Self {
        let store = InMemoryStore::new();
        let faults = StoreFaults::default();
        let navigator = RecordingNavigator::new();
        let transport = Arc::new(FakeTransport::default());
        let backing = FaultyStore::new(store.clone(), faults.clone());
        let sessions = Arc::new(
            SessionStore::load(Arc::new(backing), Arc::new(navigator.clone()))
                .await
                .unwrap(),
        );
        let auth = Arc::new(AuthClient::new(
            transport.clone(),
            Arc::clone(&sessions),
            Arc::new(navigator.clone()),
        ));
        let progress = ProgressTracker::new(Arc::clone(&auth));
        Self {
            store,
            faults,
            navigator,
            transport,
            sessions,
            auth,
            progress,
        }
    }

    pub(crate) async fn signed_in(token: &str) -> Self {
        let harness = Self::new().await;
        harness
            .sessions
            .set_session(Session::new(
                AccessToken::new(token),
                Some(RefreshToken::new("R1")),
                User::new(UserId::new(1), "A"),
            ))
            .await
            .unwrap();
        harness
    }
}
