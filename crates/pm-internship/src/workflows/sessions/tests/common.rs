use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use tower::ServiceExt;

use crate::workflows::flow::FlowAction;
use crate::workflows::matching::{CandidatePool, MatchingEngine};
use crate::workflows::onboarding::{FieldUpdate, Sector, SetFieldToggle, Skill};
use crate::workflows::sessions::domain::{SessionId, SessionRecord};
use crate::workflows::sessions::repository::{RepositoryError, SessionRepository};
use crate::workflows::sessions::{session_router, OnboardingSessionService};

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<HashMap<SessionId, SessionRecord>>,
}

impl SessionRepository for MemoryRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Ok(self.records.lock().expect("lock").get(id).cloned())
    }

    fn modify<T, F>(&self, id: &SessionId, apply: F) -> Result<(SessionRecord, T), RepositoryError>
    where
        F: FnOnce(&mut SessionRecord) -> T,
    {
        let mut guard = self.records.lock().expect("lock");
        let record = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        let outcome = apply(record);
        Ok((record.clone(), outcome))
    }
}

pub(super) fn service_with(
    repository: Arc<MemoryRepository>,
) -> Arc<OnboardingSessionService<MemoryRepository>> {
    Arc::new(OnboardingSessionService::new(
        repository,
        Arc::new(MatchingEngine::default()),
        Arc::new(CandidatePool::seed()),
    ))
}

pub(super) fn service() -> Arc<OnboardingSessionService<MemoryRepository>> {
    service_with(Arc::new(MemoryRepository::default()))
}

pub(super) fn router() -> axum::Router {
    session_router(service())
}

/// Actions that fill all four steps for an IT-focused applicant.
pub(super) fn it_applicant_actions() -> Vec<FlowAction> {
    vec![
        FlowAction::GetStarted,
        FlowAction::UpdateField {
            update: FieldUpdate::Name("Priya Sharma".to_string()),
        },
        FlowAction::Advance,
        FlowAction::Toggle {
            toggle: SetFieldToggle::Skills(Skill::DigitalMarketing),
        },
        FlowAction::Toggle {
            toggle: SetFieldToggle::Skills(Skill::Communication),
        },
        FlowAction::Advance,
        FlowAction::UpdateField {
            update: FieldUpdate::Location("Mumbai".to_string()),
        },
        FlowAction::Advance,
        FlowAction::Toggle {
            toggle: SetFieldToggle::PreferredSectors(Sector::InformationTechnology),
        },
        FlowAction::Advance,
    ]
}

pub(super) async fn send_json(
    router: &axum::Router,
    method: &str,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
        .expect("request");
    read_json(router.clone().oneshot(request).await.expect("router dispatch")).await
}

pub(super) async fn get_json(router: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    read_json(router.clone().oneshot(request).await.expect("router dispatch")).await
}

async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload = serde_json::from_slice(&body).expect("json");
    (status, payload)
}
