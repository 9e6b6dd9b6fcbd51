use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use pm_internship::workflows::locale::{Locale, Localized};
use pm_internship::workflows::onboarding::{
    EducationLevel, ExperienceLevel, Interest, Sector, Skill,
};
use pm_internship::workflows::sessions::{session_router, OnboardingSessionService, SessionRepository};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct VocabularyQuery {
    #[serde(default)]
    pub(crate) locale: Locale,
}

#[derive(Debug, Serialize)]
pub(crate) struct VocabularyOption {
    pub(crate) key: &'static str,
    pub(crate) label: &'static str,
}

/// Option lists backing the wizard's checkbox grids and dropdowns.
#[derive(Debug, Serialize)]
pub(crate) struct VocabularyResponse {
    pub(crate) locale: Locale,
    pub(crate) skills: Vec<VocabularyOption>,
    pub(crate) interests: Vec<VocabularyOption>,
    pub(crate) sectors: Vec<VocabularyOption>,
    pub(crate) education_levels: Vec<VocabularyOption>,
    pub(crate) experience_levels: Vec<VocabularyOption>,
}

pub(crate) fn with_session_routes<R>(service: Arc<OnboardingSessionService<R>>) -> axum::Router
where
    R: SessionRepository + 'static,
{
    session_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/vocabulary",
            axum::routing::get(vocabulary_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn vocabulary_endpoint(
    axum::extract::Query(query): axum::extract::Query<VocabularyQuery>,
) -> Json<VocabularyResponse> {
    Json(vocabulary(query.locale))
}

fn options<T, I>(items: I, key: fn(T) -> &'static str, locale: Locale) -> Vec<VocabularyOption>
where
    T: Localized + Copy,
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .map(|item| VocabularyOption {
            key: key(item),
            label: item.label(locale),
        })
        .collect()
}

pub(crate) fn vocabulary(locale: Locale) -> VocabularyResponse {
    VocabularyResponse {
        locale,
        skills: options(Skill::selectable(), Skill::key, locale),
        interests: options(Interest::ALL.iter().copied(), Interest::key, locale),
        sectors: options(Sector::ALL.iter().copied(), Sector::key, locale),
        education_levels: options(EducationLevel::ALL.iter().copied(), EducationLevel::key, locale),
        experience_levels: options(ExperienceLevel::ALL.iter().copied(), ExperienceLevel::key, locale),
    }
}
