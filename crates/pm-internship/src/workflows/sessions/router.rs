use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::SessionId;
use super::repository::{RepositoryError, SessionRepository};
use super::service::{OnboardingSessionService, SessionServiceError};
use crate::workflows::flow::FlowAction;
use crate::workflows::locale::Locale;
use crate::workflows::matching::{recommendation_views, RecommendationView};
use crate::workflows::onboarding::UserProfile;

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub profile: UserProfile,
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub total: usize,
    pub recommendations: Vec<RecommendationView>,
}

/// Router exposing the onboarding sessions and stateless ranking.
pub fn session_router<R>(service: Arc<OnboardingSessionService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/sessions", post(create_handler::<R>))
        .route("/api/v1/sessions/:session_id", get(status_handler::<R>))
        .route(
            "/api/v1/sessions/:session_id/actions",
            post(action_handler::<R>),
        )
        .route("/api/v1/recommendations", post(recommend_handler::<R>))
        .with_state(service)
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<OnboardingSessionService<R>>>,
    axum::Json(request): axum::Json<CreateSessionRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.create(request.locale) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<OnboardingSessionService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.get(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn action_handler<R>(
    State(service): State<Arc<OnboardingSessionService<R>>>,
    Path(session_id): Path<String>,
    axum::Json(action): axum::Json<FlowAction>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.apply(&SessionId(session_id), action) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn recommend_handler<R>(
    State(service): State<Arc<OnboardingSessionService<R>>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let results = service.recommend(&request.profile);
    let recommendations = recommendation_views(&results, &request.profile, request.locale);
    let body = RecommendationResponse {
        total: recommendations.len(),
        recommendations,
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}

fn error_response(err: SessionServiceError) -> Response {
    let status = match &err {
        SessionServiceError::Flow(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SessionServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        SessionServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        SessionServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
