//! Onboarding sessions: one flow controller per visitor, stored behind a
//! repository trait and exposed over HTTP.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{DashboardView, SessionId, SessionRecord, SessionView, WizardView};
pub use repository::{RepositoryError, SessionRepository};
pub use router::{session_router, CreateSessionRequest, RecommendationRequest, RecommendationResponse};
pub use service::{OnboardingSessionService, SessionServiceError};
