use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::info;

use super::domain::{SessionId, SessionRecord};
use super::repository::{RepositoryError, SessionRepository};
use crate::workflows::flow::{FlowAction, FlowError, FlowState};
use crate::workflows::locale::Locale;
use crate::workflows::matching::{CandidatePool, MatchingEngine, RecommendationResult};
use crate::workflows::onboarding::UserProfile;

/// Runs one [`AppFlowController`] per visitor on top of a repository.
pub struct OnboardingSessionService<R> {
    repository: Arc<R>,
    engine: Arc<MatchingEngine>,
    pool: Arc<CandidatePool>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("sess-{id:06}"))
}

impl<R> OnboardingSessionService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: Arc<MatchingEngine>, pool: Arc<CandidatePool>) -> Self {
        Self {
            repository,
            engine,
            pool,
        }
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    pub fn engine(&self) -> &MatchingEngine {
        &self.engine
    }

    /// Opens a session on the landing screen.
    pub fn create(&self, locale: Locale) -> Result<SessionRecord, SessionServiceError> {
        let record = SessionRecord {
            session_id: next_session_id(),
            locale,
            state: FlowState::Landing,
        };

        let stored = self.repository.insert(record)?;
        info!(session_id = %stored.session_id.0, locale = locale.code(), "session created");
        Ok(stored)
    }

    pub fn get(&self, session_id: &SessionId) -> Result<SessionRecord, SessionServiceError> {
        let record = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Applies one action inside a single repository `modify`, so concurrent
    /// actions on one session are serialized. A rejected action leaves the
    /// stored state untouched.
    pub fn apply(
        &self,
        session_id: &SessionId,
        action: FlowAction,
    ) -> Result<SessionRecord, SessionServiceError> {
        let label = action.label();

        let (record, transition) = self.repository.modify(session_id, |record| {
            let previous = record.state.screen();
            record
                .state
                .next(&action, &self.engine, &self.pool)
                .map(|next| {
                    record.state = next;
                    previous
                })
        })?;
        let previous = transition?;

        if let FlowState::Dashboard(dashboard) = &record.state {
            info!(
                session_id = %record.session_id.0,
                action = label,
                recommendations = dashboard.recommendations.len(),
                "recommendations computed"
            );
        } else if previous != record.state.screen() {
            info!(
                session_id = %record.session_id.0,
                from = previous.label(),
                to = record.state.screen().label(),
                "screen changed"
            );
        }

        Ok(record)
    }

    /// Stateless ranking for callers that already hold a finished profile.
    pub fn recommend(&self, profile: &UserProfile) -> Vec<RecommendationResult> {
        self.engine.recommend(profile, &self.pool)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionServiceError {
    #[error(transparent)]
    Flow(#[from] FlowError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
