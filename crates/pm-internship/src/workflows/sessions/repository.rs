use super::domain::{SessionId, SessionRecord};

/// Storage abstraction so the session service can be exercised in isolation.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError>;

    /// Runs `apply` on the stored record and persists the result as one step.
    /// No other `modify` on the same id may interleave between the read and
    /// the write. Returns the stored record and whatever `apply` returned.
    fn modify<T, F>(&self, id: &SessionId, apply: F) -> Result<(SessionRecord, T), RepositoryError>
    where
        F: FnOnce(&mut SessionRecord) -> T;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
