use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use pm_internship::error::AppError;
use pm_internship::workflows::locale::Locale;
use pm_internship::workflows::matching::{CandidatePool, CandidatePoolImporter};
use pm_internship::workflows::onboarding::{Sector, Skill};
use pm_internship::workflows::sessions::{
    RepositoryError, SessionId, SessionRecord, SessionRepository,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for InMemorySessionRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn modify<T, F>(&self, id: &SessionId, apply: F) -> Result<(SessionRecord, T), RepositoryError>
    where
        F: FnOnce(&mut SessionRecord) -> T,
    {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let record = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        let outcome = apply(record);
        Ok((record.clone(), outcome))
    }
}

/// Built-in postings unless a CSV export is supplied.
pub(crate) fn load_candidate_pool(csv_path: Option<&Path>) -> Result<CandidatePool, AppError> {
    match csv_path {
        Some(path) => {
            let pool = CandidatePoolImporter::from_path(path)?;
            info!(path = %path.display(), postings = pool.len(), "loaded candidate export");
            Ok(pool)
        }
        None => Ok(CandidatePool::seed()),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_skill(raw: &str) -> Result<Skill, String> {
    raw.parse().map_err(|err| format!("{err}"))
}

pub(crate) fn parse_sector(raw: &str) -> Result<Sector, String> {
    raw.parse().map_err(|err| format!("{err}"))
}

pub(crate) fn parse_locale(raw: &str) -> Result<Locale, String> {
    raw.parse().map_err(|err| format!("{err}"))
}
