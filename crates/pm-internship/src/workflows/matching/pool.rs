use crate::workflows::onboarding::{Sector, Skill};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

pub const MAX_SEED_SCORE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InternshipId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkMode {
    Remote,
    #[serde(rename = "On-site")]
    OnSite,
    Hybrid,
}

impl WorkMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Remote => "Remote",
            Self::OnSite => "On-site",
            Self::Hybrid => "Hybrid",
        }
    }
}

impl FromStr for WorkMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "on-site" | "onsite" | "on site" => Ok(Self::OnSite),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(format!("unknown work mode '{other}'")),
        }
    }
}

/// Immutable posting. `match_score` is the user-independent seed relevance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Internship {
    pub id: InternshipId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub stipend: String,
    pub sector: Sector,
    pub skills: BTreeSet<Skill>,
    pub description: String,
    pub match_score: u8,
    pub application_deadline: NaiveDate,
    pub start_date: NaiveDate,
    pub mode: WorkMode,
}

/// Read-only candidate set. Enumeration order is the tie-break order for
/// ranking, so it is preserved exactly as provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    pub(super) postings: Vec<Internship>,
}

impl CandidatePool {
    pub fn new(postings: Vec<Internship>) -> Result<Self, CandidatePoolError> {
        let mut seen = HashSet::new();
        for posting in &postings {
            if !seen.insert(posting.id.clone()) {
                return Err(CandidatePoolError::DuplicateId(posting.id.0.clone()));
            }
            if posting.match_score > MAX_SEED_SCORE {
                return Err(CandidatePoolError::SeedScoreOutOfRange {
                    id: posting.id.0.clone(),
                    score: posting.match_score,
                });
            }
        }

        Ok(Self { postings })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Internship> {
        self.postings.iter()
    }

    pub fn postings(&self) -> &[Internship] {
        &self.postings
    }

    pub fn get(&self, id: &InternshipId) -> Option<&Internship> {
        self.postings.iter().find(|posting| &posting.id == id)
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn sectors(&self) -> BTreeSet<Sector> {
        self.postings.iter().map(|posting| posting.sector).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidatePoolError {
    DuplicateId(String),
    SeedScoreOutOfRange { id: String, score: u8 },
}

impl fmt::Display for CandidatePoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidatePoolError::DuplicateId(id) => {
                write!(f, "internship id {} appears more than once", id)
            }
            CandidatePoolError::SeedScoreOutOfRange { id, score } => write!(
                f,
                "internship {} has seed score {} above {}",
                id, score, MAX_SEED_SCORE
            ),
        }
    }
}

impl std::error::Error for CandidatePoolError {}
