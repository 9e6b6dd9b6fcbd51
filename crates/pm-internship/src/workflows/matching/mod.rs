//! Deterministic internship matching: sector filter, skill-overlap boost,
//! stable descending sort, bounded result size.

mod engine;
mod importer;
mod pool;
mod rules;
mod seed;
pub mod views;

pub use engine::{
    MatchingConfig, MatchingEngine, RecommendationResult, DEFAULT_MAX_RESULTS,
    DEFAULT_SCORE_CEILING, DEFAULT_SKILL_MATCH_BOOST,
};
pub use importer::{CandidatePoolImportError, CandidatePoolImporter};
pub use pool::{CandidatePool, CandidatePoolError, Internship, InternshipId, WorkMode};
pub use views::{recommendation_views, MatchTier, ProfileSummaryView, RecommendationView};
