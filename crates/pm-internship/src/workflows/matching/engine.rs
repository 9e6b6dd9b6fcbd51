use super::pool::{CandidatePool, Internship};
use super::rules::{computed_score, sector_allowed, skill_overlap};
use crate::workflows::onboarding::{Skill, UserProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const DEFAULT_MAX_RESULTS: usize = 5;
pub const DEFAULT_SCORE_CEILING: u8 = 95;
pub const DEFAULT_SKILL_MATCH_BOOST: u8 = 5;

/// Ranking knobs. The defaults reproduce the product behavior: top 5, capped
/// at 95, +5 per overlapping skill. The defaults are also upper bounds: a
/// config may narrow the list or lower the cap, never widen them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub max_results: usize,
    pub score_ceiling: u8,
    pub skill_match_boost: u8,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            score_ceiling: DEFAULT_SCORE_CEILING,
            skill_match_boost: DEFAULT_SKILL_MATCH_BOOST,
        }
    }
}

/// A posting paired with the score computed for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationResult {
    pub internship: Internship,
    pub score: u8,
    pub matched_skills: BTreeSet<Skill>,
}

impl MatchingConfig {
    /// Clamps `max_results` into `1..=5` and `score_ceiling` to at most 95.
    pub fn bounded(self) -> Self {
        Self {
            max_results: self.max_results.clamp(1, DEFAULT_MAX_RESULTS),
            score_ceiling: self.score_ceiling.min(DEFAULT_SCORE_CEILING),
            skill_match_boost: self.skill_match_boost,
        }
    }
}

impl RecommendationResult {
    pub fn skill_match(&self) -> usize {
        self.matched_skills.len()
    }
}

/// Stateless filter + boost + sort over a candidate pool.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: MatchingConfig,
}

impl MatchingEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self {
            config: config.bounded(),
        }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Ranks the pool for `profile`. Equal scores keep pool order, and an
    /// empty result is a valid answer.
    pub fn recommend(
        &self,
        profile: &UserProfile,
        pool: &CandidatePool,
    ) -> Vec<RecommendationResult> {
        let mut results: Vec<RecommendationResult> = pool
            .iter()
            .filter(|posting| sector_allowed(profile, posting))
            .map(|posting| {
                let matched_skills = skill_overlap(profile, posting);
                let score =
                    computed_score(&self.config, posting.match_score, matched_skills.len());
                RecommendationResult {
                    internship: posting.clone(),
                    score,
                    matched_skills,
                }
            })
            .collect();

        // `sort_by` is stable.
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(self.config.max_results);

        tracing::debug!(
            candidates = pool.len(),
            returned = results.len(),
            "ranked internship recommendations"
        );

        results
    }
}
