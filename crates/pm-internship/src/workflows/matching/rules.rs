use super::engine::MatchingConfig;
use super::pool::Internship;
use crate::workflows::onboarding::{Skill, UserProfile};
use std::collections::BTreeSet;

/// Empty sector preferences mean "no preference".
pub(crate) fn sector_allowed(profile: &UserProfile, posting: &Internship) -> bool {
    profile.prefers(posting.sector)
}

pub(crate) fn skill_overlap(profile: &UserProfile, posting: &Internship) -> BTreeSet<Skill> {
    posting
        .skills
        .intersection(&profile.skills)
        .copied()
        .collect()
}

pub(crate) fn computed_score(config: &MatchingConfig, seed_score: u8, skill_match: usize) -> u8 {
    let boost = u32::try_from(skill_match)
        .unwrap_or(u32::MAX)
        .saturating_mul(u32::from(config.skill_match_boost));
    let raw = u32::from(seed_score).saturating_add(boost);
    let capped = raw.min(u32::from(config.score_ceiling));
    u8::try_from(capped).unwrap_or(config.score_ceiling)
}
