use super::engine::RecommendationResult;
use super::pool::{InternshipId, WorkMode};
use crate::workflows::locale::{Locale, Localized};
use crate::workflows::onboarding::{Sector, Skill, UserProfile};
use chrono::NaiveDate;
use serde::Serialize;

const PROFILE_SUMMARY_SKILLS: usize = 3;

/// Badge colour band on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Strong,
    Moderate,
    Exploratory,
}

impl MatchTier {
    pub const fn from_score(score: u8) -> Self {
        if score >= 85 {
            Self::Strong
        } else if score >= 70 {
            Self::Moderate
        } else {
            Self::Exploratory
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong match",
            Self::Moderate => "Good match",
            Self::Exploratory => "Worth exploring",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillBadge {
    pub skill: Skill,
    pub label: &'static str,
    pub matched: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub rank: usize,
    pub internship_id: InternshipId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub stipend: String,
    pub sector: Sector,
    pub sector_label: &'static str,
    pub mode: WorkMode,
    pub mode_label: &'static str,
    pub match_percentage: u8,
    pub tier: MatchTier,
    pub tier_label: &'static str,
    pub skills: Vec<SkillBadge>,
    pub description: String,
    pub application_deadline: NaiveDate,
    pub start_date: NaiveDate,
}

impl RecommendationResult {
    /// Display shape for the 1-based `rank`. The matched flag is re-derived
    /// from `profile.skills` and always agrees with `matched_skills`.
    pub fn to_view(&self, rank: usize, profile: &UserProfile, locale: Locale) -> RecommendationView {
        let posting = &self.internship;
        let tier = MatchTier::from_score(self.score);
        let skills = posting
            .skills
            .iter()
            .map(|skill| SkillBadge {
                skill: *skill,
                label: skill.label(locale),
                matched: profile.has_skill(*skill),
            })
            .collect();

        RecommendationView {
            rank,
            internship_id: posting.id.clone(),
            title: posting.title.clone(),
            company: posting.company.clone(),
            location: posting.location.clone(),
            duration: posting.duration.clone(),
            stipend: posting.stipend.clone(),
            sector: posting.sector,
            sector_label: posting.sector.label(locale),
            mode: posting.mode,
            mode_label: posting.mode.label(),
            match_percentage: self.score,
            tier,
            tier_label: tier.label(),
            skills,
            description: posting.description.clone(),
            application_deadline: posting.application_deadline,
            start_date: posting.start_date,
        }
    }
}

pub fn recommendation_views(
    results: &[RecommendationResult],
    profile: &UserProfile,
    locale: Locale,
) -> Vec<RecommendationView> {
    results
        .iter()
        .enumerate()
        .map(|(index, result)| result.to_view(index + 1, profile, locale))
        .collect()
}

/// "Your Profile Summary" card.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummaryView {
    pub name: String,
    pub education_label: Option<&'static str>,
    pub location: String,
    /// First three skills in vocabulary order, not selection order.
    pub top_skills: Vec<&'static str>,
}

impl ProfileSummaryView {
    pub fn from_profile(profile: &UserProfile, locale: Locale) -> Self {
        Self {
            name: profile.name.clone(),
            education_label: profile.education.map(|level| level.label(locale)),
            location: profile.location.clone(),
            top_skills: profile
                .skills
                .iter()
                .take(PROFILE_SUMMARY_SKILLS)
                .map(|skill| skill.label(locale))
                .collect(),
        }
    }
}
