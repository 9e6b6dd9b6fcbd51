use super::domain::{EducationLevel, ExperienceLevel, Interest, Sector, Skill};
use crate::workflows::locale::{Locale, Localized};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Partial profile accumulated across wizard steps. Nothing is ever rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: Option<String>,
    pub education: Option<EducationLevel>,
    pub field_of_study: Option<String>,
    pub skills: BTreeSet<Skill>,
    pub interests: BTreeSet<Interest>,
    pub location: Option<String>,
    pub preferred_sectors: BTreeSet<Sector>,
    pub experience: Option<ExperienceLevel>,
}

/// Scalar field assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldUpdate {
    Name(String),
    Education(EducationLevel),
    FieldOfStudy(String),
    Location(String),
    Experience(ExperienceLevel),
}

/// Membership toggle on one of the three set-valued fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "item", rename_all = "snake_case")]
pub enum SetFieldToggle {
    Skills(Skill),
    Interests(Interest),
    PreferredSectors(Sector),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Education,
    FieldOfStudy,
    Skills,
    Interests,
    Location,
    PreferredSectors,
    Experience,
}

impl ProfileField {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Name,
            Self::Education,
            Self::FieldOfStudy,
            Self::Skills,
            Self::Interests,
            Self::Location,
            Self::PreferredSectors,
            Self::Experience,
        ]
    }
}

impl Localized for ProfileField {
    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Name, Locale::English) => "Full Name",
            (Self::Name, Locale::Hindi) => "पूरा नाम",
            (Self::Education, Locale::English) => "Education Level",
            (Self::Education, Locale::Hindi) => "शिक्षा स्तर",
            (Self::FieldOfStudy, Locale::English) => "Field of Study",
            (Self::FieldOfStudy, Locale::Hindi) => "अध्ययन क्षेत्र",
            (Self::Skills, Locale::English) => "Skills",
            (Self::Skills, Locale::Hindi) => "कौशल",
            (Self::Interests, Locale::English) => "Areas of Interest",
            (Self::Interests, Locale::Hindi) => "रुचि के क्षेत्र",
            (Self::Location, Locale::English) => "Preferred Location",
            (Self::Location, Locale::Hindi) => "पसंदीदा स्थान",
            (Self::PreferredSectors, Locale::English) => "Preferred Sectors",
            (Self::PreferredSectors, Locale::Hindi) => "पसंदीदा क्षेत्र",
            (Self::Experience, Locale::English) => "Previous Experience",
            (Self::Experience, Locale::Hindi) => "पूर्व अनुभव",
        }
    }
}

impl ProfileDraft {
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(value) => self.name = Some(value),
            FieldUpdate::Education(level) => self.education = Some(level),
            FieldUpdate::FieldOfStudy(value) => self.field_of_study = Some(value),
            FieldUpdate::Location(value) => self.location = Some(value),
            FieldUpdate::Experience(level) => self.experience = Some(level),
        }
    }

    /// Flips membership of the item and returns whether it is now selected.
    pub fn toggle(&mut self, toggle: SetFieldToggle) -> bool {
        match toggle {
            SetFieldToggle::Skills(skill) => flip(&mut self.skills, skill),
            SetFieldToggle::Interests(interest) => flip(&mut self.interests, interest),
            SetFieldToggle::PreferredSectors(sector) => flip(&mut self.preferred_sectors, sector),
        }
    }

    /// Fields a display layer may want to nudge about. Advisory only.
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        ProfileField::ordered()
            .into_iter()
            .filter(|field| match field {
                ProfileField::Name => is_blank(&self.name),
                ProfileField::Education => self.education.is_none(),
                ProfileField::FieldOfStudy => is_blank(&self.field_of_study),
                ProfileField::Skills => self.skills.is_empty(),
                ProfileField::Interests => self.interests.is_empty(),
                ProfileField::Location => is_blank(&self.location),
                ProfileField::PreferredSectors => self.preferred_sectors.is_empty(),
                ProfileField::Experience => self.experience.is_none(),
            })
            .collect()
    }

    /// Freezes the draft. Absent text becomes empty; absent enums stay absent.
    pub fn finalize(self) -> UserProfile {
        UserProfile {
            name: self.name.unwrap_or_default(),
            education: self.education,
            field_of_study: self.field_of_study.unwrap_or_default(),
            skills: self.skills,
            interests: self.interests,
            location: self.location.unwrap_or_default(),
            preferred_sectors: self.preferred_sectors,
            experience: self.experience,
        }
    }
}

fn flip<T: Ord>(set: &mut BTreeSet<T>, item: T) -> bool {
    if set.remove(&item) {
        false
    } else {
        set.insert(item)
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value
        .as_deref()
        .map(|text| text.trim().is_empty())
        .unwrap_or(true)
}

/// Finalized profile handed to the matching engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub education: Option<EducationLevel>,
    pub field_of_study: String,
    pub skills: BTreeSet<Skill>,
    pub interests: BTreeSet<Interest>,
    pub location: String,
    pub preferred_sectors: BTreeSet<Sector>,
    pub experience: Option<ExperienceLevel>,
}

impl UserProfile {
    pub fn has_skill(&self, skill: Skill) -> bool {
        self.skills.contains(&skill)
    }

    pub fn prefers(&self, sector: Sector) -> bool {
        self.preferred_sectors.is_empty() || self.preferred_sectors.contains(&sector)
    }
}
