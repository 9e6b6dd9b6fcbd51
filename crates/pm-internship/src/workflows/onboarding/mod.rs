pub mod domain;
mod profile;
mod wizard;

pub use domain::{EducationLevel, ExperienceLevel, Interest, Sector, Skill, VocabularyError};
pub use profile::{FieldUpdate, ProfileDraft, ProfileField, SetFieldToggle, UserProfile};
pub use wizard::{AdvanceOutcome, WizardController, WizardStep, TOTAL_STEPS};
