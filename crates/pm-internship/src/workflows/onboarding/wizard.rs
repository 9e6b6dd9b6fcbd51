use super::profile::{FieldUpdate, ProfileDraft, SetFieldToggle, UserProfile};
use crate::workflows::locale::{Locale, Localized};
use serde::{Deserialize, Serialize};

pub const TOTAL_STEPS: u8 = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    BasicInformation,
    Skills,
    InterestsAndLocation,
    FinalPreferences,
}

impl WizardStep {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::BasicInformation,
            Self::Skills,
            Self::InterestsAndLocation,
            Self::FinalPreferences,
        ]
    }

    /// 1-based position shown as "Step n of 4".
    pub const fn number(self) -> u8 {
        match self {
            Self::BasicInformation => 1,
            Self::Skills => 2,
            Self::InterestsAndLocation => 3,
            Self::FinalPreferences => 4,
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::BasicInformation => Some(Self::Skills),
            Self::Skills => Some(Self::InterestsAndLocation),
            Self::InterestsAndLocation => Some(Self::FinalPreferences),
            Self::FinalPreferences => None,
        }
    }

    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::BasicInformation => None,
            Self::Skills => Some(Self::BasicInformation),
            Self::InterestsAndLocation => Some(Self::Skills),
            Self::FinalPreferences => Some(Self::InterestsAndLocation),
        }
    }

    pub fn progress(self) -> f32 {
        f32::from(self.number()) / f32::from(TOTAL_STEPS)
    }
}

impl Localized for WizardStep {
    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::BasicInformation, Locale::English) => "Basic Information",
            (Self::BasicInformation, Locale::Hindi) => "बुनियादी जानकारी",
            (Self::Skills, Locale::English) => "Your Skills",
            (Self::Skills, Locale::Hindi) => "अपने कौशल चुनें",
            (Self::InterestsAndLocation, Locale::English) => "Interests & Preferences",
            (Self::InterestsAndLocation, Locale::Hindi) => "रुचियां और प्राथमिकताएं",
            (Self::FinalPreferences, Locale::English) => "Final Preferences",
            (Self::FinalPreferences, Locale::Hindi) => "अंतिम प्राथमिकताएं",
        }
    }
}

/// Result of pressing "Next" / "Get Recommendations".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Moved(WizardStep),
    Completed(UserProfile),
}

/// Four-step onboarding wizard. Owns the draft exclusively until completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardController {
    step: WizardStep,
    draft: ProfileDraft,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn progress(&self) -> f32 {
        self.step.progress()
    }

    pub fn update_field(&mut self, update: FieldUpdate) {
        self.draft.apply(update);
    }

    pub fn toggle_set_field(&mut self, toggle: SetFieldToggle) -> bool {
        self.draft.toggle(toggle)
    }

    /// Moves forward one step, or at the last step hands off a frozen copy of
    /// the draft. The step never moves past the last one.
    pub fn advance(&mut self) -> AdvanceOutcome {
        match self.step.next() {
            Some(next) => {
                self.step = next;
                AdvanceOutcome::Moved(next)
            }
            None => AdvanceOutcome::Completed(self.draft.clone().finalize()),
        }
    }

    /// Returns false when already on the first step.
    pub fn retreat(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }
}
