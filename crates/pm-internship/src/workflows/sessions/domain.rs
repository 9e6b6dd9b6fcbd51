use crate::workflows::flow::{FlowState, Screen};
use crate::workflows::locale::{Locale, Localized};
use crate::workflows::matching::{recommendation_views, ProfileSummaryView, RecommendationView};
use crate::workflows::onboarding::{ProfileDraft, ProfileField, WizardStep, TOTAL_STEPS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Repository record: one visitor's flow state and chosen locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub session_id: SessionId,
    pub locale: Locale,
    pub state: FlowState,
}

impl SessionRecord {
    pub fn view(&self) -> SessionView {
        let (wizard, dashboard) = match &self.state {
            FlowState::Landing => (None, None),
            FlowState::Onboarding(wizard) => (
                Some(WizardView::new(
                    wizard.current_step(),
                    wizard.draft(),
                    self.locale,
                )),
                None,
            ),
            FlowState::Dashboard(dashboard) => (
                None,
                Some(DashboardView {
                    profile_summary: ProfileSummaryView::from_profile(
                        &dashboard.profile,
                        self.locale,
                    ),
                    total: dashboard.recommendations.len(),
                    recommendations: recommendation_views(
                        &dashboard.recommendations,
                        &dashboard.profile,
                        self.locale,
                    ),
                }),
            ),
        };

        SessionView {
            session_id: self.session_id.clone(),
            locale: self.locale,
            screen: self.state.screen(),
            wizard,
            dashboard,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub locale: Locale,
    pub screen: Screen,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wizard: Option<WizardView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WizardView {
    pub step: WizardStep,
    pub step_number: u8,
    pub total_steps: u8,
    pub progress: f32,
    pub title: &'static str,
    pub can_retreat: bool,
    pub submit_label: &'static str,
    pub draft: ProfileDraft,
    pub missing_fields: Vec<ProfileField>,
}

impl WizardView {
    fn new(step: WizardStep, draft: &ProfileDraft, locale: Locale) -> Self {
        let submit_label = match step.next() {
            Some(_) => "Next",
            None => "Get Recommendations",
        };

        Self {
            step,
            step_number: step.number(),
            total_steps: TOTAL_STEPS,
            progress: step.progress(),
            title: step.label(locale),
            can_retreat: step.previous().is_some(),
            submit_label,
            draft: draft.clone(),
            missing_fields: draft.missing_fields(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub profile_summary: ProfileSummaryView,
    pub total: usize,
    pub recommendations: Vec<RecommendationView>,
}
