//! Top-level screen sequencing: Landing → Onboarding → Dashboard → Onboarding.
//!
//! [`FlowState::next`] is a pure transition. [`AppFlowController`] owns the
//! current state together with the matching collaborators.

use super::matching::{CandidatePool, MatchingEngine, RecommendationResult};
use super::onboarding::{AdvanceOutcome, FieldUpdate, SetFieldToggle, UserProfile, WizardController};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Landing,
    Onboarding,
    Dashboard,
}

impl Screen {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Onboarding => "onboarding",
            Self::Dashboard => "dashboard",
        }
    }
}

/// User intent coming from the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FlowAction {
    GetStarted,
    UpdateField { update: FieldUpdate },
    Toggle { toggle: SetFieldToggle },
    Advance,
    Retreat,
    Refresh,
    BackToOnboarding,
}

impl FlowAction {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::GetStarted => "get_started",
            Self::UpdateField { .. } => "update_field",
            Self::Toggle { .. } => "toggle",
            Self::Advance => "advance",
            Self::Retreat => "retreat",
            Self::Refresh => "refresh",
            Self::BackToOnboarding => "back_to_onboarding",
        }
    }
}

/// Finalized profile with the ranking computed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub profile: UserProfile,
    pub recommendations: Vec<RecommendationResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FlowState {
    #[default]
    Landing,
    Onboarding(WizardController),
    Dashboard(Dashboard),
}

impl FlowState {
    pub fn screen(&self) -> Screen {
        match self {
            Self::Landing => Screen::Landing,
            Self::Onboarding(_) => Screen::Onboarding,
            Self::Dashboard(_) => Screen::Dashboard,
        }
    }

    /// Computes the state that follows `action`. The receiver is untouched,
    /// so a rejected action leaves the caller's state as it was.
    pub fn next(
        &self,
        action: &FlowAction,
        engine: &MatchingEngine,
        pool: &CandidatePool,
    ) -> Result<FlowState, FlowError> {
        match (self, action) {
            (Self::Landing, FlowAction::GetStarted) => {
                Ok(Self::Onboarding(WizardController::new()))
            }
            (Self::Onboarding(wizard), FlowAction::UpdateField { update }) => {
                let mut wizard = wizard.clone();
                wizard.update_field(update.clone());
                Ok(Self::Onboarding(wizard))
            }
            (Self::Onboarding(wizard), FlowAction::Toggle { toggle }) => {
                let mut wizard = wizard.clone();
                wizard.toggle_set_field(*toggle);
                Ok(Self::Onboarding(wizard))
            }
            (Self::Onboarding(wizard), FlowAction::Retreat) => {
                let mut wizard = wizard.clone();
                wizard.retreat();
                Ok(Self::Onboarding(wizard))
            }
            (Self::Onboarding(wizard), FlowAction::Advance) => {
                let mut wizard = wizard.clone();
                match wizard.advance() {
                    AdvanceOutcome::Moved(_) => Ok(Self::Onboarding(wizard)),
                    AdvanceOutcome::Completed(profile) => {
                        let recommendations = engine.recommend(&profile, pool);
                        Ok(Self::Dashboard(Dashboard {
                            profile,
                            recommendations,
                        }))
                    }
                }
            }
            (Self::Dashboard(dashboard), FlowAction::Refresh) => {
                let recommendations = engine.recommend(&dashboard.profile, pool);
                Ok(Self::Dashboard(Dashboard {
                    profile: dashboard.profile.clone(),
                    recommendations,
                }))
            }
            // Re-entry starts a fresh draft; the previous profile is not reused.
            (Self::Dashboard(_), FlowAction::BackToOnboarding) => {
                Ok(Self::Onboarding(WizardController::new()))
            }
            (state, action) => Err(FlowError::InvalidAction {
                action: action.label(),
                screen: state.screen(),
            }),
        }
    }
}

/// Explicit owner of the top-level UI state.
#[derive(Debug, Clone)]
pub struct AppFlowController {
    state: FlowState,
    engine: Arc<MatchingEngine>,
    pool: Arc<CandidatePool>,
}

impl AppFlowController {
    pub fn new(engine: Arc<MatchingEngine>, pool: Arc<CandidatePool>) -> Self {
        Self::resume(FlowState::Landing, engine, pool)
    }

    pub fn resume(state: FlowState, engine: Arc<MatchingEngine>, pool: Arc<CandidatePool>) -> Self {
        Self {
            state,
            engine,
            pool,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    pub fn into_state(self) -> FlowState {
        self.state
    }

    pub fn dispatch(&mut self, action: FlowAction) -> Result<&FlowState, FlowError> {
        self.state = self.state.next(&action, &self.engine, &self.pool)?;
        Ok(&self.state)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    InvalidAction { action: &'static str, screen: Screen },
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowError::InvalidAction { action, screen } => write!(
                f,
                "action '{}' is not available on the {} screen",
                action,
                screen.label()
            ),
        }
    }
}

impl std::error::Error for FlowError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> AppFlowController {
        AppFlowController::new(
            Arc::new(MatchingEngine::default()),
            Arc::new(CandidatePool::seed()),
        )
    }

    #[test]
    fn rejected_action_keeps_state() {
        let mut flow = controller();
        let err = flow.dispatch(FlowAction::Advance).expect_err("landing has no advance");
        assert_eq!(
            err,
            FlowError::InvalidAction {
                action: "advance",
                screen: Screen::Landing
            }
        );
        assert_eq!(flow.screen(), Screen::Landing);
    }

    #[test]
    fn refresh_is_only_valid_on_dashboard() {
        let mut flow = controller();
        flow.dispatch(FlowAction::GetStarted).expect("start");
        let err = flow.dispatch(FlowAction::Refresh).expect_err("refresh during wizard");
        assert!(err.to_string().contains("onboarding"));
    }

    #[test]
    fn next_does_not_mutate_receiver() {
        let engine = MatchingEngine::default();
        let pool = CandidatePool::seed();
        let state = FlowState::Onboarding(WizardController::new());

        let advanced = state
            .next(&FlowAction::Advance, &engine, &pool)
            .expect("advance");
        match (&state, &advanced) {
            (FlowState::Onboarding(before), FlowState::Onboarding(after)) => {
                assert_eq!(before.current_step().number(), 1);
                assert_eq!(after.current_step().number(), 2);
            }
            other => panic!("unexpected states {other:?}"),
        }
    }

    #[test]
    fn action_json_is_tagged() {
        let action: FlowAction = serde_json::from_str(
            r#"{"action":"toggle","toggle":{"field":"skills","item":"Design"}}"#,
        )
        .expect("parse");
        assert_eq!(action.label(), "toggle");
    }
}
