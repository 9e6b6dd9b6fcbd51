use super::common::*;
use crate::workflows::flow::{FlowAction, FlowError, FlowState, Screen};
use crate::workflows::locale::Locale;
use crate::workflows::onboarding::{FieldUpdate, SetFieldToggle, Skill, UserProfile};
use crate::workflows::sessions::domain::SessionId;
use crate::workflows::sessions::repository::{RepositoryError, SessionRepository};
use crate::workflows::sessions::SessionServiceError;
use std::collections::BTreeSet;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn create_starts_on_landing() {
    let service = service();
    let record = service.create(Locale::Hindi).expect("create");

    assert_eq!(record.state, FlowState::Landing);
    assert_eq!(record.locale, Locale::Hindi);
    assert!(record.session_id.0.starts_with("sess-"));
}

#[test]
fn completing_the_wizard_persists_dashboard() {
    let repository = Arc::new(MemoryRepository::default());
    let service = service_with(repository.clone());
    let record = service.create(Locale::English).expect("create");

    let mut latest = record.clone();
    for action in it_applicant_actions() {
        latest = service.apply(&record.session_id, action).expect("action");
    }

    let stored = repository
        .fetch(&record.session_id)
        .expect("fetch")
        .expect("present");
    assert_eq!(stored, latest);
    match stored.state {
        FlowState::Dashboard(dashboard) => {
            assert_eq!(dashboard.recommendations.len(), 1);
            assert_eq!(dashboard.recommendations[0].score, 95);
            assert_eq!(dashboard.profile.name, "Priya Sharma");
        }
        other => panic!("expected dashboard, got {other:?}"),
    }
}

#[test]
fn rejected_action_does_not_touch_stored_state() {
    let repository = Arc::new(MemoryRepository::default());
    let service = service_with(repository.clone());
    let record = service.create(Locale::English).expect("create");

    match service.apply(&record.session_id, FlowAction::Refresh) {
        Err(SessionServiceError::Flow(FlowError::InvalidAction { screen, .. })) => {
            assert_eq!(screen, Screen::Landing);
        }
        other => panic!("expected flow error, got {other:?}"),
    }
    let stored = repository
        .fetch(&record.session_id)
        .expect("fetch")
        .expect("present");
    assert_eq!(stored.state, FlowState::Landing);
}

#[test]
fn apply_propagates_not_found() {
    let service = service();
    match service.apply(&SessionId("missing".to_string()), FlowAction::GetStarted) {
        Err(SessionServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn back_to_onboarding_starts_fresh_draft() {
    let service = service();
    let record = service.create(Locale::English).expect("create");
    for action in it_applicant_actions() {
        service.apply(&record.session_id, action).expect("action");
    }

    let back = service
        .apply(&record.session_id, FlowAction::BackToOnboarding)
        .expect("back");
    match back.state {
        FlowState::Onboarding(wizard) => {
            assert_eq!(wizard.current_step().number(), 1);
            assert!(wizard.draft().name.is_none());
            assert!(wizard.draft().skills.is_empty());
        }
        other => panic!("expected onboarding, got {other:?}"),
    }
}

#[test]
fn view_reports_wizard_progress_and_missing_fields() {
    let service = service();
    let record = service.create(Locale::Hindi).expect("create");
    service
        .apply(&record.session_id, FlowAction::GetStarted)
        .expect("start");
    let record = service
        .apply(
            &record.session_id,
            FlowAction::UpdateField {
                update: FieldUpdate::Name("Arjun".to_string()),
            },
        )
        .expect("update");

    let view = record.view();
    assert_eq!(view.screen, Screen::Onboarding);
    let wizard = view.wizard.expect("wizard view");
    assert_eq!(wizard.step_number, 1);
    assert_eq!(wizard.total_steps, 4);
    assert!(!wizard.can_retreat);
    assert_eq!(wizard.title, "बुनियादी जानकारी");
    assert_eq!(wizard.missing_fields.len(), 7);
    assert!(view.dashboard.is_none());
}

#[test]
fn stateless_recommend_matches_engine() {
    let service = service();
    let profile = UserProfile {
        skills: BTreeSet::from([Skill::Research]),
        ..UserProfile::default()
    };

    let direct = service.engine().recommend(&profile, service.pool());
    assert_eq!(service.recommend(&profile), direct);
}

#[test]
fn concurrent_toggles_on_one_session_are_all_kept() {
    let repository = Arc::new(MemoryRepository::default());
    let service = service_with(repository.clone());
    let record = service.create(Locale::English).expect("create");
    service
        .apply(&record.session_id, FlowAction::GetStarted)
        .expect("start");

    let skills: Vec<Skill> = Skill::selectable().collect();
    let barrier = Barrier::new(skills.len());
    thread::scope(|scope| {
        for skill in &skills {
            let service = &service;
            let barrier = &barrier;
            let session_id = &record.session_id;
            scope.spawn(move || {
                barrier.wait();
                service
                    .apply(
                        session_id,
                        FlowAction::Toggle {
                            toggle: SetFieldToggle::Skills(*skill),
                        },
                    )
                    .expect("toggle");
            });
        }
    });

    let stored = repository
        .fetch(&record.session_id)
        .expect("fetch")
        .expect("present");
    match stored.state {
        FlowState::Onboarding(wizard) => {
            let expected: BTreeSet<Skill> = skills.into_iter().collect();
            assert_eq!(wizard.draft().skills, expected);
        }
        other => panic!("expected onboarding, got {other:?}"),
    }
}
