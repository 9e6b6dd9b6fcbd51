use crate::infra::{load_candidate_pool, parse_date, parse_locale, parse_sector, parse_skill};
use chrono::{Local, NaiveDate};
use clap::Args;
use pm_internship::config::AppConfig;
use pm_internship::error::AppError;
use pm_internship::workflows::flow::{AppFlowController, FlowAction, FlowState};
use pm_internship::workflows::locale::{Locale, Localized};
use pm_internship::workflows::matching::{
    recommendation_views, CandidatePool, MatchingEngine, ProfileSummaryView, RecommendationView,
};
use pm_internship::workflows::onboarding::{
    EducationLevel, ExperienceLevel, FieldUpdate, Interest, Sector, SetFieldToggle, Skill,
    UserProfile,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Skill held by the applicant (repeatable)
    #[arg(long, value_parser = parse_skill)]
    pub(crate) skill: Vec<Skill>,
    /// Preferred sector (repeatable; none means every sector)
    #[arg(long, value_parser = parse_sector)]
    pub(crate) sector: Vec<Sector>,
    /// Label language: en or hi
    #[arg(long, value_parser = parse_locale, default_value = "en")]
    pub(crate) locale: Locale,
    /// Optional CSV export replacing the built-in postings
    #[arg(long)]
    pub(crate) candidate_csv: Option<PathBuf>,
    /// Reference date for deadline countdowns (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Label language: en or hi
    #[arg(long, value_parser = parse_locale, default_value = "en")]
    pub(crate) locale: Locale,
    /// Optional CSV export replacing the built-in postings
    #[arg(long)]
    pub(crate) candidate_csv: Option<PathBuf>,
    /// Reference date for deadline countdowns (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        skill,
        sector,
        locale,
        candidate_csv,
        today,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let config = AppConfig::load()?;
    let (engine, pool) = matching_sources(&config, candidate_csv)?;
    let profile = UserProfile {
        skills: skill.into_iter().collect(),
        preferred_sectors: sector.into_iter().collect(),
        ..UserProfile::default()
    };

    let results = engine.recommend(&profile, &pool);
    let views = recommendation_views(&results, &profile, locale);
    render_recommendations(&views, today);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        locale,
        candidate_csv,
        today,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let config = AppConfig::load()?;
    let (engine, pool) = matching_sources(&config, candidate_csv)?;
    let mut flow = AppFlowController::new(Arc::new(engine), Arc::new(pool));

    println!("PM Internship Scheme onboarding demo");
    println!("Screen: {}", flow.screen().label());

    for action in demo_actions() {
        let label = action.label();
        let state = flow.dispatch(action)?;
        if let FlowState::Onboarding(wizard) = state {
            let step = wizard.current_step();
            println!(
                "- {:<20} step {}/4 {} ({:.0}%)",
                label,
                step.number(),
                step.label(locale),
                wizard.progress() * 100.0
            );
        } else {
            println!("- {:<20} screen {}", label, state.screen().label());
        }
    }

    let FlowState::Dashboard(dashboard) = flow.state() else {
        println!("Flow ended on the {} screen", flow.screen().label());
        return Ok(());
    };

    let summary = ProfileSummaryView::from_profile(&dashboard.profile, locale);
    println!("\nProfile summary");
    println!("  Name: {}", summary.name);
    if let Some(education) = summary.education_label {
        println!("  Education: {}", education);
    }
    println!("  Location: {}", summary.location);
    println!("  Top skills: {}", summary.top_skills.join(", "));

    let views = recommendation_views(&dashboard.recommendations, &dashboard.profile, locale);
    render_recommendations(&views, today);
    Ok(())
}

/// Engine and pool for the CLI commands. A `--candidate-csv` flag wins over
/// `APP_CANDIDATE_CSV`; matching knobs come from the loaded config.
fn matching_sources(
    config: &AppConfig,
    candidate_csv: Option<PathBuf>,
) -> Result<(MatchingEngine, CandidatePool), AppError> {
    let csv_path = candidate_csv.or_else(|| config.candidates.csv_path.clone());
    let pool = load_candidate_pool(csv_path.as_deref())?;
    Ok((MatchingEngine::new(config.matching), pool))
}

fn demo_actions() -> Vec<FlowAction> {
    let update = |update| FlowAction::UpdateField { update };
    let toggle = |toggle| FlowAction::Toggle { toggle };

    vec![
        FlowAction::GetStarted,
        update(FieldUpdate::Name("Priya Sharma".to_string())),
        update(FieldUpdate::Education(EducationLevel::Undergraduate)),
        update(FieldUpdate::FieldOfStudy("Computer Applications".to_string())),
        FlowAction::Advance,
        toggle(SetFieldToggle::Skills(Skill::Communication)),
        toggle(SetFieldToggle::Skills(Skill::DataAnalysis)),
        toggle(SetFieldToggle::Skills(Skill::Research)),
        FlowAction::Advance,
        toggle(SetFieldToggle::Interests(Interest::Technology)),
        toggle(SetFieldToggle::Interests(Interest::Government)),
        update(FieldUpdate::Location("Bhopal, Madhya Pradesh".to_string())),
        FlowAction::Advance,
        toggle(SetFieldToggle::PreferredSectors(
            Sector::GovernmentAndPublicService,
        )),
        toggle(SetFieldToggle::PreferredSectors(Sector::HealthcareAndMedicine)),
        update(FieldUpdate::Experience(ExperienceLevel::SomeProjects)),
        FlowAction::Advance,
    ]
}

fn render_recommendations(views: &[RecommendationView], today: NaiveDate) {
    if views.is_empty() {
        println!("\nNo matching internships found. Try selecting more sectors or skills.");
        return;
    }

    println!("\nRecommended internships ({})", views.len());
    for view in views {
        println!(
            "{}. {} at {} | {}% {} | {}",
            view.rank,
            view.title,
            view.company,
            view.match_percentage,
            view.tier_label,
            view.sector_label
        );
        println!(
            "   {} | {} | {} | {}",
            view.location, view.duration, view.stipend, view.mode_label
        );
        let skills: Vec<String> = view
            .skills
            .iter()
            .map(|badge| {
                if badge.matched {
                    format!("{} ✓", badge.label)
                } else {
                    badge.label.to_string()
                }
            })
            .collect();
        println!("   Skills: {}", skills.join(", "));
        println!("   {}", deadline_note(view.application_deadline, today));
    }
}

fn deadline_note(deadline: NaiveDate, today: NaiveDate) -> String {
    let days = (deadline - today).num_days();
    match days {
        d if d < 0 => format!("Applications closed on {}", deadline),
        0 => "Applications close today".to_string(),
        1 => "Applications close tomorrow".to_string(),
        d => format!("Applications close in {} days ({})", d, deadline),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pm_internship::config::{
        AppEnvironment, CandidateSourceConfig, ServerConfig, TelemetryConfig,
    };
    use pm_internship::workflows::matching::MatchingConfig;

    fn config(csv_path: Option<PathBuf>, max_results: usize) -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
                ansi: false,
            },
            matching: MatchingConfig {
                max_results,
                ..MatchingConfig::default()
            },
            candidates: CandidateSourceConfig { csv_path },
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn demo_actions_reach_the_dashboard() {
        let mut flow = AppFlowController::new(
            Arc::new(MatchingEngine::default()),
            Arc::new(CandidatePool::seed()),
        );
        for action in demo_actions() {
            flow.dispatch(action).expect("demo action accepted");
        }

        let FlowState::Dashboard(dashboard) = flow.state() else {
            panic!("demo should finish on the dashboard");
        };
        assert_eq!(dashboard.profile.name, "Priya Sharma");
        let ids: Vec<&str> = dashboard
            .recommendations
            .iter()
            .map(|result| result.internship.id.0.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "5"]);
    }

    #[test]
    fn deadline_note_counts_days() {
        let today = date(2024, 10, 10);
        assert_eq!(
            deadline_note(date(2024, 10, 15), today),
            "Applications close in 5 days (2024-10-15)"
        );
        assert_eq!(deadline_note(today, today), "Applications close today");
        assert_eq!(
            deadline_note(date(2024, 10, 1), today),
            "Applications closed on 2024-10-01"
        );
    }

    #[test]
    fn matching_sources_follow_loaded_config() {
        let (engine, pool) = matching_sources(&config(None, 2), None).expect("seed pool");
        assert_eq!(pool.len(), 5);
        assert_eq!(engine.recommend(&UserProfile::default(), &pool).len(), 2);

        let configured = config(Some(PathBuf::from("/nonexistent/configured.csv")), 5);
        match matching_sources(&configured, None) {
            Err(AppError::Candidates(_)) => {}
            other => panic!("expected configured CSV to be read, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn candidate_csv_flag_overrides_configured_path() {
        let flag = std::env::temp_dir().join(format!("pm-internship-demo-{}.csv", std::process::id()));
        std::fs::write(
            &flag,
            "id,title,company,location,duration,stipend,sector,skills,description,match_score,application_deadline,start_date,mode\n\
9,Survey Intern,Krishi Kendra,Nashik,2 months,Unpaid,Agriculture & Rural Development,Research,,70,2024-12-01,2024-12-15,Remote\n",
        )
        .expect("write csv");

        let configured = config(Some(PathBuf::from("/nonexistent/configured.csv")), 5);
        let result = matching_sources(&configured, Some(flag.clone()));
        std::fs::remove_file(&flag).ok();

        let (_, pool) = result.expect("flag path wins over configured path");
        assert_eq!(pool.len(), 1);
    }
}
