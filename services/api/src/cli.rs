use crate::demo::{run_demo, run_recommend, DemoArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pm_internship::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pm-internship",
    about = "Onboard applicants and recommend PM Internship Scheme postings",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank the candidate pool for a profile given on the command line
    Recommend(RecommendArgs),
    /// Walk an applicant from the landing screen to the dashboard
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Serve postings from a CSV export instead of the built-in pool
    #[arg(long)]
    pub(crate) candidate_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pm_internship::workflows::locale::Locale;
    use pm_internship::workflows::onboarding::{Sector, Skill};

    #[test]
    fn bare_invocation_defaults_to_serve() {
        let cli = Cli::try_parse_from(["pm-internship"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn recommend_accepts_repeated_vocabulary_flags() {
        let cli = Cli::try_parse_from([
            "pm-internship",
            "recommend",
            "--skill",
            "Research",
            "--skill",
            "data analysis",
            "--sector",
            "Healthcare & Medicine",
            "--locale",
            "hi",
        ])
        .expect("parses");

        let Some(Command::Recommend(args)) = cli.command else {
            panic!("expected recommend command");
        };
        assert_eq!(args.skill, vec![Skill::Research, Skill::DataAnalysis]);
        assert_eq!(args.sector, vec![Sector::HealthcareAndMedicine]);
        assert_eq!(args.locale, Locale::Hindi);
    }

    #[test]
    fn recommend_rejects_unknown_skill() {
        let result = Cli::try_parse_from(["pm-internship", "recommend", "--skill", "Juggling"]);
        assert!(result.is_err());
    }
}
