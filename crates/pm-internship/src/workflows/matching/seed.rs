use super::pool::{CandidatePool, Internship, InternshipId, WorkMode};
use crate::workflows::onboarding::{Sector, Skill};
use chrono::NaiveDate;
use std::collections::BTreeSet;

impl CandidatePool {
    /// Built-in postings used when no CSV source is configured.
    pub fn seed() -> Self {
        Self {
            postings: seed_postings(),
        }
    }
}

impl Default for CandidatePool {
    fn default() -> Self {
        Self::seed()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn skills<const N: usize>(items: [Skill; N]) -> BTreeSet<Skill> {
    BTreeSet::from(items)
}

pub(crate) fn seed_postings() -> Vec<Internship> {
    vec![
        Internship {
            id: InternshipId("1".to_string()),
            title: "Digital Marketing Intern".to_string(),
            company: "Tech Solutions Pvt Ltd".to_string(),
            location: "Mumbai, Maharashtra".to_string(),
            duration: "3 months".to_string(),
            stipend: "₹15,000/month".to_string(),
            sector: Sector::InformationTechnology,
            skills: skills([
                Skill::DigitalMarketing,
                Skill::Communication,
                Skill::ContentWriting,
            ]),
            description: "Work on social media campaigns, content creation, and digital marketing strategies for tech products.".to_string(),
            match_score: 95,
            application_deadline: date(2024, 10, 15),
            start_date: date(2024, 11, 1),
            mode: WorkMode::Hybrid,
        },
        Internship {
            id: InternshipId("2".to_string()),
            title: "Data Analysis Intern".to_string(),
            company: "Government Analytics Division".to_string(),
            location: "Delhi, NCR".to_string(),
            duration: "6 months".to_string(),
            stipend: "₹12,000/month".to_string(),
            sector: Sector::GovernmentAndPublicService,
            skills: skills([Skill::DataAnalysis, Skill::Research, Skill::ProblemSolving]),
            description: "Analyze government data to support policy decisions and public service improvements.".to_string(),
            match_score: 88,
            application_deadline: date(2024, 10, 20),
            start_date: date(2024, 11, 15),
            mode: WorkMode::OnSite,
        },
        Internship {
            id: InternshipId("3".to_string()),
            title: "Customer Service Excellence Intern".to_string(),
            company: "Rural Banking Initiative".to_string(),
            location: "Jaipur, Rajasthan".to_string(),
            duration: "4 months".to_string(),
            stipend: "₹10,000/month".to_string(),
            sector: Sector::BankingAndFinance,
            skills: skills([
                Skill::CustomerService,
                Skill::Communication,
                Skill::ProblemSolving,
            ]),
            description: "Support rural banking initiatives and help customers with digital banking services.".to_string(),
            match_score: 82,
            application_deadline: date(2024, 10, 25),
            start_date: date(2024, 12, 1),
            mode: WorkMode::OnSite,
        },
        Internship {
            id: InternshipId("4".to_string()),
            title: "Educational Content Development".to_string(),
            company: "National Education Mission".to_string(),
            location: "Bangalore, Karnataka".to_string(),
            duration: "5 months".to_string(),
            stipend: "₹14,000/month".to_string(),
            sector: Sector::EducationAndTraining,
            skills: skills([Skill::ContentWriting, Skill::Research, Skill::DigitalLiteracy]),
            description: "Create educational content for digital learning platforms targeting rural students.".to_string(),
            match_score: 78,
            application_deadline: date(2024, 11, 1),
            start_date: date(2024, 12, 15),
            mode: WorkMode::Remote,
        },
        Internship {
            id: InternshipId("5".to_string()),
            title: "Healthcare Data Management".to_string(),
            company: "Public Health Department".to_string(),
            location: "Chennai, Tamil Nadu".to_string(),
            duration: "6 months".to_string(),
            stipend: "₹13,000/month".to_string(),
            sector: Sector::HealthcareAndMedicine,
            skills: skills([Skill::DataAnalysis, Skill::Research, Skill::DigitalLiteracy]),
            description: "Manage and analyze healthcare data to improve public health programs.".to_string(),
            match_score: 75,
            application_deadline: date(2024, 10, 30),
            start_date: date(2024, 11, 20),
            mode: WorkMode::Hybrid,
        },
    ]
}
