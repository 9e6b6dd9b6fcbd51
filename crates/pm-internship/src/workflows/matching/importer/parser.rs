use crate::workflows::matching::pool::{Internship, InternshipId, WorkMode};
use crate::workflows::onboarding::{Sector, Skill};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;
use std::io::Read;

const SKILL_SEPARATOR: char = ';';

#[derive(Debug)]
pub(crate) enum RowError {
    Csv(csv::Error),
    Field { line: u64, message: String },
}

pub(crate) fn parse_postings<R: Read>(reader: R) -> Result<Vec<Internship>, RowError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers().map_err(RowError::Csv)?.clone();
    let mut record = csv::StringRecord::new();
    let mut postings = Vec::new();

    while csv_reader.read_record(&mut record).map_err(RowError::Csv)? {
        // Start line of the record; quoted fields may span several lines.
        let line = record.position().map(|position| position.line()).unwrap_or(0);
        let row: CandidateRow = record.deserialize(Some(&headers)).map_err(RowError::Csv)?;
        let posting = row
            .into_internship()
            .map_err(|message| RowError::Field { line, message })?;
        postings.push(posting);
    }

    Ok(postings)
}

#[derive(Debug, Deserialize)]
struct CandidateRow {
    id: String,
    title: String,
    company: String,
    location: String,
    duration: String,
    stipend: String,
    sector: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    skills: Option<String>,
    #[serde(default)]
    description: String,
    match_score: u8,
    application_deadline: String,
    start_date: String,
    mode: String,
}

impl CandidateRow {
    fn into_internship(self) -> Result<Internship, String> {
        let sector: Sector = self.sector.parse().map_err(|err| format!("{err}"))?;
        let skills = parse_skills(self.skills.as_deref())?;
        let mode: WorkMode = self.mode.parse()?;
        let application_deadline = parse_date(&self.application_deadline)?;
        let start_date = parse_date(&self.start_date)?;

        Ok(Internship {
            id: InternshipId(self.id),
            title: self.title,
            company: self.company,
            location: self.location,
            duration: self.duration,
            stipend: self.stipend,
            sector,
            skills,
            description: self.description,
            match_score: self.match_score,
            application_deadline,
            start_date,
            mode,
        })
    }
}

fn parse_skills(raw: Option<&str>) -> Result<BTreeSet<Skill>, String> {
    let Some(raw) = raw else {
        return Ok(BTreeSet::new());
    };

    raw.split(SKILL_SEPARATOR)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| value.parse::<Skill>().map_err(|err| err.to_string()))
        .collect()
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{value}' as YYYY-MM-DD ({err})"))
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_validates_skills() {
        let skills = parse_skills(Some("Research; Design ;")).expect("skills parse");
        assert_eq!(skills, BTreeSet::from([Skill::Research, Skill::Design]));
        assert!(parse_skills(Some("Research;Knitting")).is_err());
        assert!(parse_skills(None).expect("empty").is_empty());
    }

    #[test]
    fn rejects_non_iso_dates() {
        assert!(parse_date("15/10/2024").is_err());
        assert_eq!(
            parse_date(" 2024-10-15 "),
            Ok(NaiveDate::from_ymd_opt(2024, 10, 15).expect("valid"))
        );
    }

    #[test]
    fn reports_start_line_after_multiline_field() {
        let csv = "id,title,company,location,duration,stipend,sector,skills,description,match_score,application_deadline,start_date,mode\n\
1,Intern,Co,Pune,1 month,Unpaid,Manufacturing,Design,\"Line one\nline two\",60,2024-12-01,2024-12-15,Remote\n\
2,Intern,Co,Pune,1 month,Unpaid,Space Exploration,Design,,60,2024-12-01,2024-12-15,Remote\n";

        match parse_postings(csv.as_bytes()) {
            Err(RowError::Field { line, message }) => {
                assert_eq!(line, 4);
                assert!(message.contains("Space Exploration"));
            }
            other => panic!("expected field error, got {other:?}"),
        }
    }
}
