//! Enumerated vocabularies shared by the wizard and the matching engine.
//!
//! Every value serializes as its canonical English key. Hindi strings are
//! display labels only and are reachable through [`Localized`].

use crate::workflows::locale::{Locale, Localized};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $($variant:ident => ($key:literal, $english:literal, $hindi:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }

            const fn english(self) -> &'static str {
                match self {
                    $(Self::$variant => $english,)+
                }
            }

            const fn hindi(self) -> &'static str {
                match self {
                    $(Self::$variant => $hindi,)+
                }
            }
        }

        impl Localized for $name {
            fn label(&self, locale: Locale) -> &'static str {
                match locale {
                    Locale::English => self.english(),
                    Locale::Hindi => self.hindi(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $name {
            type Err = VocabularyError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let trimmed = value.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|item| item.key().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| VocabularyError::Unknown {
                        vocabulary: $kind,
                        value: trimmed.to_string(),
                    })
            }
        }
    };
}

vocabulary! {
    /// Skill keys offered by the wizard and required by postings.
    pub enum Skill ("skill") {
        Communication => ("Communication", "Communication", "संवाद कौशल"),
        Teamwork => ("Teamwork", "Teamwork", "टीम वर्क"),
        ProblemSolving => ("Problem Solving", "Problem Solving", "समस्या समाधान"),
        Leadership => ("Leadership", "Leadership", "नेतृत्व"),
        DigitalLiteracy => ("Digital Literacy", "Digital Literacy", "डिजिटल साक्षरता"),
        DataAnalysis => ("Data Analysis", "Data Analysis", "डेटा विश्लेषण"),
        CustomerService => ("Customer Service", "Customer Service", "ग्राहक सेवा"),
        Marketing => ("Marketing", "Marketing", "मार्केटिंग"),
        ContentWriting => ("Content Writing", "Content Writing", "लेखन कौशल"),
        Programming => ("Programming", "Programming", "प्रोग्रामिंग"),
        Design => ("Design", "Design", "डिज़ाइन"),
        Research => ("Research", "Research", "अनुसंधान"),
        FinancialAnalysis => ("Financial Analysis", "Financial Analysis", "वित्तीय विश्लेषण"),
        ProjectManagement => ("Project Management", "Project Management", "परियोजना प्रबंधन"),
        DigitalMarketing => ("Digital Marketing", "Digital Marketing", "डिजिटल मार्केटिंग"),
    }
}

impl Skill {
    /// Skills presented as checkboxes in the wizard. `Digital Marketing` only
    /// appears on postings.
    pub fn selectable() -> impl Iterator<Item = Skill> {
        Self::ALL
            .iter()
            .copied()
            .filter(|skill| *skill != Skill::DigitalMarketing)
    }
}

vocabulary! {
    pub enum Interest ("interest") {
        Technology => ("Technology", "Technology", "प्रौद्योगिकी"),
        Healthcare => ("Healthcare", "Healthcare", "स्वास्थ्य सेवा"),
        Education => ("Education", "Education", "शिक्षा"),
        Finance => ("Finance", "Finance", "वित्त"),
        Marketing => ("Marketing", "Marketing", "मार्केटिंग"),
        Government => ("Government", "Government", "सरकारी"),
        NonProfit => ("Non-Profit", "Non-Profit", "गैर-लाभकारी"),
        Environment => ("Environment", "Environment", "पर्यावरण"),
        Agriculture => ("Agriculture", "Agriculture", "कृषि"),
        Manufacturing => ("Manufacturing", "Manufacturing", "विनिर्माण"),
        Tourism => ("Tourism", "Tourism", "पर्यटन"),
        Media => ("Media", "Media", "मीडिया"),
    }
}

vocabulary! {
    /// Sector keys. Filtering always compares these keys, never labels.
    pub enum Sector ("sector") {
        InformationTechnology => ("Information Technology", "Information Technology", "सूचना प्रौद्योगिकी"),
        HealthcareAndMedicine => ("Healthcare & Medicine", "Healthcare & Medicine", "स्वास्थ्य सेवा और चिकित्सा"),
        EducationAndTraining => ("Education & Training", "Education & Training", "शिक्षा और प्रशिक्षण"),
        BankingAndFinance => ("Banking & Finance", "Banking & Finance", "बैंकिंग और वित्त"),
        GovernmentAndPublicService => ("Government & Public Service", "Government & Public Service", "सरकारी और सार्वजनिक सेवा"),
        Manufacturing => ("Manufacturing", "Manufacturing", "विनिर्माण"),
        AgricultureAndRuralDevelopment => ("Agriculture & Rural Development", "Agriculture & Rural Development", "कृषि और ग्रामीण विकास"),
        TourismAndHospitality => ("Tourism & Hospitality", "Tourism & Hospitality", "पर्यटन और आतिथ्य"),
        MediaAndCommunications => ("Media & Communications", "Media & Communications", "मीडिया और संचार"),
        EnvironmentalServices => ("Environmental Services", "Environmental Services", "पर्यावरण सेवाएं"),
        SocialWorkAndNgo => ("Social Work & NGO", "Social Work & NGO", "सामाजिक कार्य और एनजीओ"),
        RetailAndEcommerce => ("Retail & E-commerce", "Retail & E-commerce", "खुदरा और ई-कॉमर्स"),
    }
}

vocabulary! {
    pub enum EducationLevel ("education level") {
        TenthGrade => ("10th", "10th Grade", "दसवीं कक्षा"),
        TwelfthGrade => ("12th", "12th Grade", "बारहवीं कक्षा"),
        Diploma => ("diploma", "Diploma", "डिप्लोमा"),
        Undergraduate => ("undergraduate", "Bachelor's Degree", "स्नातक"),
        Postgraduate => ("postgraduate", "Master's Degree", "परास्नातक"),
    }
}

vocabulary! {
    pub enum ExperienceLevel ("experience level") {
        NoExperience => ("none", "No Experience", "कोई अनुभव नहीं"),
        SomeProjects => ("some", "Some Projects", "कुछ परियोजनाएं"),
        PreviousInternship => ("internship", "Previous Internship", "पूर्व इंटर्नशिप"),
        WorkExperience => ("work", "Work Experience", "कार्य अनुभव"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    Unknown {
        vocabulary: &'static str,
        value: String,
    },
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabularyError::Unknown { vocabulary, value } => {
                write!(f, "'{}' is not a recognised {}", value, vocabulary)
            }
        }
    }
}

impl std::error::Error for VocabularyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_keys_case_insensitively() {
        assert_eq!("data analysis".parse::<Skill>(), Ok(Skill::DataAnalysis));
        assert_eq!(
            "Banking & Finance".parse::<Sector>(),
            Ok(Sector::BankingAndFinance)
        );
        assert_eq!("12TH".parse::<EducationLevel>(), Ok(EducationLevel::TwelfthGrade));
    }

    #[test]
    fn unknown_key_names_the_vocabulary() {
        let err = "Juggling".parse::<Skill>().expect_err("not a skill");
        assert_eq!(err.to_string(), "'Juggling' is not a recognised skill");
    }

    #[test]
    fn labels_follow_locale_but_keys_do_not() {
        let sector = Sector::InformationTechnology;
        assert_eq!(sector.label(Locale::English), "Information Technology");
        assert_eq!(sector.label(Locale::Hindi), "सूचना प्रौद्योगिकी");
        assert_eq!(sector.key(), "Information Technology");
        assert_eq!(
            EducationLevel::Undergraduate.label(Locale::English),
            "Bachelor's Degree"
        );
        assert_eq!(EducationLevel::Undergraduate.key(), "undergraduate");
    }

    #[test]
    fn serde_uses_canonical_keys() {
        let json = serde_json::to_string(&Sector::SocialWorkAndNgo).expect("serialize");
        assert_eq!(json, "\"Social Work & NGO\"");
        let level: ExperienceLevel = serde_json::from_str("\"internship\"").expect("deserialize");
        assert_eq!(level, ExperienceLevel::PreviousInternship);
    }

    #[test]
    fn wizard_offers_fourteen_skills() {
        assert_eq!(Skill::selectable().count(), 14);
        assert!(Skill::selectable().all(|skill| skill != Skill::DigitalMarketing));
        assert_eq!(Interest::ALL.len(), 12);
        assert_eq!(Sector::ALL.len(), 12);
    }
}
