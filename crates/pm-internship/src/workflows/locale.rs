use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language for labels. Canonical keys never change with the locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
}

impl Locale {
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "हिंदी",
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "hi" | "hindi" => Ok(Self::Hindi),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// Anything with a locale-dependent display string.
pub trait Localized {
    fn label(&self, locale: Locale) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported locale '{}' (expected 'en' or 'hi')", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_names() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::English));
        assert_eq!(" Hindi ".parse::<Locale>(), Ok(Locale::Hindi));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn serializes_as_language_code() {
        let json = serde_json::to_string(&Locale::Hindi).expect("serialize");
        assert_eq!(json, "\"hi\"");
    }
}
