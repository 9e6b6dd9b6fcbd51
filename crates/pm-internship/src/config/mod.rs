use crate::workflows::matching::{
    MatchingConfig, DEFAULT_MAX_RESULTS, DEFAULT_SCORE_CEILING, DEFAULT_SKILL_MATCH_BOOST,
};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the recommendation service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub matching: MatchingConfig,
    pub candidates: CandidateSourceConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let matching = MatchingConfig {
            max_results: env_number("APP_MAX_RECOMMENDATIONS", DEFAULT_MAX_RESULTS)?,
            score_ceiling: env_number("APP_SCORE_CEILING", DEFAULT_SCORE_CEILING)?,
            skill_match_boost: env_number("APP_SKILL_MATCH_BOOST", DEFAULT_SKILL_MATCH_BOOST)?,
        };
        if matching.score_ceiling > DEFAULT_SCORE_CEILING {
            return Err(ConfigError::ScoreCeilingOutOfRange(matching.score_ceiling));
        }
        if !(1..=DEFAULT_MAX_RESULTS).contains(&matching.max_results) {
            return Err(ConfigError::MaxResultsOutOfRange(matching.max_results));
        }

        let csv_path = env::var("APP_CANDIDATE_CSV")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            matching,
            candidates: CandidateSourceConfig { csv_path },
        })
    }
}

fn env_number<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Where the candidate pool comes from. `None` means the built-in seed.
#[derive(Debug, Clone, Default)]
pub struct CandidateSourceConfig {
    pub csv_path: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str },
    ScoreCeilingOutOfRange(u8),
    MaxResultsOutOfRange(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key } => {
                write!(f, "{} must be a non-negative integer in range", key)
            }
            ConfigError::ScoreCeilingOutOfRange(value) => write!(
                f,
                "APP_SCORE_CEILING must be at most {} (got {})",
                DEFAULT_SCORE_CEILING, value
            ),
            ConfigError::MaxResultsOutOfRange(value) => write!(
                f,
                "APP_MAX_RECOMMENDATIONS must be between 1 and {} (got {})",
                DEFAULT_MAX_RESULTS, value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidNumber { .. }
            | ConfigError::ScoreCeilingOutOfRange(_)
            | ConfigError::MaxResultsOutOfRange(_) => None,
        }
    }
}
