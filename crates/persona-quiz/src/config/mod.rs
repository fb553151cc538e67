use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the host.
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

/// Top-level configuration for the quiz host.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub quiz: QuizConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("QUIZ_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let document = env::var("QUIZ_DOCUMENT").unwrap_or_else(|_| "quiz.json".to_string());
        if document.trim().is_empty() {
            return Err(ConfigError::EmptyDocumentPath);
        }

        let show_scores = match env::var("QUIZ_SHOW_SCORES") {
            Ok(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag {
                variable: "QUIZ_SHOW_SCORES",
                value: raw,
            })?,
            Err(_) => false,
        };

        let log_level = env::var("QUIZ_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            quiz: QuizConfig {
                document_path: PathBuf::from(document.trim()),
                show_scores,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Where the quiz document lives and how results are presented.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub document_path: PathBuf,
    pub show_scores: bool,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyDocumentPath,
    InvalidFlag {
        variable: &'static str,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyDocumentPath => write!(f, "QUIZ_DOCUMENT must not be blank"),
            ConfigError::InvalidFlag { variable, value } => {
                write!(f, "{variable} must be true or false, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
