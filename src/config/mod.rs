use std::env;
use std::fmt;
use std::str::FromStr;

use crate::decision::{LoanPolicy, PolicyError};

/// Distinguishes runtime behavior for different stages of the tool.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub policy: LoanPolicy,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = LoanPolicy::default();
        let policy = LoanPolicy {
            minimum_loan_amount: read_or("LOAN_MIN_AMOUNT", defaults.minimum_loan_amount)?,
            maximum_loan_amount: read_or("LOAN_MAX_AMOUNT", defaults.maximum_loan_amount)?,
            minimum_loan_period: read_or("LOAN_MIN_PERIOD", defaults.minimum_loan_period)?,
            maximum_loan_period: read_or("LOAN_MAX_PERIOD", defaults.maximum_loan_period)?,
            minimum_applicant_age: read_or("APPLICANT_MIN_AGE", defaults.minimum_applicant_age)?,
            maximum_applicant_age: read_or("APPLICANT_MAX_AGE", defaults.maximum_applicant_age)?,
        };
        policy.validate().map_err(ConfigError::Policy)?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig::for_environment(environment, log_level),
            policy,
        })
    }
}

fn read_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
    pub include_target: bool,
}

impl TelemetryConfig {
    /// Colored output with module targets for local runs; plain lines elsewhere.
    pub fn for_environment(environment: AppEnvironment, log_level: String) -> Self {
        let interactive = environment == AppEnvironment::Development;
        Self {
            log_level,
            ansi: interactive,
            include_target: interactive,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
    Policy(PolicyError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a non-negative integer (found '{value}')")
            }
            ConfigError::Policy(err) => write!(f, "invalid loan policy: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidNumber { .. } => None,
            ConfigError::Policy(err) => Some(err),
        }
    }
}
