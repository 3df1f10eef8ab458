use crate::workflows::health::ScoringConfig;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Distinguishes runtime behavior for different stages of deployment.
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
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = ScoringConfig::default();
        let scoring = ScoringConfig {
            healthy_threshold: number_or("HEALTH_HEALTHY_THRESHOLD", defaults.healthy_threshold)?,
            critical_threshold: number_or(
                "HEALTH_CRITICAL_THRESHOLD",
                defaults.critical_threshold,
            )?,
            attention_threshold: number_or(
                "HEALTH_ATTENTION_THRESHOLD",
                defaults.attention_threshold,
            )?,
            trend_noise_pct: number_or("HEALTH_TREND_NOISE_PCT", defaults.trend_noise_pct)?,
            maintenance_target_hours: number_or(
                "HEALTH_MAINTENANCE_TARGET_HOURS",
                defaults.maintenance_target_hours,
            )?,
            open_issue_tolerance: number_or(
                "HEALTH_OPEN_ISSUE_TOLERANCE",
                defaults.open_issue_tolerance,
            )?,
            trend_period: env::var("HEALTH_TREND_PERIOD").unwrap_or(defaults.trend_period),
        }
        .sanitized();

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            scoring,
        })
    }
}

fn number_or<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { var, value } => {
                write!(f, "{var} must be a number (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
