//! Composite society health scoring.
//!
//! A metric snapshot flows through validation, per-dimension normalization,
//! weighted aggregation, status classification, trend analysis, and
//! recommendation ranking. Every stage is a pure function; the engine holds
//! only its configuration and never stores results between calls.

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod domain;
mod engine;
pub(crate) mod normalizer;
pub mod portfolio;
pub mod recommendations;
pub mod trend;
pub mod validation;

#[cfg(test)]
mod tests;

pub use classifier::{classify, StatusThresholds};
pub use config::ScoringConfig;
pub use domain::{
    Dimension, HealthBreakdown, HealthMetrics, HealthResult, HealthStatus, HealthTrend,
    MetricsInput, TrendDirection,
};
pub use engine::{compute_health_score, HealthEngine, ScoreContext};
pub use portfolio::{score_portfolio, PortfolioReport, SocietyScorecard, SocietySnapshot};
pub use recommendations::{generate_recommendations, Recommendation};
pub use trend::{analyze_trend, trend_with_defaults};
pub use validation::{validate_metrics, ValidationError};

/// Normalize a validated snapshot into its per-dimension scores.
pub fn normalize_metrics(
    metrics: &HealthMetrics,
    config: &ScoringConfig,
) -> Result<HealthBreakdown, ValidationError> {
    validate_metrics(metrics)?;
    Ok(normalizer::normalize(metrics, config))
}
