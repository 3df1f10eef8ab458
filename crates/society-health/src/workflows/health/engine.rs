use super::aggregator::aggregate;
use super::classifier::StatusThresholds;
use super::config::{ScoringConfig, MAX_OVERALL_SCORE};
use super::domain::{HealthMetrics, HealthResult};
use super::normalizer::normalize;
use super::recommendations::generate_recommendations;
use super::trend::analyze_trend;
use super::validation::{check_bounded, validate_metrics, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-call inputs that sit beside the metric snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreContext {
    /// Overall score from the caller's previous evaluation.
    #[serde(default)]
    pub previous_overall: Option<f64>,
    /// Society-specific lower critical boundary.
    #[serde(default)]
    pub critical_override: Option<f64>,
    /// Trend period label; the configured default is used when absent.
    #[serde(default)]
    pub period: Option<String>,
}

impl ScoreContext {
    pub fn with_previous(previous_overall: f64) -> Self {
        Self {
            previous_overall: Some(previous_overall),
            ..Self::default()
        }
    }
}

/// Stateless scorer applying a [`ScoringConfig`] to metric snapshots.
#[derive(Debug, Clone, Default)]
pub struct HealthEngine {
    config: ScoringConfig,
}

impl HealthEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Validate, normalize, aggregate, classify, and rank in one pass.
    ///
    /// Either returns a complete result or the first validation failure; no
    /// partial result is ever produced.
    pub fn evaluate(
        &self,
        metrics: &HealthMetrics,
        context: &ScoreContext,
    ) -> Result<HealthResult, ValidationError> {
        validate_metrics(metrics)?;
        if let Some(previous) = context.previous_overall {
            check_bounded("previous_overall", previous, MAX_OVERALL_SCORE)?;
        }
        if let Some(value) = context.critical_override {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite {
                    field: "critical_override",
                });
            }
        }

        let breakdown = normalize(metrics, &self.config);
        let overall = aggregate(&breakdown);
        let thresholds = StatusThresholds::from_config(&self.config, context.critical_override);
        let status = thresholds.classify(overall);
        let period = context
            .period
            .as_deref()
            .unwrap_or(self.config.trend_period.as_str());
        let trend = analyze_trend(
            overall,
            context.previous_overall,
            period,
            self.config.trend_noise_pct,
        );
        let recommendations = generate_recommendations(&breakdown, &self.config)
            .into_iter()
            .map(|recommendation| recommendation.message)
            .collect();

        debug!(
            overall,
            status = status.label(),
            critical_threshold = thresholds.critical,
            "society health scored"
        );

        Ok(HealthResult {
            overall,
            status,
            breakdown,
            trend,
            recommendations,
        })
    }
}

/// Score a snapshot with the documented default configuration.
pub fn compute_health_score(
    metrics: &HealthMetrics,
    previous_overall: Option<f64>,
    critical_override: Option<f64>,
) -> Result<HealthResult, ValidationError> {
    let context = ScoreContext {
        previous_overall,
        critical_override,
        period: None,
    };
    HealthEngine::default().evaluate(metrics, &context)
}
