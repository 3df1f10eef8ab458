use super::config::{ScoringConfig, HEALTHY_THRESHOLD};
use super::domain::HealthStatus;
use serde::Serialize;

/// Lower bounds of the `healthy` and `attention_needed` bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusThresholds {
    pub healthy: f64,
    pub critical: f64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default(), None)
    }
}

impl StatusThresholds {
    /// Resolve effective boundaries for one society.
    ///
    /// `critical_override` can only lower the critical boundary; anything above
    /// the configured boundary is ignored and anything below zero clamps to zero.
    pub fn from_config(config: &ScoringConfig, critical_override: Option<f64>) -> Self {
        let healthy = config.healthy_threshold.min(HEALTHY_THRESHOLD);
        let configured_critical = config.critical_threshold.min(healthy);
        let critical = match critical_override {
            Some(value) if value.is_finite() => value.clamp(0.0, configured_critical),
            _ => configured_critical,
        };

        Self { healthy, critical }
    }

    pub fn classify(&self, overall: f64) -> HealthStatus {
        if overall >= self.healthy {
            HealthStatus::Healthy
        } else if overall >= self.critical {
            HealthStatus::AttentionNeeded
        } else {
            HealthStatus::Critical
        }
    }
}

/// Classify with the documented 80/50 bands.
pub fn classify(overall: f64) -> HealthStatus {
    StatusThresholds::default().classify(overall)
}
