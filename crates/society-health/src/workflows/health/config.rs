use super::domain::Dimension;
use serde::{Deserialize, Serialize};

/// Fixed aggregation weights. Not caller-supplied so scores stay comparable
/// across societies and over time.
pub const DIMENSION_WEIGHTS: [(Dimension, f64); 6] = [
    (Dimension::Engagement, 0.25),
    (Dimension::IssueManagement, 0.20),
    (Dimension::Financial, 0.20),
    (Dimension::Communication, 0.10),
    (Dimension::Maintenance, 0.10),
    (Dimension::Satisfaction, 0.15),
];

/// Score returned when a ratio has no demand behind it (zero denominator).
pub const NO_DEMAND_SCORE: f64 = 100.0;

pub const MAX_OVERALL_SCORE: f64 = 100.0;

/// Baselines below this carry no usable signal and read as "no baseline".
pub const MIN_TREND_BASELINE: f64 = 1.0;

pub const HEALTHY_THRESHOLD: f64 = 80.0;
pub const CRITICAL_THRESHOLD: f64 = 50.0;
pub const ATTENTION_THRESHOLD: f64 = 70.0;
pub const TREND_NOISE_PCT: f64 = 2.0;
pub const MAINTENANCE_TARGET_HOURS: f64 = 24.0;
pub const OPEN_ISSUE_TOLERANCE: f64 = 5.0;
pub const DEFAULT_TREND_PERIOD: &str = "30d";
pub const SATISFACTION_SCALE_MAX: f64 = 5.0;

// Blend factors inside individual dimensions.
pub(crate) const ACTIVE_SHARE_WEIGHT: f64 = 0.5;
pub(crate) const PARTICIPATION_WEIGHT: f64 = 0.5;
pub(crate) const RESOLUTION_RATE_WEIGHT: f64 = 0.6;
pub(crate) const BACKLOG_WEIGHT: f64 = 0.4;
pub(crate) const DELIVERY_RATE_WEIGHT: f64 = 0.5;
pub(crate) const READ_RATE_WEIGHT: f64 = 0.5;

/// Tie-break order for recommendations with equal scores, most urgent first.
pub const RECOMMENDATION_PRIORITY: [Dimension; 6] = [
    Dimension::Financial,
    Dimension::IssueManagement,
    Dimension::Maintenance,
    Dimension::Satisfaction,
    Dimension::Engagement,
    Dimension::Communication,
];

pub fn weight_for(dimension: Dimension) -> f64 {
    DIMENSION_WEIGHTS
        .iter()
        .find(|(candidate, _)| *candidate == dimension)
        .map(|(_, weight)| *weight)
        .unwrap_or(0.0)
}

/// Tunable thresholds for classification, trends, and recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub healthy_threshold: f64,
    pub critical_threshold: f64,
    pub attention_threshold: f64,
    pub trend_noise_pct: f64,
    pub maintenance_target_hours: f64,
    pub open_issue_tolerance: f64,
    pub trend_period: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            healthy_threshold: HEALTHY_THRESHOLD,
            critical_threshold: CRITICAL_THRESHOLD,
            attention_threshold: ATTENTION_THRESHOLD,
            trend_noise_pct: TREND_NOISE_PCT,
            maintenance_target_hours: MAINTENANCE_TARGET_HOURS,
            open_issue_tolerance: OPEN_ISSUE_TOLERANCE,
            trend_period: DEFAULT_TREND_PERIOD.to_string(),
        }
    }
}

impl ScoringConfig {
    /// Bring every knob back into a usable range.
    ///
    /// The healthy boundary never rises above 80, the critical boundary never
    /// exceeds the healthy one, and non-finite or non-positive tuning values
    /// fall back to their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        self.healthy_threshold = finite_or(self.healthy_threshold, defaults.healthy_threshold)
            .clamp(0.0, HEALTHY_THRESHOLD);
        self.critical_threshold = finite_or(self.critical_threshold, defaults.critical_threshold)
            .clamp(0.0, self.healthy_threshold);
        self.attention_threshold =
            finite_or(self.attention_threshold, defaults.attention_threshold).clamp(0.0, 100.0);
        self.trend_noise_pct = finite_or(self.trend_noise_pct, defaults.trend_noise_pct).max(0.0);

        if !(self.maintenance_target_hours.is_finite() && self.maintenance_target_hours > 0.0) {
            self.maintenance_target_hours = defaults.maintenance_target_hours;
        }
        if !(self.open_issue_tolerance.is_finite() && self.open_issue_tolerance > 0.0) {
            self.open_issue_tolerance = defaults.open_issue_tolerance;
        }
        if self.trend_period.trim().is_empty() {
            self.trend_period = defaults.trend_period;
        }

        self
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_cover_every_dimension_and_sum_to_one() {
        let total: f64 = DIMENSION_WEIGHTS.iter().map(|(_, weight)| weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
        for dimension in Dimension::ordered() {
            assert!(weight_for(dimension) > 0.0, "{dimension:?} has no weight");
        }
    }

    #[test]
    fn priority_lists_each_dimension_once() {
        let mut seen = RECOMMENDATION_PRIORITY.to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn sanitized_caps_healthy_boundary_at_eighty() {
        let config = ScoringConfig {
            healthy_threshold: 92.0,
            critical_threshold: 95.0,
            ..ScoringConfig::default()
        }
        .sanitized();

        assert_eq!(config.healthy_threshold, 80.0);
        assert_eq!(config.critical_threshold, 80.0);
    }

    #[test]
    fn sanitized_restores_defaults_for_unusable_values() {
        let config = ScoringConfig {
            maintenance_target_hours: 0.0,
            open_issue_tolerance: f64::NAN,
            trend_noise_pct: f64::INFINITY,
            trend_period: "  ".to_string(),
            ..ScoringConfig::default()
        }
        .sanitized();

        assert_eq!(config.maintenance_target_hours, MAINTENANCE_TARGET_HOURS);
        assert_eq!(config.open_issue_tolerance, OPEN_ISSUE_TOLERANCE);
        assert_eq!(config.trend_noise_pct, TREND_NOISE_PCT);
        assert_eq!(config.trend_period, DEFAULT_TREND_PERIOD);
    }
}
