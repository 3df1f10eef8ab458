use super::config::{MIN_TREND_BASELINE, TREND_NOISE_PCT};
use super::domain::{HealthTrend, TrendDirection};
use super::normalizer::round_tenth;

/// Compare `current` against an optional `previous` overall score.
///
/// A missing baseline, or one below [`MIN_TREND_BASELINE`], yields a stable
/// trend with no change. The percentage is always finite.
pub fn analyze_trend(
    current: f64,
    previous: Option<f64>,
    period: &str,
    noise_pct: f64,
) -> HealthTrend {
    let baseline = match previous {
        Some(value) if value >= MIN_TREND_BASELINE => value,
        _ => return stable(period),
    };

    let change_percentage = round_tenth((current - baseline) / baseline * 100.0);
    if !change_percentage.is_finite() {
        return stable(period);
    }
    let direction = if change_percentage.abs() < noise_pct {
        TrendDirection::Stable
    } else if current > baseline {
        TrendDirection::Improving
    } else {
        TrendDirection::Declining
    };

    HealthTrend {
        direction,
        change_percentage,
        period: period.to_string(),
    }
}

/// Trend with the default two percent noise band.
pub fn trend_with_defaults(current: f64, previous: Option<f64>, period: &str) -> HealthTrend {
    analyze_trend(current, previous, period, TREND_NOISE_PCT)
}

fn stable(period: &str) -> HealthTrend {
    HealthTrend {
        direction: TrendDirection::Stable,
        change_percentage: 0.0,
        period: period.to_string(),
    }
}
