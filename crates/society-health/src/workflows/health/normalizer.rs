use super::config::{
    ScoringConfig, ACTIVE_SHARE_WEIGHT, BACKLOG_WEIGHT, DELIVERY_RATE_WEIGHT, NO_DEMAND_SCORE,
    PARTICIPATION_WEIGHT, READ_RATE_WEIGHT, RESOLUTION_RATE_WEIGHT, SATISFACTION_SCALE_MAX,
};
use super::domain::{HealthBreakdown, HealthMetrics};
use tracing::warn;

/// Map a validated snapshot onto the six dimension scores.
pub(crate) fn normalize(metrics: &HealthMetrics, config: &ScoringConfig) -> HealthBreakdown {
    HealthBreakdown {
        engagement: finish(engagement_score(metrics)),
        issue_management: finish(issue_management_score(
            metrics,
            config.open_issue_tolerance,
        )),
        financial: finish(financial_score(metrics)),
        communication: finish(communication_score(metrics)),
        maintenance: finish(maintenance_score(
            metrics.maintenance_response_time,
            config.maintenance_target_hours,
        )),
        satisfaction: finish(satisfaction_score(metrics)),
    }
}

/// `part / whole` as a percentage, or the no-demand sentinel when `whole` is zero.
pub(crate) fn percentage(part: i64, whole: i64) -> f64 {
    if whole <= 0 {
        return NO_DEMAND_SCORE;
    }
    part as f64 / whole as f64 * 100.0
}

pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn finish(value: f64) -> f64 {
    round_tenth(value.clamp(0.0, 100.0))
}

fn clamp_reported(field: &'static str, value: f64, max: f64) -> f64 {
    if value > max {
        warn!(field, value, max, "clamping out-of-range metric");
        return max;
    }
    value
}

fn engagement_score(metrics: &HealthMetrics) -> f64 {
    if metrics.active_residents > metrics.total_residents {
        warn!(
            active = metrics.active_residents,
            total = metrics.total_residents,
            "active residents exceed total residents"
        );
    }
    let active_share =
        percentage(metrics.active_residents, metrics.total_residents).min(100.0);
    let participation =
        clamp_reported("community_participation", metrics.community_participation, 100.0);

    ACTIVE_SHARE_WEIGHT * active_share + PARTICIPATION_WEIGHT * participation
}

fn issue_management_score(metrics: &HealthMetrics, tolerance: f64) -> f64 {
    let raised = metrics.resolved_issues.saturating_add(metrics.open_issues);
    let resolution_rate = percentage(metrics.resolved_issues, raised);
    let backlog = 100.0 * tolerance / (tolerance + metrics.open_issues as f64);

    RESOLUTION_RATE_WEIGHT * resolution_rate + BACKLOG_WEIGHT * backlog
}

fn financial_score(metrics: &HealthMetrics) -> f64 {
    clamp_reported(
        "payment_compliance_rate",
        metrics.payment_compliance_rate,
        100.0,
    )
}

fn communication_score(metrics: &HealthMetrics) -> f64 {
    let sent = match metrics.notifications_sent {
        Some(sent) if sent > 0 => sent,
        _ => return NO_DEMAND_SCORE,
    };
    let delivered = metrics.notifications_delivered.unwrap_or(sent);
    let delivery_rate = (delivered as f64 / sent as f64 * 100.0).min(100.0);

    match metrics.notifications_read {
        None => delivery_rate,
        Some(_) if delivered == 0 => DELIVERY_RATE_WEIGHT * delivery_rate,
        Some(read) => {
            let read_rate = (read as f64 / delivered as f64 * 100.0).min(100.0);
            DELIVERY_RATE_WEIGHT * delivery_rate + READ_RATE_WEIGHT * read_rate
        }
    }
}

fn maintenance_score(response_hours: Option<f64>, target_hours: f64) -> f64 {
    match response_hours {
        Some(hours) if hours > target_hours => 100.0 * target_hours / hours,
        _ => NO_DEMAND_SCORE,
    }
}

fn satisfaction_score(metrics: &HealthMetrics) -> f64 {
    let score = clamp_reported(
        "resident_satisfaction_score",
        metrics.resident_satisfaction_score,
        SATISFACTION_SCALE_MAX,
    );
    score / SATISFACTION_SCALE_MAX * 100.0
}
