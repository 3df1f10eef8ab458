use super::domain::HealthMetrics;

/// Raised before any scoring when a snapshot is incomplete or out of domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("required metric `{field}` is missing")]
    MissingField { field: &'static str },
    #[error("metric `{field}` must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("metric `{field}` must be a finite number")]
    NotFinite { field: &'static str },
    #[error("`{field}` must not exceed {max} (got {value})")]
    AboveRange {
        field: &'static str,
        value: f64,
        max: f64,
    },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::Negative { field, .. }
            | ValidationError::NotFinite { field }
            | ValidationError::AboveRange { field, .. } => field,
        }
    }
}

fn check_count(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative {
            field,
            value: value as f64,
        });
    }
    Ok(())
}

pub(crate) fn check_measure(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

/// Finite, non-negative, and no greater than `max`.
pub(crate) fn check_bounded(
    field: &'static str,
    value: f64,
    max: f64,
) -> Result<(), ValidationError> {
    check_measure(field, value)?;
    if value > max {
        return Err(ValidationError::AboveRange { field, value, max });
    }
    Ok(())
}

/// Fail-fast domain checks. Values above their nominal range are tolerated
/// here and clamped during normalization.
pub fn validate_metrics(metrics: &HealthMetrics) -> Result<(), ValidationError> {
    check_count("total_residents", metrics.total_residents)?;
    check_count("active_residents", metrics.active_residents)?;
    check_count("open_issues", metrics.open_issues)?;
    check_count("resolved_issues", metrics.resolved_issues)?;
    check_measure("payment_compliance_rate", metrics.payment_compliance_rate)?;
    check_measure(
        "resident_satisfaction_score",
        metrics.resident_satisfaction_score,
    )?;
    check_measure("community_participation", metrics.community_participation)?;

    if let Some(hours) = metrics.maintenance_response_time {
        check_measure("maintenance_response_time", hours)?;
    }
    if let Some(sent) = metrics.notifications_sent {
        check_count("notifications_sent", sent)?;
    }
    if let Some(delivered) = metrics.notifications_delivered {
        check_count("notifications_delivered", delivered)?;
    }
    if let Some(read) = metrics.notifications_read {
        check_count("notifications_read", read)?;
    }

    Ok(())
}
