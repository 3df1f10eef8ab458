use society_health::error::AppError;
use society_health::workflows::health::{HealthMetrics, MetricsInput, SocietySnapshot};
use std::path::Path;

pub(crate) fn read_metrics_file(path: &Path) -> Result<HealthMetrics, AppError> {
    let raw = std::fs::read_to_string(path)?;
    metrics_from_json(&raw)
}

/// Parse a JSON payload, reporting absent required metrics as validation errors.
pub(crate) fn metrics_from_json(raw: &str) -> Result<HealthMetrics, AppError> {
    let input: MetricsInput = serde_json::from_str(raw)?;
    Ok(HealthMetrics::try_from(input)?)
}

pub(crate) fn sample_snapshots() -> Vec<SocietySnapshot> {
    let maple_court = HealthMetrics {
        total_residents: 150,
        active_residents: 142,
        open_issues: 3,
        resolved_issues: 47,
        payment_compliance_rate: 92.3,
        resident_satisfaction_score: 4.2,
        community_participation: 65.0,
        maintenance_response_time: Some(18.0),
        notifications_sent: Some(420),
        notifications_delivered: Some(416),
        notifications_read: Some(331),
    };
    let riverside_towers = HealthMetrics {
        total_residents: 120,
        active_residents: 40,
        open_issues: 15,
        resolved_issues: 8,
        payment_compliance_rate: 70.0,
        resident_satisfaction_score: 2.8,
        community_participation: 20.0,
        maintenance_response_time: Some(96.0),
        notifications_sent: Some(200),
        notifications_delivered: Some(180),
        notifications_read: Some(40),
    };

    let mut maple = SocietySnapshot::new("maple-court", maple_court);
    maple.previous_overall = Some(84.0);
    let mut riverside = SocietySnapshot::new("riverside-towers", riverside_towers);
    riverside.previous_overall = Some(51.0);

    vec![maple, riverside]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_payload_parses_optional_metrics() {
        let payload = r#"{
            "total_residents": 150,
            "active_residents": 142,
            "open_issues": 3,
            "resolved_issues": 47,
            "payment_compliance_rate": 92.3,
            "resident_satisfaction_score": 4.2,
            "community_participation": 65,
            "maintenance_response_time": 12.5
        }"#;

        let metrics = metrics_from_json(payload).expect("payload parses");

        assert_eq!(metrics.total_residents, 150);
        assert_eq!(metrics.maintenance_response_time, Some(12.5));
        assert!(metrics.notifications_sent.is_none());
    }

    #[test]
    fn missing_metric_maps_to_validation_error() {
        let err = metrics_from_json(r#"{ "total_residents": 10 }"#).expect_err("incomplete");

        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("active_residents"));
    }

    #[test]
    fn malformed_json_maps_to_input_error() {
        let err = metrics_from_json("{ not json").expect_err("malformed");

        assert!(matches!(err, AppError::Input(_)));
    }

    #[test]
    fn sample_snapshots_are_complete() {
        for snapshot in sample_snapshots() {
            assert!(HealthMetrics::try_from(snapshot.metrics).is_ok());
        }
    }
}
