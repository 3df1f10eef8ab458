use super::common::*;
use crate::workflows::health::config::weight_for;
use crate::workflows::health::{
    compute_health_score, score_portfolio, Dimension, HealthEngine, HealthMetrics, HealthStatus,
    MetricsInput, ScoreContext, ScoringConfig, SocietySnapshot, TrendDirection, ValidationError,
};

#[test]
fn healthy_society_has_no_recommendations() {
    let result = compute_health_score(&maple_court_metrics(), None, None).expect("scores");

    assert_eq!(result.overall, 87.0);
    assert_eq!(result.status, HealthStatus::Healthy);
    assert!(result.recommendations.is_empty());
    assert_eq!(result.trend.direction, TrendDirection::Stable);
    assert_eq!(result.trend.change_percentage, 0.0);
    assert_eq!(result.trend.period, "30d");
}

#[test]
fn struggling_society_is_critical_and_led_by_weakest_dimension() {
    let result = compute_health_score(&riverside_towers_metrics(), None, None).expect("scores");

    assert_eq!(result.overall, 43.0);
    assert_eq!(result.status, HealthStatus::Critical);
    assert_eq!(result.recommendations.len(), 5);
    assert!(result.recommendations[0].contains("maintenance response"));
    assert_eq!(result.breakdown.weakest().0, Dimension::Maintenance);
    assert!(!result
        .recommendations
        .iter()
        .any(|message| message.contains("payment collection")));
}

#[test]
fn overall_matches_weighted_breakdown() {
    for metrics in [maple_court_metrics(), riverside_towers_metrics()] {
        let result = compute_health_score(&metrics, None, None).expect("scores");
        let weighted: f64 = result
            .breakdown
            .entries()
            .iter()
            .map(|(dimension, score)| weight_for(*dimension) * score)
            .sum();
        assert_eq!(result.overall, weighted.round());
    }
}

#[test]
fn critical_override_moves_society_into_attention_band() {
    let result =
        compute_health_score(&riverside_towers_metrics(), None, Some(40.0)).expect("scores");

    assert_eq!(result.status, HealthStatus::AttentionNeeded);
}

#[test]
fn previous_score_produces_trend() {
    let result = compute_health_score(&maple_court_metrics(), Some(80.0), None).expect("scores");

    assert_eq!(result.trend.direction, TrendDirection::Improving);
    assert!((result.trend.change_percentage - 8.75).abs() <= 0.05);
}

#[test]
fn context_period_is_passed_through() {
    let engine = default_engine();
    let context = ScoreContext {
        previous_overall: Some(87.0),
        critical_override: None,
        period: Some("Q3-2025".to_string()),
    };

    let result = engine
        .evaluate(&maple_court_metrics(), &context)
        .expect("scores");

    assert_eq!(result.trend.period, "Q3-2025");
    assert_eq!(result.trend.direction, TrendDirection::Stable);
}

#[test]
fn identical_input_yields_identical_result() {
    let engine = default_engine();
    let metrics = riverside_towers_metrics();

    let first = engine.evaluate(&metrics, &ScoreContext::default()).expect("scores");
    let second = engine.evaluate(&metrics, &ScoreContext::default()).expect("scores");

    assert_eq!(first, second);
}

#[test]
fn stricter_attention_threshold_surfaces_more_guidance() {
    let engine = HealthEngine::new(ScoringConfig {
        attention_threshold: 90.0,
        ..ScoringConfig::default()
    });

    let result = engine
        .evaluate(&maple_court_metrics(), &ScoreContext::default())
        .expect("scores");

    assert_eq!(result.status, HealthStatus::Healthy);
    assert_eq!(result.recommendations.len(), 3);
    assert!(result.recommendations[0].contains("engagement"));
    assert_eq!(result.focus_dimension(90.0), Some(Dimension::Engagement));
    assert_eq!(result.focus_dimension(70.0), None);
}

#[test]
fn validation_runs_before_scoring() {
    let mut metrics = maple_court_metrics();
    metrics.total_residents = -10;
    let err = compute_health_score(&metrics, None, None).expect_err("rejected");
    assert_eq!(err.field(), "total_residents");

    let mut metrics = maple_court_metrics();
    metrics.payment_compliance_rate = f64::NAN;
    let err = compute_health_score(&metrics, None, None).expect_err("rejected");
    assert_eq!(
        err,
        ValidationError::NotFinite {
            field: "payment_compliance_rate"
        }
    );

    let mut metrics = maple_court_metrics();
    metrics.maintenance_response_time = Some(-2.0);
    let err = compute_health_score(&metrics, None, None).expect_err("rejected");
    assert_eq!(err.field(), "maintenance_response_time");
}

#[test]
fn context_values_are_validated() {
    let metrics = maple_court_metrics();

    let err = compute_health_score(&metrics, Some(-4.0), None).expect_err("rejected");
    assert_eq!(err.field(), "previous_overall");

    let err = compute_health_score(&metrics, None, Some(f64::INFINITY)).expect_err("rejected");
    assert_eq!(
        err,
        ValidationError::NotFinite {
            field: "critical_override"
        }
    );
}

#[test]
fn previous_score_above_scale_is_rejected() {
    let err = compute_health_score(&maple_court_metrics(), Some(250.0), None)
        .expect_err("rejected");

    assert_eq!(
        err,
        ValidationError::AboveRange {
            field: "previous_overall",
            value: 250.0,
            max: 100.0,
        }
    );
}

#[test]
fn tiny_previous_score_keeps_trend_finite() {
    let result =
        compute_health_score(&maple_court_metrics(), Some(1e-306), None).expect("scores");

    assert!(result.trend.change_percentage.is_finite());
    assert_eq!(result.trend.direction, TrendDirection::Stable);

    let json = serde_json::to_value(&result).expect("serializes");
    assert_eq!(json["trend"]["change_percentage"], 0.0);
}

#[test]
fn missing_required_input_is_a_validation_error() {
    let input = MetricsInput {
        total_residents: Some(150),
        active_residents: Some(142),
        open_issues: Some(3),
        resolved_issues: Some(47),
        payment_compliance_rate: None,
        resident_satisfaction_score: Some(4.2),
        community_participation: Some(65.0),
        ..MetricsInput::default()
    };

    let err = HealthMetrics::try_from(input).expect_err("missing field rejected");

    assert_eq!(
        err,
        ValidationError::MissingField {
            field: "payment_compliance_rate"
        }
    );
}

#[test]
fn portfolio_ranks_most_at_risk_first() {
    let mut incomplete = SocietySnapshot::new("cedar-heights", maple_court_metrics());
    incomplete.metrics.community_participation = None;
    let mut recovering = SocietySnapshot::new("riverside-towers", riverside_towers_metrics());
    recovering.previous_overall = Some(38.0);

    let snapshots = vec![
        SocietySnapshot::new("maple-court", maple_court_metrics()),
        incomplete,
        recovering,
    ];

    let report = score_portfolio(&default_engine(), &snapshots);

    assert_eq!(report.scorecards.len(), 2);
    assert_eq!(report.scorecards[0].society_id, "riverside-towers");
    assert_eq!(
        report.scorecards[0].focus_dimension,
        Some(Dimension::Maintenance)
    );
    assert_eq!(
        report.scorecards[0].result.trend.direction,
        TrendDirection::Improving
    );
    assert_eq!(report.scorecards[1].society_id, "maple-court");
    assert_eq!(report.scorecards[1].focus_dimension, None);
    assert_eq!(report.count_for(HealthStatus::Healthy), 1);
    assert_eq!(report.count_for(HealthStatus::Critical), 1);
    assert_eq!(report.count_for(HealthStatus::AttentionNeeded), 0);
    assert_eq!(report.average_overall, Some(65.0));
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].society_id, "cedar-heights");
    assert_eq!(report.rejected[0].field, "community_participation");
}

#[test]
fn empty_portfolio_has_no_average() {
    let report = score_portfolio(&default_engine(), &[]);

    assert!(report.scorecards.is_empty());
    assert!(report.average_overall.is_none());
    assert_eq!(report.status_counts.len(), 3);
}
