use crate::workflows::health::{HealthBreakdown, HealthEngine, HealthMetrics, ScoringConfig};

/// Well-run society: high occupancy, small backlog, strong compliance.
pub(super) fn maple_court_metrics() -> HealthMetrics {
    HealthMetrics {
        total_residents: 150,
        active_residents: 142,
        open_issues: 3,
        resolved_issues: 47,
        payment_compliance_rate: 92.3,
        resident_satisfaction_score: 4.2,
        community_participation: 65.0,
        maintenance_response_time: None,
        notifications_sent: None,
        notifications_delivered: None,
        notifications_read: None,
    }
}

/// Struggling society: thin engagement, growing backlog, slow maintenance.
pub(super) fn riverside_towers_metrics() -> HealthMetrics {
    HealthMetrics {
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
    }
}

pub(super) fn breakdown(
    engagement: f64,
    issue_management: f64,
    financial: f64,
    communication: f64,
    maintenance: f64,
    satisfaction: f64,
) -> HealthBreakdown {
    HealthBreakdown {
        engagement,
        issue_management,
        financial,
        communication,
        maintenance,
        satisfaction,
    }
}

pub(super) fn uniform_breakdown(score: f64) -> HealthBreakdown {
    breakdown(score, score, score, score, score, score)
}

pub(super) fn default_engine() -> HealthEngine {
    HealthEngine::new(ScoringConfig::default())
}
