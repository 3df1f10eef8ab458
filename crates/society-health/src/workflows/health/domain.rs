use super::config::RECOMMENDATION_PRIORITY;
use super::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One of the six fixed sub-scores contributing to a society's health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Engagement,
    IssueManagement,
    Financial,
    Communication,
    Maintenance,
    Satisfaction,
}

impl Dimension {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Engagement,
            Self::IssueManagement,
            Self::Financial,
            Self::Communication,
            Self::Maintenance,
            Self::Satisfaction,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Engagement => "Resident Engagement",
            Self::IssueManagement => "Issue Management",
            Self::Financial => "Financial Health",
            Self::Communication => "Communication",
            Self::Maintenance => "Maintenance",
            Self::Satisfaction => "Resident Satisfaction",
        }
    }

    /// Position in the tie-break order used when two dimensions score equally.
    pub fn priority_rank(self) -> usize {
        RECOMMENDATION_PRIORITY
            .iter()
            .position(|candidate| *candidate == self)
            .unwrap_or(RECOMMENDATION_PRIORITY.len())
    }
}

/// Most urgent first: lower score, then higher tie-break priority.
pub(crate) fn by_urgency(a: (Dimension, f64), b: (Dimension, f64)) -> Ordering {
    a.1.partial_cmp(&b.1)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.0.priority_rank().cmp(&b.0.priority_rank()))
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated-on-entry operational snapshot for a single society.
///
/// Counts are signed so negative upstream data is rejected by validation
/// rather than wrapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub total_residents: i64,
    pub active_residents: i64,
    pub open_issues: i64,
    pub resolved_issues: i64,
    /// Percentage of dues paid on time, 0–100.
    pub payment_compliance_rate: f64,
    /// Survey average on a 0–5 scale.
    pub resident_satisfaction_score: f64,
    /// Percentage of residents taking part in community activity, 0–100.
    pub community_participation: f64,
    /// Average hours from maintenance request to first response.
    #[serde(default)]
    pub maintenance_response_time: Option<f64>,
    #[serde(default)]
    pub notifications_sent: Option<i64>,
    #[serde(default)]
    pub notifications_delivered: Option<i64>,
    #[serde(default)]
    pub notifications_read: Option<i64>,
}

/// Loosely-typed snapshot as produced by JSON payloads or CSV exports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsInput {
    #[serde(default)]
    pub total_residents: Option<i64>,
    #[serde(default)]
    pub active_residents: Option<i64>,
    #[serde(default)]
    pub open_issues: Option<i64>,
    #[serde(default)]
    pub resolved_issues: Option<i64>,
    #[serde(default)]
    pub payment_compliance_rate: Option<f64>,
    #[serde(default)]
    pub resident_satisfaction_score: Option<f64>,
    #[serde(default)]
    pub community_participation: Option<f64>,
    #[serde(default)]
    pub maintenance_response_time: Option<f64>,
    #[serde(default)]
    pub notifications_sent: Option<i64>,
    #[serde(default)]
    pub notifications_delivered: Option<i64>,
    #[serde(default)]
    pub notifications_read: Option<i64>,
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField { field })
}

impl TryFrom<MetricsInput> for HealthMetrics {
    type Error = ValidationError;

    fn try_from(input: MetricsInput) -> Result<Self, Self::Error> {
        Ok(Self {
            total_residents: required(input.total_residents, "total_residents")?,
            active_residents: required(input.active_residents, "active_residents")?,
            open_issues: required(input.open_issues, "open_issues")?,
            resolved_issues: required(input.resolved_issues, "resolved_issues")?,
            payment_compliance_rate: required(
                input.payment_compliance_rate,
                "payment_compliance_rate",
            )?,
            resident_satisfaction_score: required(
                input.resident_satisfaction_score,
                "resident_satisfaction_score",
            )?,
            community_participation: required(
                input.community_participation,
                "community_participation",
            )?,
            maintenance_response_time: input.maintenance_response_time,
            notifications_sent: input.notifications_sent,
            notifications_delivered: input.notifications_delivered,
            notifications_read: input.notifications_read,
        })
    }
}

impl From<HealthMetrics> for MetricsInput {
    fn from(metrics: HealthMetrics) -> Self {
        Self {
            total_residents: Some(metrics.total_residents),
            active_residents: Some(metrics.active_residents),
            open_issues: Some(metrics.open_issues),
            resolved_issues: Some(metrics.resolved_issues),
            payment_compliance_rate: Some(metrics.payment_compliance_rate),
            resident_satisfaction_score: Some(metrics.resident_satisfaction_score),
            community_participation: Some(metrics.community_participation),
            maintenance_response_time: metrics.maintenance_response_time,
            notifications_sent: metrics.notifications_sent,
            notifications_delivered: metrics.notifications_delivered,
            notifications_read: metrics.notifications_read,
        }
    }
}

/// Per-dimension scores, each rounded to one decimal and within [0,100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthBreakdown {
    pub engagement: f64,
    pub issue_management: f64,
    pub financial: f64,
    pub communication: f64,
    pub maintenance: f64,
    pub satisfaction: f64,
}

impl HealthBreakdown {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Engagement => self.engagement,
            Dimension::IssueManagement => self.issue_management,
            Dimension::Financial => self.financial,
            Dimension::Communication => self.communication,
            Dimension::Maintenance => self.maintenance,
            Dimension::Satisfaction => self.satisfaction,
        }
    }

    pub fn entries(&self) -> [(Dimension, f64); 6] {
        Dimension::ordered().map(|dimension| (dimension, self.get(dimension)))
    }

    /// Lowest-scoring dimension, with ties resolved in recommendation priority
    /// order so it always matches the first recommendation.
    pub fn weakest(&self) -> (Dimension, f64) {
        self.entries()
            .into_iter()
            .min_by(|a, b| by_urgency(*a, *b))
            .unwrap_or((Dimension::Engagement, f64::INFINITY))
    }
}

/// Status band derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    AttentionNeeded,
    Critical,
}

impl HealthStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Healthy, Self::AttentionNeeded, Self::Critical]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::AttentionNeeded => "Attention Needed",
            Self::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

impl TrendDirection {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Improving => "Improving",
            Self::Declining => "Declining",
            Self::Stable => "Stable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthTrend {
    pub direction: TrendDirection,
    pub change_percentage: f64,
    pub period: String,
}

/// Complete scoring outcome for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResult {
    pub overall: f64,
    pub status: HealthStatus,
    pub breakdown: HealthBreakdown,
    pub trend: HealthTrend,
    pub recommendations: Vec<String>,
}

impl HealthResult {
    /// Dimension most in need of attention, if any falls below `attention_threshold`.
    pub fn focus_dimension(&self, attention_threshold: f64) -> Option<Dimension> {
        let (dimension, score) = self.breakdown.weakest();
        (score < attention_threshold).then_some(dimension)
    }
}
