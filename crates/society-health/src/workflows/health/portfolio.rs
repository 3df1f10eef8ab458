use super::domain::{Dimension, HealthMetrics, HealthResult, HealthStatus, MetricsInput};
use super::engine::{HealthEngine, ScoreContext};
use super::normalizer::round_tenth;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::warn;

/// One society's snapshot as supplied by a metrics-fetching layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocietySnapshot {
    pub society_id: String,
    pub metrics: MetricsInput,
    #[serde(default)]
    pub previous_overall: Option<f64>,
    #[serde(default)]
    pub critical_override: Option<f64>,
}

impl SocietySnapshot {
    pub fn new(society_id: impl Into<String>, metrics: HealthMetrics) -> Self {
        Self {
            society_id: society_id.into(),
            metrics: metrics.into(),
            previous_overall: None,
            critical_override: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocietyScorecard {
    pub society_id: String,
    pub result: HealthResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_dimension: Option<Dimension>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: HealthStatus,
    pub status_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedSnapshot {
    pub society_id: String,
    pub field: &'static str,
    pub reason: String,
}

/// Batch outcome: most at-risk societies first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioReport {
    pub scorecards: Vec<SocietyScorecard>,
    pub status_counts: Vec<StatusCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_overall: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedSnapshot>,
}

impl PortfolioReport {
    pub fn count_for(&self, status: HealthStatus) -> usize {
        self.status_counts
            .iter()
            .find(|entry| entry.status == status)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}

/// Score every snapshot independently; a rejected society never affects another.
pub fn score_portfolio(engine: &HealthEngine, snapshots: &[SocietySnapshot]) -> PortfolioReport {
    let mut scorecards = Vec::with_capacity(snapshots.len());
    let mut rejected = Vec::new();

    for snapshot in snapshots {
        let context = ScoreContext {
            previous_overall: snapshot.previous_overall,
            critical_override: snapshot.critical_override,
            period: None,
        };
        let outcome = HealthMetrics::try_from(snapshot.metrics.clone())
            .and_then(|metrics| engine.evaluate(&metrics, &context));

        match outcome {
            Ok(result) => {
                let focus_dimension =
                    result.focus_dimension(engine.config().attention_threshold);
                scorecards.push(SocietyScorecard {
                    society_id: snapshot.society_id.clone(),
                    result,
                    focus_dimension,
                });
            }
            Err(err) => {
                warn!(society_id = %snapshot.society_id, error = %err, "society snapshot rejected");
                rejected.push(RejectedSnapshot {
                    society_id: snapshot.society_id.clone(),
                    field: err.field(),
                    reason: err.to_string(),
                });
            }
        }
    }

    scorecards.sort_by(|a, b| {
        a.result
            .overall
            .partial_cmp(&b.result.overall)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.society_id.cmp(&b.society_id))
    });

    let status_counts = HealthStatus::ordered()
        .into_iter()
        .map(|status| StatusCount {
            status,
            status_label: status.label(),
            count: scorecards
                .iter()
                .filter(|card| card.result.status == status)
                .count(),
        })
        .collect();

    let average_overall = if scorecards.is_empty() {
        None
    } else {
        let total: f64 = scorecards.iter().map(|card| card.result.overall).sum();
        Some(round_tenth(total / scorecards.len() as f64))
    };

    PortfolioReport {
        scorecards,
        status_counts,
        average_overall,
        rejected,
    }
}
