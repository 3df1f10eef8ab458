use super::config::ScoringConfig;
use super::domain::{by_urgency, Dimension, HealthBreakdown};
use serde::Serialize;

/// Guidance for one dimension scoring below the attention threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub dimension: Dimension,
    pub score: f64,
    pub message: String,
}

/// Ranked guidance, most urgent first. Empty when every dimension is at or
/// above `config.attention_threshold`.
pub fn generate_recommendations(
    breakdown: &HealthBreakdown,
    config: &ScoringConfig,
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = breakdown
        .entries()
        .into_iter()
        .filter(|(_, score)| *score < config.attention_threshold)
        .map(|(dimension, score)| Recommendation {
            dimension,
            score,
            message: message_for(dimension, config),
        })
        .collect();

    recommendations.sort_by(|a, b| by_urgency((a.dimension, a.score), (b.dimension, b.score)));

    recommendations
}

fn message_for(dimension: Dimension, config: &ScoringConfig) -> String {
    match dimension {
        Dimension::Engagement => {
            "Boost resident engagement with community events and app onboarding drives".to_string()
        }
        Dimension::IssueManagement => {
            "Clear the open issue backlog and tighten resolution turnaround".to_string()
        }
        Dimension::Financial => "Improve payment collection follow-up".to_string(),
        Dimension::Communication => {
            "Improve notice delivery and follow up on unread announcements".to_string()
        }
        Dimension::Maintenance => format!(
            "Shorten maintenance response times toward the {:.0}-hour target",
            config.maintenance_target_hours
        ),
        Dimension::Satisfaction => {
            "Survey residents and act on the most frequent complaints".to_string()
        }
    }
}
