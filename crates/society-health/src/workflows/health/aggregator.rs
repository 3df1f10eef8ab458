use super::config::DIMENSION_WEIGHTS;
use super::domain::{Dimension, HealthBreakdown};
use serde::Serialize;

/// Weighted contribution of one dimension to the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedContribution {
    pub dimension: Dimension,
    pub weight: f64,
    pub score: f64,
    pub contribution: f64,
}

pub fn contributions(breakdown: &HealthBreakdown) -> Vec<WeightedContribution> {
    DIMENSION_WEIGHTS
        .iter()
        .map(|&(dimension, weight)| {
            let score = breakdown.get(dimension);
            WeightedContribution {
                dimension,
                weight,
                score,
                contribution: weight * score,
            }
        })
        .collect()
}

/// `round(Σ weight × score)`, kept within [0,100].
pub fn aggregate(breakdown: &HealthBreakdown) -> f64 {
    let weighted: f64 = contributions(breakdown)
        .iter()
        .map(|entry| entry.contribution)
        .sum();

    weighted.round().clamp(0.0, 100.0)
}
