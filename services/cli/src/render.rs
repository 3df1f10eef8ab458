use chrono::{DateTime, Utc};
use serde::Serialize;
use society_health::workflows::health::{HealthResult, PortfolioReport};
use std::io::{self, Write};

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse<'a> {
    pub(crate) evaluated_at: DateTime<Utc>,
    pub(crate) result: &'a HealthResult,
}

#[derive(Debug, Serialize)]
pub(crate) struct PortfolioResponse<'a> {
    pub(crate) evaluated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub(crate) report: &'a PortfolioReport,
}

pub(crate) fn render_result<W: Write>(
    out: &mut W,
    result: &HealthResult,
    attention_threshold: f64,
    evaluated_at: DateTime<Utc>,
) -> io::Result<()> {
    writeln!(out, "Society health report")?;
    writeln!(out, "Evaluated {}", evaluated_at.format("%Y-%m-%d %H:%M UTC"))?;
    writeln!(
        out,
        "Overall: {:.0}/100 ({})",
        result.overall,
        result.status.label()
    )?;
    writeln!(
        out,
        "Trend ({}): {} {:+.1}%",
        result.trend.period,
        result.trend.direction.label(),
        result.trend.change_percentage
    )?;

    writeln!(out, "\nBreakdown")?;
    for (dimension, score) in result.breakdown.entries() {
        let marker = if score < attention_threshold { " !" } else { "" };
        writeln!(out, "- {}: {:.1}{}", dimension.label(), score, marker)?;
    }

    if result.recommendations.is_empty() {
        writeln!(out, "\nRecommendations: none")?;
    } else {
        writeln!(out, "\nRecommendations")?;
        for (index, recommendation) in result.recommendations.iter().enumerate() {
            writeln!(out, "{}. {}", index + 1, recommendation)?;
        }
    }

    Ok(())
}

pub(crate) fn render_portfolio<W: Write>(
    out: &mut W,
    report: &PortfolioReport,
    evaluated_at: DateTime<Utc>,
) -> io::Result<()> {
    writeln!(out, "Portfolio health report")?;
    writeln!(out, "Evaluated {}", evaluated_at.format("%Y-%m-%d %H:%M UTC"))?;

    match report.average_overall {
        Some(average) => writeln!(
            out,
            "Societies scored: {} (average {:.1})",
            report.scorecards.len(),
            average
        )?,
        None => writeln!(out, "Societies scored: 0")?,
    }
    for entry in &report.status_counts {
        writeln!(out, "- {}: {}", entry.status_label, entry.count)?;
    }

    if !report.scorecards.is_empty() {
        writeln!(out, "\nRanking (most at risk first)")?;
    }
    for card in &report.scorecards {
        let focus = card
            .focus_dimension
            .map(|dimension| format!(", focus {}", dimension.label()))
            .unwrap_or_default();
        writeln!(
            out,
            "- {}: {:.0} {} ({} {:+.1}%){}",
            card.society_id,
            card.result.overall,
            card.result.status.label(),
            card.result.trend.direction.label(),
            card.result.trend.change_percentage,
            focus
        )?;
        if let Some(first) = card.result.recommendations.first() {
            writeln!(out, "    next step: {first}")?;
        }
    }

    if !report.rejected.is_empty() {
        writeln!(out, "\nRejected snapshots")?;
        for rejected in &report.rejected {
            writeln!(out, "- {}: {}", rejected.society_id, rejected.reason)?;
        }
    }

    Ok(())
}
