use crate::infra::{read_metrics_file, sample_snapshots};
use crate::render::{render_portfolio, render_result, PortfolioResponse, ScoreResponse};
use chrono::Utc;
use clap::Args;
use society_health::error::AppError;
use society_health::workflows::health::{
    score_portfolio, HealthEngine, PortfolioReport, ScoreContext,
};
use society_health::workflows::snapshots::SnapshotImporter;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding one society's metrics
    #[arg(long)]
    metrics: PathBuf,
    /// Overall score from the previous period, used for the trend
    #[arg(long)]
    previous: Option<f64>,
    /// Lower critical boundary for this evaluation only
    #[arg(long)]
    critical_override: Option<f64>,
    /// Label for the trend comparison window
    #[arg(long)]
    period: Option<String>,
    /// Emit JSON instead of the text report
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with one society per row
    #[arg(long)]
    csv: PathBuf,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    #[arg(long)]
    json: bool,
}

pub(crate) fn run_score(engine: &HealthEngine, args: ScoreArgs) -> Result<(), AppError> {
    let metrics = read_metrics_file(&args.metrics)?;
    let context = ScoreContext {
        previous_overall: args.previous,
        critical_override: args.critical_override,
        period: args.period,
    };

    let result = engine.evaluate(&metrics, &context)?;
    info!(
        overall = result.overall,
        status = result.status.label(),
        "society scored"
    );

    let evaluated_at = Utc::now();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let response = ScoreResponse {
            evaluated_at,
            result: &result,
        };
        serde_json::to_writer_pretty(&mut out, &response)?;
        writeln!(out)?;
    } else {
        render_result(
            &mut out,
            &result,
            engine.config().attention_threshold,
            evaluated_at,
        )?;
    }
    Ok(())
}

pub(crate) fn run_batch(engine: &HealthEngine, args: BatchArgs) -> Result<(), AppError> {
    let snapshots = SnapshotImporter::from_path(&args.csv)?;
    info!(societies = snapshots.len(), path = %args.csv.display(), "snapshots imported");

    let report = score_portfolio(engine, &snapshots);
    emit_portfolio(&report, args.json)
}

pub(crate) fn run_demo(engine: &HealthEngine, args: DemoArgs) -> Result<(), AppError> {
    let report = score_portfolio(engine, &sample_snapshots());
    emit_portfolio(&report, args.json)
}

fn emit_portfolio(report: &PortfolioReport, json: bool) -> Result<(), AppError> {
    info!(
        scored = report.scorecards.len(),
        rejected = report.rejected.len(),
        "portfolio scored"
    );

    let evaluated_at = Utc::now();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        let response = PortfolioResponse {
            evaluated_at,
            report,
        };
        serde_json::to_writer_pretty(&mut out, &response)?;
        writeln!(out)?;
    } else {
        render_portfolio(&mut out, report, evaluated_at)?;
    }
    Ok(())
}
