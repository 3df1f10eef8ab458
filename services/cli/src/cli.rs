use crate::demo::{run_batch, run_demo, run_score, BatchArgs, DemoArgs, ScoreArgs};
use clap::{Parser, Subcommand};
use society_health::config::AppConfig;
use society_health::error::AppError;
use society_health::telemetry;
use society_health::workflows::health::HealthEngine;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "Society Health",
    about = "Score housing society operational health from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a single society snapshot read from a JSON file
    Score(ScoreArgs),
    /// Score and rank every society in a CSV export
    Batch(BatchArgs),
    /// Score two sample societies for stakeholder demos
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    debug!(?config.environment, ?config.scoring, "scoring configuration loaded");
    let engine = HealthEngine::new(config.scoring);

    match cli.command {
        Command::Score(args) => run_score(&engine, args),
        Command::Batch(args) => run_batch(&engine, args),
        Command::Demo(args) => run_demo(&engine, args),
    }
}
