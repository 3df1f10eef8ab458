mod cli;
mod demo;
mod infra;
mod render;

use society_health::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
