mod cli;
mod commands;
mod infra;
mod render;

use staff_performance::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
