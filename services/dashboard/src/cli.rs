use crate::commands::{
    run_catalog, run_demo, run_evaluate, run_report, CatalogArgs, DemoArgs, EvaluateArgs,
    ReportArgs,
};
use clap::{Parser, Subcommand};
use staff_performance::config::AppConfig;
use staff_performance::error::AppError;
use staff_performance::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "Staff Performance Dashboard",
    about = "Score healthcare staff, resolve compensation tiers, and render team reports",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the weighted metrics tracked for each role
    Catalog(CatalogArgs),
    /// Score a set of metrics for a role and show tier, bonus, and recommendations
    Evaluate(EvaluateArgs),
    /// Render a team performance report from a generated or imported roster
    Report(ReportArgs),
    /// Walk through the roster lifecycle on a generated team (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Catalog(args) => run_catalog(args),
        Command::Evaluate(args) => run_evaluate(args),
        Command::Report(args) => run_report(args, &config),
        Command::Demo(args) => run_demo(args, &config),
    }
}
