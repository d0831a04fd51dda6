use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use kennelplan::cli::report::ReportStyle;
use kennelplan::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Default)]
struct ReportArgs {
    /// Last day to project, overriding the configured horizon
    #[arg(long)]
    days: Option<u32>,

    /// Number of outcomes to list per day
    #[arg(long)]
    top: Option<usize>,

    /// Render each day as a table
    #[arg(long)]
    table: bool,
}

impl From<ReportArgs> for kennelplan::ReportOptions {
    fn from(args: ReportArgs) -> kennelplan::ReportOptions {
        kennelplan::ReportOptions {
            days: args.days,
            top: args.top,
            style: if args.table {
                ReportStyle::Table
            } else {
                ReportStyle::Plain
            },
        }
    }
}

impl From<Commands> for kennelplan::AppCommand {
    fn from(cmd: Commands) -> kennelplan::AppCommand {
        match cmd {
            Commands::Setup => kennelplan::AppCommand::Setup,
            Commands::Report(args) => kennelplan::AppCommand::Report(args.into()),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Rank the best allocations for each day (default)
    Report(ReportArgs),
}

/// A bare invocation runs the report with configured settings.
fn resolve_command(command: Option<Commands>) -> kennelplan::AppCommand {
    command
        .unwrap_or_else(|| Commands::Report(ReportArgs::default()))
        .into()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let command = resolve_command(cli.command);
    let result = kennelplan::run_command(command, cli.config_path.as_deref());

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
