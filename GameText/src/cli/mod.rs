//! GameText CLI - Command-line interface for inspecting text and subtitle data

pub mod commands;

use clap::{ArgAction, Parser};
use commands::Commands;
use tracing::Level;

#[derive(Parser)]
#[command(name = "gametext")]
#[command(about = "GameText: game text and subtitle database tools", long_about = None)]
struct Cli {
    /// Log more detail (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Log level for the given flags; warnings are shown by default so loader
/// anomalies (unknown speakers, unused lines, duplicate group entries) surface.
fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Run the GameText CLI
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose, cli.quiet))
        .with_writer(std::io::stderr)
        .init();

    cli.command.execute()
}
