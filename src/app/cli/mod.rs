//! CLI Adapter.

mod launch;
mod status;

use crate::domain::AppError;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "naapi-launch")]
#[command(version)]
#[command(
    about = "Clear quarantine on NaAPICodex.app, skip Claude Code onboarding, and open the app",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare and open NaAPICodex.app (default)
    #[clap(visible_alias = "l")]
    Launch,
    /// Show bundle location and companion tool settings without changing anything
    #[clap(visible_alias = "st")]
    Status,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<i32, AppError> = match cli.command.unwrap_or(Commands::Launch) {
        Commands::Launch => launch::run_launch(),
        Commands::Status => status::run_status().map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()));
    if level <= LevelFilter::Info {
        builder.format_timestamp(None).format_level(false).format_target(false);
    }
    builder.init();
}
