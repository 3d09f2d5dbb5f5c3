//! CLI Adapter.

mod bootstrap;
mod check;
mod clean;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "wordslides")]
#[command(version)]
#[command(
    about = "Bootstrap the Word-to-PowerPoint converter workspace",
    long_about = "Creates the Python virtual environment, installs requirements, lays out the \
                  project directories, generates placeholder slide backgrounds and writes a \
                  .env template. Running without a subcommand performs the bootstrap."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare the workspace (default when no subcommand is given)
    #[clap(visible_alias = "b")]
    Bootstrap,
    /// Report missing credentials, directories and placeholder assets
    #[clap(visible_alias = "c")]
    Check {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete temporary upload files
    #[clap(visible_alias = "cl")]
    Clean,
}

/// Entry point for the CLI.
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command.unwrap_or(Commands::Bootstrap) {
        Commands::Bootstrap => bootstrap::run_bootstrap().map(|_| 0),
        Commands::Check { json } => check::run_check(json),
        Commands::Clean => clean::run_clean().map(|_| 0),
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
