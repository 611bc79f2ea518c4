//! # Playoff CLI Module
//!
//! This module implements the CLI interface for the playoff predictor.
//!
//! ## Available Commands
//!
//! - `wizard` - Fill in the bracket step by step and submit it (default)
//! - `bracket` - Print the derived bracket
//! - `validate` - Check a predictions file offline
//! - `submit` - Submit a predictions file
//! - `scores` - Show the leaderboard

mod commands;

use crate::config::{DEFAULT_CONFIG_PATH, PlayoffConfig};
use clap::{Parser, Subcommand};
use playoff_core::{PlayoffError, RoundKind};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Playoff Predictor
///
/// Predict every series of the playoffs, from the first round to the
/// finals MVP, and submit the bracket to the scoring service.
#[derive(Parser, Debug)]
#[command(name = "playoff")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the configuration file
    #[arg(short = 'c', long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive wizard and submit the predictions
    Wizard,

    /// Print the bracket derived from the configured seeds
    Bracket {
        /// Predictions file to lay over the seeds
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Only this round (firstRound, semifinals, conferenceFinals, finals)
        #[arg(short, long)]
        round: Option<String>,
    },

    /// Replay a predictions file without contacting the service
    Validate {
        /// Path to the predictions file (JSON)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Submit a predictions file, then show the leaderboard
    Submit {
        /// Path to the predictions file (JSON)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show the leaderboard
    Scores,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), PlayoffError> {
    let config = PlayoffConfig::load(&cli.config)?;
    let json_mode = cli.json_mode;
    tracing::debug!(
        config = %cli.config.display(),
        url = %config.service.base_url,
        "Configuration loaded"
    );

    match cli.command {
        Some(Commands::Bracket { file, round }) => {
            let round = round.as_deref().map(str::parse::<RoundKind>).transpose()?;
            cmd_bracket(&config, file.as_deref(), round, json_mode)
        }
        Some(Commands::Validate { file }) => cmd_validate(&config, &file, json_mode),
        Some(Commands::Submit { file }) => cmd_submit(&config, &file, json_mode).await,
        Some(Commands::Scores) => cmd_scores(&config, json_mode).await,
        Some(Commands::Wizard) | None => cmd_wizard(&config).await,
    }
}
