//! # Playoff Predictor
//!
//! The main binary for the playoff bracket predictor.
//!
//! This application provides:
//! - Interactive terminal wizard (four rounds, then submission)
//! - CLI commands for offline validation and file submission
//! - Leaderboard lookup against the scoring service
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    apps/playoff (THE BINARY)                 │
//! │                                                              │
//! │  ┌─────────────┐    ┌──────────────┐    ┌────────────────┐   │
//! │  │    CLI      │    │   Terminal   │    │ Scoring Client │   │
//! │  │   (clap)    │    │    Wizard    │    │   (reqwest)    │   │
//! │  └──────┬──────┘    └──────┬───────┘    └───────┬────────┘   │
//! │         │                  │                    │            │
//! │         └──────────────────┼────────────────────┘            │
//! │                            ▼                                 │
//! │                    ┌───────────────┐                         │
//! │                    │ playoff-core  │                         │
//! │                    │ (THE BRACKET) │                         │
//! │                    └───────────────┘                         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Fill in the bracket interactively
//! playoff wizard
//!
//! # Offline checks and file submission
//! playoff validate -f picks.json
//! playoff submit -f picks.json
//! playoff scores --json-mode
//! ```

use clap::Parser;
use playoff::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Initialize tracing. PLAYOFF_LOG_FORMAT=json enables machine-parseable output.
    // Logs go to stderr; stdout carries the wizard and command output.
    let log_format = std::env::var("PLAYOFF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let default_filter = if cli.verbose {
        "playoff=debug"
    } else {
        "playoff=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  ╔═╗╦  ╔═╗╦ ╦╔═╗╔═╗╔═╗
  ╠═╝║  ╠═╣╚╦╝║ ║╠╣ ╠╣
  ╩  ╩═╝╩ ╩ ╩ ╚═╝╚  ╚

  Playoff Predictor v{}

  Seed • Predict • Submit
"#,
        env!("CARGO_PKG_VERSION")
    );
}
