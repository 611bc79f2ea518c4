//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::client::{ScoringClient, submit_wizard};
use crate::config::PlayoffConfig;
use crate::terminal::{
    Exit, Terminal, write_bracket, write_leaderboard, write_round, write_summary,
};
use playoff_core::{PlayoffError, PredictionStore, RoundKind, WirePredictions, WizardController};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE HELPERS
// =============================================================================

/// Maximum size of a predictions file (1 MB).
///
/// A complete bracket is a few kilobytes.
const MAX_PREDICTIONS_FILE_SIZE: u64 = 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), PlayoffError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| PlayoffError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(PlayoffError::SerializationError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Resolve `path` to an existing regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, PlayoffError> {
    let canonical = path.canonicalize().map_err(|e| {
        PlayoffError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(PlayoffError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Read and decode a predictions file.
pub fn read_predictions(path: &Path) -> Result<WirePredictions, PlayoffError> {
    let canonical = validate_file_path(path)?;
    validate_file_size(&canonical, MAX_PREDICTIONS_FILE_SIZE)?;
    let raw = std::fs::read_to_string(&canonical).map_err(|e| {
        PlayoffError::IoError(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    WirePredictions::from_json(&raw)
}

fn io_error(e: io::Error) -> PlayoffError {
    PlayoffError::IoError(e.to_string())
}

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn scoring_client(config: &PlayoffConfig) -> Result<ScoringClient, PlayoffError> {
    ScoringClient::new(&config.service).map_err(|e| PlayoffError::IoError(e.to_string()))
}

// =============================================================================
// WIZARD COMMAND
// =============================================================================

/// Run the interactive wizard on stdin/stdout.
///
/// A failed submission returns to the finals step with the error shown, so
/// the user can retry or quit. After the summary the user may start over.
pub async fn cmd_wizard(config: &PlayoffConfig) -> Result<(), PlayoffError> {
    let mut wizard = WizardController::new(config.bracket.to_bracket()?);
    let client = scoring_client(config)?;
    let mut terminal = Terminal::new(BufReader::new(io::stdin()), io::stdout());

    loop {
        match terminal.edit(&mut wizard).map_err(io_error)? {
            Exit::Quit => {
                tracing::info!(
                    winners = wizard.predictions().winner_count(),
                    "Wizard closed without submitting"
                );
                return Ok(());
            }
            Exit::Submit => {
                if submit_wizard(&mut wizard, &client).await.is_err() {
                    continue;
                }
                terminal.render_summary(&wizard).map_err(io_error)?;
                if !terminal.prompt_restart(&mut wizard).map_err(io_error)? {
                    return Ok(());
                }
                tracing::info!("Wizard restarted");
            }
        }
    }
}

// =============================================================================
// BRACKET COMMAND
// =============================================================================

/// Print the bracket, optionally with a predictions file applied.
pub fn cmd_bracket(
    config: &PlayoffConfig,
    file: Option<&Path>,
    round: Option<RoundKind>,
    json_mode: bool,
) -> Result<(), PlayoffError> {
    let mut store = PredictionStore::new(config.bracket.to_bracket()?);
    if let Some(path) = file {
        store.load_wire(&read_predictions(path)?)?;
    }
    let set = store.predictions();

    if json_mode {
        let output = match round {
            Some(kind) => serde_json::to_value(set.round(kind)),
            None => serde_json::to_value(set),
        }
        .map_err(|e| PlayoffError::SerializationError(e.to_string()))?;
        print_json(&output);
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    match round {
        Some(kind) => write_round(&mut stdout, set, kind),
        None => write_bracket(&mut stdout, &store),
    }
    .map_err(io_error)
}

// =============================================================================
// VALIDATE COMMAND
// =============================================================================

/// Replay a predictions file through the store and report the result.
pub fn cmd_validate(
    config: &PlayoffConfig,
    file: &Path,
    json_mode: bool,
) -> Result<(), PlayoffError> {
    let wire = read_predictions(file)?;
    let mut store = PredictionStore::new(config.bracket.to_bracket()?);
    store.load_wire(&wire)?;

    let set = store.predictions();
    let total: usize = RoundKind::ALL.iter().map(|k| k.matchup_count()).sum();

    if json_mode {
        let output = serde_json::json!({
            "valid": true,
            "picks": wire.pick_count(),
            "winners": set.winner_count(),
            "matchups": total,
            "champion": set.champion(),
        });
        print_json(&output);
        return Ok(());
    }

    println!("Predictions are valid");
    println!("  Picks:   {}", wire.pick_count());
    println!("  Winners: {} of {}", set.winner_count(), total);
    println!();
    write_bracket(&mut io::stdout().lock(), &store).map_err(io_error)
}

// =============================================================================
// SUBMIT COMMAND
// =============================================================================

/// Submit a predictions file and print the summary page.
pub async fn cmd_submit(
    config: &PlayoffConfig,
    file: &Path,
    json_mode: bool,
) -> Result<(), PlayoffError> {
    let wire = read_predictions(file)?;
    let mut wizard = WizardController::new(config.bracket.to_bracket()?);
    wizard.load_predictions(&wire)?;

    let client = scoring_client(config)?;
    submit_wizard(&mut wizard, &client).await?;

    if json_mode {
        let output = serde_json::json!({
            "submitted": true,
            "predictions": wizard.submitted(),
            "scores": wizard.scores(),
            "error": wizard.current_error(),
        });
        print_json(&output);
        return Ok(());
    }

    write_summary(&mut io::stdout().lock(), &wizard).map_err(io_error)
}

// =============================================================================
// SCORES COMMAND
// =============================================================================

/// Fetch and print the leaderboard.
pub async fn cmd_scores(config: &PlayoffConfig, json_mode: bool) -> Result<(), PlayoffError> {
    let client = scoring_client(config)?;
    let scores = client
        .fetch_scores()
        .await
        .map_err(|e| PlayoffError::ScoreFetch(e.to_string()))?;
    tracing::debug!(entries = scores.len(), "Leaderboard fetched");

    if json_mode {
        print_json(&serde_json::json!(scores));
        return Ok(());
    }

    write_leaderboard(&mut io::stdout().lock(), &scores).map_err(io_error)
}

// =============================================================================
// TESTS
// =============================================================================
