//! # playoff-core
//!
//! The deterministic bracket engine of the playoff predictor.
//!
//! This crate holds everything about a prediction set that does not touch
//! the network or the terminal:
//! - `types`: teams, matchups, rounds, the prediction set and errors
//! - `derivation`: next-round participants from previous-round winners
//! - `store`: validated single-field updates with automatic re-derivation
//! - `formats`: the JSON documents exchanged with the scoring service
//! - `wizard`: the five-step controller and its submission guard
//!
//! ## Architectural Constraints
//!
//! - No async, no network dependencies (pure Rust)
//! - Later rounds are derived state, recomputed in full after every winner change
//! - Errors are values; nothing in this crate panics

// =============================================================================
// MODULES
// =============================================================================

pub mod derivation;
pub mod formats;
pub mod primitives;
pub mod store;
pub mod types;
pub mod wizard;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    Bracket, Conference, Matchup, MatchupId, MatchupState, Player, PlayoffError, PredictionSet,
    Round, RoundKind, ScoreEntry, SeriesResult, Slot, Team, Update,
};

// =============================================================================
// RE-EXPORTS: Engine, Store, Wizard
// =============================================================================

pub use derivation::DerivationEngine;
pub use formats::{WirePick, WirePredictions, scores_from_json};
pub use store::PredictionStore;
pub use wizard::{Step, WizardController};
