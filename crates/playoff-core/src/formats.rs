//! # Wire Formats
//!
//! JSON documents exchanged with the scoring service.
//!
//! ## Submission
//!
//! ```json
//! {
//!   "firstRound":       { "east-0": { "winner": "Celtics", "games": "4-1" } },
//!   "semifinals":       {},
//!   "conferenceFinals": {},
//!   "finals":           { "finals": { "winner": "Celtics", "mvp": "Jayson Tatum" } }
//! }
//! ```
//!
//! Only matchups with at least one pick are listed; absent fields are omitted.
//!
//! ## Leaderboard
//!
//! An ordered array of `{ "user": "...", "score": 42 }` entries.

use crate::{MatchupId, PlayoffError, PredictionSet, RoundKind, ScoreEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Picks for one matchup as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WirePick {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub games: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mvp: Option<String>,
}

impl WirePick {
    /// Check if no field carries a value. Empty strings count as unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.winner, &self.games, &self.mvp]
            .into_iter()
            .all(|field| field.as_deref().is_none_or(str::is_empty))
    }
}

/// The submitted prediction document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePredictions {
    #[serde(default)]
    pub first_round: BTreeMap<String, WirePick>,
    #[serde(default)]
    pub semifinals: BTreeMap<String, WirePick>,
    #[serde(default)]
    pub conference_finals: BTreeMap<String, WirePick>,
    #[serde(default)]
    pub finals: BTreeMap<String, WirePick>,
}

impl WirePredictions {
    /// Picks of one round, keyed by matchup id.
    #[must_use]
    pub fn round(&self, kind: RoundKind) -> &BTreeMap<String, WirePick> {
        match kind {
            RoundKind::FirstRound => &self.first_round,
            RoundKind::Semifinals => &self.semifinals,
            RoundKind::ConferenceFinals => &self.conference_finals,
            RoundKind::Finals => &self.finals,
        }
    }

    fn round_mut(&mut self, kind: RoundKind) -> &mut BTreeMap<String, WirePick> {
        match kind {
            RoundKind::FirstRound => &mut self.first_round,
            RoundKind::Semifinals => &mut self.semifinals,
            RoundKind::ConferenceFinals => &mut self.conference_finals,
            RoundKind::Finals => &mut self.finals,
        }
    }

    /// Build the document from a prediction set.
    #[must_use]
    pub fn from_predictions(set: &PredictionSet) -> Self {
        let mut wire = Self::default();
        for kind in RoundKind::ALL {
            let picks = wire.round_mut(kind);
            for (id, matchup) in set.round(kind).ordered() {
                let pick = WirePick {
                    winner: matchup.winner().map(|team| team.to_string()),
                    games: matchup.games().map(|games| games.as_str().to_string()),
                    mvp: matchup.mvp().map(|player| player.to_string()),
                };
                if !pick.is_empty() {
                    picks.insert(id.0, pick);
                }
            }
        }
        wire
    }

    /// Look up the picks for one matchup.
    #[must_use]
    pub fn pick(&self, kind: RoundKind, id: &MatchupId) -> Option<&WirePick> {
        self.round(kind).get(id.as_str())
    }

    /// Number of matchups that carry at least one pick.
    #[must_use]
    pub fn pick_count(&self) -> usize {
        RoundKind::ALL
            .into_iter()
            .map(|kind| self.round(kind).values().filter(|p| !p.is_empty()).count())
            .sum()
    }

    /// Parse a submission document.
    pub fn from_json(json: &str) -> Result<Self, PlayoffError> {
        serde_json::from_str(json).map_err(|e| PlayoffError::SerializationError(e.to_string()))
    }

    /// Serialize as compact JSON (request body).
    pub fn to_json(&self) -> Result<String, PlayoffError> {
        serde_json::to_string(self).map_err(|e| PlayoffError::SerializationError(e.to_string()))
    }

    /// Serialize as indented JSON (for display).
    pub fn to_json_pretty(&self) -> Result<String, PlayoffError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlayoffError::SerializationError(e.to_string()))
    }
}

impl PredictionSet {
    /// The submission document for this prediction set.
    #[must_use]
    pub fn to_wire(&self) -> WirePredictions {
        WirePredictions::from_predictions(self)
    }
}

/// Parse the leaderboard returned by the scoring service.
pub fn scores_from_json(json: &str) -> Result<Vec<ScoreEntry>, PlayoffError> {
    serde_json::from_str(json).map_err(|e| PlayoffError::SerializationError(e.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================
