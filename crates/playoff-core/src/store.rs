//! # Prediction Store
//!
//! In-memory owner of the prediction set.
//!
//! - Applies single-field updates addressed by round, matchup id and field
//! - Re-derives every later round after each winner change
//! - Keeps the single current error message: a failed update records it,
//!   a successful one clears it

use crate::derivation::DerivationEngine;
use crate::formats::WirePredictions;
use crate::{
    Bracket, MatchupId, Player, PlayoffError, PredictionSet, RoundKind, SeriesResult, Team, Update,
};

/// Mutable prediction state for one wizard session.
#[derive(Debug, Clone)]
pub struct PredictionStore {
    bracket: Bracket,
    predictions: PredictionSet,
    last_error: Option<String>,
}

impl Default for PredictionStore {
    fn default() -> Self {
        Self::new(Bracket::default())
    }
}

impl PredictionStore {
    /// Create a store with an empty prediction set for `bracket`.
    #[must_use]
    pub fn new(bracket: Bracket) -> Self {
        let predictions = PredictionSet::new(&bracket);
        Self {
            bracket,
            predictions,
            last_error: None,
        }
    }

    /// The seed data this store was built from.
    #[must_use]
    pub fn bracket(&self) -> &Bracket {
        &self.bracket
    }

    /// The current predictions.
    #[must_use]
    pub fn predictions(&self) -> &PredictionSet {
        &self.predictions
    }

    /// The most recent error message, if not cleared since.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replace the current error message.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    /// Clear the current error message.
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Discard every pick and start over from the seeds.
    pub fn reset(&mut self) {
        self.predictions = PredictionSet::new(&self.bracket);
        self.last_error = None;
    }

    /// Apply one field update to one matchup.
    pub fn apply(
        &mut self,
        round: RoundKind,
        id: &MatchupId,
        update: Update,
    ) -> Result<(), PlayoffError> {
        let result = self.try_apply(round, id, update);
        self.record(result)
    }

    /// Record the winner of a matchup.
    pub fn set_winner(&mut self, round: RoundKind, id: &str, team: &str) -> Result<(), PlayoffError> {
        self.apply(round, &MatchupId::new(id), Update::Winner(Team::new(team)))
    }

    /// Record the series length of a matchup.
    pub fn set_games(
        &mut self,
        round: RoundKind,
        id: &str,
        games: SeriesResult,
    ) -> Result<(), PlayoffError> {
        self.apply(round, &MatchupId::new(id), Update::Games(games))
    }

    /// Record the finals MVP.
    pub fn set_mvp(&mut self, player: &str) -> Result<(), PlayoffError> {
        self.apply(
            RoundKind::Finals,
            &MatchupId::finals(),
            Update::Mvp(Player::new(player)),
        )
    }

    /// Replace the predictions with the picks of a submission document.
    ///
    /// Picks are replayed round by round through the same checks as manual
    /// edits. On failure the current predictions are left untouched.
    pub fn load_wire(&mut self, wire: &WirePredictions) -> Result<(), PlayoffError> {
        let mut staged = Self::new(self.bracket.clone());
        let result = staged.replay(wire);
        if result.is_ok() {
            self.predictions = staged.predictions;
        }
        self.record(result)
    }

    fn record(&mut self, result: Result<(), PlayoffError>) -> Result<(), PlayoffError> {
        match &result {
            Ok(()) => self.last_error = None,
            Err(e) => self.last_error = Some(e.to_string()),
        }
        result
    }

    fn try_apply(
        &mut self,
        round: RoundKind,
        id: &MatchupId,
        update: Update,
    ) -> Result<(), PlayoffError> {
        if self.predictions.matchup(round, id).is_none() {
            return Err(PlayoffError::UnknownMatchup {
                round,
                id: id.to_string(),
            });
        }

        if let Update::Mvp(player) = &update {
            if round != RoundKind::Finals {
                return Err(PlayoffError::InvalidTransition(format!(
                    "an MVP can only be picked for the finals, not {round}"
                )));
            }
            if !self.bracket.is_mvp_candidate(player) {
                return Err(PlayoffError::InvalidValue {
                    field: "mvp",
                    value: player.to_string(),
                });
            }
        }

        let matchup = self
            .predictions
            .round_mut(round)
            .get_mut(id)
            .ok_or_else(|| PlayoffError::UnknownMatchup {
                round,
                id: id.to_string(),
            })?;

        match update {
            Update::Winner(team) => {
                matchup.set_winner(team)?;
                DerivationEngine::rederive_after(&mut self.predictions, round);
            }
            Update::Games(games) => matchup.set_games(games)?,
            Update::Mvp(player) => matchup.set_mvp(player),
        }
        Ok(())
    }

    fn replay(&mut self, wire: &WirePredictions) -> Result<(), PlayoffError> {
        for kind in RoundKind::ALL {
            let picks = wire.round(kind);
            if let Some(unknown) = picks
                .keys()
                .find(|id| self.predictions.matchup(kind, &MatchupId::new(id.as_str())).is_none())
            {
                return Err(PlayoffError::UnknownMatchup {
                    round: kind,
                    id: unknown.clone(),
                });
            }

            for id in kind.matchup_ids() {
                let Some(pick) = wire.pick(kind, &id) else {
                    continue;
                };
                if let Some(winner) = non_blank(&pick.winner) {
                    self.try_apply(kind, &id, Update::Winner(Team::new(winner)))?;
                }
                if let Some(games) = non_blank(&pick.games) {
                    self.try_apply(kind, &id, Update::Games(games.parse()?))?;
                }
                if let Some(mvp) = non_blank(&pick.mvp) {
                    self.try_apply(kind, &id, Update::Mvp(Player::new(mvp)))?;
                }
            }
        }
        Ok(())
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

// =============================================================================
// TESTS
// =============================================================================
