//! # Wizard Controller
//!
//! Sequences the prediction store across the five wizard steps:
//!
//! | Step | Content |
//! |------|---------|
//! | 1 | First round |
//! | 2 | Conference semifinals |
//! | 3 | Conference finals |
//! | 4 | Finals (and MVP), submission |
//! | 5 | Submitted summary and leaderboard |
//!
//! The controller owns the current step and the busy flag guarding the
//! submission. The network call itself happens outside this crate; the
//! caller brackets it with [`WizardController::begin_submission`] and
//! [`WizardController::complete_submission`]. While a submission is pending
//! the picks are locked, so the document frozen on success is the one that
//! was sent.

use crate::formats::WirePredictions;
use crate::primitives::TOTAL_STEPS;
use crate::store::PredictionStore;
use crate::{
    Bracket, MatchupId, Player, PlayoffError, PredictionSet, RoundKind, ScoreEntry, SeriesResult,
    Team, Update,
};
use serde::{Deserialize, Serialize};

/// A wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Step {
    FirstRound = 1,
    Semifinals = 2,
    ConferenceFinals = 3,
    Finals = 4,
    Submitted = 5,
}

impl Step {
    /// 1-based step number.
    #[must_use]
    pub fn number(self) -> u8 {
        self as u8
    }

    /// The round edited on this step.
    #[must_use]
    pub fn round(self) -> Option<RoundKind> {
        match self {
            Step::FirstRound => Some(RoundKind::FirstRound),
            Step::Semifinals => Some(RoundKind::Semifinals),
            Step::ConferenceFinals => Some(RoundKind::ConferenceFinals),
            Step::Finals => Some(RoundKind::Finals),
            Step::Submitted => None,
        }
    }

    /// Page heading.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Step::FirstRound => "First Round Results",
            Step::Semifinals => "Conference Semifinals Results",
            Step::ConferenceFinals => "Conference Finals Results",
            Step::Finals => "Finals Results",
            Step::Submitted => "Results Submitted",
        }
    }

    fn forward(self) -> Option<Step> {
        match self {
            Step::FirstRound => Some(Step::Semifinals),
            Step::Semifinals => Some(Step::ConferenceFinals),
            Step::ConferenceFinals => Some(Step::Finals),
            Step::Finals | Step::Submitted => None,
        }
    }

    fn backward(self) -> Option<Step> {
        match self {
            Step::Semifinals => Some(Step::FirstRound),
            Step::ConferenceFinals => Some(Step::Semifinals),
            Step::Finals => Some(Step::ConferenceFinals),
            Step::FirstRound | Step::Submitted => None,
        }
    }
}

/// Explicit wizard state: step, store, pending submission and results.
#[derive(Debug, Clone)]
pub struct WizardController {
    step: Step,
    store: PredictionStore,
    /// Document handed out by `begin_submission`, awaiting its outcome.
    pending: Option<WirePredictions>,
    submitted: Option<WirePredictions>,
    scores: Option<Vec<ScoreEntry>>,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new(Bracket::default())
    }
}

impl WizardController {
    /// Start a wizard on step 1 with no picks.
    #[must_use]
    pub fn new(bracket: Bracket) -> Self {
        Self {
            step: Step::FirstRound,
            store: PredictionStore::new(bracket),
            pending: None,
            submitted: None,
            scores: None,
        }
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn store(&self) -> &PredictionStore {
        &self.store
    }

    #[must_use]
    pub fn predictions(&self) -> &PredictionSet {
        self.store.predictions()
    }

    /// Check if a submission is pending.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Check if the predictions were accepted and frozen.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted.is_some()
    }

    /// The document that was accepted by the scoring service.
    #[must_use]
    pub fn submitted(&self) -> Option<&WirePredictions> {
        self.submitted.as_ref()
    }

    /// The leaderboard, once fetched.
    #[must_use]
    pub fn scores(&self) -> Option<&[ScoreEntry]> {
        self.scores.as_deref()
    }

    /// The single visible error message.
    #[must_use]
    pub fn current_error(&self) -> Option<&str> {
        self.store.last_error()
    }

    /// Progress through the wizard, 20..=100.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        (u16::from(self.step.number()) * 100 / u16::from(TOTAL_STEPS)) as u8
    }

    /// Move to the next round. Stays on the finals step; submission is the
    /// only way past it.
    pub fn next(&mut self) -> Step {
        if let Some(step) = self.step.forward() {
            self.step = step;
            self.store.clear_error();
        }
        self.step
    }

    /// Move to the previous round.
    pub fn previous(&mut self) -> Step {
        if let Some(step) = self.step.backward() {
            self.step = step;
            self.store.clear_error();
        }
        self.step
    }

    /// Discard everything and return to step 1.
    ///
    /// Refused while a submission is pending.
    pub fn restart(&mut self) -> Result<(), PlayoffError> {
        if self.pending.is_some() {
            return self.fail(PlayoffError::SubmissionInFlight);
        }
        self.store.reset();
        self.step = Step::FirstRound;
        self.submitted = None;
        self.scores = None;
        Ok(())
    }

    /// Apply one field update. Refused while a submission is pending and
    /// once the predictions are submitted.
    pub fn apply(
        &mut self,
        round: RoundKind,
        id: &MatchupId,
        update: Update,
    ) -> Result<(), PlayoffError> {
        self.ensure_editable()?;
        self.store.apply(round, id, update)
    }

    /// Record the winner of a matchup.
    pub fn set_winner(&mut self, round: RoundKind, id: &str, team: &str) -> Result<(), PlayoffError> {
        self.apply(
            round,
            &MatchupId::new(id),
            Update::Winner(Team::new(team)),
        )
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

    /// Replace the picks with a prepared document and jump to the finals step.
    pub fn load_predictions(&mut self, wire: &WirePredictions) -> Result<(), PlayoffError> {
        self.ensure_editable()?;
        self.store.load_wire(wire)?;
        self.step = Step::Finals;
        Ok(())
    }

    /// Mark a submission as in flight and return the document to send.
    pub fn begin_submission(&mut self) -> Result<WirePredictions, PlayoffError> {
        if self.submitted.is_some() {
            return self.fail(PlayoffError::AlreadySubmitted);
        }
        if self.pending.is_some() {
            return self.fail(PlayoffError::SubmissionInFlight);
        }
        if self.step != Step::Finals {
            return self.fail(PlayoffError::InvalidTransition(format!(
                "predictions are submitted from step {}, not step {}",
                Step::Finals.number(),
                self.step.number()
            )));
        }
        let document = self.store.predictions().to_wire();
        self.pending = Some(document.clone());
        Ok(document)
    }

    /// Finish the pending submission.
    ///
    /// On success the sent document freezes and the wizard moves to the
    /// summary step. On failure the predictions and step stay as they were.
    pub fn complete_submission(&mut self, outcome: Result<(), String>) -> Result<(), PlayoffError> {
        let Some(sent) = self.pending.take() else {
            return self.fail(PlayoffError::InvalidTransition(
                "no submission is in progress".to_string(),
            ));
        };
        match outcome {
            Ok(()) => {
                self.submitted = Some(sent);
                self.step = Step::Submitted;
                self.store.clear_error();
                Ok(())
            }
            Err(reason) => self.fail(PlayoffError::Submission(reason)),
        }
    }

    /// Store the fetched leaderboard, or report why it could not be loaded.
    ///
    /// A failure here never undoes an accepted submission.
    pub fn record_scores(
        &mut self,
        outcome: Result<Vec<ScoreEntry>, String>,
    ) -> Result<(), PlayoffError> {
        match outcome {
            Ok(scores) => {
                self.scores = Some(scores);
                self.store.clear_error();
                Ok(())
            }
            Err(reason) => self.fail(PlayoffError::ScoreFetch(reason)),
        }
    }

    fn ensure_editable(&mut self) -> Result<(), PlayoffError> {
        if self.submitted.is_some() {
            return self.fail(PlayoffError::AlreadySubmitted);
        }
        if self.pending.is_some() {
            return self.fail(PlayoffError::SubmissionInFlight);
        }
        Ok(())
    }

    fn fail<T>(&mut self, error: PlayoffError) -> Result<T, PlayoffError> {
        self.store.report_error(error.to_string());
        Err(error)
    }
}

// =============================================================================
// TESTS
// =============================================================================
