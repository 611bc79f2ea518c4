//! # Bracket Scenario Tests (B0-B3)
//!
//! If ANY tier fails, the bracket engine is INVALID.
//!
//! ## Tiers
//! - B0: Model transitions
//! - B1: Derivation and propagation
//! - B2: Store lookups and error reporting
//! - B3: Wizard submission flow

use playoff_core::{
    Bracket, Conference, MatchupId, Player, PlayoffError, PredictionStore, RoundKind, SeriesResult,
    Slot, Step, Team, WizardController,
};

/// The East seeding used throughout these scenarios.
const EAST: [&str; 8] = [
    "Celtics",
    "Bucks",
    "Pacers",
    "Heat",
    "Knicks",
    "Cavaliers",
    "Pistons",
    "Magic",
];

const WEST: [&str; 8] = [
    "Thunder",
    "Rockets",
    "Lakers",
    "Nuggets",
    "Clippers",
    "Timberwolves",
    "Warriors",
    "Grizzlies",
];

fn bracket() -> Bracket {
    Bracket::new(
        EAST.iter().map(|t| Team::new(*t)).collect(),
        WEST.iter().map(|t| Team::new(*t)).collect(),
        vec![Player::new("Shai Gilgeous-Alexander"), Player::new("Jayson Tatum")],
    )
    .expect("valid bracket")
}

fn team(name: &str) -> Slot {
    Slot::Team(Team::new(name))
}

fn participants(store: &PredictionStore, kind: RoundKind, id: &str) -> [Slot; 2] {
    store
        .predictions()
        .matchup(kind, &MatchupId::new(id))
        .expect("matchup exists")
        .participants()
        .clone()
}

/// Record the four East first-round favourites.
fn east_chalk(store: &mut PredictionStore) {
    for (id, winner) in [
        ("east-0", "Celtics"),
        ("east-1", "Bucks"),
        ("east-2", "Pacers"),
        ("east-3", "Heat"),
    ] {
        store
            .set_winner(RoundKind::FirstRound, id, winner)
            .expect("first-round winner");
    }
}

// =============================================================================
// TIER B0: MODEL TRANSITIONS
// =============================================================================

mod b0_model_transitions {
    use super::*;

    /// B0.1: Seeds pair 1v8, 2v7, 3v6, 4v5.
    #[test]
    fn first_round_is_seeded() {
        let store = PredictionStore::new(bracket());
        assert_eq!(
            participants(&store, RoundKind::FirstRound, "east-0"),
            [team("Celtics"), team("Magic")]
        );
        assert_eq!(
            participants(&store, RoundKind::FirstRound, "east-1"),
            [team("Bucks"), team("Pistons")]
        );
        assert_eq!(
            participants(&store, RoundKind::FirstRound, "east-2"),
            [team("Pacers"), team("Cavaliers")]
        );
        assert_eq!(
            participants(&store, RoundKind::FirstRound, "east-3"),
            [team("Heat"), team("Knicks")]
        );
    }

    /// B0.2: Games before winner is rejected.
    #[test]
    fn games_before_winner_rejected() {
        let mut store = PredictionStore::new(bracket());
        let result = store.set_games(RoundKind::FirstRound, "east-0", SeriesResult::Sweep);
        assert!(matches!(result, Err(PlayoffError::InvalidTransition(_))));
    }

    /// B0.3: Winner then games persists both.
    #[test]
    fn winner_then_games_persist() {
        let mut store = PredictionStore::new(bracket());
        store
            .set_winner(RoundKind::FirstRound, "east-0", "Celtics")
            .expect("winner");
        store
            .set_games(RoundKind::FirstRound, "east-0", SeriesResult::FiveGames)
            .expect("games");

        let matchup = store
            .predictions()
            .matchup(RoundKind::FirstRound, &MatchupId::new("east-0"))
            .expect("east-0");
        assert_eq!(matchup.winner(), Some(&Team::new("Celtics")));
        assert_eq!(matchup.games(), Some(SeriesResult::FiveGames));
    }

    /// B0.4: A team from another matchup cannot win this one.
    #[test]
    fn outsider_cannot_win() {
        let mut store = PredictionStore::new(bracket());
        let result = store.set_winner(RoundKind::FirstRound, "east-0", "Bucks");
        assert!(matches!(result, Err(PlayoffError::InvalidTransition(_))));
    }
}

// =============================================================================
// TIER B1: DERIVATION AND PROPAGATION
// =============================================================================

mod b1_derivation {
    use super::*;

    /// B1.1: Chalk first round gives (Celtics, Bucks) and (Pacers, Heat).
    #[test]
    fn east_semifinals_from_first_round() {
        let mut store = PredictionStore::new(bracket());
        east_chalk(&mut store);

        assert_eq!(
            participants(&store, RoundKind::Semifinals, "east-semi-0"),
            [team("Celtics"), team("Bucks")]
        );
        assert_eq!(
            participants(&store, RoundKind::Semifinals, "east-semi-1"),
            [team("Pacers"), team("Heat")]
        );
        assert_eq!(
            participants(&store, RoundKind::Semifinals, "west-semi-0"),
            [Slot::Undetermined, Slot::Undetermined]
        );
    }

    /// B1.2: Changing a first-round winner reverts what depended on it.
    #[test]
    fn changed_winner_propagates() {
        let mut store = PredictionStore::new(bracket());
        east_chalk(&mut store);
        store
            .set_winner(RoundKind::Semifinals, "east-semi-0", "Celtics")
            .expect("semi");
        store
            .set_winner(RoundKind::Semifinals, "east-semi-1", "Heat")
            .expect("semi");
        store
            .set_winner(RoundKind::ConferenceFinals, "east-final", "Celtics")
            .expect("conference final");
        assert_eq!(
            participants(&store, RoundKind::Finals, "finals"),
            [team("Celtics"), Slot::Undetermined]
        );

        store
            .set_winner(RoundKind::FirstRound, "east-0", "Magic")
            .expect("upset");

        assert_eq!(
            participants(&store, RoundKind::Semifinals, "east-semi-0"),
            [team("Magic"), team("Bucks")]
        );
        assert_eq!(
            participants(&store, RoundKind::ConferenceFinals, "east-final"),
            [Slot::Undetermined, team("Heat")]
        );
        assert_eq!(
            participants(&store, RoundKind::Finals, "finals"),
            [Slot::Undetermined, Slot::Undetermined]
        );
        let semi = store
            .predictions()
            .matchup(RoundKind::Semifinals, &MatchupId::new("east-semi-1"))
            .expect("east-semi-1");
        assert_eq!(semi.winner(), Some(&Team::new("Heat")));
    }

    /// B1.3: Full bracket produces a champion.
    #[test]
    fn full_bracket_has_champion() {
        let mut store = PredictionStore::new(bracket());
        east_chalk(&mut store);
        for (id, winner) in [
            ("west-0", "Thunder"),
            ("west-1", "Rockets"),
            ("west-2", "Lakers"),
            ("west-3", "Nuggets"),
        ] {
            store
                .set_winner(RoundKind::FirstRound, id, winner)
                .expect("west winner");
        }
        for (id, winner) in [
            ("east-semi-0", "Celtics"),
            ("east-semi-1", "Pacers"),
            ("west-semi-0", "Thunder"),
            ("west-semi-1", "Nuggets"),
        ] {
            store
                .set_winner(RoundKind::Semifinals, id, winner)
                .expect("semi winner");
        }
        store
            .set_winner(RoundKind::ConferenceFinals, "east-final", "Pacers")
            .expect("east final");
        store
            .set_winner(RoundKind::ConferenceFinals, "west-final", "Thunder")
            .expect("west final");

        assert_eq!(
            participants(&store, RoundKind::Finals, "finals"),
            [team("Pacers"), team("Thunder")]
        );
        store
            .set_winner(RoundKind::Finals, "finals", "Thunder")
            .expect("champion");
        store
            .set_games(RoundKind::Finals, "finals", SeriesResult::SevenGames)
            .expect("games");
        store.set_mvp("Shai Gilgeous-Alexander").expect("mvp");

        assert_eq!(store.predictions().champion(), Some(&Team::new("Thunder")));
        assert_eq!(store.predictions().winner_count(), 15);
        for kind in RoundKind::ALL {
            assert!(store.predictions().round(kind).is_complete());
        }
    }

    /// B1.4: Conferences never leak into each other before the finals.
    #[test]
    fn conferences_are_independent() {
        let mut store = PredictionStore::new(bracket());
        east_chalk(&mut store);
        let west = RoundKind::Semifinals.conference_ids(Conference::West);
        for id in west {
            assert_eq!(
                participants(&store, RoundKind::Semifinals, id.as_str()),
                [Slot::Undetermined, Slot::Undetermined]
            );
        }
    }
}

// =============================================================================
// TIER B2: STORE LOOKUPS AND ERRORS
// =============================================================================

mod b2_store {
    use super::*;

    /// B2.1: Unknown ids are lookup errors.
    #[test]
    fn unknown_matchup() {
        let mut store = PredictionStore::new(bracket());
        let result = store.set_winner(RoundKind::ConferenceFinals, "east-semi-0", "Celtics");
        assert!(matches!(result, Err(PlayoffError::UnknownMatchup { .. })));
    }

    /// B2.2: Most recent error wins; success clears it.
    #[test]
    fn single_current_error() {
        let mut store = PredictionStore::new(bracket());
        let _ = store.set_winner(RoundKind::FirstRound, "east-9", "Celtics");
        let _ = store.set_games(RoundKind::FirstRound, "east-0", SeriesResult::Sweep);
        assert_eq!(
            store.last_error(),
            Some("Invalid transition: games cannot be recorded before a winner is selected")
        );

        store
            .set_winner(RoundKind::FirstRound, "east-0", "Celtics")
            .expect("winner");
        assert_eq!(store.last_error(), None);
    }
}

// =============================================================================
// TIER B3: WIZARD SUBMISSION FLOW
// =============================================================================

mod b3_wizard {
    use super::*;

    fn wizard_at_finals() -> WizardController {
        let mut wizard = WizardController::new(bracket());
        wizard
            .set_winner(RoundKind::FirstRound, "east-0", "Celtics")
            .expect("winner");
        wizard
            .set_games(RoundKind::FirstRound, "east-0", SeriesResult::Sweep)
            .expect("games");
        wizard.set_mvp("Jayson Tatum").expect("mvp");
        while wizard.step() != Step::Finals {
            wizard.next();
        }
        wizard
    }

    /// B3.1: A failed submission preserves every pick and shows one error.
    #[test]
    fn failed_submission_preserves_state() {
        let mut wizard = wizard_at_finals();
        let before = wizard.predictions().clone();

        let sent = wizard.begin_submission().expect("begin");
        assert_eq!(sent, before.to_wire());
        let result = wizard.complete_submission(Err("Server responded with 503".to_string()));

        assert!(matches!(result, Err(PlayoffError::Submission(_))));
        assert_eq!(wizard.predictions(), &before);
        assert_eq!(wizard.step(), Step::Finals);
        assert_eq!(
            wizard.current_error(),
            Some("Failed to save results: Server responded with 503")
        );
    }

    /// B3.2: Retry after failure succeeds and freezes the document.
    #[test]
    fn retry_after_failure() {
        let mut wizard = wizard_at_finals();
        wizard.begin_submission().expect("begin");
        let _ = wizard.complete_submission(Err("network down".to_string()));

        wizard.begin_submission().expect("retry");
        wizard.complete_submission(Ok(())).expect("accepted");

        assert_eq!(wizard.step(), Step::Submitted);
        assert_eq!(wizard.current_error(), None);
        let submitted = wizard.submitted().expect("submitted document");
        assert_eq!(submitted.pick_count(), 2);
    }

    /// B3.3: Picks are locked while the request is pending; the frozen
    /// document is exactly the one sent.
    #[test]
    fn pending_submission_locks_picks() {
        let mut wizard = wizard_at_finals();
        let sent = wizard.begin_submission().expect("begin");

        let edit = wizard.set_winner(RoundKind::FirstRound, "east-1", "Bucks");
        assert!(matches!(edit, Err(PlayoffError::SubmissionInFlight)));
        assert_eq!(wizard.predictions().to_wire(), sent);

        wizard.complete_submission(Ok(())).expect("accepted");
        assert_eq!(wizard.submitted(), Some(&sent));
    }

    /// B3.4: Restart cannot clear the busy flag of a pending request.
    #[test]
    fn pending_submission_blocks_restart() {
        let mut wizard = wizard_at_finals();
        wizard.begin_submission().expect("begin");

        assert!(matches!(
            wizard.restart(),
            Err(PlayoffError::SubmissionInFlight)
        ));
        assert!(wizard.is_busy());
        assert!(matches!(
            wizard.begin_submission(),
            Err(PlayoffError::SubmissionInFlight)
        ));

        wizard.complete_submission(Ok(())).expect("accepted");
        wizard.restart().expect("restart after summary");
        assert_eq!(wizard.step(), Step::FirstRound);
        assert_eq!(wizard.predictions().winner_count(), 0);
        assert!(!wizard.is_submitted());
    }
}
