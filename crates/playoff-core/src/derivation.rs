//! # Derivation Engine
//!
//! Computes each round's participants from the previous round's winners.
//!
//! - The first round is seed data: seed i plays seed 9-i within a conference
//! - Every later round pairs adjacent winners of the previous round, in the
//!   fixed order of [`RoundKind::conference_ids`]
//! - The finals pairs the East champion with the West champion
//! - A slot whose source matchup has no winner is [`Slot::Undetermined`]
//!
//! Derivation is a pure function of the recorded winners. Running it twice on
//! the same prediction set yields the same rounds.

use crate::primitives::{FIRST_ROUND_PER_CONFERENCE, TEAMS_PER_CONFERENCE};
use crate::{Bracket, Conference, Matchup, MatchupId, PredictionSet, Round, RoundKind, Slot};

/// Stateless bracket-progression rules.
pub struct DerivationEngine;

impl DerivationEngine {
    /// Seed-based first round: 1v8, 2v7, 3v6, 4v5 in each conference.
    #[must_use]
    pub fn first_round(bracket: &Bracket) -> Round {
        let mut round = Round::new(RoundKind::FirstRound);
        for conference in Conference::ALL {
            let seeds = bracket.seeds(conference);
            for index in 0..FIRST_ROUND_PER_CONFERENCE {
                let high = seeds[index].clone();
                let low = seeds[TEAMS_PER_CONFERENCE - 1 - index].clone();
                round.insert(
                    MatchupId::first_round(conference, index),
                    Matchup::between(high, low),
                );
            }
        }
        round
    }

    /// An empty prediction set with every later round derived.
    #[must_use]
    pub fn seed(bracket: &Bracket) -> PredictionSet {
        let mut set = PredictionSet::with_first_round(Self::first_round(bracket));
        Self::rederive_after(&mut set, RoundKind::FirstRound);
        set
    }

    /// Winners of one conference's matchups in `round`, in bracket order.
    ///
    /// Always exactly as long as the round has matchups per conference;
    /// missing winners are padded with [`Slot::Undetermined`].
    #[must_use]
    pub fn conference_winners(round: &Round, conference: Conference) -> Vec<Slot> {
        let expected = round.kind().per_conference().unwrap_or(0);
        let mut winners: Vec<Slot> = round
            .kind()
            .conference_ids(conference)
            .iter()
            .map(|id| round.winner_slot(id))
            .collect();
        winners.resize(expected, Slot::Undetermined);
        winners
    }

    /// Participant pairs of `target`, computed from the previous round.
    ///
    /// For the first round this is the current seeded pairing.
    #[must_use]
    pub fn pairings(set: &PredictionSet, target: RoundKind) -> Vec<(MatchupId, [Slot; 2])> {
        let Some(source_kind) = target.previous() else {
            return set
                .round(target)
                .ordered()
                .into_iter()
                .map(|(id, matchup)| (id, matchup.participants().clone()))
                .collect();
        };
        let source = set.round(source_kind);

        if target == RoundKind::Finals {
            let east = source.winner_slot(&MatchupId::conference_final(Conference::East));
            let west = source.winner_slot(&MatchupId::conference_final(Conference::West));
            return vec![(MatchupId::finals(), [east, west])];
        }

        let mut pairs = Vec::with_capacity(target.matchup_count());
        for conference in Conference::ALL {
            let winners = Self::conference_winners(source, conference);
            for (pair, id) in winners.chunks(2).zip(target.conference_ids(conference)) {
                let upper = pair.first().cloned().unwrap_or_default();
                let lower = pair.get(1).cloned().unwrap_or_default();
                pairs.push((id, [upper, lower]));
            }
        }
        pairs
    }

    /// Recompute `target` in full from the previous round.
    ///
    /// Picks are carried over while their winner still plays in the
    /// re-derived matchup; otherwise winner and games are dropped.
    #[must_use]
    pub fn derive_round(set: &PredictionSet, target: RoundKind) -> Round {
        let current = set.round(target);
        let mut round = Round::new(target);
        for (id, participants) in Self::pairings(set, target) {
            let matchup = match current.get(&id) {
                Some(existing) => existing.rebase(participants),
                None => Matchup::new(participants),
            };
            round.insert(id, matchup);
        }
        round
    }

    /// Recompute every round after `changed`, in bracket order.
    pub fn rederive_after(set: &mut PredictionSet, changed: RoundKind) {
        let mut next = changed.next();
        while let Some(kind) = next {
            let derived = Self::derive_round(set, kind);
            *set.round_mut(kind) = derived;
            next = kind.next();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SeriesResult, Team};

    fn team(name: &str) -> Team {
        Team::new(name)
    }

    fn pick(set: &mut PredictionSet, kind: RoundKind, id: MatchupId, winner: &str) {
        set.round_mut(kind)
            .get_mut(&id)
            .expect("matchup")
            .set_winner(team(winner))
            .expect("winner");
        DerivationEngine::rederive_after(set, kind);
    }

    #[test]
    fn first_round_uses_seed_pairing() {
        let round = DerivationEngine::first_round(&Bracket::default());
        let east_0 = round.get(&MatchupId::first_round(Conference::East, 0)).expect("east-0");
        let west_3 = round.get(&MatchupId::first_round(Conference::West, 3)).expect("west-3");

        assert_eq!(
            east_0.participants(),
            &[Slot::Team(team("Celtics")), Slot::Team(team("Hawks"))]
        );
        assert_eq!(
            west_3.participants(),
            &[Slot::Team(team("Lakers")), Slot::Team(team("Clippers"))]
        );
        assert_eq!(round.len(), 8);
    }

    #[test]
    fn empty_set_has_undetermined_later_rounds() {
        let set = DerivationEngine::seed(&Bracket::default());
        for kind in [RoundKind::Semifinals, RoundKind::ConferenceFinals, RoundKind::Finals] {
            let round = set.round(kind);
            assert_eq!(round.len(), kind.matchup_count());
            for (_, matchup) in round.ordered() {
                assert_eq!(matchup.participants(), &[Slot::Undetermined, Slot::Undetermined]);
            }
        }
    }

    #[test]
    fn winners_are_padded_in_position() {
        let mut set = DerivationEngine::seed(&Bracket::default());
        pick(
            &mut set,
            RoundKind::FirstRound,
            MatchupId::first_round(Conference::East, 2),
            "76ers",
        );

        let winners =
            DerivationEngine::conference_winners(set.round(RoundKind::FirstRound), Conference::East);
        assert_eq!(
            winners,
            vec![
                Slot::Undetermined,
                Slot::Undetermined,
                Slot::Team(team("76ers")),
                Slot::Undetermined,
            ]
        );
    }

    #[test]
    fn finals_pairs_conference_champions() {
        let mut set = DerivationEngine::seed(&Bracket::default());
        for (i, winner) in ["Celtics", "Bucks", "76ers", "Heat"].into_iter().enumerate() {
            pick(
                &mut set,
                RoundKind::FirstRound,
                MatchupId::first_round(Conference::East, i),
                winner,
            );
        }
        pick(&mut set, RoundKind::Semifinals, MatchupId::semifinal(Conference::East, 0), "Celtics");
        pick(&mut set, RoundKind::Semifinals, MatchupId::semifinal(Conference::East, 1), "Heat");
        pick(
            &mut set,
            RoundKind::ConferenceFinals,
            MatchupId::conference_final(Conference::East),
            "Heat",
        );

        let finals = set
            .matchup(RoundKind::Finals, &MatchupId::finals())
            .expect("finals");
        assert_eq!(
            finals.participants(),
            &[Slot::Team(team("Heat")), Slot::Undetermined]
        );
    }

    #[test]
    fn derive_round_is_idempotent() {
        let mut set = DerivationEngine::seed(&Bracket::default());
        pick(
            &mut set,
            RoundKind::FirstRound,
            MatchupId::first_round(Conference::West, 0),
            "Nuggets",
        );
        let first = DerivationEngine::derive_round(&set, RoundKind::Semifinals);
        let second = DerivationEngine::derive_round(&set, RoundKind::Semifinals);
        assert_eq!(first, second);
        assert_eq!(&first, set.round(RoundKind::Semifinals));
    }

    #[test]
    fn stale_downstream_pick_is_dropped() {
        let mut set = DerivationEngine::seed(&Bracket::default());
        pick(&mut set, RoundKind::FirstRound, MatchupId::first_round(Conference::East, 0), "Celtics");
        pick(&mut set, RoundKind::FirstRound, MatchupId::first_round(Conference::East, 1), "Bucks");

        let semi = MatchupId::semifinal(Conference::East, 0);
        {
            let matchup = set
                .round_mut(RoundKind::Semifinals)
                .get_mut(&semi)
                .expect("semi");
            matchup.set_winner(team("Celtics")).expect("winner");
            matchup.set_games(SeriesResult::SixGames).expect("games");
        }
        DerivationEngine::rederive_after(&mut set, RoundKind::Semifinals);

        pick(&mut set, RoundKind::FirstRound, MatchupId::first_round(Conference::East, 0), "Hawks");

        let semi_matchup = set.matchup(RoundKind::Semifinals, &semi).expect("semi");
        assert_eq!(
            semi_matchup.participants(),
            &[Slot::Team(team("Hawks")), Slot::Team(team("Bucks"))]
        );
        assert_eq!(semi_matchup.winner(), None);
        assert_eq!(semi_matchup.games(), None);
    }
}
