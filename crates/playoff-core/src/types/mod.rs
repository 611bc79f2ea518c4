//! # Core Type Definitions
//!
//! This module contains all core types for the playoff bracket:
//! - Participants (`Team`, `Player`, `Conference`, `Slot`)
//! - Series data (`SeriesResult`, `Matchup`, `MatchupState`)
//! - Bracket structure (`MatchupId`, `RoundKind`, `Round`, `PredictionSet`, `Bracket`)
//! - Remote data (`ScoreEntry`)
//! - Error types (`PlayoffError`)
//!
//! ## Determinism Guarantees
//!
//! - Rounds are keyed by `BTreeMap`, but every traversal that matters goes
//!   through [`RoundKind::matchup_ids`], which fixes the canonical order
//! - A matchup's `winner` is always one of its participants when recorded

use crate::derivation::DerivationEngine;
use crate::primitives::{
    CONFERENCE_FINALS_PER_CONFERENCE, DEFAULT_EAST_SEEDS, DEFAULT_MVP_CANDIDATES,
    DEFAULT_WEST_SEEDS, FIRST_ROUND_PER_CONFERENCE, MAX_NAME_LENGTH, SEMIFINALS_PER_CONFERENCE,
    TEAMS_PER_CONFERENCE, UNDETERMINED_LABEL,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// PARTICIPANTS
// =============================================================================

/// A team, identified by its name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team(pub String);

impl Team {
    /// Create a new team from a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the team name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A player eligible for the finals MVP pick.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Player(pub String);

impl Player {
    /// Create a new player from a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the player name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One half of the bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Conference {
    East,
    West,
}

impl Conference {
    /// Both conferences, East first. This is the canonical bracket order.
    pub const ALL: [Conference; 2] = [Conference::East, Conference::West];

    /// Prefix used in matchup identifiers (`east-0`, `west-final`).
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Conference::East => "east",
            Conference::West => "west",
        }
    }

    /// Human-readable conference name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Conference::East => "Eastern Conference",
            Conference::West => "Western Conference",
        }
    }
}

/// A participant slot of a matchup.
///
/// Serialized as the team name, or `null` while undetermined.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Slot {
    /// The slot holds a known team.
    Team(Team),
    /// The source matchup of this slot has no winner yet.
    #[default]
    Undetermined,
}

impl Slot {
    /// Build a slot from an optional recorded winner.
    #[must_use]
    pub fn from_winner(winner: Option<&Team>) -> Self {
        winner.cloned().map_or(Slot::Undetermined, Slot::Team)
    }

    /// The team in this slot, if known.
    #[must_use]
    pub fn team(&self) -> Option<&Team> {
        match self {
            Slot::Team(team) => Some(team),
            Slot::Undetermined => None,
        }
    }

    /// Check whether the slot is still undetermined.
    #[must_use]
    pub fn is_undetermined(&self) -> bool {
        matches!(self, Slot::Undetermined)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Team(team) => write!(f, "{team}"),
            Slot::Undetermined => f.write_str(UNDETERMINED_LABEL),
        }
    }
}

// =============================================================================
// SERIES RESULT
// =============================================================================

/// Outcome of a best-of-seven series, from the winner's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeriesResult {
    #[serde(rename = "4-0")]
    Sweep,
    #[serde(rename = "4-1")]
    FiveGames,
    #[serde(rename = "4-2")]
    SixGames,
    #[serde(rename = "4-3")]
    SevenGames,
}

impl SeriesResult {
    /// Every selectable result, shortest series first.
    pub const ALL: [SeriesResult; 4] = [
        SeriesResult::Sweep,
        SeriesResult::FiveGames,
        SeriesResult::SixGames,
        SeriesResult::SevenGames,
    ];

    /// Wire and display form (`"4-2"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SeriesResult::Sweep => "4-0",
            SeriesResult::FiveGames => "4-1",
            SeriesResult::SixGames => "4-2",
            SeriesResult::SevenGames => "4-3",
        }
    }

    /// Total number of games played in the series.
    #[must_use]
    pub fn games_played(self) -> u8 {
        match self {
            SeriesResult::Sweep => 4,
            SeriesResult::FiveGames => 5,
            SeriesResult::SixGames => 6,
            SeriesResult::SevenGames => 7,
        }
    }
}

impl fmt::Display for SeriesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesResult {
    type Err = PlayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SeriesResult::ALL
            .into_iter()
            .find(|result| result.as_str() == trimmed)
            .ok_or_else(|| PlayoffError::InvalidValue {
                field: "games",
                value: trimmed.to_string(),
            })
    }
}

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Identifier of a matchup within its round (`east-0`, `west-semi-1`, `finals`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchupId(pub String);

impl MatchupId {
    /// Create an identifier from a raw string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// First-round series `index` (0..4) of a conference.
    #[must_use]
    pub fn first_round(conference: Conference, index: usize) -> Self {
        Self(format!("{}-{}", conference.prefix(), index))
    }

    /// Conference semifinal `index` (0..2).
    #[must_use]
    pub fn semifinal(conference: Conference, index: usize) -> Self {
        Self(format!("{}-semi-{}", conference.prefix(), index))
    }

    /// The conference final.
    #[must_use]
    pub fn conference_final(conference: Conference) -> Self {
        Self(format!("{}-final", conference.prefix()))
    }

    /// The finals series.
    #[must_use]
    pub fn finals() -> Self {
        Self("finals".to_string())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MatchupId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The four stages of the bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoundKind {
    FirstRound,
    Semifinals,
    ConferenceFinals,
    Finals,
}

impl RoundKind {
    /// All rounds in bracket order.
    pub const ALL: [RoundKind; 4] = [
        RoundKind::FirstRound,
        RoundKind::Semifinals,
        RoundKind::ConferenceFinals,
        RoundKind::Finals,
    ];

    /// Key of this round in the submitted JSON document.
    #[must_use]
    pub fn wire_key(self) -> &'static str {
        match self {
            RoundKind::FirstRound => "firstRound",
            RoundKind::Semifinals => "semifinals",
            RoundKind::ConferenceFinals => "conferenceFinals",
            RoundKind::Finals => "finals",
        }
    }

    /// Parse a round from its wire key.
    #[must_use]
    pub fn from_wire_key(key: &str) -> Option<Self> {
        RoundKind::ALL.into_iter().find(|kind| kind.wire_key() == key)
    }

    /// Human-readable round name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RoundKind::FirstRound => "First Round",
            RoundKind::Semifinals => "Conference Semifinals",
            RoundKind::ConferenceFinals => "Conference Finals",
            RoundKind::Finals => "Finals",
        }
    }

    /// The round whose winners feed this one.
    #[must_use]
    pub fn previous(self) -> Option<RoundKind> {
        match self {
            RoundKind::FirstRound => None,
            RoundKind::Semifinals => Some(RoundKind::FirstRound),
            RoundKind::ConferenceFinals => Some(RoundKind::Semifinals),
            RoundKind::Finals => Some(RoundKind::ConferenceFinals),
        }
    }

    /// The round fed by this round's winners.
    #[must_use]
    pub fn next(self) -> Option<RoundKind> {
        match self {
            RoundKind::FirstRound => Some(RoundKind::Semifinals),
            RoundKind::Semifinals => Some(RoundKind::ConferenceFinals),
            RoundKind::ConferenceFinals => Some(RoundKind::Finals),
            RoundKind::Finals => None,
        }
    }

    /// Matchups per conference, or `None` for the cross-conference finals.
    #[must_use]
    pub fn per_conference(self) -> Option<usize> {
        match self {
            RoundKind::FirstRound => Some(FIRST_ROUND_PER_CONFERENCE),
            RoundKind::Semifinals => Some(SEMIFINALS_PER_CONFERENCE),
            RoundKind::ConferenceFinals => Some(CONFERENCE_FINALS_PER_CONFERENCE),
            RoundKind::Finals => None,
        }
    }

    /// Total number of matchups in this round.
    #[must_use]
    pub fn matchup_count(self) -> usize {
        self.per_conference()
            .map_or(1, |per| per * Conference::ALL.len())
    }

    /// Matchup identifiers of one conference, in bracket order.
    ///
    /// Empty for the finals, which belongs to neither conference.
    #[must_use]
    pub fn conference_ids(self, conference: Conference) -> Vec<MatchupId> {
        match self {
            RoundKind::FirstRound => (0..FIRST_ROUND_PER_CONFERENCE)
                .map(|i| MatchupId::first_round(conference, i))
                .collect(),
            RoundKind::Semifinals => (0..SEMIFINALS_PER_CONFERENCE)
                .map(|i| MatchupId::semifinal(conference, i))
                .collect(),
            RoundKind::ConferenceFinals => vec![MatchupId::conference_final(conference)],
            RoundKind::Finals => Vec::new(),
        }
    }

    /// Every matchup identifier of this round: East in order, then West.
    #[must_use]
    pub fn matchup_ids(self) -> Vec<MatchupId> {
        match self {
            RoundKind::Finals => vec![MatchupId::finals()],
            _ => Conference::ALL
                .into_iter()
                .flat_map(|conference| self.conference_ids(conference))
                .collect(),
        }
    }
}

impl fmt::Display for RoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoundKind {
    type Err = PlayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoundKind::from_wire_key(s.trim()).ok_or_else(|| PlayoffError::UnknownRound(s.to_string()))
    }
}

// =============================================================================
// MATCHUP
// =============================================================================

/// Progress of a single matchup. Only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchupState {
    Undetermined,
    WinnerSelected,
    GamesSelected,
}

/// A best-of-seven series between two participant slots.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Matchup {
    participants: [Slot; 2],
    winner: Option<Team>,
    games: Option<SeriesResult>,
    mvp: Option<Player>,
}

impl Matchup {
    /// Create a matchup with no picks.
    #[must_use]
    pub fn new(participants: [Slot; 2]) -> Self {
        Self {
            participants,
            ..Self::default()
        }
    }

    /// Create a matchup between two known teams.
    #[must_use]
    pub fn between(home: Team, away: Team) -> Self {
        Self::new([Slot::Team(home), Slot::Team(away)])
    }

    /// The two participant slots, higher seed (or upper bracket) first.
    #[must_use]
    pub fn participants(&self) -> &[Slot; 2] {
        &self.participants
    }

    /// The predicted series winner.
    #[must_use]
    pub fn winner(&self) -> Option<&Team> {
        self.winner.as_ref()
    }

    /// The predicted series length.
    #[must_use]
    pub fn games(&self) -> Option<SeriesResult> {
        self.games
    }

    /// The predicted finals MVP.
    #[must_use]
    pub fn mvp(&self) -> Option<&Player> {
        self.mvp.as_ref()
    }

    /// Check if both participants are known teams.
    #[must_use]
    pub fn is_determined(&self) -> bool {
        self.participants.iter().all(|slot| !slot.is_undetermined())
    }

    /// Check if `team` currently occupies one of the slots.
    #[must_use]
    pub fn has_participant(&self, team: &Team) -> bool {
        self.participants.iter().any(|slot| slot.team() == Some(team))
    }

    /// Current position in the `Undetermined → WinnerSelected → GamesSelected` chain.
    #[must_use]
    pub fn state(&self) -> MatchupState {
        match (&self.winner, self.games) {
            (None, _) => MatchupState::Undetermined,
            (Some(_), None) => MatchupState::WinnerSelected,
            (Some(_), Some(_)) => MatchupState::GamesSelected,
        }
    }

    /// Record the series winner.
    ///
    /// The team must be one of the two current participants.
    pub fn set_winner(&mut self, team: Team) -> Result<(), PlayoffError> {
        if !self.has_participant(&team) {
            return Err(PlayoffError::InvalidTransition(format!(
                "{} is not playing in {} vs {}",
                team, self.participants[0], self.participants[1]
            )));
        }
        self.winner = Some(team);
        Ok(())
    }

    /// Record the series length. Requires a winner.
    pub fn set_games(&mut self, games: SeriesResult) -> Result<(), PlayoffError> {
        if self.winner.is_none() {
            return Err(PlayoffError::InvalidTransition(
                "games cannot be recorded before a winner is selected".to_string(),
            ));
        }
        self.games = Some(games);
        Ok(())
    }

    /// Record the MVP pick. Eligibility is checked by the store.
    pub(crate) fn set_mvp(&mut self, player: Player) {
        self.mvp = Some(player);
    }

    /// Same picks over freshly derived participants.
    ///
    /// A winner that no longer occupies a slot is dropped together with its games.
    pub(crate) fn rebase(&self, participants: [Slot; 2]) -> Matchup {
        let mut rebased = Matchup {
            participants,
            winner: None,
            games: None,
            mvp: self.mvp.clone(),
        };
        if let Some(winner) = &self.winner
            && rebased.has_participant(winner)
        {
            rebased.winner = Some(winner.clone());
            rebased.games = self.games;
        }
        rebased
    }
}

// =============================================================================
// ROUND
// =============================================================================

/// One stage of the bracket and its matchups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    kind: RoundKind,
    matchups: BTreeMap<MatchupId, Matchup>,
}

impl Round {
    /// Create a round with every matchup undetermined.
    #[must_use]
    pub fn new(kind: RoundKind) -> Self {
        let matchups = kind
            .matchup_ids()
            .into_iter()
            .map(|id| (id, Matchup::default()))
            .collect();
        Self { kind, matchups }
    }

    /// Which round this is.
    #[must_use]
    pub fn kind(&self) -> RoundKind {
        self.kind
    }

    /// Look up a matchup.
    #[must_use]
    pub fn get(&self, id: &MatchupId) -> Option<&Matchup> {
        self.matchups.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &MatchupId) -> Option<&mut Matchup> {
        self.matchups.get_mut(id)
    }

    pub(crate) fn insert(&mut self, id: MatchupId, matchup: Matchup) {
        self.matchups.insert(id, matchup);
    }

    /// Number of matchups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchups.len()
    }

    /// Check if the round has no matchups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchups.is_empty()
    }

    /// Matchups in canonical bracket order (not map order).
    #[must_use]
    pub fn ordered(&self) -> Vec<(MatchupId, &Matchup)> {
        self.kind
            .matchup_ids()
            .into_iter()
            .filter_map(|id| self.matchups.get(&id).map(|matchup| (id, matchup)))
            .collect()
    }

    /// The winner of a matchup as a slot for the next round.
    #[must_use]
    pub fn winner_slot(&self, id: &MatchupId) -> Slot {
        Slot::from_winner(self.matchups.get(id).and_then(Matchup::winner))
    }

    /// Check if every matchup has a winner.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matchups.values().all(|matchup| matchup.winner.is_some())
    }
}

// =============================================================================
// PREDICTION SET
// =============================================================================

/// A full set of predictions: one round of each kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSet {
    first_round: Round,
    semifinals: Round,
    conference_finals: Round,
    finals: Round,
}

impl PredictionSet {
    /// An empty prediction set seeded from the bracket.
    #[must_use]
    pub fn new(bracket: &Bracket) -> Self {
        DerivationEngine::seed(bracket)
    }

    /// A set with the given first round and undetermined later rounds.
    pub(crate) fn with_first_round(first_round: Round) -> Self {
        Self {
            first_round,
            semifinals: Round::new(RoundKind::Semifinals),
            conference_finals: Round::new(RoundKind::ConferenceFinals),
            finals: Round::new(RoundKind::Finals),
        }
    }

    /// Access a round.
    #[must_use]
    pub fn round(&self, kind: RoundKind) -> &Round {
        match kind {
            RoundKind::FirstRound => &self.first_round,
            RoundKind::Semifinals => &self.semifinals,
            RoundKind::ConferenceFinals => &self.conference_finals,
            RoundKind::Finals => &self.finals,
        }
    }

    pub(crate) fn round_mut(&mut self, kind: RoundKind) -> &mut Round {
        match kind {
            RoundKind::FirstRound => &mut self.first_round,
            RoundKind::Semifinals => &mut self.semifinals,
            RoundKind::ConferenceFinals => &mut self.conference_finals,
            RoundKind::Finals => &mut self.finals,
        }
    }

    /// Look up a matchup by round and identifier.
    #[must_use]
    pub fn matchup(&self, kind: RoundKind, id: &MatchupId) -> Option<&Matchup> {
        self.round(kind).get(id)
    }

    /// The predicted champion, once the finals winner is picked.
    #[must_use]
    pub fn champion(&self) -> Option<&Team> {
        self.finals.get(&MatchupId::finals()).and_then(Matchup::winner)
    }

    /// Number of matchups with a recorded winner across all rounds.
    #[must_use]
    pub fn winner_count(&self) -> usize {
        RoundKind::ALL
            .into_iter()
            .map(|kind| {
                self.round(kind)
                    .matchups
                    .values()
                    .filter(|matchup| matchup.winner.is_some())
                    .count()
            })
            .sum()
    }
}

// =============================================================================
// BRACKET (seed data)
// =============================================================================

/// Seeded teams of both conferences plus the MVP candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bracket {
    east: [Team; TEAMS_PER_CONFERENCE],
    west: [Team; TEAMS_PER_CONFERENCE],
    mvp_candidates: Vec<Player>,
}

impl Bracket {
    /// Build a bracket from seed lists (seed 1 first).
    ///
    /// Rejects wrong conference sizes, blank or oversized names, a team
    /// seeded twice, and an empty or repetitive MVP list.
    pub fn new(
        east: Vec<Team>,
        west: Vec<Team>,
        mvp_candidates: Vec<Player>,
    ) -> Result<Self, PlayoffError> {
        let east = conference_seeds(Conference::East, east)?;
        let west = conference_seeds(Conference::West, west)?;

        let mut seen = BTreeSet::new();
        for team in east.iter().chain(west.iter()) {
            validate_name("team", team.as_str())?;
            if !seen.insert(team) {
                return Err(PlayoffError::InvalidBracket(format!(
                    "team '{}' is seeded more than once",
                    team
                )));
            }
        }

        if mvp_candidates.is_empty() {
            return Err(PlayoffError::InvalidBracket(
                "at least one MVP candidate is required".to_string(),
            ));
        }
        let mut players = BTreeSet::new();
        for player in &mvp_candidates {
            validate_name("player", player.as_str())?;
            if !players.insert(player) {
                return Err(PlayoffError::InvalidBracket(format!(
                    "MVP candidate '{}' is listed more than once",
                    player
                )));
            }
        }

        Ok(Self {
            east,
            west,
            mvp_candidates,
        })
    }

    /// Seeds 1..8 of a conference.
    #[must_use]
    pub fn seeds(&self, conference: Conference) -> &[Team; TEAMS_PER_CONFERENCE] {
        match conference {
            Conference::East => &self.east,
            Conference::West => &self.west,
        }
    }

    /// Players selectable as finals MVP.
    #[must_use]
    pub fn mvp_candidates(&self) -> &[Player] {
        &self.mvp_candidates
    }

    /// Check if a player may be picked as MVP.
    #[must_use]
    pub fn is_mvp_candidate(&self, player: &Player) -> bool {
        self.mvp_candidates.contains(player)
    }

    /// The conference a team is seeded in.
    #[must_use]
    pub fn conference_of(&self, team: &Team) -> Option<Conference> {
        Conference::ALL
            .into_iter()
            .find(|conference| self.seeds(*conference).contains(team))
    }
}

impl Default for Bracket {
    fn default() -> Self {
        Self {
            east: DEFAULT_EAST_SEEDS.map(Team::new),
            west: DEFAULT_WEST_SEEDS.map(Team::new),
            mvp_candidates: DEFAULT_MVP_CANDIDATES.map(Player::new).to_vec(),
        }
    }
}

fn conference_seeds(
    conference: Conference,
    teams: Vec<Team>,
) -> Result<[Team; TEAMS_PER_CONFERENCE], PlayoffError> {
    <[Team; TEAMS_PER_CONFERENCE]>::try_from(teams).map_err(|teams| {
        PlayoffError::InvalidBracket(format!(
            "{} needs exactly {} seeded teams, got {}",
            conference.name(),
            TEAMS_PER_CONFERENCE,
            teams.len()
        ))
    })
}

fn validate_name(kind: &str, name: &str) -> Result<(), PlayoffError> {
    if name.trim().is_empty() {
        return Err(PlayoffError::InvalidBracket(format!("{kind} name is empty")));
    }
    if name.trim().eq_ignore_ascii_case(UNDETERMINED_LABEL) {
        return Err(PlayoffError::InvalidBracket(format!(
            "{kind} name '{name}' is reserved for undecided slots"
        )));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(PlayoffError::InvalidBracket(format!(
            "{kind} name '{name}' exceeds {MAX_NAME_LENGTH} bytes"
        )));
    }
    Ok(())
}

// =============================================================================
// UPDATES & REMOTE DATA
// =============================================================================

/// A single-field edit to one matchup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    Winner(Team),
    Games(SeriesResult),
    Mvp(Player),
}

impl Update {
    /// Name of the field this update writes.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Update::Winner(_) => "winner",
            Update::Games(_) => "games",
            Update::Mvp(_) => "mvp",
        }
    }
}

/// One row of the leaderboard returned by the scoring service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub user: String,
    pub score: f64,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or submitting predictions.
///
/// Every error is recoverable; the wizard turns the most recent one into
/// its single visible error message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayoffError {
    /// A pick was recorded out of order or names a non-participant.
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// The round has no matchup with this identifier.
    #[error("Unknown matchup '{id}' in {round}")]
    UnknownMatchup { round: RoundKind, id: String },

    /// The round key is not part of the bracket.
    #[error("Unknown round '{0}'")]
    UnknownRound(String),

    /// A field value is outside its enumerated choices.
    #[error("Invalid {field} value '{value}'")]
    InvalidValue { field: &'static str, value: String },

    /// The seed data cannot form a bracket.
    #[error("Invalid bracket: {0}")]
    InvalidBracket(String),

    /// A submission is already pending.
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    /// The predictions were accepted and are now read-only.
    #[error("Predictions were already submitted")]
    AlreadySubmitted,

    /// The scoring service rejected or never received the predictions.
    #[error("Failed to save results: {0}")]
    Submission(String),

    /// The leaderboard could not be loaded.
    #[error("Failed to load scores: {0}")]
    ScoreFetch(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
