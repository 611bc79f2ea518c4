//! # Bracket Primitives
//!
//! Hardcoded constants describing the shape of the playoff bracket.
//!
//! The bracket starts with zero picks but a fixed shape.
//! These primitives are compiled into the binary and are immutable at runtime.

/// Number of seeded teams in each conference.
pub const TEAMS_PER_CONFERENCE: usize = 8;

/// First-round series per conference (1v8, 2v7, 3v6, 4v5).
pub const FIRST_ROUND_PER_CONFERENCE: usize = 4;

/// Conference semifinal series per conference.
pub const SEMIFINALS_PER_CONFERENCE: usize = 2;

/// Conference final series per conference.
pub const CONFERENCE_FINALS_PER_CONFERENCE: usize = 1;

/// Number of wizard steps: four rounds plus the submitted summary.
pub const TOTAL_STEPS: u8 = 5;

/// Maximum length for team and player names.
///
/// Names longer than this are rejected when a bracket is built.
pub const MAX_NAME_LENGTH: usize = 64;

/// Display label for a participant slot that cannot be derived yet.
pub const UNDETERMINED_LABEL: &str = "TBD";

// =============================================================================
// DEFAULT BRACKET DATA
// =============================================================================

/// Eastern conference, seeds 1 through 8.
pub const DEFAULT_EAST_SEEDS: [&str; TEAMS_PER_CONFERENCE] = [
    "Celtics",
    "Bucks",
    "76ers",
    "Heat",
    "Knicks",
    "Cavaliers",
    "Nets",
    "Hawks",
];

/// Western conference, seeds 1 through 8.
pub const DEFAULT_WEST_SEEDS: [&str; TEAMS_PER_CONFERENCE] = [
    "Nuggets",
    "Suns",
    "Warriors",
    "Lakers",
    "Clippers",
    "Grizzlies",
    "Mavericks",
    "Kings",
];

/// Players that may be picked as finals MVP.
pub const DEFAULT_MVP_CANDIDATES: [&str; 12] = [
    "Nikola Jokic",
    "Jayson Tatum",
    "Giannis Antetokounmpo",
    "Joel Embiid",
    "Jimmy Butler",
    "Stephen Curry",
    "LeBron James",
    "Kevin Durant",
    "Devin Booker",
    "Jalen Brunson",
    "Donovan Mitchell",
    "Kawhi Leonard",
];
