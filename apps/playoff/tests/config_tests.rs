//! Integration tests for configuration loading from disk.

#![allow(clippy::panic)]

use playoff::config::{DEFAULT_BASE_URL, DEFAULT_SCORES_PATH, PlayoffConfig};
use playoff_core::{Conference, PlayoffError, Team};
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write");
    file
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = PlayoffConfig::from_file(&dir.path().join("playoff.toml")).expect("load");
    assert_eq!(config, PlayoffConfig::default());
    assert_eq!(config.service.base_url, DEFAULT_BASE_URL);
}

#[test]
fn file_settings_are_applied() {
    let file = write_config(
        r#"
        [service]
        base_url = "http://localhost:3000"
        submit_path = "/results"
        timeout_secs = 3

        [bracket]
        east = ["Celtics", "Bucks", "Pacers", "Heat", "Knicks", "Cavaliers", "Pistons", "Magic"]
        mvp_candidates = ["Jayson Tatum", "Jalen Brunson"]
        "#,
    );

    let config = PlayoffConfig::from_file(file.path()).expect("load");
    assert_eq!(config.service.base_url, "http://localhost:3000");
    assert_eq!(config.service.submit_path, "/results");
    assert_eq!(config.service.scores_path, DEFAULT_SCORES_PATH);
    assert_eq!(config.service.timeout_secs, 3);

    let bracket = config.bracket.to_bracket().expect("bracket");
    assert_eq!(bracket.seeds(Conference::East)[2], Team::new("Pacers"));
    assert_eq!(bracket.seeds(Conference::West)[0], Team::new("Nuggets"));
    assert_eq!(bracket.mvp_candidates().len(), 2);
}

#[test]
fn malformed_file_names_the_path() {
    let file = write_config("[service\nbase_url = ");
    let result = PlayoffConfig::from_file(file.path());
    match result {
        Err(PlayoffError::SerializationError(msg)) => {
            assert!(msg.contains(&file.path().display().to_string()));
        }
        other => panic!("expected a serialization error, got {other:?}"),
    }
}

#[test]
fn short_conference_fails_bracket_validation() {
    let file = write_config(
        r#"
        [bracket]
        west = ["Nuggets", "Suns", "Warriors"]
        "#,
    );

    let config = PlayoffConfig::from_file(file.path()).expect("load");
    assert!(matches!(
        config.bracket.to_bracket(),
        Err(PlayoffError::InvalidBracket(_))
    ));
}

#[test]
fn team_in_both_conferences_is_rejected() {
    let file = write_config(
        r#"
        [bracket]
        west = ["Celtics", "Suns", "Warriors", "Lakers", "Clippers", "Grizzlies", "Mavericks", "Kings"]
        "#,
    );

    let config = PlayoffConfig::from_file(file.path()).expect("load");
    assert!(matches!(
        config.bracket.to_bracket(),
        Err(PlayoffError::InvalidBracket(_))
    ));
}
