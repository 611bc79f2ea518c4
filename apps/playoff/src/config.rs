//! # Configuration
//!
//! Settings are read from an optional TOML file and then overridden by
//! environment variables:
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `PLAYOFF_URL` | `service.base_url` |
//! | `PLAYOFF_API_KEY` | `service.api_key` (empty unsets it) |
//! | `PLAYOFF_TIMEOUT_SECS` | `service.timeout_secs` |
//!
//! ```toml
//! [service]
//! base_url = "http://localhost:3000"
//!
//! [bracket]
//! east = ["Celtics", "Bucks", "Pacers", "Heat", "Knicks", "Cavaliers", "Pistons", "Magic"]
//! ```

use playoff_core::primitives::{DEFAULT_EAST_SEEDS, DEFAULT_MVP_CANDIDATES, DEFAULT_WEST_SEEDS};
use playoff_core::{Bracket, Player, PlayoffError, Team};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "playoff.toml";

/// Public scoring service.
pub const DEFAULT_BASE_URL: &str = "https://nba-playoff-predictor.onrender.com";

pub const DEFAULT_SUBMIT_PATH: &str = "/api/results";
pub const DEFAULT_SCORES_PATH: &str = "/api/scores";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// SETTINGS
// =============================================================================

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayoffConfig {
    pub service: ServiceConfig,
    pub bracket: BracketConfig,
}

/// Where and how to reach the scoring service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub base_url: String,
    pub submit_path: String,
    pub scores_path: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            submit_path: DEFAULT_SUBMIT_PATH.to_string(),
            scores_path: DEFAULT_SCORES_PATH.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Seeds and MVP candidates, listed in seed order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BracketConfig {
    pub east: Vec<String>,
    pub west: Vec<String>,
    pub mvp_candidates: Vec<String>,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            east: DEFAULT_EAST_SEEDS.iter().map(|t| t.to_string()).collect(),
            west: DEFAULT_WEST_SEEDS.iter().map(|t| t.to_string()).collect(),
            mvp_candidates: DEFAULT_MVP_CANDIDATES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl BracketConfig {
    /// Validate the configured names into a [`Bracket`].
    pub fn to_bracket(&self) -> Result<Bracket, PlayoffError> {
        Bracket::new(
            self.east.iter().map(Team::new).collect(),
            self.west.iter().map(Team::new).collect(),
            self.mvp_candidates.iter().map(Player::new).collect(),
        )
    }
}

// =============================================================================
// LOADING
// =============================================================================

impl PlayoffConfig {
    /// Load `path` (defaults when it does not exist), then apply the
    /// process environment.
    pub fn load(path: &Path) -> Result<Self, PlayoffError> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, PlayoffError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_toml_str(&raw).map_err(|e| match e {
                PlayoffError::SerializationError(msg) => {
                    PlayoffError::SerializationError(format!("{}: {msg}", path.display()))
                }
                other => other,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(PlayoffError::IoError(format!(
                "Cannot read config '{}': {e}",
                path.display()
            ))),
        }
    }

    /// Parse TOML settings.
    pub fn from_toml_str(raw: &str) -> Result<Self, PlayoffError> {
        toml::from_str(raw).map_err(|e| PlayoffError::SerializationError(e.to_string()))
    }

    /// Apply `PLAYOFF_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), PlayoffError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("PLAYOFF_URL") {
            self.service.base_url = url;
        }
        if let Some(key) = lookup("PLAYOFF_API_KEY") {
            self.service.api_key = Some(key).filter(|k| !k.trim().is_empty());
        }
        if let Some(raw) = lookup("PLAYOFF_TIMEOUT_SECS") {
            self.service.timeout_secs =
                raw.trim().parse().map_err(|_| PlayoffError::InvalidValue {
                    field: "timeout_secs",
                    value: raw.clone(),
                })?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_build_a_valid_bracket() {
        let config = PlayoffConfig::default();
        assert_eq!(config.service.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.service.timeout(), Duration::from_secs(30));
        assert!(config.bracket.to_bracket().is_ok());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = PlayoffConfig::from_toml_str(
            r#"
            [service]
            base_url = "http://localhost:3000"
            "#,
        )
        .expect("parse");
        assert_eq!(config.service.base_url, "http://localhost:3000");
        assert_eq!(config.service.submit_path, DEFAULT_SUBMIT_PATH);
        assert_eq!(config.bracket, BracketConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = PlayoffConfig::from_toml_str("[service]\nbase_uri = \"x\"\n");
        assert!(matches!(result, Err(PlayoffError::SerializationError(_))));
    }

    #[test]
    fn environment_overrides_file() {
        let mut config = PlayoffConfig::default();
        config
            .apply_overrides(env(&[
                ("PLAYOFF_URL", "http://scores.local"),
                ("PLAYOFF_API_KEY", "secret"),
                ("PLAYOFF_TIMEOUT_SECS", " 5 "),
            ]))
            .expect("overrides");
        assert_eq!(config.service.base_url, "http://scores.local");
        assert_eq!(config.service.api_key.as_deref(), Some("secret"));
        assert_eq!(config.service.timeout_secs, 5);
    }

    #[test]
    fn empty_api_key_unsets_it() {
        let mut config = PlayoffConfig::default();
        config.service.api_key = Some("from-file".to_string());
        config
            .apply_overrides(env(&[("PLAYOFF_API_KEY", "")]))
            .expect("overrides");
        assert_eq!(config.service.api_key, None);
    }

    #[test]
    fn invalid_timeout_is_an_error() {
        let mut config = PlayoffConfig::default();
        let result = config.apply_overrides(env(&[("PLAYOFF_TIMEOUT_SECS", "soon")]));
        assert!(matches!(
            result,
            Err(PlayoffError::InvalidValue {
                field: "timeout_secs",
                ..
            })
        ));
    }
}
