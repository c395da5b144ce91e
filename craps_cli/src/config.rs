//! CLI configuration management.
//!
//! Each game parameter is taken from the first source that has it: command
//! line flag, environment variable, saved settings, built-in default.

use craps::GameParams;
use std::path::{Path, PathBuf};

use crate::settings::DEFAULT_SETTINGS_FILE;

pub const ENV_BANKROLL: &str = "CRAPS_BANKROLL";
pub const ENV_BET: &str = "CRAPS_BET";
pub const ENV_PLAYS: &str = "CRAPS_PLAYS";
pub const ENV_SEED: &str = "CRAPS_SEED";
pub const ENV_SETTINGS_FILE: &str = "CRAPS_SETTINGS_FILE";

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bankroll: Option<f64>,
    pub bet: Option<f64>,
    pub plays: Option<f64>,
    pub seed: Option<u64>,
    pub settings_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Quiet,
    Json,
}

/// Fully resolved configuration for one invocation
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Parameters for the run; not validated yet
    pub params: GameParams,
    /// Seed for reproducible dice, or `None` for thread-local randomness
    pub seed: Option<u64>,
    /// Where last-used parameters are loaded from and saved to
    pub settings_path: PathBuf,
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns error if an environment variable is set but can't be parsed
    pub fn from_env(
        overrides: Overrides,
        load_saved: impl FnOnce(&Path) -> Option<GameParams>,
    ) -> Result<Self, ConfigError> {
        Self::resolve(overrides, |key| std::env::var(key).ok(), load_saved)
    }

    /// Resolve configuration against an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but can't be parsed
    pub fn resolve(
        overrides: Overrides,
        lookup: impl Fn(&str) -> Option<String>,
        load_saved: impl FnOnce(&Path) -> Option<GameParams>,
    ) -> Result<Self, ConfigError> {
        let settings_path = overrides
            .settings_path
            .or_else(|| lookup(ENV_SETTINGS_FILE).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));

        let fallback = load_saved(&settings_path).unwrap_or_default();

        let bankroll = match overrides.bankroll {
            Some(v) => v,
            None => parse_env(&lookup, ENV_BANKROLL)?.unwrap_or(fallback.bankroll),
        };
        let bet = match overrides.bet {
            Some(v) => v,
            None => parse_env(&lookup, ENV_BET)?.unwrap_or(fallback.bet),
        };
        let number_of_plays = match overrides.plays {
            Some(v) => v,
            None => parse_env(&lookup, ENV_PLAYS)?.unwrap_or(fallback.number_of_plays),
        };
        let seed = match overrides.seed {
            Some(v) => Some(v),
            None => parse_env(&lookup, ENV_SEED)?,
        };

        Ok(CliConfig {
            params: GameParams {
                bankroll,
                bet,
                number_of_plays,
            },
            seed,
            settings_path,
        })
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse an optional variable, rejecting values that are set
/// but malformed
fn parse_env<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                var: key.to_string(),
                reason: format!("{raw:?}: {e}"),
            }),
    }
}
