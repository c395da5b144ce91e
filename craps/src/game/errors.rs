//! Game error types.

use thiserror::Error;

use super::entities::Chips;
use super::validation::ValidationReport;

/// Errors that stop the engine before it simulates anything.
///
/// Running out of bankroll mid-run is not one of them; that is reported
/// through the game log and a short `games_played` count.
#[derive(Debug, Error, PartialEq)]
pub enum CrapsError {
    /// The wager was zero, negative, infinite or NaN.
    #[error("Invalid bet amount: {bet}")]
    InvalidBet { bet: Chips },

    /// Params failed validation; the report holds the per-field messages.
    #[error("Invalid game parameters: {0}")]
    InvalidGameParameters(ValidationReport),
}

impl CrapsError {
    /// The validation report, if this error carries one.
    #[must_use]
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::InvalidGameParameters(report) => Some(report),
            Self::InvalidBet { .. } => None,
        }
    }
}

/// Result type for game operations
pub type CrapsResult<T> = Result<T, CrapsError>;
