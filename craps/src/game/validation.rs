//! Parameter validation.
//!
//! Every field is checked on its own so a single call can report one
//! problem per offending field. Nothing here has side effects.

use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::{collections::BTreeMap, fmt};

use super::constants::{MAX_BANKROLL, MAX_PLAYS, MIN_BANKROLL, MIN_BET, MIN_PLAYS};
use super::entities::GameParams;

/// The fields of [`GameParams`] a validation error can point at.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamField {
    Bankroll,
    Bet,
    NumberOfPlays,
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Bankroll => "bankroll",
            Self::Bet => "bet",
            Self::NumberOfPlays => "numberOfPlays",
        };
        write!(f, "{repr}")
    }
}

/// Outcome of [`validate_game_params`]: valid iff there are no errors.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationReport {
    pub errors: BTreeMap<ParamField, String>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn error(&self, field: ParamField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn reject(&mut self, field: ParamField, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "ok");
        }
        let repr = self
            .errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{repr}")
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationReport", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}

/// Checks `params` against the table limits.
#[must_use]
pub fn validate_game_params(params: &GameParams) -> ValidationReport {
    let mut report = ValidationReport::default();

    let bankroll = params.bankroll;
    if !bankroll.is_finite() {
        report.reject(ParamField::Bankroll, "Bankroll must be a valid number");
    } else if !(MIN_BANKROLL..=MAX_BANKROLL).contains(&bankroll) {
        report.reject(ParamField::Bankroll, "Bankroll must be between 5 and 1000");
    }

    let bet = params.bet;
    if !bet.is_finite() {
        report.reject(ParamField::Bet, "Bet must be a valid number");
    } else if bet < MIN_BET {
        report.reject(ParamField::Bet, "Bet must be at least 5");
    } else if bankroll.is_finite() && bet > bankroll {
        report.reject(ParamField::Bet, "Bet cannot exceed bankroll");
    }

    let plays = params.number_of_plays;
    if !plays.is_finite() || plays.fract() != 0.0 {
        report.reject(
            ParamField::NumberOfPlays,
            "Number of plays must be a valid integer",
        );
    } else if !(f64::from(MIN_PLAYS)..=f64::from(MAX_PLAYS)).contains(&plays) {
        report.reject(
            ParamField::NumberOfPlays,
            "Number of plays must be between 1 and 100",
        );
    }

    report
}
