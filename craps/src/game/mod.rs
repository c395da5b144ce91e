//! Craps game engine - dice, round state machine and game runs.
//!
//! This module provides:
//! - Injectable dice sources (seeded, thread-local or scripted)
//! - A two-state machine that resolves a single round
//! - Parameter validation against the table limits
//! - A game runner that plays rounds against a bankroll and narrates them

pub mod constants;
pub mod dice;
pub mod entities;
pub mod errors;
pub mod session;
pub mod state_machine;
pub mod validation;

pub use dice::{DiceSource, RngDice, ScriptedDice};
pub use entities::{
    Chips, DiceRoll, Face, GameLogEntry, GameParams, GameResult, GameRound, LogKind, NetOutcome,
};
pub use errors::{CrapsError, CrapsResult};
pub use session::play_game;
pub use state_machine::{RoundOutcome, RoundState, Step, play_round};
pub use validation::{ParamField, ValidationReport, validate_game_params};
