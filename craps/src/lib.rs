//! # Craps
//!
//! A simplified craps simulator. A player brings a bankroll, a fixed bet
//! and a number of rounds; the engine throws the dice, settles each round
//! and returns every roll together with a narrated event log and the
//! net result.
//!
//! ## Rules
//!
//! - **Come-out roll**: 7 or 11 wins, 2, 3 or 12 loses, anything else
//!   becomes the point.
//! - **Point chase**: keep rolling until the point repeats (win) or a 7
//!   shows (lose).
//! - A winning round pays twice the bet; the bet itself is taken from the
//!   bankroll before the round starts.
//!
//! The round logic is a small finite state machine ([`RoundState`]); the
//! runner ([`play_game`]) stops early, without error, once the bankroll
//! can't cover another bet.
//!
//! ## Example
//!
//! ```
//! use craps::{GameParams, RngDice, play_game};
//!
//! let params = GameParams::new(100.0, 10.0, 5);
//! let result = play_game(&params, &mut RngDice::from_seed(7)).unwrap();
//! assert!(result.games_played <= 5);
//! assert_eq!(
//!     result.final_bankroll,
//!     result.initial_bankroll - result.total_lost + result.total_won
//! );
//! ```

/// Core game logic: dice, rounds, validation and game runs.
pub mod game;
pub use game::{
    Chips, CrapsError, CrapsResult, DiceRoll, DiceSource, GameLogEntry, GameParams, GameResult,
    GameRound, LogKind, NetOutcome, ParamField, RngDice, RoundOutcome, RoundState, ScriptedDice,
    ValidationReport, constants, play_game, play_round, validate_game_params,
};
