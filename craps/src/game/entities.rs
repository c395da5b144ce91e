use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::{DEFAULT_BANKROLL, DEFAULT_BET, DEFAULT_PLAYS};
use super::state_machine::{RoundOutcome, RoundState, Step};

/// Type alias for chip amounts. Bankrolls and bets come straight from a
/// form or command line, so fractional amounts are allowed and
/// non-finite values have to be caught by validation rather than the
/// type system.
pub type Chips = f64;

/// Placeholder for die faces and totals.
pub type Face = u8;

/// Two dice thrown together. The total is always the sum of the faces.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct DiceRoll {
    die1: Face,
    die2: Face,
    total: Face,
}

impl DiceRoll {
    /// Returns `None` unless both faces are in `1..=6`.
    #[must_use]
    pub fn new(die1: Face, die2: Face) -> Option<Self> {
        if (1..=6).contains(&die1) && (1..=6).contains(&die2) {
            Some(Self {
                die1,
                die2,
                total: die1 + die2,
            })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn die1(&self) -> Face {
        self.die1
    }

    #[must_use]
    pub const fn die2(&self) -> Face {
        self.die2
    }

    #[must_use]
    pub const fn total(&self) -> Face {
        self.total
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = {}", self.die1, self.die2, self.total)
    }
}

/// One come-out-to-resolution sequence of rolls.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameRound {
    /// Every roll of the round in the order thrown. Never empty.
    pub rolls: Vec<DiceRoll>,
    /// Set iff the come-out roll established a point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<Face>,
    pub won: bool,
    /// Zero on a loss, twice the wager on a win.
    pub winnings: Chips,
}

impl GameRound {
    #[must_use]
    pub fn come_out(&self) -> Option<&DiceRoll> {
        self.rolls.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// How the round was decided, recomputed by replaying its rolls.
    /// `None` only if the rolls never reach a decision, which a round
    /// built by the engine cannot do.
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        let mut state = RoundState::ComeOut;
        for roll in &self.rolls {
            match state.advance(roll) {
                Step::Continue(next) => state = next,
                Step::Resolved(outcome) => return Some(outcome),
            }
        }
        None
    }
}

/// The kind of event a log entry records.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogKind {
    Roll,
    PointSet,
    Win,
    Lose,
    GameStart,
    GameEnd,
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Roll => "roll",
            Self::PointSet => "point-set",
            Self::Win => "win",
            Self::Lose => "lose",
            Self::GameStart => "game-start",
            Self::GameEnd => "game-end",
        };
        write!(f, "{repr}")
    }
}

/// A single event of a run, in narration order.
///
/// The typed fields are authoritative. `message` exists for display and
/// should never be parsed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameLogEntry {
    pub kind: LogKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll: Option<DiceRoll>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<Face>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bankroll: Option<Chips>,
}

impl GameLogEntry {
    pub(crate) fn new(kind: LogKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            roll: None,
            point: None,
            bankroll: None,
        }
    }

    pub(crate) fn with_roll(mut self, roll: DiceRoll) -> Self {
        self.roll = Some(roll);
        self
    }

    pub(crate) fn with_point(mut self, point: Face) -> Self {
        self.point = Some(point);
        self
    }

    pub(crate) fn with_bankroll(mut self, bankroll: Chips) -> Self {
        self.bankroll = Some(bankroll);
        self
    }
}

impl fmt::Display for GameLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Configuration for a run, as handed over by a form or CLI layer.
///
/// `number_of_plays` stays a float until validated so that fractional or
/// non-finite counts can be reported instead of silently truncated.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameParams {
    pub bankroll: Chips,
    pub bet: Chips,
    pub number_of_plays: f64,
}

impl Default for GameParams {
    fn default() -> Self {
        Self::new(DEFAULT_BANKROLL, DEFAULT_BET, DEFAULT_PLAYS)
    }
}

impl GameParams {
    #[must_use]
    pub const fn new(bankroll: Chips, bet: Chips, number_of_plays: u32) -> Self {
        Self {
            bankroll,
            bet,
            number_of_plays: number_of_plays as f64,
        }
    }

    /// Number of plays as a count. Only meaningful once the params have
    /// passed validation; anything non-integral or out of range maps to 0.
    #[must_use]
    pub fn plays(&self) -> u32 {
        let n = self.number_of_plays;
        if n.is_finite() && n.fract() == 0.0 && n >= 0.0 && n <= f64::from(u32::MAX) {
            n as u32
        } else {
            0
        }
    }
}

/// Net result of a run, derived from the bankroll delta only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NetOutcome {
    Won(Chips),
    Lost(Chips),
    BrokeEven,
}

impl fmt::Display for NetOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won(amount) => write!(f, "Won {amount}"),
            Self::Lost(amount) => write!(f, "Lost {amount}"),
            Self::BrokeEven => write!(f, "Broke even"),
        }
    }
}

/// Everything a run produced. Built once by the orchestrator.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub initial_bankroll: Chips,
    pub final_bankroll: Chips,
    pub total_won: Chips,
    pub total_lost: Chips,
    pub games_played: u32,
    pub rounds: Vec<GameRound>,
    pub log: Vec<GameLogEntry>,
}

impl GameResult {
    #[must_use]
    pub fn net_outcome(&self) -> NetOutcome {
        if self.total_won > 0.0 {
            NetOutcome::Won(self.total_won)
        } else if self.total_lost > 0.0 {
            NetOutcome::Lost(self.total_lost)
        } else {
            NetOutcome::BrokeEven
        }
    }

    #[must_use]
    pub fn rounds_won(&self) -> usize {
        self.rounds.iter().filter(|round| round.won).count()
    }

    #[must_use]
    pub fn rounds_lost(&self) -> usize {
        self.rounds.len() - self.rounds_won()
    }

    /// Whether the bankroll ran out before `requested` rounds were played.
    #[must_use]
    pub fn stopped_early(&self, requested: u32) -> bool {
        self.games_played < requested
    }
}
