//! Round resolution as a two-state machine.
//!
//! A round starts in [`RoundState::ComeOut`]. The come-out roll either
//! decides the round on the spot or moves it into [`RoundState::Point`],
//! where it stays until the point repeats or a seven shows.

use log::trace;
use serde::Serialize;
use std::fmt;

use super::constants::{CRAPS, NATURALS, PAYOUT_MULTIPLIER, SEVEN};
use super::dice::DiceSource;
use super::entities::{Chips, DiceRoll, Face, GameRound};
use super::errors::{CrapsError, CrapsResult};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RoundState {
    ComeOut,
    /// Chasing the point. Only 4, 5, 6, 8, 9 and 10 can get here.
    Point(Face),
}

/// Terminal outcomes of a round.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundOutcome {
    /// 7 or 11 on the come-out roll.
    Natural,
    /// 2, 3 or 12 on the come-out roll.
    Craps,
    /// The point came up again before a seven.
    PointMade,
    /// A seven came up before the point.
    SevenOut,
}

impl RoundOutcome {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Natural | Self::PointMade)
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Natural => "natural",
            Self::Craps => "craps",
            Self::PointMade => "point made",
            Self::SevenOut => "seven out",
        };
        write!(f, "{repr}")
    }
}

/// Result of feeding one roll to a [`RoundState`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    Continue(RoundState),
    Resolved(RoundOutcome),
}

impl RoundState {
    #[must_use]
    pub fn advance(self, roll: &DiceRoll) -> Step {
        let total = roll.total();
        match self {
            Self::ComeOut if NATURALS.contains(&total) => Step::Resolved(RoundOutcome::Natural),
            Self::ComeOut if CRAPS.contains(&total) => Step::Resolved(RoundOutcome::Craps),
            Self::ComeOut => Step::Continue(Self::Point(total)),
            Self::Point(point) if total == point => Step::Resolved(RoundOutcome::PointMade),
            Self::Point(_) if total == SEVEN => Step::Resolved(RoundOutcome::SevenOut),
            Self::Point(point) => Step::Continue(Self::Point(point)),
        }
    }

    #[must_use]
    pub const fn point(&self) -> Option<Face> {
        match self {
            Self::ComeOut => None,
            Self::Point(point) => Some(*point),
        }
    }
}

/// Checks that `bet` is a finite amount greater than zero.
pub fn check_bet(bet: Chips) -> CrapsResult<()> {
    if bet.is_finite() && bet > 0.0 {
        Ok(())
    } else {
        Err(CrapsError::InvalidBet { bet })
    }
}

/// Plays one full round for `bet`, drawing as many rolls from `dice` as
/// it takes to reach a decision.
///
/// # Errors
///
/// Returns [`CrapsError::InvalidBet`] for a zero, negative, infinite or
/// NaN bet. No dice are thrown in that case.
pub fn play_round<D: DiceSource + ?Sized>(bet: Chips, dice: &mut D) -> CrapsResult<GameRound> {
    check_bet(bet)?;

    let mut rolls = Vec::new();
    let mut state = RoundState::ComeOut;
    let outcome = loop {
        let roll = dice.roll();
        rolls.push(roll);
        match state.advance(&roll) {
            Step::Continue(next) => state = next,
            Step::Resolved(outcome) => break outcome,
        }
    };
    trace!("round resolved: {outcome} after {} rolls", rolls.len());

    let won = outcome.is_win();
    Ok(GameRound {
        rolls,
        point: state.point(),
        won,
        winnings: if won { bet * PAYOUT_MULTIPLIER } else { 0.0 },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::dice::ScriptedDice;

    fn roll(die1: Face, die2: Face) -> DiceRoll {
        DiceRoll::new(die1, die2).unwrap()
    }

    // === State Transition Tests ===

    #[test]
    fn test_come_out_transitions() {
        let come_out = RoundState::ComeOut;
        assert_eq!(
            come_out.advance(&roll(3, 4)),
            Step::Resolved(RoundOutcome::Natural)
        );
        assert_eq!(
            come_out.advance(&roll(5, 6)),
            Step::Resolved(RoundOutcome::Natural)
        );
        for (a, b) in [(1, 1), (1, 2), (6, 6)] {
            assert_eq!(
                come_out.advance(&roll(a, b)),
                Step::Resolved(RoundOutcome::Craps)
            );
        }
        for (a, b, point) in [
            (1, 3, 4), (2, 3, 5), (3, 3, 6), (4, 4, 8), (4, 5, 9), (5, 5, 10),
        ] {
            assert_eq!(
                come_out.advance(&roll(a, b)),
                Step::Continue(RoundState::Point(point))
            );
        }
    }

    #[test]
    fn test_point_transitions() {
        let chasing = RoundState::Point(6);
        assert_eq!(
            chasing.advance(&roll(2, 4)),
            Step::Resolved(RoundOutcome::PointMade)
        );
        assert_eq!(
            chasing.advance(&roll(6, 1)),
            Step::Resolved(RoundOutcome::SevenOut)
        );
        // Naturals and craps mean nothing once a point is set
        for (a, b) in [(5, 6), (1, 1), (1, 2), (6, 6), (4, 4)] {
            assert_eq!(chasing.advance(&roll(a, b)), Step::Continue(chasing));
        }
    }

    #[test]
    fn test_state_point() {
        assert_eq!(RoundState::ComeOut.point(), None);
        assert_eq!(RoundState::Point(9).point(), Some(9));
    }

    // === play_round Tests ===

    #[test]
    fn test_invalid_bets_rejected_before_rolling() {
        let mut dice = ScriptedDice::from_faces(&[(3, 4)]);
        for bet in [0.0, -5.0, f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let err = play_round(bet, &mut dice).unwrap_err();
            assert!(matches!(err, CrapsError::InvalidBet { .. }));
            assert!(err.to_string().starts_with("Invalid bet amount"));
        }
        assert_eq!(dice.rolls_thrown(), 0);
    }

    #[test]
    fn test_natural_seven_wins() {
        let mut dice = ScriptedDice::from_faces(&[(3, 4)]);
        let round = play_round(10.0, &mut dice).unwrap();
        assert!(round.won);
        assert_eq!(round.winnings, 20.0);
        assert_eq!(round.rolls.len(), 1);
        assert_eq!(round.rolls[0].total(), 7);
        assert_eq!(round.point, None);
    }

    #[test]
    fn test_natural_eleven_wins() {
        let mut dice = ScriptedDice::from_faces(&[(5, 6)]);
        let round = play_round(10.0, &mut dice).unwrap();
        assert!(round.won);
        assert_eq!(round.winnings, 20.0);
        assert_eq!(round.point, None);
    }

    #[test]
    fn test_craps_loses() {
        for faces in [(1, 1), (1, 2), (6, 6)] {
            let mut dice = ScriptedDice::from_faces(&[faces]);
            let round = play_round(10.0, &mut dice).unwrap();
            assert!(!round.won);
            assert_eq!(round.winnings, 0.0);
            assert_eq!(round.rolls.len(), 1);
            assert_eq!(round.point, None);
        }
    }

    #[test]
    fn test_point_made_after_chase() {
        let mut dice = ScriptedDice::from_faces(&[(4, 4), (2, 3), (4, 4)]);
        let round = play_round(10.0, &mut dice).unwrap();
        assert_eq!(round.point, Some(8));
        assert_eq!(round.rolls.len(), 3);
        assert!(round.won);
        assert_eq!(round.winnings, 20.0);
    }

    #[test]
    fn test_point_matched_with_different_faces() {
        let mut dice = ScriptedDice::from_faces(&[(3, 3), (2, 4)]);
        let round = play_round(10.0, &mut dice).unwrap();
        assert_eq!(round.point, Some(6));
        assert!(round.won);
        assert_eq!(round.rolls.len(), 2);
    }

    #[test]
    fn test_seven_out_loses() {
        let mut dice = ScriptedDice::from_faces(&[(2, 3), (6, 6), (1, 1), (3, 4)]);
        let round = play_round(25.0, &mut dice).unwrap();
        assert_eq!(round.point, Some(5));
        assert!(!round.won);
        assert_eq!(round.winnings, 0.0);
        assert_eq!(round.rolls.len(), 4);
        assert_eq!(round.outcome(), Some(RoundOutcome::SevenOut));
    }

    #[test]
    fn test_fractional_bet_pays_double() {
        let mut dice = ScriptedDice::from_faces(&[(5, 6)]);
        let round = play_round(7.5, &mut dice).unwrap();
        assert_eq!(round.winnings, 15.0);
    }

    #[test]
    fn test_round_consumes_only_its_rolls() {
        let mut dice = ScriptedDice::from_faces(&[(2, 2), (2, 2), (3, 4)]);
        play_round(5.0, &mut dice).unwrap();
        assert_eq!(dice.rolls_thrown(), 2);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(RoundOutcome::SevenOut.to_string(), "seven out");
        assert!(RoundOutcome::PointMade.is_win());
        assert!(!RoundOutcome::Craps.is_win());
    }
}
