//! Runs a whole game: repeated rounds against one bankroll.

use log::debug;

use super::dice::DiceSource;
use super::entities::{Chips, Face, GameLogEntry, GameParams, GameResult, GameRound, LogKind};
use super::errors::{CrapsError, CrapsResult};
use super::state_machine::{RoundOutcome, RoundState, Step, play_round};
use super::validation::validate_game_params;

/// Plays up to `params.number_of_plays` rounds, stopping early once the
/// bankroll can no longer cover the bet.
///
/// Each call owns its bankroll, rounds and log; the only thing shared
/// with the caller is `dice`.
///
/// # Errors
///
/// Returns [`CrapsError::InvalidGameParameters`] when `params` fail
/// validation. Nothing is simulated in that case.
pub fn play_game<D: DiceSource + ?Sized>(
    params: &GameParams,
    dice: &mut D,
) -> CrapsResult<GameResult> {
    let report = validate_game_params(params);
    if !report.is_valid() {
        return Err(CrapsError::InvalidGameParameters(report));
    }

    let initial_bankroll = params.bankroll;
    let bet = params.bet;
    let mut bankroll = initial_bankroll;
    let mut rounds = Vec::new();
    let mut log = Vec::new();
    let mut games_played = 0;

    for _ in 0..params.plays() {
        if bankroll < bet {
            debug!("stopping after {games_played} games: bankroll {bankroll} < bet {bet}");
            log.push(
                GameLogEntry::new(
                    LogKind::GameEnd,
                    format!("Game ended: Insufficient bankroll ({bankroll}) for bet ({bet})"),
                )
                .with_bankroll(bankroll),
            );
            break;
        }

        bankroll -= bet;
        games_played += 1;
        log.push(
            GameLogEntry::new(
                LogKind::GameStart,
                format!("Game {games_played} started. Bet: {bet}, Bankroll after bet: {bankroll}"),
            )
            .with_bankroll(bankroll),
        );

        let round = play_round(bet, &mut *dice)?;
        narrate_round(&round, &mut log);
        bankroll += round.winnings;

        let (kind, verb) = if round.won {
            (LogKind::Win, "won")
        } else {
            (LogKind::Lose, "lost")
        };
        log.push(
            GameLogEntry::new(
                kind,
                format!(
                    "Game {games_played} {verb}. Winnings: {}. Bankroll: {bankroll}",
                    round.winnings
                ),
            )
            .with_bankroll(bankroll),
        );
        rounds.push(round);
    }

    let (total_won, total_lost) = net_totals(initial_bankroll, bankroll);
    let mut result = GameResult {
        initial_bankroll,
        final_bankroll: bankroll,
        total_won,
        total_lost,
        games_played,
        rounds,
        log,
    };

    let summary = format!(
        "Final results: Played {games_played} games. Started with {initial_bankroll}, ended with {bankroll}. {}",
        result.net_outcome()
    );
    debug!("{summary}");
    result
        .log
        .push(GameLogEntry::new(LogKind::GameEnd, summary).with_bankroll(bankroll));
    Ok(result)
}

/// Splits the overall bankroll delta into won and lost amounts. At most
/// one of the two is nonzero; swings inside the run are not counted.
fn net_totals(initial: Chips, last: Chips) -> (Chips, Chips) {
    let won = if last > initial { last - initial } else { 0.0 };
    let lost = if last < initial { initial - last } else { 0.0 };
    (won, lost)
}

/// Appends one roll entry per roll plus the point/win/lose entries each
/// roll triggers, replaying the round through the state machine.
fn narrate_round(round: &GameRound, log: &mut Vec<GameLogEntry>) {
    let mut state = RoundState::ComeOut;
    for roll in &round.rolls {
        let label = match state {
            RoundState::ComeOut => "Come out roll",
            RoundState::Point(_) => "Roll",
        };
        log.push(GameLogEntry::new(LogKind::Roll, format!("{label}: {roll}")).with_roll(*roll));

        match state.advance(roll) {
            Step::Continue(RoundState::Point(point)) if state == RoundState::ComeOut => {
                log.push(
                    GameLogEntry::new(LogKind::PointSet, format!("Point is set to {point}"))
                        .with_point(point),
                );
                state = RoundState::Point(point);
            }
            Step::Continue(next) => state = next,
            Step::Resolved(outcome) => {
                log.push(resolution_entry(outcome, roll.total(), state.point()));
                break;
            }
        }
    }
}

fn resolution_entry(outcome: RoundOutcome, total: Face, point: Option<Face>) -> GameLogEntry {
    match outcome {
        RoundOutcome::Natural => {
            GameLogEntry::new(LogKind::Win, format!("Natural {total}! You win!"))
        }
        RoundOutcome::Craps => GameLogEntry::new(LogKind::Lose, "Craps! You lose."),
        RoundOutcome::PointMade => GameLogEntry::new(
            LogKind::Win,
            format!("Matched the point {}! You win!", point.unwrap_or(total)),
        ),
        RoundOutcome::SevenOut => GameLogEntry::new(LogKind::Lose, "Rolled 7. You lose."),
    }
}
