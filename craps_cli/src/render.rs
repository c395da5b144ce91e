//! Output formatting for game results.

use craps::{GameParams, GameResult, NetOutcome, ParamField, ValidationReport};
use std::fmt::Write;

/// Full narration: header, every log entry, then the summary block.
pub fn text(params: &GameParams, result: &GameResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Bankroll: ${}  Bet: ${}  Plays: {}",
        params.bankroll,
        params.bet,
        params.plays()
    );
    let _ = writeln!(out);
    for entry in &result.log {
        let _ = writeln!(out, "{:>10}  {}", entry.kind.to_string(), entry.message);
    }
    let _ = writeln!(out);
    out.push_str(&summary(result));
    out
}

/// Just the totals.
pub fn summary(result: &GameResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Games Played:    {}", result.games_played);
    let _ = writeln!(
        out,
        "Rounds Won/Lost: {}/{}",
        result.rounds_won(),
        result.rounds_lost()
    );
    let _ = writeln!(out, "Initial Bankroll: ${}", result.initial_bankroll);
    let _ = writeln!(out, "Final Bankroll:   ${}", result.final_bankroll);
    let _ = match result.net_outcome() {
        NetOutcome::Won(amount) => writeln!(out, "Total Won:  +${amount}"),
        NetOutcome::Lost(amount) => writeln!(out, "Total Lost: -${amount}"),
        NetOutcome::BrokeEven => writeln!(out, "Broke even"),
    };
    out
}

/// The whole result as pretty JSON.
///
/// # Errors
///
/// Returns error if serialization fails
pub fn json(result: &GameResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// One line per rejected field.
pub fn validation(report: &ValidationReport) -> String {
    let mut out = String::from("Invalid game parameters:\n");
    for (field, message) in &report.errors {
        let _ = writeln!(out, "  --{}: {message}", flag_for(*field));
    }
    out
}

fn flag_for(field: ParamField) -> &'static str {
    match field {
        ParamField::Bankroll => "bankroll",
        ParamField::Bet => "bet",
        ParamField::NumberOfPlays => "plays",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craps::{ScriptedDice, play_game, validate_game_params};

    fn run(faces: &[(u8, u8)], params: GameParams) -> GameResult {
        play_game(&params, &mut ScriptedDice::from_faces(faces)).unwrap()
    }

    #[test]
    fn test_text_contains_log_and_summary() {
        let params = GameParams::new(100.0, 10.0, 1);
        let out = text(&params, &run(&[(3, 4)], params));
        assert!(out.starts_with("Bankroll: $100  Bet: $10  Plays: 1"));
        assert!(out.contains("Come out roll: 3 + 4 = 7"));
        assert!(out.contains("game-start"));
        assert!(out.contains("Total Won:  +$10"));
    }

    #[test]
    fn test_summary_outcomes() {
        let params = GameParams::new(100.0, 10.0, 1);
        assert!(summary(&run(&[(1, 1)], params)).contains("Total Lost: -$10"));

        let params = GameParams::new(100.0, 10.0, 2);
        let even = summary(&run(&[(3, 4), (1, 1)], params));
        assert!(even.contains("Broke even"));
        assert!(even.contains("Rounds Won/Lost: 1/1"));
    }

    #[test]
    fn test_json_output() {
        let params = GameParams::new(100.0, 10.0, 1);
        let out = json(&run(&[(3, 4)], params)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["finalBankroll"], 110.0);
        assert_eq!(value["log"][0]["kind"], "game-start");
    }

    #[test]
    fn test_validation_lists_flags() {
        let report = validate_game_params(&GameParams::new(2000.0, 3.0, 150));
        let out = validation(&report);
        assert!(out.contains("--bankroll: Bankroll must be between 5 and 1000"));
        assert!(out.contains("--bet: Bet must be at least 5"));
        assert!(out.contains("--plays: Number of plays must be between 1 and 100"));
    }
}
