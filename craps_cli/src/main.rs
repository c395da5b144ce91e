//! Command-line front end for the craps simulator.
//!
//! Resolves game parameters from flags, environment and saved settings,
//! runs one game and prints the narrated log or a JSON dump.

mod config;
mod render;
mod settings;

use anyhow::{Context, Result, bail};
use craps::{GameParams, RngDice, ValidationReport, play_game, validate_game_params};
use log::{info, warn};
use pico_args::Arguments;
use std::path::PathBuf;

use config::{CliConfig, OutputMode, Overrides};

const HELP: &str = "\
Simulate a game of craps

USAGE:
  craps_cli [OPTIONS]

OPTIONS:
  --bankroll AMOUNT      Starting bankroll, 5-1000  [default: env CRAPS_BANKROLL, saved, or 100]
  --bet AMOUNT           Bet per round, 5-bankroll  [default: env CRAPS_BET, saved, or 5]
  --plays N              Rounds to play, 1-100      [default: env CRAPS_PLAYS, saved, or 10]
  --seed N               Seed the dice for a reproducible run [default: env CRAPS_SEED]
  --settings PATH        Last-used settings file    [default: env CRAPS_SETTINGS_FILE or .craps_settings.json]

FLAGS:
  --json                 Print the full result as JSON
  --quiet                Print only the summary
  --no-save              Don't remember these settings
  -h, --help             Print help information

ENVIRONMENT:
  RUST_LOG               Log level (e.g., debug)
  (A .env file in the working directory is read if present)
";

struct Args {
    overrides: Overrides,
    output: OutputMode,
    save: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let json = pargs.contains("--json");
    let quiet = pargs.contains("--quiet");
    let args = Args {
        overrides: Overrides {
            bankroll: pargs.opt_value_from_str("--bankroll")?,
            bet: pargs.opt_value_from_str("--bet")?,
            plays: pargs.opt_value_from_str("--plays")?,
            seed: pargs.opt_value_from_str("--seed")?,
            settings_path: pargs.opt_value_from_str::<_, PathBuf>("--settings")?,
        },
        output: match (json, quiet) {
            (true, _) => OutputMode::Json,
            (false, true) => OutputMode::Quiet,
            (false, false) => OutputMode::Text,
        },
        save: !pargs.contains("--no-save"),
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        bail!("unexpected arguments: {remaining:?}");
    }

    env_logger::builder().format_target(false).init();

    run(args)
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::from_env(args.overrides, settings::load_valid)
        .context("Failed to load configuration")?;

    let params = match prepare(&config, args.save) {
        Ok(params) => params,
        Err(report) => {
            eprint!("{}", render::validation(&report));
            std::process::exit(2);
        }
    };

    info!(
        "Playing up to {} rounds: bankroll {}, bet {}",
        params.plays(),
        params.bankroll,
        params.bet
    );
    let result = match config.seed {
        Some(seed) => play_game(&params, &mut RngDice::from_seed(seed)),
        None => play_game(&params, &mut RngDice::thread()),
    }
    .context("Simulation refused to run")?;

    if result.stopped_early(params.plays()) {
        info!(
            "Bankroll ran out after {} of {} rounds",
            result.games_played,
            params.plays()
        );
    }

    match args.output {
        OutputMode::Text => print!("{}", render::text(&params, &result)),
        OutputMode::Quiet => print!("{}", render::summary(&result)),
        OutputMode::Json => {
            let json = render::json(&result).context("Failed to serialize result")?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Validates the resolved params and, when `save` is set, remembers them
/// for the next run. Invalid params are never written.
fn prepare(config: &CliConfig, save: bool) -> Result<GameParams, ValidationReport> {
    let report = validate_game_params(&config.params);
    if !report.is_valid() {
        return Err(report);
    }

    if save && let Err(e) = settings::save(&config.settings_path, &config.params) {
        warn!(
            "Could not save settings to {}: {e}",
            config.settings_path.display()
        );
    }
    Ok(config.params)
}
