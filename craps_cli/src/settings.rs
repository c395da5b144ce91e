//! Last-used game settings, kept as a small JSON file.

use craps::{GameParams, validate_game_params};
use log::{debug, warn};
use std::{fs, io, path::Path};
use thiserror::Error;

pub const DEFAULT_SETTINGS_FILE: &str = ".craps_settings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reads saved settings. A missing file is not an error.
///
/// # Errors
///
/// Returns error if the file exists but can't be read or parsed
pub fn load(path: &Path) -> Result<Option<GameParams>, SettingsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Like [`load`], but anything unreadable or invalid is dropped with a
/// warning so a bad file never blocks a run.
pub fn load_valid(path: &Path) -> Option<GameParams> {
    match load(path) {
        Ok(Some(params)) if validate_game_params(&params).is_valid() => {
            debug!("Loaded saved settings from {}", path.display());
            Some(params)
        }
        Ok(Some(_)) => {
            warn!("Ignoring saved settings in {}: out of range", path.display());
            None
        }
        Ok(None) => None,
        Err(e) => {
            warn!("Ignoring saved settings in {}: {e}", path.display());
            None
        }
    }
}

/// Writes `params` as the new last-used settings.
///
/// # Errors
///
/// Returns error if the file can't be written
pub fn save(path: &Path, params: &GameParams) -> Result<(), SettingsError> {
    let json = serde_json::to_string_pretty(params)?;
    fs::write(path, json)?;
    debug!("Saved settings to {}", path.display());
    Ok(())
}
