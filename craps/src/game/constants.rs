use super::entities::Chips;

/// Smallest bankroll a run may start with.
pub const MIN_BANKROLL: Chips = 5.0;
/// Largest bankroll a run may start with.
pub const MAX_BANKROLL: Chips = 1000.0;
/// Table minimum. There is no table maximum beyond the bankroll itself.
pub const MIN_BET: Chips = 5.0;
pub const MIN_PLAYS: u32 = 1;
pub const MAX_PLAYS: u32 = 100;

pub const DEFAULT_BANKROLL: Chips = 100.0;
pub const DEFAULT_BET: Chips = 5.0;
pub const DEFAULT_PLAYS: u32 = 10;

/// Winning rounds pay even money, so the player collects twice the wager.
pub const PAYOUT_MULTIPLIER: Chips = 2.0;

pub const NATURALS: [u8; 2] = [7, 11];
pub const CRAPS: [u8; 3] = [2, 3, 12];
pub const SEVEN: u8 = 7;
