pub const PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 52;
pub const HAND_SIZE: usize = 13;
pub const TRICKS_PER_DEAL: u8 = 13;
pub const PASS_SIZE: usize = 3;

/// All penalty points in the deck: 13 hearts plus the queen of spades.
pub const MOON_POINTS: u8 = 26;

pub const DEFAULT_LOSING_TOTAL: u16 = 100;
