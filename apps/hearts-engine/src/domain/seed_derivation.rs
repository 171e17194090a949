//! RNG seed derivation for reproducible games.
//!
//! A single game seed fans out into one dealing seed per deal so that a game
//! can be replayed deal by deal from its seed alone.

/// Derive a seed for dealing cards in a deal.
///
/// # Arguments
///
/// * `game_seed` - Base RNG seed for the game
/// * `deal_no` - Deal number (0-based)
///
/// # Returns
///
/// Derived seed that is unique per (game, deal) combination.
pub fn derive_dealing_seed(game_seed: u64, deal_no: u32) -> u64 {
    game_seed
        .wrapping_add((deal_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}
