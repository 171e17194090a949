//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deal_lifecycle;
pub mod dealing;
pub mod fixtures;
pub mod passing;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_integration;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use cards_logic::{
    card_beats, cards_points, hand_has_non_point_card, hand_has_suit, sort_hand,
};
pub use cards_parsing::{format_cards, try_parse_cards};
pub use cards_types::{Card, Rank, Suit, QUEEN_OF_SPADES, TWO_OF_CLUBS};
pub use deal_lifecycle::{
    card_conservation, check_conservation, find_two_of_clubs, start_deal, submit_pass,
    PassProgress,
};
pub use dealing::{
    build_shuffled_deck, build_shuffled_deck_seeded, build_shuffled_deck_with, deal, full_deck,
    verify_deck_integrity,
};
pub use passing::{apply_pass, pass_direction, validate_pass_selection, PassDirection};
pub use player_view::PlayerView;
pub use scoring::{
    apply_deal_scoring, deal_points, is_game_over, losers, score_deltas, DealOutcome,
};
pub use seed_derivation::derive_dealing_seed;
pub use state::{next_seat, GameState, Phase, Seat};
pub use tricks::{
    legal_moves, play_card, validate_play, winning_play, PlayCardResult, Trick, TrickStage,
};
