//! Deck construction, shuffling, and dealing four 13-card hands.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::domain::rules::{DECK_SIZE, HAND_SIZE, PLAYERS};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

/// Generate a full 52-card deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Full deck shuffled with the given RNG (Fisher-Yates).
pub fn build_shuffled_deck_with<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = full_deck();
    deck.shuffle(rng);
    deck
}

/// Full deck shuffled from the thread RNG.
pub fn build_shuffled_deck() -> Vec<Card> {
    build_shuffled_deck_with(&mut rand::rng())
}

/// Full deck shuffled deterministically from `seed`.
pub fn build_shuffled_deck_seeded(seed: u64) -> Vec<Card> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    build_shuffled_deck_with(&mut rng)
}

/// Check that `deck` holds exactly the 52 distinct cards.
pub fn verify_deck_integrity(deck: &[Card]) -> Result<(), DomainError> {
    if deck.len() != DECK_SIZE {
        return Err(DomainError::deck_integrity(format!(
            "deck has {} cards, expected {DECK_SIZE}",
            deck.len()
        )));
    }
    let mut seen = [false; DECK_SIZE];
    for card in deck {
        let idx = card.index();
        if seen[idx] {
            return Err(DomainError::deck_integrity(format!(
                "duplicate card {card} in deck"
            )));
        }
        seen[idx] = true;
    }
    Ok(())
}

/// Deal the deck round-robin into four 13-card hands, each sorted for display.
///
/// A deck that is not exactly the 52 distinct cards is an engine defect.
pub fn deal(deck: &[Card]) -> Result<[Vec<Card>; PLAYERS], DomainError> {
    verify_deck_integrity(deck)?;

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for hand in hands.iter_mut() {
        hand.reserve(HAND_SIZE);
    }
    for (i, &card) in deck.iter().enumerate() {
        hands[i % PLAYERS].push(card);
    }
    for hand in hands.iter_mut() {
        hand.sort();
    }

    debug!(hand_size = HAND_SIZE, "Dealt four hands");
    Ok(hands)
}
