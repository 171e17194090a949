//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// True if the hand holds at least one card worth no points.
pub fn hand_has_non_point_card(hand: &[Card]) -> bool {
    hand.iter().any(|c| !c.is_point_card())
}

/// Total penalty points in a pile of cards.
pub fn cards_points(cards: &[Card]) -> u8 {
    cards.iter().map(|c| c.points()).sum()
}

/// Does `a` beat `b` in a trick led with `lead`? Hearts has no trump: only
/// lead-suit cards can win, and among them rank decides.
pub fn card_beats(a: Card, b: Card, lead: Suit) -> bool {
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    if a_follows && b_follows {
        return a.rank > b.rank;
    }
    false
}

/// Sort a hand for display: suit then rank.
pub fn sort_hand(hand: &mut [Card]) {
    hand.sort();
}
