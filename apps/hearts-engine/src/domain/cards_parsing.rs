//! Card text forms: parsing from tokens ("QS", "TD", "Q♠", "10♥") and display ("Q♠").

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err =
            || DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"));

        let mut chars = s.chars();
        let suit_ch = chars.next_back().ok_or_else(parse_err)?;
        let rank = match chars.as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(parse_err()),
        };
        let suit = match suit_ch {
            'C' | '♣' => Suit::Clubs,
            'D' | '♦' => Suit::Diamonds,
            'S' | '♠' => Suit::Spades,
            'H' | '♥' => Suit::Hearts,
            _ => return Err(parse_err()),
        };
        Ok(Card { suit, rank })
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl Card {
    /// Compact two-character ASCII token, e.g. `QS`, `TD`.
    pub fn token(self) -> String {
        format!("{}{}", self.rank.letter(), self.suit.letter())
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AS", "2C") into Card instances.
/// Returns the first parse error if any token is invalid.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().trim().parse::<Card>())
        .collect()
}

/// Space-separated display of a run of cards, e.g. `2♣ 10♦ Q♠`.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
