//! Pass direction rotation and the simultaneous three-card pass.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::rules::{PASS_SIZE, PLAYERS};
use crate::domain::state::{seat_offset, Seat};
use crate::domain::{Card, TWO_OF_CLUBS};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PassDirection {
    Left,
    Right,
    Across,
    /// No pass this deal ("hold hand").
    Hold,
}

/// Rotation keyed by `deal_no % 4`.
const PASS_CYCLE: [PassDirection; 4] = [
    PassDirection::Left,
    PassDirection::Right,
    PassDirection::Across,
    PassDirection::Hold,
];

impl PassDirection {
    /// Seat offset from giver to receiver; `None` when no cards move.
    pub fn seat_delta(self) -> Option<i8> {
        match self {
            PassDirection::Left => Some(1),
            PassDirection::Right => Some(-1),
            PassDirection::Across => Some(2),
            PassDirection::Hold => None,
        }
    }

    /// Seat receiving the cards `from` passes (itself when holding).
    pub fn recipient(self, from: Seat) -> Seat {
        seat_offset(from, self.seat_delta().unwrap_or(0))
    }

    pub fn passes_cards(self) -> bool {
        self.seat_delta().is_some()
    }
}

pub fn pass_direction(deal_no: u32) -> PassDirection {
    PASS_CYCLE[(deal_no % PASS_CYCLE.len() as u32) as usize]
}

/// Validate one seat's nomination against its current hand.
///
/// Checks, in order: exactly three cards, no duplicates, every card held.
pub fn validate_pass_selection(
    hand: &[Card],
    selection: &[Card],
) -> Result<[Card; PASS_SIZE], DomainError> {
    let chosen: [Card; PASS_SIZE] = selection.try_into().map_err(|_| {
        DomainError::validation(
            ValidationKind::InvalidPassCount,
            format!("Must pass exactly {PASS_SIZE} cards, got {}", selection.len()),
        )
    })?;

    for (i, card) in chosen.iter().enumerate() {
        if chosen[..i].contains(card) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateCardInPass,
                format!("{card} nominated more than once"),
            ));
        }
    }

    if let Some(missing) = chosen.iter().find(|c| !hand.contains(c)) {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("Card not in hand: {missing}"),
        ));
    }

    Ok(chosen)
}

/// Apply all four passes at once.
///
/// Every selection is validated against the pre-pass hands before anything
/// moves; on any error no hand is touched. `Hold` is a no-op.
pub fn apply_pass(
    hands: &mut [Vec<Card>; PLAYERS],
    direction: PassDirection,
    chosen: &[Vec<Card>; PLAYERS],
) -> Result<(), DomainError> {
    if !direction.passes_cards() {
        return Ok(());
    }

    let mut validated = [[TWO_OF_CLUBS; PASS_SIZE]; PLAYERS];
    for (slot, (hand, selection)) in validated.iter_mut().zip(hands.iter().zip(chosen.iter())) {
        *slot = validate_pass_selection(hand, selection)?;
    }
    transfer_passes(hands, direction, &validated);
    Ok(())
}

/// Move already-validated selections between hands.
pub(crate) fn transfer_passes(
    hands: &mut [Vec<Card>; PLAYERS],
    direction: PassDirection,
    validated: &[[Card; PASS_SIZE]; PLAYERS],
) {
    for (seat, outgoing) in validated.iter().enumerate() {
        hands[seat].retain(|c| !outgoing.contains(c));
    }
    for (seat, outgoing) in validated.iter().enumerate() {
        let to = direction.recipient(seat as Seat);
        hands[to as usize].extend_from_slice(outgoing);
        debug!(from = seat, to, ?direction, "Passed cards");
    }
    for hand in hands.iter_mut() {
        hand.sort();
    }
}
