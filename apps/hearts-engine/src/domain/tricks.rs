use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::rules::{PLAYERS, TRICKS_PER_DEAL};
use crate::domain::state::{
    expected_actor, phase_mismatch, require_seat, GameState, Phase, Seat,
};
use crate::domain::{
    card_beats, cards_points, hand_has_non_point_card, hand_has_suit, Card, Suit, TWO_OF_CLUBS,
};
use crate::errors::domain::{DomainError, ValidationKind};

/// One trick: the leading seat and the plays made so far, in rotation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    pub leader: Seat,
    pub plays: Vec<(Seat, Card)>,
}

/// Where a trick is in its four-play cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrickStage {
    AwaitingLead,
    /// Number of cards already played (1..=3).
    AwaitingFollow(u8),
    Complete,
}

impl Trick {
    pub fn new(leader: Seat) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(PLAYERS),
        }
    }

    pub fn stage(&self) -> TrickStage {
        match self.plays.len() {
            0 => TrickStage::AwaitingLead,
            n if n < PLAYERS => TrickStage::AwaitingFollow(n as u8),
            _ => TrickStage::Complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.stage() == TrickStage::Complete
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|(_, c)| c.suit)
    }

    /// Seat expected to play next, or `None` once sealed.
    pub fn next_actor(&self) -> Option<Seat> {
        if self.is_complete() {
            return None;
        }
        Some(expected_actor(self.leader, self.plays.len() as u8))
    }

    pub fn cards(&self) -> Vec<Card> {
        self.plays.iter().map(|&(_, c)| c).collect()
    }

    pub fn points(&self) -> u8 {
        cards_points(&self.cards())
    }
}

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether a trick was completed (4 cards played).
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    /// Points in the completed trick (0 while the trick is open).
    pub trick_points: u8,
    /// Trick number after this play (may have incremented if trick completed).
    pub trick_no_after: u8,
    /// Phase transitioned to, if any (None means still in Trick phase).
    pub phase_transitioned: Option<Phase>,
    /// The sealed trick, when this play completed it.
    pub sealed_trick: Option<Trick>,
}

/// Index into `trick.plays` and seat of the winning play, once the trick is complete.
///
/// The highest card of the lead suit wins; nothing else can.
pub fn winning_play(trick: &Trick) -> Option<(usize, Seat)> {
    if !trick.is_complete() {
        return None;
    }
    let lead = trick.lead_suit()?;

    let mut best_idx = 0usize;
    for i in 1..trick.plays.len() {
        let (_, card_i) = trick.plays[i];
        let (_, card_best) = trick.plays[best_idx];
        if card_beats(card_i, card_best, lead) {
            best_idx = i;
        }
    }
    let winner = expected_actor(trick.leader, best_idx as u8);
    Some((best_idx, winner))
}

/// Check whether `seat` may play `card` into the current trick.
///
/// Rules are applied in precedence order and the first that matches decides:
/// 1. opening lead of the deal must be the two of clubs;
/// 2. a point card may be led only once hearts are broken, or when the hand
///    holds nothing else;
/// 3. followers must match the lead suit when they can;
/// 4. the card must be in the seat's hand.
pub fn validate_play(
    state: &GameState,
    trick_no: u8,
    seat: Seat,
    card: Card,
) -> Result<(), DomainError> {
    let hand = state.hand(seat);
    let trick = &state.deal.trick;

    match trick.lead_suit() {
        None if trick_no == 1 => {
            if card != TWO_OF_CLUBS {
                return Err(DomainError::validation(
                    ValidationKind::MustLeadTwoOfClubs,
                    "First lead of the deal must be the 2♣",
                ));
            }
        }
        None => {
            if card.is_point_card()
                && !state.deal.hearts_broken
                && hand_has_non_point_card(hand)
            {
                return Err(DomainError::validation(
                    ValidationKind::PointCardNotYetAllowed,
                    format!("Cannot lead {card} before hearts are broken"),
                ));
            }
        }
        Some(lead) => {
            if card.suit != lead && hand_has_suit(hand, lead) {
                return Err(DomainError::validation(
                    ValidationKind::MustFollowSuit,
                    "Must follow suit",
                ));
            }
        }
    }

    if !hand.contains(&card) {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("Card not in hand: {card}"),
        ));
    }

    Ok(())
}

/// Compute legal cards the seat may play, independent of turn enforcement.
///
/// Every returned card passes `validate_play`; every omitted card fails it.
pub fn legal_moves(state: &GameState, seat: Seat) -> Vec<Card> {
    let Phase::Trick { trick_no } = state.phase else {
        return Vec::new();
    };
    if require_seat(seat).is_err() {
        return Vec::new();
    }

    let mut legal: Vec<Card> = state
        .hand(seat)
        .iter()
        .copied()
        .filter(|&c| validate_play(state, trick_no, seat, c).is_ok())
        .collect();
    legal.sort();
    legal
}

/// Play a card into the current trick, enforcing phase, turn, and the play rules.
///
/// Rejections leave the state untouched.
pub fn play_card(
    state: &mut GameState,
    seat: Seat,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    let Phase::Trick {
        trick_no: trick_no_before,
    } = state.phase
    else {
        return Err(phase_mismatch(state, "play_card"));
    };
    require_seat(seat)?;

    let expected = state.deal.trick.next_actor();
    if expected != Some(seat) || state.turn != Some(seat) {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("Out of turn: seat {seat} played, expected {expected:?}"),
        ));
    }

    validate_play(state, trick_no_before, seat, card)?;

    // Commit: validation guarantees the card is present.
    let hand = &mut state.deal.hands[seat as usize];
    hand.retain(|&c| c != card);
    state.deal.trick.plays.push((seat, card));
    // Hearts played on the opening trick do not break hearts.
    if card.is_heart() && trick_no_before > 1 && !state.deal.hearts_broken {
        state.deal.hearts_broken = true;
        debug!(seat, trick_no = trick_no_before, "Hearts broken");
    }

    let mut result = PlayCardResult {
        trick_completed: false,
        trick_winner: None,
        trick_points: 0,
        trick_no_after: trick_no_before,
        phase_transitioned: None,
        sealed_trick: None,
    };

    if !state.deal.trick.is_complete() {
        state.turn = state.deal.trick.next_actor();
        return Ok(result);
    }

    let (_, winner) = winning_play(&state.deal.trick).ok_or_else(|| {
        DomainError::deck_integrity("complete trick produced no winner")
    })?;
    let sealed = std::mem::replace(&mut state.deal.trick, Trick::new(winner));
    let points = sealed.points();

    state.deal.won_cards[winner as usize].extend(sealed.cards());
    state.deal.tricks_won[winner as usize] += 1;
    state.deal.last_trick = Some(sealed.clone());
    state.turn = Some(winner);

    debug!(
        trick_no = trick_no_before,
        winner,
        points,
        "Trick complete"
    );

    result.trick_completed = true;
    result.trick_winner = Some(winner);
    result.trick_points = points;
    result.sealed_trick = Some(sealed);

    let next_trick_no = trick_no_before.saturating_add(1);
    result.trick_no_after = next_trick_no;

    if next_trick_no > TRICKS_PER_DEAL {
        state.phase = Phase::Scoring;
        state.turn = None;
        result.phase_transitioned = Some(Phase::Scoring);
        debug!("Transition: Trick -> Scoring");
        return Ok(result);
    }

    state.phase = Phase::Trick {
        trick_no: next_trick_no,
    };
    Ok(result)
}
