//! Deal lifecycle on the game state: deal, collect passes, open trick play.

use tracing::{debug, info};

use crate::domain::dealing::deal;
use crate::domain::passing::{transfer_passes, validate_pass_selection, PassDirection};
use crate::domain::rules::{DECK_SIZE, PASS_SIZE, PLAYERS};
use crate::domain::state::{
    phase_mismatch, require_phase, require_seat, DealState, GameState, Phase, Seat,
};
use crate::domain::tricks::Trick;
use crate::domain::{Card, TWO_OF_CLUBS};
use crate::errors::domain::{DomainError, ValidationKind};

/// What `submit_pass` did with a seat's selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassProgress {
    /// Stored; still waiting on this many seats.
    Waiting { remaining: u8 },
    /// Fourth selection arrived; all passes applied and trick play opened.
    Applied { first_leader: Seat },
}

/// Deal `deck` for the current `deal_no` and reset all deal-scoped state.
///
/// Allowed from `Init` (first deal) or `Complete` (after scoring). On a hold
/// deal the game goes straight to trick play.
pub fn start_deal(state: &mut GameState, deck: &[Card]) -> Result<PassDirection, DomainError> {
    if !matches!(state.phase, Phase::Init | Phase::Complete) {
        return Err(phase_mismatch(state, "start_deal"));
    }

    let hands = deal(deck)?;
    state.deal = DealState::new(hands, state.deal_no);
    let direction = state.deal.pass_direction;
    info!(deal_no = state.deal_no, ?direction, "Dealing new hand");

    if direction.passes_cards() {
        state.phase = Phase::Passing;
        state.turn = None;
        debug!(deal_no = state.deal_no, "Transition: -> Passing");
    } else {
        begin_trick_play(state)?;
    }
    Ok(direction)
}

/// Validate and store one seat's pass selection.
///
/// Selections are checked against the seat's pre-pass hand. Once all four
/// are in, the cards move together and the 2♣ holder gets the lead.
pub fn submit_pass(
    state: &mut GameState,
    seat: Seat,
    selection: &[Card],
) -> Result<PassProgress, DomainError> {
    require_phase(state, Phase::Passing, "submit_pass")?;
    require_seat(seat)?;

    if state.deal.pending_passes[seat as usize].is_some() {
        return Err(DomainError::validation(
            ValidationKind::PassAlreadySubmitted,
            format!("Seat {seat} already passed this deal"),
        ));
    }

    let chosen = validate_pass_selection(state.hand(seat), selection)?;
    state.deal.pending_passes[seat as usize] = Some(chosen);
    debug!(deal_no = state.deal_no, seat, "Pass selection accepted");

    let remaining = state
        .deal
        .pending_passes
        .iter()
        .filter(|p| p.is_none())
        .count() as u8;
    if remaining > 0 {
        return Ok(PassProgress::Waiting { remaining });
    }

    let mut validated = [[TWO_OF_CLUBS; PASS_SIZE]; PLAYERS];
    for (slot, pending) in validated.iter_mut().zip(state.deal.pending_passes.iter_mut()) {
        *slot = pending
            .take()
            .ok_or_else(|| DomainError::deck_integrity("pass selection vanished"))?;
    }
    transfer_passes(&mut state.deal.hands, state.deal.pass_direction, &validated);

    let first_leader = begin_trick_play(state)?;
    Ok(PassProgress::Applied { first_leader })
}

/// Seat holding the two of clubs.
pub fn find_two_of_clubs(hands: &[Vec<Card>; PLAYERS]) -> Result<Seat, DomainError> {
    hands
        .iter()
        .position(|h| h.contains(&TWO_OF_CLUBS))
        .map(|p| p as Seat)
        .ok_or_else(|| DomainError::deck_integrity("no seat holds the 2♣"))
}

fn begin_trick_play(state: &mut GameState) -> Result<Seat, DomainError> {
    let leader = find_two_of_clubs(&state.deal.hands)?;
    state.deal.trick = Trick::new(leader);
    state.phase = Phase::Trick { trick_no: 1 };
    state.turn = Some(leader);
    debug!(deal_no = state.deal_no, leader, "Transition: -> Trick");
    Ok(leader)
}

/// Cards accounted for this deal: hands, the open trick, and won piles.
///
/// Equals 52 at every point after a deal starts.
pub fn card_conservation(state: &GameState) -> usize {
    let in_hands: usize = state.deal.hands.iter().map(Vec::len).sum();
    let in_trick = state.deal.trick.plays.len();
    let won: usize = state.deal.won_cards.iter().map(Vec::len).sum();
    in_hands + in_trick + won
}

/// Fail with `DeckIntegrity` if any card went missing or was duplicated.
pub fn check_conservation(state: &GameState) -> Result<(), DomainError> {
    let total = card_conservation(state);
    if total != DECK_SIZE {
        return Err(DomainError::deck_integrity(format!(
            "deal {} accounts for {total} cards",
            state.deal_no
        )));
    }
    Ok(())
}
