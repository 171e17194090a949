//! Player view of game state - what a seat may see at its decision point.
//!
//! This is what the game flow hands to a `TablePort` with every request. It
//! carries only the seat's own hand plus public information, and offers
//! `legal_plays()` so collaborators never re-implement the rules.

use serde::Serialize;

use crate::domain::passing::PassDirection;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{GameState, Phase, Seat};
use crate::domain::tricks::{legal_moves, Trick};
use crate::domain::{Card, Suit};

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    /// Your seat (0-3)
    pub seat: Seat,

    /// Deal number (0-based); `deal_no % 4` fixes the pass direction
    pub deal_no: u32,

    /// Pass direction for this deal
    pub pass_direction: PassDirection,

    /// Trick number (1..=13) during trick play, None otherwise
    pub trick_no: Option<u8>,

    /// Your current hand, sorted
    pub hand: Vec<Card>,

    /// Plays made so far in the current trick, in order
    pub trick_so_far: Vec<(Seat, Card)>,

    /// Suit of the first card in the current trick
    pub lead_suit: Option<Suit>,

    /// Whether a heart has been played this deal
    pub hearts_broken: bool,

    /// Cumulative scores, indexed by seat
    pub scores: [u16; PLAYERS],

    /// Last completed trick, for display
    pub last_trick: Option<Trick>,

    legal: Vec<Card>,
}

impl PlayerView {
    pub fn for_seat(state: &GameState, seat: Seat) -> Self {
        let mut hand = state.hand(seat).to_vec();
        hand.sort();
        let trick_no = match state.phase {
            Phase::Trick { trick_no } => Some(trick_no),
            _ => None,
        };
        Self {
            seat,
            deal_no: state.deal_no,
            pass_direction: state.deal.pass_direction,
            trick_no,
            hand,
            trick_so_far: state.deal.trick.plays.clone(),
            lead_suit: state.deal.trick.lead_suit(),
            hearts_broken: state.deal.hearts_broken,
            scores: state.scores_total,
            last_trick: state.deal.last_trick.clone(),
            legal: legal_moves(state, seat),
        }
    }

    /// Cards this seat may play right now (empty outside trick play).
    pub fn legal_plays(&self) -> &[Card] {
        &self.legal
    }
}
