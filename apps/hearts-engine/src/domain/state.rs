use crate::domain::passing::{pass_direction, PassDirection};
use crate::domain::rules::{PASS_SIZE, PLAYERS};
use crate::domain::tricks::Trick;
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

pub type Seat = u8; // 0..=3

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Game created, nothing dealt yet.
    Init,
    /// Seats nominate the cards they pass.
    Passing,
    /// Playing tricks within the deal; `trick_no` is 1-based.
    Trick { trick_no: u8 },
    /// All 13 tricks played; tally deal points.
    Scoring,
    /// Deal scored, next deal not yet started.
    Complete,
    /// Some seat reached the losing total.
    GameOver,
}

/// Deal-scoped state: reset at the start of every deal.
#[derive(Debug, Clone)]
pub struct DealState {
    /// Players' hands.
    pub hands: [Vec<Card>; PLAYERS],
    /// Set the first time a heart is played this deal; never cleared mid-deal.
    pub hearts_broken: bool,
    /// Direction for this deal's pass.
    pub pass_direction: PassDirection,
    /// Validated selections waiting for the other seats (Passing phase only).
    pub pending_passes: [Option<[Card; PASS_SIZE]>; PLAYERS],
    /// Trick being played.
    pub trick: Trick,
    /// Cards from tricks each seat has won this deal.
    pub won_cards: [Vec<Card>; PLAYERS],
    /// Tricks won per seat this deal.
    pub tricks_won: [u8; PLAYERS],
    /// Last sealed trick, kept for display.
    pub last_trick: Option<Trick>,
}

impl DealState {
    pub fn new(hands: [Vec<Card>; PLAYERS], deal_no: u32) -> Self {
        Self {
            hands,
            hearts_broken: false,
            pass_direction: pass_direction(deal_no),
            pending_passes: [None; PLAYERS],
            trick: Trick::new(0),
            won_cards: Default::default(),
            tricks_won: [0; PLAYERS],
            last_trick: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(Default::default(), 0)
    }
}

/// Entire game container threaded through every engine operation.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase.
    pub phase: Phase,
    /// Deal counter (0-based); `deal_no % 4` selects the pass direction.
    pub deal_no: u32,
    /// The game ends once any cumulative score reaches this.
    pub losing_total: u16,
    /// Cumulative scores across deals.
    pub scores_total: [u16; PLAYERS],
    /// Seat whose turn it is to play.
    /// - Some(seat) during trick play
    /// - None otherwise (passing is simultaneous)
    pub turn: Option<Seat>,
    /// Per-deal container.
    pub deal: DealState,
}

impl GameState {
    pub fn new(losing_total: u16) -> Self {
        Self {
            phase: Phase::Init,
            deal_no: 0,
            losing_total,
            scores_total: [0; PLAYERS],
            turn: None,
            deal: DealState::empty(),
        }
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.deal.hands[seat as usize]
    }

    pub fn trick_no(&self) -> Option<u8> {
        match self.phase {
            Phase::Trick { trick_no } => Some(trick_no),
            _ => None,
        }
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
/// Counter-clockwise direction is negative (-1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: Seat, n: u8) -> Seat {
    seat_offset(start, (n % PLAYERS as u8) as i8)
}

/// Expected actor seat during a trick.
///
/// `leader` led the trick; `play_count` is how many cards are already in it.
#[inline]
pub fn expected_actor(leader: Seat, play_count: u8) -> Seat {
    nth_from(leader, play_count)
}

pub fn require_seat(seat: Seat) -> Result<Seat, DomainError> {
    if (seat as usize) < PLAYERS {
        Ok(seat)
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidSeat,
            format!("Seat {seat} is not at the table"),
        ))
    }
}

pub fn require_phase(
    state: &GameState,
    expected: Phase,
    ctx: &'static str,
) -> Result<(), DomainError> {
    if state.phase == expected {
        Ok(())
    } else {
        Err(phase_mismatch(state, ctx))
    }
}

pub fn phase_mismatch(state: &GameState, ctx: &'static str) -> DomainError {
    DomainError::validation(
        ValidationKind::PhaseMismatch,
        format!("Phase mismatch: {ctx} not allowed in {:?}", state.phase),
    )
}
