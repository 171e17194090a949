//! `TablePort` implementations used by the game-flow tests.

use hearts_engine::domain::{Card, DealOutcome, PlayerView, Seat, Trick};
use hearts_engine::{DomainError, TablePort, ValidationKind};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Passes random cards and plays a random legal card, from a seeded RNG.
pub struct RandomLegalTable {
    rng: ChaCha8Rng,
    pub tricks_seen: usize,
    pub deals_seen: Vec<DealOutcome>,
    pub rejections: Vec<(Seat, ValidationKind)>,
}

impl RandomLegalTable {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            tricks_seen: 0,
            deals_seen: Vec::new(),
            rejections: Vec::new(),
        }
    }
}

impl TablePort for RandomLegalTable {
    fn request_pass_selection(&mut self, view: &PlayerView) -> Vec<Card> {
        let mut hand = view.hand.clone();
        hand.shuffle(&mut self.rng);
        hand.truncate(3);
        hand
    }

    fn request_play(&mut self, view: &PlayerView) -> Card {
        let legal = view.legal_plays();
        legal[self.rng.random_range(0..legal.len())]
    }

    fn notify_trick_complete(&mut self, trick: &Trick, winner: Seat) {
        assert_eq!(trick.plays.len(), 4);
        assert!(trick.plays.iter().any(|&(seat, _)| seat == winner));
        self.tricks_seen += 1;
    }

    fn notify_deal_complete(&mut self, outcome: &DealOutcome) {
        self.deals_seen.push(outcome.clone());
    }

    fn notify_rejected(&mut self, seat: Seat, error: &DomainError) {
        if let Some(kind) = error.kind() {
            self.rejections.push((seat, kind));
        }
    }
}

/// Tries one bad intent per request before making a legal one.
///
/// Passes two cards first, then three; plays a card it does not hold first,
/// then its lowest legal card.
#[derive(Default)]
pub struct OneMistakeTable {
    erred_last: bool,
    pub rejections: Vec<(Seat, ValidationKind)>,
}

impl OneMistakeTable {
    fn make_mistake(&mut self) -> bool {
        self.erred_last = !self.erred_last;
        self.erred_last
    }
}

impl TablePort for OneMistakeTable {
    fn request_pass_selection(&mut self, view: &PlayerView) -> Vec<Card> {
        let count = if self.make_mistake() { 2 } else { 3 };
        view.hand[..count].to_vec()
    }

    fn request_play(&mut self, view: &PlayerView) -> Card {
        if self.make_mistake() {
            if let Some(card) = card_not_held(view) {
                return card;
            }
        }
        view.legal_plays()[0]
    }

    fn notify_rejected(&mut self, seat: Seat, error: &DomainError) {
        if let Some(kind) = error.kind() {
            self.rejections.push((seat, kind));
        }
    }
}

/// Never makes a valid pass.
#[derive(Default)]
pub struct StubbornTable {
    pub rejected: u32,
}

impl TablePort for StubbornTable {
    fn request_pass_selection(&mut self, view: &PlayerView) -> Vec<Card> {
        vec![view.hand[0]; 3]
    }

    fn request_play(&mut self, view: &PlayerView) -> Card {
        view.legal_plays()[0]
    }

    fn notify_rejected(&mut self, _seat: Seat, _error: &DomainError) {
        self.rejected += 1;
    }
}

fn card_not_held(view: &PlayerView) -> Option<Card> {
    hearts_engine::domain::full_deck()
        .into_iter()
        .find(|c| !view.hand.contains(c) && !view.trick_so_far.iter().any(|(_, p)| p == c))
}
