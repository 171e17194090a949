//! Built-in seat strategies and the game loop around `GameFlow`.

use hearts_engine::domain::{Card, PlayerView, Seat, TWO_OF_CLUBS};
use hearts_engine::{DomainError, EngineConfig, GameFlow, GameFlowError, GameOutcome, TablePort};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStrategy {
    /// Pass the first three cards of the sorted hand; play the first legal card.
    FirstLegal,
    /// Pass and play uniformly at random among legal choices.
    Random,
}

pub struct Simulator {
    config: EngineConfig,
    strategy: SeatStrategy,
}

impl Simulator {
    pub fn new(config: EngineConfig, strategy: SeatStrategy) -> Self {
        Self { config, strategy }
    }

    pub fn simulate_game(&self, game_seed: u64) -> Result<GameOutcome, GameFlowError> {
        let config = self.config.clone().with_seed(game_seed);
        let mut flow = GameFlow::new(config);
        let mut table = StrategyTable::new(self.strategy, game_seed);
        flow.run(&mut table)
    }
}

struct StrategyTable {
    strategy: SeatStrategy,
    rng: ChaCha8Rng,
}

impl StrategyTable {
    fn new(strategy: SeatStrategy, seed: u64) -> Self {
        Self {
            strategy,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl TablePort for StrategyTable {
    fn request_pass_selection(&mut self, view: &PlayerView) -> Vec<Card> {
        let mut hand = view.hand.clone();
        if self.strategy == SeatStrategy::Random {
            hand.shuffle(&mut self.rng);
        }
        hand.truncate(3);
        hand
    }

    fn request_play(&mut self, view: &PlayerView) -> Card {
        let legal = view.legal_plays();
        let pick = match (self.strategy, legal) {
            (_, []) => None,
            (SeatStrategy::FirstLegal, _) => legal.first(),
            (SeatStrategy::Random, _) => legal.get(self.rng.random_range(0..legal.len())),
        };
        // With nothing legal, offer any held card and let the engine say why.
        pick.or_else(|| view.hand.first())
            .copied()
            .unwrap_or(TWO_OF_CLUBS)
    }

    fn notify_rejected(&mut self, seat: Seat, error: &DomainError) {
        // Built-in strategies only choose legal intents.
        debug!(seat, %error, "Strategy intent rejected");
    }
}
