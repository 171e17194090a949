//! Game flow: runs whole deals against a table collaborator.
//!
//! The engine never reads input or prints. Everything a seat decides arrives
//! through [`TablePort`]; rejected intents are reported back through the same
//! port and requested again, up to the configured rejection limit.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::domain::rules::PLAYERS;
use crate::domain::{
    apply_deal_scoring, build_shuffled_deck, build_shuffled_deck_seeded, check_conservation,
    derive_dealing_seed, losers, play_card, start_deal, submit_pass, Card, DealOutcome,
    GameState, Phase, PlayerView, Seat, Trick,
};
use crate::errors::domain::DomainError;

/// The I/O shell's side of the table.
///
/// Request methods return the seat's intent, which the engine validates.
/// Notification methods are informational.
pub trait TablePort {
    /// Three cards the seat passes this deal (`view.pass_direction`).
    fn request_pass_selection(&mut self, view: &PlayerView) -> Vec<Card>;

    /// Card the seat plays into `view.trick_so_far`.
    fn request_play(&mut self, view: &PlayerView) -> Card;

    fn notify_trick_complete(&mut self, _trick: &Trick, _winner: Seat) {}

    fn notify_deal_complete(&mut self, _outcome: &DealOutcome) {}

    /// The seat's last intent was refused; `error` says why.
    fn notify_rejected(&mut self, _seat: Seat, _error: &DomainError) {}
}

#[derive(Debug, Error)]
pub enum GameFlowError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("seat {seat} stalled after {rejections} rejected intents: {last_error}")]
    CollaboratorStalled {
        seat: Seat,
        rejections: u32,
        last_error: DomainError,
    },
}

/// Final result of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOutcome {
    pub deals_played: u32,
    pub final_scores: [u16; PLAYERS],
    /// Seats at or over the losing total.
    pub losers: Vec<Seat>,
    pub deal_history: Vec<DealOutcome>,
}

pub struct GameFlow {
    config: EngineConfig,
    state: GameState,
}

impl GameFlow {
    pub fn new(config: EngineConfig) -> Self {
        let state = GameState::new(config.losing_total);
        Self { config, state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Play deals until some seat reaches the losing total.
    pub fn run<P: TablePort + ?Sized>(
        &mut self,
        port: &mut P,
    ) -> Result<GameOutcome, GameFlowError> {
        info!(
            losing_total = self.config.losing_total,
            seed = ?self.config.seed,
            "Starting game"
        );

        let mut deal_history = Vec::new();
        loop {
            let outcome = self.play_deal(port)?;
            let game_over = outcome.game_over;
            deal_history.push(outcome);
            if game_over {
                break;
            }
        }

        let final_scores = self.state.scores_total;
        let outcome = GameOutcome {
            deals_played: deal_history.len() as u32,
            final_scores,
            losers: losers(&final_scores, self.config.losing_total),
            deal_history,
        };
        info!(
            deals_played = outcome.deals_played,
            final_scores = ?outcome.final_scores,
            "Game completed"
        );
        Ok(outcome)
    }

    /// Deal, pass, play 13 tricks, and score one deal.
    pub fn play_deal<P: TablePort + ?Sized>(
        &mut self,
        port: &mut P,
    ) -> Result<DealOutcome, GameFlowError> {
        let deck = self.next_deck();
        let direction = start_deal(&mut self.state, &deck)?;

        if direction.passes_cards() {
            self.collect_passes(port)?;
        }

        while let Phase::Trick { .. } = self.state.phase {
            self.play_turn(port)?;
        }

        check_conservation(&self.state)?;
        let outcome = apply_deal_scoring(&mut self.state)?;
        port.notify_deal_complete(&outcome);
        Ok(outcome)
    }

    fn next_deck(&self) -> Vec<Card> {
        match self.config.seed {
            Some(seed) => {
                build_shuffled_deck_seeded(derive_dealing_seed(seed, self.state.deal_no))
            }
            None => build_shuffled_deck(),
        }
    }

    fn collect_passes<P: TablePort + ?Sized>(
        &mut self,
        port: &mut P,
    ) -> Result<(), GameFlowError> {
        // Every seat chooses from its pre-pass hand; nothing moves until all four are in.
        for seat in 0..PLAYERS as Seat {
            self.with_retries(seat, port, |state, port| {
                let view = PlayerView::for_seat(state, seat);
                let selection = port.request_pass_selection(&view);
                submit_pass(state, seat, &selection)
            })?;
        }
        Ok(())
    }

    fn play_turn<P: TablePort + ?Sized>(&mut self, port: &mut P) -> Result<(), GameFlowError> {
        let seat = self
            .state
            .turn
            .ok_or_else(|| DomainError::deck_integrity("trick in progress with no seat to act"))?;

        let result = self.with_retries(seat, port, |state, port| {
            let view = PlayerView::for_seat(state, seat);
            let card = port.request_play(&view);
            play_card(state, seat, card)
        })?;

        if let (Some(trick), Some(winner)) = (result.sealed_trick.as_ref(), result.trick_winner) {
            port.notify_trick_complete(trick, winner);
        }
        Ok(())
    }

    fn with_retries<T, P: TablePort + ?Sized>(
        &mut self,
        seat: Seat,
        port: &mut P,
        mut attempt: impl FnMut(&mut GameState, &mut P) -> Result<T, DomainError>,
    ) -> Result<T, GameFlowError> {
        let mut rejections = 0u32;
        loop {
            match attempt(&mut self.state, port) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_recoverable() => {
                    rejections += 1;
                    warn!(
                        deal_no = self.state.deal_no,
                        seat,
                        rejections,
                        error = %err,
                        "Rejected intent"
                    );
                    port.notify_rejected(seat, &err);
                    if rejections > self.config.max_rejections_per_request {
                        debug!(seat, "Giving up on collaborator");
                        return Err(GameFlowError::CollaboratorStalled {
                            seat,
                            rejections,
                            last_error: err,
                        });
                    }
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
