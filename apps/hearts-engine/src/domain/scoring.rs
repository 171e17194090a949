use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::rules::{MOON_POINTS, PLAYERS};
use crate::domain::state::{require_phase, GameState, Phase, Seat};
use crate::domain::cards_points;
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Summary of one scored deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealOutcome {
    pub deal_no: u32,
    /// Points each seat took in tricks this deal.
    pub deal_points: [u8; PLAYERS],
    /// What was added to each cumulative score.
    pub score_deltas: [u16; PLAYERS],
    /// Cumulative scores after this deal.
    pub scores_total: [u16; PLAYERS],
    /// Seat that took all 26 points, if any.
    pub moon_shooter: Option<Seat>,
    pub game_over: bool,
}

/// Points taken per seat from its won pile.
pub fn deal_points(won_cards: &[Vec<Card>; PLAYERS]) -> [u8; PLAYERS] {
    let mut points = [0u8; PLAYERS];
    for (slot, pile) in points.iter_mut().zip(won_cards.iter()) {
        *slot = cards_points(pile);
    }
    points
}

/// Turn deal points into score deltas, applying the shoot-the-moon rule:
/// a seat with all 26 points adds nothing and every other seat adds 26.
pub fn score_deltas(points: [u8; PLAYERS]) -> ([u16; PLAYERS], Option<Seat>) {
    if let Some(shooter) = points.iter().position(|&p| p == MOON_POINTS) {
        let mut deltas = [MOON_POINTS as u16; PLAYERS];
        deltas[shooter] = 0;
        return (deltas, Some(shooter as Seat));
    }
    (points.map(u16::from), None)
}

pub fn is_game_over(scores: &[u16; PLAYERS], losing_total: u16) -> bool {
    scores.iter().any(|&s| s >= losing_total)
}

/// Seats at or over the losing total.
pub fn losers(scores: &[u16; PLAYERS], losing_total: u16) -> Vec<Seat> {
    scores
        .iter()
        .enumerate()
        .filter(|&(_, &s)| s >= losing_total)
        .map(|(seat, _)| seat as Seat)
        .collect()
}

/// Score the finished deal into the cumulative totals.
///
/// Transitions Scoring -> GameOver when a score reaches the losing total,
/// otherwise Scoring -> Complete with `deal_no` advanced for the next deal.
/// Outside Scoring this is rejected and nothing changes, so a deal is scored
/// at most once.
pub fn apply_deal_scoring(state: &mut GameState) -> Result<DealOutcome, DomainError> {
    require_phase(state, Phase::Scoring, "apply_deal_scoring")?;

    let deal_no = state.deal_no;
    let points = deal_points(&state.deal.won_cards);
    let (deltas, moon_shooter) = score_deltas(points);
    for (total, delta) in state.scores_total.iter_mut().zip(deltas.iter()) {
        *total = total.saturating_add(*delta);
    }

    let game_over = is_game_over(&state.scores_total, state.losing_total);
    if game_over {
        state.phase = Phase::GameOver;
        info!(
            deal_no,
            scores = ?state.scores_total,
            "Game over"
        );
    } else {
        state.phase = Phase::Complete;
        state.deal_no += 1;
    }

    info!(
        deal_no,
        points = ?points,
        moon_shooter = ?moon_shooter,
        "Deal scored"
    );

    Ok(DealOutcome {
        deal_no,
        deal_points: points,
        score_deltas: deltas,
        scores_total: state.scores_total,
        moon_shooter,
        game_over,
    })
}
