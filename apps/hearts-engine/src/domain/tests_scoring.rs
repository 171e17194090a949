use crate::domain::dealing::full_deck;
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::{apply_deal_scoring, deal_points, is_game_over, losers, score_deltas};
use crate::domain::state::{GameState, Phase};
use crate::domain::{Card, Suit, QUEEN_OF_SPADES};
use crate::errors::domain::ValidationKind;

/// A state that has played out all tricks with the given won piles.
fn scoring_state(won_cards: [Vec<Card>; PLAYERS], scores_total: [u16; PLAYERS]) -> GameState {
    let mut state = GameState::new(100);
    state.phase = Phase::Scoring;
    state.deal_no = 5;
    state.scores_total = scores_total;
    state.deal.won_cards = won_cards;
    state
}

fn all_hearts() -> Vec<Card> {
    full_deck()
        .into_iter()
        .filter(|c| c.suit == Suit::Hearts)
        .collect()
}

/// Every point card to `shooter`, every other card spread across the others.
fn moon_piles(shooter: usize) -> [Vec<Card>; PLAYERS] {
    let mut piles: [Vec<Card>; PLAYERS] = Default::default();
    let mut other = (shooter + 1) % PLAYERS;
    for card in full_deck() {
        if card.is_point_card() {
            piles[shooter].push(card);
        } else {
            piles[other].push(card);
            other = (other + 1) % PLAYERS;
            if other == shooter {
                other = (other + 1) % PLAYERS;
            }
        }
    }
    piles
}

#[test]
fn deal_points_count_hearts_and_queen() {
    let mut won: [Vec<Card>; PLAYERS] = Default::default();
    let hearts = all_hearts();
    won[0] = hearts[..5].to_vec();
    won[1] = vec![QUEEN_OF_SPADES];
    won[2] = hearts[5..].to_vec();
    assert_eq!(deal_points(&won), [5, 13, 8, 0]);
}

#[test]
fn plain_deal_adds_points() {
    let (deltas, shooter) = score_deltas([5, 13, 8, 0]);
    assert_eq!(deltas, [5, 13, 8, 0]);
    assert_eq!(shooter, None);
}

#[test]
fn shooting_the_moon_charges_everyone_else() {
    for seat in 0..PLAYERS {
        let mut points = [0u8; PLAYERS];
        points[seat] = 26;
        let (deltas, shooter) = score_deltas(points);
        assert_eq!(shooter, Some(seat as u8));
        for (i, d) in deltas.iter().enumerate() {
            assert_eq!(*d, if i == seat { 0 } else { 26 });
        }
    }
}

#[test]
fn moon_deal_scores_into_totals() {
    let mut state = scoring_state(moon_piles(2), [10, 20, 30, 40]);
    let outcome = apply_deal_scoring(&mut state).unwrap();

    assert_eq!(outcome.deal_points, [0, 0, 26, 0]);
    assert_eq!(outcome.moon_shooter, Some(2));
    assert_eq!(outcome.score_deltas, [26, 26, 0, 26]);
    assert_eq!(outcome.scores_total, [36, 46, 30, 66]);
    assert!(!outcome.game_over);
    assert_eq!(state.scores_total, outcome.scores_total);
}

#[test]
fn game_continues_below_losing_total() {
    let mut won: [Vec<Card>; PLAYERS] = Default::default();
    won[1] = vec![QUEEN_OF_SPADES];
    let mut state = scoring_state(won, [0, 86, 0, 0]);

    let outcome = apply_deal_scoring(&mut state).unwrap();
    assert_eq!(outcome.scores_total, [0, 99, 0, 0]);
    assert!(!outcome.game_over);
    assert_eq!(outcome.deal_no, 5);
    assert_eq!(state.phase, Phase::Complete);
    assert_eq!(state.deal_no, 6);
}

#[test]
fn reaching_losing_total_ends_game() {
    let mut won: [Vec<Card>; PLAYERS] = Default::default();
    won[1] = vec![QUEEN_OF_SPADES];
    let mut state = scoring_state(won, [0, 87, 0, 0]);

    let outcome = apply_deal_scoring(&mut state).unwrap();
    assert_eq!(outcome.scores_total, [0, 100, 0, 0]);
    assert!(outcome.game_over);
    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.deal_no, 5);
    assert_eq!(losers(&state.scores_total, 100), vec![1]);
}

#[test]
fn scoring_twice_is_rejected() {
    let mut state = scoring_state(moon_piles(0), [0; PLAYERS]);
    let first = apply_deal_scoring(&mut state).unwrap();

    let err = apply_deal_scoring(&mut state).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::PhaseMismatch));
    assert_eq!(state.scores_total, first.scores_total);
}

#[test]
fn game_over_threshold_is_inclusive() {
    assert!(!is_game_over(&[99, 0, 0, 0], 100));
    assert!(is_game_over(&[0, 0, 100, 0], 100));
    assert!(is_game_over(&[0, 0, 0, 131], 100));
    assert_eq!(losers(&[100, 50, 104, 99], 100), vec![0, 2]);
}
