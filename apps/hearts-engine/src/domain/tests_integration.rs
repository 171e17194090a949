use crate::domain::deal_lifecycle::{card_conservation, start_deal, submit_pass};
use crate::domain::dealing::build_shuffled_deck_seeded;
use crate::domain::passing::PassDirection;
use crate::domain::player_view::PlayerView;
use crate::domain::rules::{DEFAULT_LOSING_TOTAL, PLAYERS};
use crate::domain::scoring::{apply_deal_scoring, DealOutcome};
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::{GameState, Phase, Seat};
use crate::domain::tricks::{legal_moves, play_card};

/// Play one deal where each seat passes the last three cards of its sorted hand and plays
/// its first legal card.
fn play_deal(state: &mut GameState, game_seed: u64) -> DealOutcome {
    let deck = build_shuffled_deck_seeded(derive_dealing_seed(game_seed, state.deal_no));
    let direction = start_deal(state, &deck).unwrap();

    if direction.passes_cards() {
        for seat in 0..PLAYERS as Seat {
            let hand = state.hand(seat);
            let selection = hand[hand.len() - 3..].to_vec();
            submit_pass(state, seat, &selection).unwrap();
        }
    }
    assert_eq!(state.phase, Phase::Trick { trick_no: 1 });

    let mut plays = 0;
    while let Phase::Trick { trick_no } = state.phase {
        let seat = state.turn.expect("someone to act");
        let view = PlayerView::for_seat(state, seat);
        assert_eq!(view.trick_no, Some(trick_no));
        assert_eq!(view.legal_plays(), legal_moves(state, seat).as_slice());

        let card = view.legal_plays()[0];
        play_card(state, seat, card).unwrap();
        assert_eq!(card_conservation(state), 52);
        plays += 1;
    }
    assert_eq!(plays, 52);
    assert_eq!(state.phase, Phase::Scoring);
    assert!(state.deal.hands.iter().all(Vec::is_empty));
    assert_eq!(state.deal.tricks_won.iter().sum::<u8>(), 13);

    apply_deal_scoring(state).unwrap()
}

#[test]
fn four_deals_cycle_through_every_pass_direction() {
    let mut state = GameState::new(u16::MAX);
    let mut directions = Vec::new();

    for _ in 0..4 {
        let outcome = play_deal(&mut state, 424242);
        directions.push(state.deal.pass_direction);

        let points: u16 = outcome.deal_points.iter().map(|&p| u16::from(p)).sum();
        assert_eq!(points, 26);
        let added: u16 = outcome.score_deltas.iter().sum();
        match outcome.moon_shooter {
            Some(_) => assert_eq!(added, 78),
            None => assert_eq!(added, 26),
        }
        assert_eq!(state.phase, Phase::Complete);
    }

    assert_eq!(
        directions,
        vec![
            PassDirection::Left,
            PassDirection::Right,
            PassDirection::Across,
            PassDirection::Hold,
        ]
    );
    assert_eq!(state.deal_no, 4);
}

#[test]
fn seeded_deals_replay_identically() {
    let mut a = GameState::new(DEFAULT_LOSING_TOTAL);
    let mut b = GameState::new(DEFAULT_LOSING_TOTAL);
    for _ in 0..3 {
        assert_eq!(play_deal(&mut a, 99), play_deal(&mut b, 99));
    }
}

#[test]
fn player_view_shows_only_own_hand() {
    let mut state = GameState::new(DEFAULT_LOSING_TOTAL);
    start_deal(&mut state, &build_shuffled_deck_seeded(5)).unwrap();

    let view = PlayerView::for_seat(&state, 2);
    assert_eq!(view.seat, 2);
    assert_eq!(view.hand, state.hand(2));
    assert_eq!(view.pass_direction, PassDirection::Left);
    assert_eq!(view.trick_no, None);
    assert!(view.legal_plays().is_empty());
    assert!(view.trick_so_far.is_empty());
}

#[test]
fn player_view_serializes_for_the_shell() {
    let mut state = GameState::new(DEFAULT_LOSING_TOTAL);
    state.deal_no = 3;
    start_deal(&mut state, &build_shuffled_deck_seeded(11)).unwrap();
    let leader = state.turn.expect("hold deal opens trick play");
    let card = legal_moves(&state, leader)[0];
    play_card(&mut state, leader, card).unwrap();

    let follower = state.turn.expect("next seat to act");
    let view = PlayerView::for_seat(&state, follower);
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["lead_suit"], serde_json::json!("Clubs"));
    assert_eq!(json["trick_so_far"][0][1], serde_json::json!("2C"));
    assert_eq!(json["pass_direction"], serde_json::json!("Hold"));
    assert_eq!(json["hand"].as_array().map(Vec::len), Some(13));
}
