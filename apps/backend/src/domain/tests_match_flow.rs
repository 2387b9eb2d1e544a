use crate::domain::events::TableEvent;
use crate::domain::match_flow::{advance_round, end_match, extend_rounds, force_stop, select_seat};
use crate::domain::scoring::Standings;
use crate::domain::seats::disconnect;
use crate::domain::state::{MatchStatus, TableState};
use crate::domain::test_state_helpers::{cards, mid_round};
use crate::domain::turns::{pass, submit_play};
use crate::errors::domain::ValidationKind;

fn seated(target_rounds: u32) -> TableState {
    let mut state = TableState::new(target_rounds, 25, 99);
    for seat in 0..4 {
        select_seat(&mut state, seat).unwrap();
    }
    state
}

/// A one-card-each round where seat 0 leads and wins immediately.
fn quick_round(target_rounds: u32) -> TableState {
    let mut state = mid_round(
        [
            cards(&["2S"]),
            cards(&["3D"]),
            cards(&["4D"]),
            cards(&["5D"]),
        ],
        0,
    );
    state.target_rounds = target_rounds;
    state
}

#[test]
fn match_starts_when_all_seats_are_taken() {
    let mut state = TableState::new(25, 25, 99);
    for seat in 0..3 {
        select_seat(&mut state, seat).unwrap();
        assert_eq!(state.status, MatchStatus::Waiting);
    }
    let events = select_seat(&mut state, 3).unwrap();
    assert!(events.contains(&TableEvent::MatchStarted));
    assert_eq!(state.status, MatchStatus::Playing);
    assert_eq!(state.current_round, 1);

    let opener = state.trick.turn_seat;
    assert!(state.seats[opener as usize]
        .hand
        .contains(&crate::domain::THREE_OF_DIAMONDS));
    assert!(state.seats.iter().all(|s| s.hand.len() == 13));
}

#[test]
fn seat_selection_rejects_taken_and_out_of_range() {
    let mut state = TableState::new(25, 25, 99);
    select_seat(&mut state, 2).unwrap();
    let err = select_seat(&mut state, 2).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::InvalidSeatSelection));
    let err = select_seat(&mut state, 4).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::InvalidSeatSelection));

    let mut started = seated(25);
    let err = select_seat(&mut started, 0).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::PhaseMismatch));
}

#[test]
fn same_seed_deals_the_same_match() {
    let a = seated(25);
    let b = seated(25);
    assert_eq!(a.seats, b.seats);
    assert_eq!(a.trick, b.trick);
}

#[test]
fn settling_below_the_target_deals_the_next_round() {
    let mut state = quick_round(3);
    let events = submit_play(&mut state, 0, &cards(&["2S"])).unwrap();

    assert_eq!(state.current_round, 2);
    assert_eq!(state.status, MatchStatus::Playing);
    assert!(events
        .iter()
        .any(|e| matches!(e, TableEvent::RoundDealt { round_no: 2, .. })));
    assert!(state.seats.iter().all(|s| s.hand.len() == 13));
    assert!(state.trick.is_first_turn);
}

#[test]
fn reaching_the_target_waits_for_a_decision() {
    let mut state = quick_round(1);
    let events = submit_play(&mut state, 0, &cards(&["2S"])).unwrap();
    assert!(events.contains(&TableEvent::PendingDecision { rounds_played: 1 }));
    assert_eq!(state.status, MatchStatus::PendingDecision);
    assert_eq!(state.awaiting_seat(), None);

    let err = advance_round(&mut state).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::PhaseMismatch));

    end_match(&mut state).unwrap();
    assert_eq!(state.status, MatchStatus::Ended);
    let standings = Standings::from_history(&state.history);
    assert_eq!(standings.totals, [75, -25, -25, -25]);
    assert_eq!(standings.wins, [1, 0, 0, 0]);
}

#[test]
fn extending_from_pending_deals_on_and_keeps_scores() {
    let mut state = quick_round(1);
    submit_play(&mut state, 0, &cards(&["2S"])).unwrap();

    let events = extend_rounds(&mut state, 10).unwrap();
    assert_eq!(events[0], TableEvent::RoundsExtended { target_rounds: 11 });
    assert!(events.contains(&TableEvent::RoundDealt {
        round_no: 2,
        first_seat: state.trick.lead_seat
    }));
    assert_eq!(state.status, MatchStatus::Playing);
    assert_eq!(state.history.len(), 1);
}

#[test]
fn extending_during_play_only_raises_the_target() {
    let mut state = seated(25);
    let trick = state.trick.clone();
    extend_rounds(&mut state, 10).unwrap();
    assert_eq!(state.target_rounds, 35);
    assert_eq!(state.current_round, 1);
    assert_eq!(state.trick, trick);

    let err = extend_rounds(&mut state, 0).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::InvalidRoundExtension));
}

#[test]
fn extending_with_a_seat_in_grace_stays_paused() {
    let mut state = quick_round(1);
    submit_play(&mut state, 0, &cards(&["2S"])).unwrap();
    disconnect(&mut state, 1).unwrap();
    assert_eq!(state.status, MatchStatus::PendingDecision);

    let events = extend_rounds(&mut state, 1).unwrap();
    assert!(events.contains(&TableEvent::Paused));
    assert_eq!(state.status, MatchStatus::Paused);
}

#[test]
fn end_match_requires_pending_decision() {
    let mut state = seated(25);
    let err = end_match(&mut state).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::PhaseMismatch));
}

#[test]
fn force_stop_ends_from_any_state() {
    let mut waiting = TableState::new(25, 25, 1);
    assert_eq!(
        force_stop(&mut waiting),
        vec![TableEvent::MatchEnded { forced: true }]
    );
    assert_eq!(waiting.status, MatchStatus::Ended);
    assert!(force_stop(&mut waiting).is_empty());

    let mut state = mid_round(
        [
            cards(&["3D", "9S"]),
            cards(&["4D", "5S"]),
            cards(&["5D", "6S"]),
            cards(&["6D", "7S"]),
        ],
        0,
    );
    submit_play(&mut state, 0, &cards(&["9S"])).unwrap();
    pass(&mut state, 1).unwrap();
    force_stop(&mut state);
    assert_eq!(state.status, MatchStatus::Ended);
    assert!(state.trick.table_cards.is_empty());
    assert!(state.trick.passed_locked.is_empty());
    assert!(state.history.is_empty());

    let err = submit_play(&mut state, 2, &cards(&["5D"])).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::PhaseMismatch));
}
