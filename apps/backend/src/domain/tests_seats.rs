use crate::domain::events::TableEvent;
use crate::domain::match_flow::{force_stop, select_seat};
use crate::domain::seats::{disconnect, grace_expired, reconnect};
use crate::domain::state::{ConnectionStatus, MatchStatus, SeatStatus, TableState};
use crate::domain::test_state_helpers::{cards, playing_with_hands};
use crate::domain::turns::{pass, pending_zombie_turn, resolve_zombie_turns, submit_play};
use crate::domain::Card;
use crate::errors::domain::ValidationKind;

fn hands() -> [Vec<Card>; 4] {
    [
        cards(&["3D", "5C", "9H", "KS"]),
        cards(&["4D", "6C", "TH", "AS"]),
        cards(&["4C", "7C", "JH", "2D"]),
        cards(&["5D", "8C", "QH", "2S"]),
    ]
}

#[test]
fn first_disconnect_pauses_and_reconnect_resumes() {
    let mut state = playing_with_hands(hands());
    submit_play(&mut state, 0, &cards(&["3D"])).unwrap();
    let trick_before = state.trick.clone();

    let events = disconnect(&mut state, 1).unwrap();
    assert_eq!(
        events,
        vec![
            TableEvent::SeatStatusChanged {
                seat: 1,
                status: ConnectionStatus::Disconnected
            },
            TableEvent::Paused
        ]
    );
    assert_eq!(state.status, MatchStatus::Paused);
    assert_eq!(state.seat_status(1), SeatStatus::Disconnected);

    // No turns advance while paused.
    let err = pass(&mut state, 1).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::PhaseMismatch));

    let events = reconnect(&mut state, 1).unwrap();
    assert!(events.contains(&TableEvent::Resumed));
    assert_eq!(state.status, MatchStatus::Playing);
    assert_eq!(state.trick, trick_before);
}

#[test]
fn grace_expiry_turns_the_seat_into_a_zombie() {
    let mut state = playing_with_hands(hands());
    disconnect(&mut state, 2).unwrap();
    let epoch = state.seats[2].disconnect_epoch;

    let events = grace_expired(&mut state, 2, epoch).unwrap();
    assert!(events.contains(&TableEvent::SeatStatusChanged {
        seat: 2,
        status: ConnectionStatus::Zombie
    }));
    assert!(events.contains(&TableEvent::Resumed));
    assert_eq!(state.status, MatchStatus::Playing);
}

#[test]
fn stale_grace_expiry_is_ignored() {
    let mut state = playing_with_hands(hands());
    disconnect(&mut state, 2).unwrap();
    let epoch = state.seats[2].disconnect_epoch;
    reconnect(&mut state, 2).unwrap();

    assert!(grace_expired(&mut state, 2, epoch).unwrap().is_empty());
    assert_eq!(state.seats[2].connection, ConnectionStatus::Active);
}

#[test]
fn second_disconnect_is_an_immediate_zombie() {
    let mut state = playing_with_hands(hands());
    submit_play(&mut state, 0, &cards(&["3D"])).unwrap();
    pass(&mut state, 1).unwrap();

    disconnect(&mut state, 3).unwrap();
    reconnect(&mut state, 3).unwrap();
    let events = disconnect(&mut state, 3).unwrap();

    assert_eq!(
        events,
        vec![TableEvent::SeatStatusChanged {
            seat: 3,
            status: ConnectionStatus::Zombie
        }]
    );
    assert_eq!(state.status, MatchStatus::Playing);
    assert_eq!(state.seats[3].disconnect_count, 2);

    // Seat 2 plays; seat 3 is up next and the engine resolves it at once.
    submit_play(&mut state, 2, &cards(&["4C"])).unwrap();
    assert_eq!(pending_zombie_turn(&state), Some(3));
    let events = resolve_zombie_turns(&mut state).unwrap();
    assert_eq!(events[0], TableEvent::Passed { seat: 3, auto: true });
    assert_eq!(pending_zombie_turn(&state), None);
    assert_eq!(state.trick.turn_seat, 0);
}

#[test]
fn zombie_reconnect_restores_active_without_rollback() {
    let mut state = playing_with_hands(hands());
    disconnect(&mut state, 0).unwrap();
    reconnect(&mut state, 0).unwrap();
    disconnect(&mut state, 0).unwrap();

    // The zombie opens with the 3 of diamonds.
    let events = resolve_zombie_turns(&mut state).unwrap();
    assert!(matches!(
        events[0],
        TableEvent::PlayAccepted { seat: 0, auto: true, .. }
    ));

    reconnect(&mut state, 0).unwrap();
    assert_eq!(state.seats[0].connection, ConnectionStatus::Active);
    assert_eq!(state.seats[0].hand.len(), 3);
    assert!(!state.trick.is_first_turn);
}

#[test]
fn only_permitted_status_transitions() {
    let mut state = playing_with_hands(hands());
    let err = reconnect(&mut state, 1).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::IllegalStatusTransition));

    disconnect(&mut state, 1).unwrap();
    disconnect(&mut state, 1).unwrap();
    assert_eq!(state.seats[1].connection, ConnectionStatus::Zombie);
    let err = disconnect(&mut state, 1).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::IllegalStatusTransition));
    assert_eq!(state.seats[1].disconnect_count, 2);

    let err = disconnect(&mut state, 9).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::UnknownSeat));
}

#[test]
fn pause_holds_while_any_seat_is_in_grace() {
    let mut state = playing_with_hands(hands());
    disconnect(&mut state, 1).unwrap();
    disconnect(&mut state, 2).unwrap();
    reconnect(&mut state, 1).unwrap();
    assert_eq!(state.status, MatchStatus::Paused);
    reconnect(&mut state, 2).unwrap();
    assert_eq!(state.status, MatchStatus::Playing);
}

#[test]
fn unclaimed_seats_cannot_disconnect() {
    let mut state = TableState::new(25, 25, 7);
    let err = disconnect(&mut state, 2).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::UnknownSeat));
    let err = reconnect(&mut state, 2).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::UnknownSeat));
    assert_eq!(state.seats[2].disconnect_count, 0);

    for seat in 0..4 {
        select_seat(&mut state, seat).unwrap();
    }
    assert_eq!(state.status, MatchStatus::Playing);
    assert_eq!(state.seats[2].connection, ConnectionStatus::Active);
}

#[test]
fn connection_changes_are_rejected_once_the_match_ended() {
    let mut state = playing_with_hands(hands());
    force_stop(&mut state);

    let err = disconnect(&mut state, 1).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::PhaseMismatch));
    assert_eq!(state.seats[1].connection, ConnectionStatus::Active);
    assert_eq!(state.seats[1].disconnect_count, 0);

    let err = reconnect(&mut state, 1).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::PhaseMismatch));
}

#[test]
fn grace_expiry_after_a_forced_stop_changes_nothing() {
    let mut state = playing_with_hands(hands());
    disconnect(&mut state, 3).unwrap();
    let epoch = state.seats[3].disconnect_epoch;
    force_stop(&mut state);

    assert!(grace_expired(&mut state, 3, epoch).unwrap().is_empty());
    assert_eq!(state.status, MatchStatus::Ended);
    assert_eq!(state.seats[3].connection, ConnectionStatus::Disconnected);
}
