//! Disconnect / reconnect policy per seat.

use crate::domain::events::TableEvent;
use crate::domain::state::{ConnectionStatus, MatchStatus, Seat, TableState};
use crate::errors::domain::{DomainError, ValidationKind};

/// Connection changes apply only to claimed seats of a match that has not ended.
fn require_held_seat(state: &TableState, seat: Seat) -> Result<(), DomainError> {
    if state.status == MatchStatus::Ended {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Connection changes are not accepted after the match ended",
        ));
    }
    if !state.seat(seat)?.occupied {
        return Err(DomainError::validation(
            ValidationKind::UnknownSeat,
            format!("Seat {seat} has no player"),
        ));
    }
    Ok(())
}

/// Register a dropped connection for `seat`.
///
/// The first disconnect of the match marks the seat disconnected and pauses a
/// live match while the grace period runs. Any later disconnect turns the seat
/// into a zombie immediately, without pausing.
pub fn disconnect(state: &mut TableState, seat: Seat) -> Result<Vec<TableEvent>, DomainError> {
    require_held_seat(state, seat)?;
    let seat_state = state.seat_mut(seat)?;
    let next = if seat_state.disconnect_count == 0 {
        ConnectionStatus::Disconnected
    } else {
        ConnectionStatus::Zombie
    };
    seat_state.transition(next)?;
    seat_state.disconnect_count += 1;
    seat_state.disconnect_epoch += 1;

    let mut events = vec![TableEvent::SeatStatusChanged { seat, status: next }];
    events.extend(sync_pause(state));
    Ok(events)
}

/// The seat is back. Play resumes from the same turn state.
pub fn reconnect(state: &mut TableState, seat: Seat) -> Result<Vec<TableEvent>, DomainError> {
    require_held_seat(state, seat)?;
    state.seat_mut(seat)?.transition(ConnectionStatus::Active)?;
    let mut events = vec![TableEvent::SeatStatusChanged {
        seat,
        status: ConnectionStatus::Active,
    }];
    events.extend(sync_pause(state));
    Ok(events)
}

/// The reconnect grace period armed at `epoch` ran out.
///
/// Returns no events when the firing is stale: the match has ended, or the
/// seat reconnected or disconnected again since the timer was armed.
pub fn grace_expired(
    state: &mut TableState,
    seat: Seat,
    epoch: u64,
) -> Result<Vec<TableEvent>, DomainError> {
    if state.status == MatchStatus::Ended {
        return Ok(Vec::new());
    }
    let seat_state = state.seat_mut(seat)?;
    if seat_state.disconnect_epoch != epoch
        || seat_state.connection != ConnectionStatus::Disconnected
    {
        return Ok(Vec::new());
    }
    seat_state.transition(ConnectionStatus::Zombie)?;

    let mut events = vec![TableEvent::SeatStatusChanged {
        seat,
        status: ConnectionStatus::Zombie,
    }];
    events.extend(sync_pause(state));
    Ok(events)
}

/// Pause a live match while any seat is within its grace period; resume once
/// none is.
pub(crate) fn sync_pause(state: &mut TableState) -> Vec<TableEvent> {
    match state.status {
        MatchStatus::Playing if state.any_disconnected() => {
            state.status = MatchStatus::Paused;
            vec![TableEvent::Paused]
        }
        MatchStatus::Paused if !state.any_disconnected() => {
            state.status = MatchStatus::Playing;
            vec![TableEvent::Resumed]
        }
        _ => Vec::new(),
    }
}
