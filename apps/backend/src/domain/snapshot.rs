//! Public snapshot API for observing table state without exposing other
//! seats' hands.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::domain::scoring::{RoundRecord, Standings};
use crate::domain::state::{MatchStatus, Seat, SeatStatus, TableState};
use crate::domain::Card;

/// Public info about a single seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPublic {
    pub seat: Seat,
    pub occupied: bool,
    pub card_count: u8,
    pub status: SeatStatus,
    pub disconnect_count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundsInfo {
    pub current: u32,
    pub total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    /// Seat the snapshot was rendered for; `None` for spectators.
    pub viewer: Option<Seat>,
    /// The viewer's own hand; empty for spectators.
    pub hand: Vec<Card>,
    pub seats: Vec<SeatPublic>,
    pub table_cards: Vec<Card>,
    /// Seat awaiting play, only while the match is live.
    pub turn_seat: Option<Seat>,
    pub lead_seat: Option<Seat>,
    pub passed_locked: Vec<Seat>,
    pub is_first_turn: bool,
    /// Whole seconds left on the turn timer, rounded up.
    pub turn_timer_secs: Option<u64>,
    pub rounds: RoundsInfo,
    pub status: MatchStatus,
    pub history: Vec<RoundRecord>,
    pub standings: Standings,
}

/// Render `state` for `viewer`.
pub fn table_snapshot(
    state: &TableState,
    viewer: Option<Seat>,
    turn_timer_remaining: Option<Duration>,
) -> TableSnapshot {
    let viewer = viewer.filter(|&s| (s as usize) < PLAYERS);
    let hand = viewer
        .map(|s| state.seats[s as usize].hand.clone())
        .unwrap_or_default();

    let seats = state
        .seats
        .iter()
        .enumerate()
        .map(|(i, s)| SeatPublic {
            seat: i as Seat,
            occupied: s.occupied,
            card_count: s.card_count(),
            status: state.seat_status(i as Seat),
            disconnect_count: s.disconnect_count,
        })
        .collect();

    let live = state.awaiting_seat().is_some();
    TableSnapshot {
        viewer,
        hand,
        seats,
        table_cards: state.trick.table_cards.clone(),
        turn_seat: state.awaiting_seat(),
        lead_seat: live.then_some(state.trick.lead_seat),
        passed_locked: state.trick.passed_locked.clone(),
        is_first_turn: live && state.trick.is_first_turn,
        turn_timer_secs: turn_timer_remaining
            .filter(|_| live)
            .map(|d| d.as_millis().div_ceil(1000) as u64),
        rounds: RoundsInfo {
            current: state.current_round,
            total: state.target_rounds,
        },
        status: state.status,
        history: state.history.clone(),
        standings: Standings::from_history(&state.history),
    }
}
