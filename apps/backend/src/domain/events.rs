//! Transitions applied to a table, as reported by the domain operations.

use serde::Serialize;

use crate::domain::bomb::BombEvent;
use crate::domain::combos::ComboKind;
use crate::domain::state::{ConnectionStatus, Seat};
use crate::domain::Card;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableEvent {
    SeatSelected {
        seat: Seat,
    },
    MatchStarted,
    RoundDealt {
        round_no: u32,
        first_seat: Seat,
    },
    /// `auto` is set when the engine chose the play (zombie or timeout).
    PlayAccepted {
        seat: Seat,
        cards: Vec<Card>,
        combo: ComboKind,
        auto: bool,
    },
    Passed {
        seat: Seat,
        auto: bool,
    },
    /// Everyone else passed; the lead opens a fresh trick.
    NewLead {
        seat: Seat,
    },
    BombTriggered {
        bomb: BombEvent,
    },
    GambleDefused {
        seat: Seat,
    },
    RoundOver {
        round_no: u32,
        winner: Seat,
    },
    PendingDecision {
        rounds_played: u32,
    },
    RoundsExtended {
        target_rounds: u32,
    },
    MatchEnded {
        forced: bool,
    },
    SeatStatusChanged {
        seat: Seat,
        status: ConnectionStatus,
    },
    Paused,
    Resumed,
}
