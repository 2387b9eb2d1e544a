use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::domain::scoring::RoundRecord;
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

pub type Seat = u8; // 0..=3

/// Connection status of a seat. Only the transitions in
/// [`ConnectionStatus::can_transition_to`] are permitted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Active,
    /// First disconnect of the match; the match pauses and grace runs.
    Disconnected,
    /// The engine plays for the seat until it reconnects.
    Zombie,
}

impl ConnectionStatus {
    pub const fn can_transition_to(self, next: ConnectionStatus) -> bool {
        use ConnectionStatus::{Active, Disconnected, Zombie};
        matches!(
            (self, next),
            (Active, Disconnected)
                | (Active, Zombie)
                | (Disconnected, Active)
                | (Disconnected, Zombie)
                | (Zombie, Active)
        )
    }
}

/// Seat status as rendered: connection status, with `Pass` for a connected
/// seat locked out of the current trick.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatStatus {
    Active,
    Pass,
    Zombie,
    Disconnected,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SeatState {
    pub occupied: bool,
    pub hand: Vec<Card>,
    pub connection: ConnectionStatus,
    pub disconnect_count: u32,
    /// Bumped on every disconnect; grace timers carry the epoch they were armed for.
    pub disconnect_epoch: u64,
}

impl SeatState {
    pub fn empty() -> Self {
        Self {
            occupied: false,
            hand: Vec::new(),
            connection: ConnectionStatus::Active,
            disconnect_count: 0,
            disconnect_epoch: 0,
        }
    }

    pub fn card_count(&self) -> u8 {
        self.hand.len() as u8
    }

    /// Move to `next`, rejecting anything outside the permitted transitions.
    pub fn transition(&mut self, next: ConnectionStatus) -> Result<(), DomainError> {
        if !self.connection.can_transition_to(next) {
            return Err(DomainError::validation(
                ValidationKind::IllegalStatusTransition,
                format!("Seat cannot go from {:?} to {:?}", self.connection, next),
            ));
        }
        self.connection = next;
        Ok(())
    }
}

/// Trick and table fields, reset at every deal and every new lead.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TrickState {
    pub table_cards: Vec<Card>,
    /// Seat whose play currently stands unbeaten (or who opens the trick).
    pub lead_seat: Seat,
    pub turn_seat: Seat,
    /// Seats locked out until the next all-pass new lead, in pass order.
    pub passed_locked: Vec<Seat>,
    pub is_first_turn: bool,
}

impl TrickState {
    /// Opening state of a round: `first` holds 3♦ and must play.
    pub fn opening(first: Seat) -> Self {
        Self {
            table_cards: Vec::new(),
            lead_seat: first,
            turn_seat: first,
            passed_locked: Vec::new(),
            is_first_turn: true,
        }
    }

    pub fn is_locked(&self, seat: Seat) -> bool {
        self.passed_locked.contains(&seat)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Seat selection; nothing dealt yet.
    Waiting,
    Playing,
    /// A seat is disconnected within its grace period; no turns advance.
    Paused,
    /// Round target reached; waiting for extend or end.
    PendingDecision,
    Ended,
}

/// A seat that led the lower of its last two singles and is waiting to see
/// whether anyone beats it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PendingGamble {
    pub seat: Seat,
    pub card: Card,
    pub hand_before: Vec<Card>,
}

/// Entire table container, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct TableState {
    pub seats: [SeatState; PLAYERS],
    pub trick: TrickState,
    pub status: MatchStatus,
    /// 0 before the first deal, then 1-based.
    pub current_round: u32,
    pub target_rounds: u32,
    pub base_score: u32,
    pub match_seed: u64,
    pub history: Vec<RoundRecord>,
    pub gamble: Option<PendingGamble>,
}

impl TableState {
    pub fn new(target_rounds: u32, base_score: u32, match_seed: u64) -> Self {
        Self {
            seats: std::array::from_fn(|_| SeatState::empty()),
            trick: TrickState::opening(0),
            status: MatchStatus::Waiting,
            current_round: 0,
            target_rounds,
            base_score,
            match_seed,
            history: Vec::new(),
            gamble: None,
        }
    }

    pub fn seat(&self, seat: Seat) -> Result<&SeatState, DomainError> {
        self.seats
            .get(seat as usize)
            .ok_or_else(|| unknown_seat(seat))
    }

    pub fn seat_mut(&mut self, seat: Seat) -> Result<&mut SeatState, DomainError> {
        self.seats
            .get_mut(seat as usize)
            .ok_or_else(|| unknown_seat(seat))
    }

    /// Seat currently expected to act, if turns are live.
    pub fn awaiting_seat(&self) -> Option<Seat> {
        match self.status {
            MatchStatus::Playing | MatchStatus::Paused => Some(self.trick.turn_seat),
            _ => None,
        }
    }

    pub fn seat_status(&self, seat: Seat) -> SeatStatus {
        let Some(state) = self.seats.get(seat as usize) else {
            return SeatStatus::Active;
        };
        match state.connection {
            ConnectionStatus::Disconnected => SeatStatus::Disconnected,
            ConnectionStatus::Zombie => SeatStatus::Zombie,
            ConnectionStatus::Active if self.trick.is_locked(seat) => SeatStatus::Pass,
            ConnectionStatus::Active => SeatStatus::Active,
        }
    }

    pub fn any_disconnected(&self) -> bool {
        self.seats
            .iter()
            .any(|s| s.connection == ConnectionStatus::Disconnected)
    }

    pub fn card_counts(&self) -> [u8; PLAYERS] {
        std::array::from_fn(|i| self.seats[i].card_count())
    }
}

fn unknown_seat(seat: Seat) -> DomainError {
    DomainError::validation(
        ValidationKind::UnknownSeat,
        format!("Seat {seat} is out of range"),
    )
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    ((seat as i16 + delta as i16).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}
