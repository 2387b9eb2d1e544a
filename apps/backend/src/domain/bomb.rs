//! Bomb detection: the classic counter-bomb on a lone "2" and the end-game
//! two-singles gamble.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Rank};
use super::combos::{classify, ComboKind};
use super::state::Seat;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BombTrigger {
    /// A single "2" blown up by four of a kind or a straight flush.
    Classic,
    /// A seat on two singles led the lower one and got beaten.
    Endgame,
}

/// Recorded on the round history entry the bomb settled.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BombEvent {
    pub trigger: BombTrigger,
    pub culprit: Seat,
    pub winner: Seat,
    /// Penalty pool paid by the culprit to the winner.
    pub points: i64,
}

/// True iff `prev` is a single "2" and `current` is a bomb combination.
pub fn detect_classic_bomb(prev: &[Card], current: &[Card]) -> bool {
    let prev_combo = classify(prev);
    if prev_combo.kind != ComboKind::Single || prev[0].rank != Rank::Two {
        return false;
    }
    classify(current).is_bomb()
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct EndgameGamble {
    pub triggered: bool,
    pub is_safe: bool,
}

/// Whether playing `played` from `hand_before` opens an end-game gamble:
/// exactly two cards of different values, and `played` is the lower one.
pub fn is_endgame_gamble(hand_before: &[Card], played: Card) -> bool {
    match hand_before {
        [a, b] if a.rank != b.rank => {
            let lower = if a < b { *a } else { *b };
            played == lower
        }
        _ => false,
    }
}

/// Outcome of an end-game gamble once the table has reacted to it.
///
/// Returns `{ triggered: false, is_safe: false }` when the play was not a
/// gamble in the first place.
pub fn detect_endgame_bomb(
    card_count_before: usize,
    played: Card,
    hand_before: &[Card],
    was_beaten: bool,
) -> EndgameGamble {
    if card_count_before != 2 || !is_endgame_gamble(hand_before, played) {
        return EndgameGamble::default();
    }
    if was_beaten {
        EndgameGamble {
            triggered: true,
            is_safe: false,
        }
    } else {
        EndgameGamble {
            triggered: false,
            is_safe: true,
        }
    }
}
