//! Combination classification for 1, 2, 3 and 5-card plays.
//!
//! Five-card ranks live in disjoint bands so that comparing ranks across
//! five-card kinds also encodes the kind hierarchy:
//! straight < flush < full house < four of a kind < straight flush.

use serde::{Deserialize, Serialize};

use super::cards_types::Card;

pub const STRAIGHT_BAND: u16 = 400;
pub const FLUSH_BAND: u16 = 500;
pub const FULL_HOUSE_BAND: u16 = 600;
pub const FOUR_OF_A_KIND_BAND: u16 = 700;
pub const STRAIGHT_FLUSH_BAND: u16 = 800;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboKind {
    Single,
    Pair,
    Triple,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    Invalid,
}

impl ComboKind {
    /// Four of a kind and straight flush beat any other five-card play.
    pub const fn is_bomb(self) -> bool {
        matches!(self, ComboKind::FourOfAKind | ComboKind::StraightFlush)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Combination {
    pub kind: ComboKind,
    /// Only meaningful against combinations of the same kind and size,
    /// or across five-card kinds.
    pub rank: u16,
}

impl Combination {
    pub const INVALID: Combination = Combination {
        kind: ComboKind::Invalid,
        rank: 0,
    };

    const fn of(kind: ComboKind, rank: u16) -> Self {
        Self { kind, rank }
    }

    pub const fn is_valid(&self) -> bool {
        !matches!(self.kind, ComboKind::Invalid)
    }

    pub const fn is_bomb(&self) -> bool {
        self.kind.is_bomb()
    }
}

/// Classify a candidate play. Input order does not matter.
pub fn classify(cards: &[Card]) -> Combination {
    let mut sorted = cards.to_vec();
    sorted.sort();

    match sorted.as_slice() {
        [] => Combination::INVALID,
        [only] => Combination::of(ComboKind::Single, only.strength()),
        [a, b] if a.rank == b.rank => Combination::of(ComboKind::Pair, b.strength()),
        [a, b, c] if a.rank == b.rank && b.rank == c.rank => {
            Combination::of(ComboKind::Triple, c.strength())
        }
        [_, _, _, _, high] => classify_five(&sorted, *high),
        _ => Combination::INVALID,
    }
}

fn classify_five(sorted: &[Card], high: Card) -> Combination {
    let straight = sorted
        .windows(2)
        .all(|w| w[1].rank.value() == w[0].rank.value() + 1);
    let flush = sorted.iter().all(|c| c.suit == sorted[0].suit);
    let four = sorted[0].rank == sorted[3].rank || sorted[1].rank == sorted[4].rank;
    let full_house = (sorted[0].rank == sorted[2].rank && sorted[3].rank == sorted[4].rank)
        || (sorted[0].rank == sorted[1].rank && sorted[2].rank == sorted[4].rank);

    // The middle card always belongs to the quad or the triple.
    let middle = sorted[2].rank.value() as u16 * 4;

    if straight && flush {
        Combination::of(ComboKind::StraightFlush, STRAIGHT_FLUSH_BAND + high.strength())
    } else if four {
        Combination::of(ComboKind::FourOfAKind, FOUR_OF_A_KIND_BAND + middle)
    } else if full_house {
        Combination::of(ComboKind::FullHouse, FULL_HOUSE_BAND + middle)
    } else if flush {
        Combination::of(ComboKind::Flush, FLUSH_BAND + high.strength())
    } else if straight {
        Combination::of(ComboKind::Straight, STRAIGHT_BAND + high.strength())
    } else {
        Combination::INVALID
    }
}
