use serde::{Deserialize, Serialize};

use crate::domain::bomb::BombEvent;
use crate::domain::rules::{DRAGON_THRESHOLD, HEAVY_THRESHOLD, PLAYERS};
use crate::domain::state::Seat;

/// Penalty multiplier for a loser holding `card_count` cards.
pub fn multiplier(card_count: u8) -> u32 {
    if card_count >= DRAGON_THRESHOLD {
        4
    } else if card_count >= HEAVY_THRESHOLD {
        2
    } else {
        1
    }
}

/// Display label for a multiplier; the winner's multiplier is 0.
pub fn multiplier_label(multiplier: u32) -> &'static str {
    match multiplier {
        0 => "-",
        1 => "x1",
        2 => "Heavy (x2)",
        _ => "Dragon (x4)",
    }
}

/// Cards left in a seat's hand when the round ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SeatCount {
    pub seat: Seat,
    pub card_count: u8,
}

impl SeatCount {
    pub fn new(seat: Seat, card_count: u8) -> Self {
        Self { seat, card_count }
    }

    fn penalty(self, base_score: u32) -> i64 {
        i64::from(self.card_count) * i64::from(base_score) * i64::from(multiplier(self.card_count))
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatResult {
    pub seat: Seat,
    pub card_count: u8,
    pub multiplier: u32,
    pub penalty: i64,
    pub net_score: i64,
    pub is_winner: bool,
    pub is_culprit: bool,
}

/// Normal settlement: every loser pays its penalty to the winner.
///
/// Results are ordered by seat. The sum of `net_score` is always zero.
pub fn score_round(players: &[SeatCount], base_score: u32, winner: Seat) -> Vec<SeatResult> {
    let mut results: Vec<SeatResult> = players
        .iter()
        .filter(|p| p.seat != winner)
        .map(|p| {
            let penalty = p.penalty(base_score);
            SeatResult {
                seat: p.seat,
                card_count: p.card_count,
                multiplier: multiplier(p.card_count),
                penalty,
                net_score: -penalty,
                is_winner: false,
                is_culprit: false,
            }
        })
        .collect();

    let pool: i64 = results.iter().map(|r| r.penalty).sum();
    let winner_cards = players
        .iter()
        .find(|p| p.seat == winner)
        .map_or(0, |p| p.card_count);
    results.push(SeatResult {
        seat: winner,
        card_count: winner_cards,
        multiplier: 0,
        penalty: 0,
        net_score: pool,
        is_winner: true,
        is_culprit: false,
    });
    results.sort_by_key(|r| r.seat);
    results
}

/// Bomb settlement: the culprit pays its own penalty plus the innocents'
/// would-be penalties; innocents come out at zero.
pub fn score_bomb_round(
    culprit: SeatCount,
    winner: SeatCount,
    innocents: &[SeatCount],
    base_score: u32,
) -> Vec<SeatResult> {
    let pool = culprit.penalty(base_score)
        + innocents
            .iter()
            .map(|i| i.penalty(base_score))
            .sum::<i64>();

    let mut results = Vec::with_capacity(2 + innocents.len());
    results.push(SeatResult {
        seat: winner.seat,
        card_count: winner.card_count,
        multiplier: 0,
        penalty: 0,
        net_score: pool,
        is_winner: true,
        is_culprit: false,
    });
    results.push(SeatResult {
        seat: culprit.seat,
        card_count: culprit.card_count,
        multiplier: multiplier(culprit.card_count),
        penalty: pool,
        net_score: -pool,
        is_winner: false,
        is_culprit: true,
    });
    results.extend(innocents.iter().map(|i| SeatResult {
        seat: i.seat,
        card_count: i.card_count,
        multiplier: multiplier(i.card_count),
        penalty: 0,
        net_score: 0,
        is_winner: false,
        is_culprit: false,
    }));
    results.sort_by_key(|r| r.seat);
    results
}

/// One settled round in the match history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_no: u32,
    pub winner: Seat,
    pub bomb: Option<BombEvent>,
    pub results: Vec<SeatResult>,
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    pub totals: [i64; PLAYERS],
    pub wins: [u32; PLAYERS],
}

impl Standings {
    /// Re-derive totals and win counts from the full round history.
    pub fn from_history(history: &[RoundRecord]) -> Self {
        let mut standings = Standings::default();
        for result in history.iter().flat_map(|r| r.results.iter()) {
            let idx = result.seat as usize;
            if idx >= PLAYERS {
                continue;
            }
            standings.totals[idx] += result.net_score;
            if result.is_winner {
                standings.wins[idx] += 1;
            }
        }
        standings
    }

    /// Seats ordered by descending total, then more wins, then seat index.
    pub fn ranking(&self) -> Vec<Seat> {
        let mut seats: Vec<Seat> = (0..PLAYERS as Seat).collect();
        seats.sort_by(|&a, &b| {
            let (a, b) = (a as usize, b as usize);
            self.totals[b]
                .cmp(&self.totals[a])
                .then(self.wins[b].cmp(&self.wins[a]))
                .then(a.cmp(&b))
        });
        seats
    }
}
