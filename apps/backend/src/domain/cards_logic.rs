//! Card game logic: comparing a play against the table, 3♦ helpers, legal play enumeration

use super::bomb::detect_classic_bomb;
use super::cards_types::{Card, Rank, THREE_OF_DIAMONDS};
use super::combos::classify;
use super::rules::PLAY_SIZES;

/// Whether `candidate` may be played on top of `table`.
///
/// An empty table accepts any valid combination; the opening 3♦ rule is
/// enforced by the turn machine, not here.
pub fn can_beat(candidate: &[Card], table: &[Card]) -> bool {
    let cand = classify(candidate);
    if !cand.is_valid() {
        return false;
    }
    if table.is_empty() {
        return true;
    }

    let tbl = classify(table);
    let both_five = candidate.len() == 5 && table.len() == 5;

    if both_five && cand.is_bomb() && !tbl.is_bomb() {
        return true;
    }
    if cand.kind == tbl.kind && candidate.len() == table.len() {
        return cand.rank > tbl.rank;
    }
    if both_five {
        return cand.rank > tbl.rank;
    }
    false
}

/// Whether `candidate` may answer `table` during a trick: [`can_beat`], plus
/// the counter-bomb on a lone "2".
pub fn beats_table(candidate: &[Card], table: &[Card]) -> bool {
    can_beat(candidate, table) || detect_classic_bomb(table, candidate)
}

pub fn includes_three_of_diamonds(cards: &[Card]) -> bool {
    cards.contains(&THREE_OF_DIAMONDS)
}

/// Seat holding the 3♦, which opens the round. Falls back to seat 0.
pub fn find_three_of_diamonds_holder(hands: &[Vec<Card>]) -> u8 {
    hands
        .iter()
        .position(|hand| includes_three_of_diamonds(hand))
        .map_or(0, |seat| seat as u8)
}

/// Every play from `hand` that beats `table`, honouring the opening 3♦ rule.
///
/// Plays are sorted by combination rank within each size, smallest first.
pub fn legal_plays(hand: &[Card], table: &[Card], is_first_turn: bool) -> Vec<Vec<Card>> {
    let mut sorted_hand = hand.to_vec();
    sorted_hand.sort();

    let sizes: &[usize] = if table.is_empty() {
        &PLAY_SIZES
    } else {
        match table.len() {
            1 if is_lone_two(table) => &[1, 5],
            1 => &[1],
            2 => &[2],
            3 => &[3],
            5 => &[5],
            _ => &[],
        }
    };

    let mut plays = Vec::new();
    for &size in sizes {
        let mut of_size: Vec<Vec<Card>> = subsets(&sorted_hand, size)
            .into_iter()
            .filter(|play| !is_first_turn || includes_three_of_diamonds(play))
            .filter(|play| beats_table(play, table))
            .collect();
        of_size.sort_by_key(|play| classify(play).rank);
        plays.extend(of_size);
    }
    plays
}

fn is_lone_two(table: &[Card]) -> bool {
    matches!(table, [card] if card.rank == Rank::Two)
}

fn subsets(cards: &[Card], size: usize) -> Vec<Vec<Card>> {
    fn walk(cards: &[Card], size: usize, start: usize, acc: &mut Vec<Card>, out: &mut Vec<Vec<Card>>) {
        if acc.len() == size {
            out.push(acc.clone());
            return;
        }
        let needed = size - acc.len();
        for i in start..cards.len() {
            if cards.len() - i < needed {
                break;
            }
            acc.push(cards[i]);
            walk(cards, size, i + 1, acc, out);
            acc.pop();
        }
    }

    let mut out = Vec::new();
    if size == 0 || size > cards.len() {
        return out;
    }
    walk(cards, size, 0, &mut Vec::with_capacity(size), &mut out);
    out
}
