// Proptest generators for domain types.
// These generators ensure unique cards so that generated hands can coexist in one deck.

use proptest::prelude::*;

use crate::domain::dealing::full_deck;
use crate::domain::state::Seat;
use crate::domain::{Card, Rank, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    (0u8..4).prop_map(|i| Suit::ALL[i as usize])
}

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    (0u8..13).prop_map(|i| Rank::ALL[i as usize])
}

/// Generate a single Card
pub fn card() -> impl Strategy<Value = Card> {
    (rank(), suit()).prop_map(|(rank, suit)| Card::new(rank, suit))
}

/// Generate a vector of N unique cards efficiently
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all_cards = full_deck();
        for i in 0..count.min(all_cards.len()) {
            let j = rng.random_range(i..all_cards.len());
            all_cards.swap(i, j);
        }
        all_cards.truncate(count);
        all_cards
    })
}

/// Generate a vector of 1 to max_count unique cards
pub fn unique_cards_up_to(max_count: usize) -> impl Strategy<Value = Vec<Card>> {
    (1..=max_count).prop_flat_map(unique_cards)
}

/// Generate a hand (vector of 1-13 unique cards)
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    unique_cards_up_to(13)
}

/// Generate a candidate play of a playable size (1, 2, 3 or 5 unique cards).
pub fn play() -> impl Strategy<Value = Vec<Card>> {
    prop_oneof![
        unique_cards(1),
        unique_cards(2),
        unique_cards(3),
        unique_cards(5),
    ]
}

/// Generate a same-rank pair.
pub fn pair() -> impl Strategy<Value = Vec<Card>> {
    (rank(), 0u8..4, 1u8..4).prop_map(|(rank, a, step)| {
        let b = (a + step) % 4;
        vec![
            Card::new(rank, Suit::ALL[a as usize]),
            Card::new(rank, Suit::ALL[b as usize]),
        ]
    })
}

/// Generate a plain five-card straight (never a straight flush).
pub fn straight() -> impl Strategy<Value = Vec<Card>> {
    (0usize..=8, proptest::collection::vec(suit(), 5)).prop_map(|(start, mut suits)| {
        if suits.iter().all(|&s| s == suits[0]) {
            suits[0] = Suit::ALL[(suits[0].index() as usize + 1) % 4];
        }
        (0..5)
            .map(|k| Card::new(Rank::ALL[start + k], suits[k]))
            .collect()
    })
}

/// Generate four of a kind plus a kicker of another rank.
pub fn four_of_a_kind() -> impl Strategy<Value = Vec<Card>> {
    (rank(), 1usize..13, suit()).prop_map(|(quad, kicker_step, kicker_suit)| {
        let quad_idx = Rank::ALL.iter().position(|&r| r == quad).unwrap_or(0);
        let kicker = Rank::ALL[(quad_idx + kicker_step) % 13];
        let mut cards: Vec<Card> = Suit::ALL.iter().map(|&s| Card::new(quad, s)).collect();
        cards.push(Card::new(kicker, kicker_suit));
        cards
    })
}

/// Generate a seat (0-3)
pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..=3u8
}

/// Remaining card counts for the four seats at round end.
pub fn card_counts() -> impl Strategy<Value = [u8; 4]> {
    [0u8..=13, 0u8..=13, 0u8..=13, 0u8..=13]
}
