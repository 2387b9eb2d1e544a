//! Deterministic card dealing logic.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{HAND_SIZE, PLAYERS};
use crate::domain::{Card, Rank, Suit};

/// Full 52-card deck in game order (3♦ first, 2♠ last).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(PLAYERS * HAND_SIZE);
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// Shuffle a full deck with `seed` and deal 13 sorted cards to each seat.
pub fn deal_hands(seed: u64) -> [Vec<Card>; PLAYERS] {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (seat, chunk) in deck.chunks(HAND_SIZE).enumerate().take(PLAYERS) {
        let mut hand = chunk.to_vec();
        hand.sort();
        hands[seat] = hand;
    }
    hands
}
