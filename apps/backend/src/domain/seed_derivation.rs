//! RNG seed derivation utilities for deterministic table behavior.
//!
//! A table draws one match seed at creation; dealing and automated players
//! derive their own seeds from it so a whole match replays from that seed.

/// Derive a seed for dealing a round.
///
/// Same match seed + round number always deals the same hands.
pub fn derive_dealing_seed(match_seed: u64, round_no: u32) -> u64 {
    match_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Derive a seed for an automated player sitting at `seat`.
pub fn derive_player_seed(match_seed: u64, seat: u8) -> u64 {
    match_seed
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}
