//! Automated players - choose actions for seats the engine drives.
//!
//! This module provides:
//! - `AutoPlayer` trait and the `TurnView` it decides from
//! - ZombiePlayer: the engine's fixed zombie policy
//! - RandomPlayer: random legal moves (seedable for tests)
//! - GreedyPlayer: weakest winning play, sheds big combinations when leading

mod greedy;
mod random;
pub mod registry;
mod trait_def;
mod zombie;

pub use greedy::GreedyPlayer;
pub use random::RandomPlayer;
pub use trait_def::{AiError, AutoPlayer, TurnView};
pub use zombie::ZombiePlayer;

/// Create a player by registered name (`zombie`, `random`, `greedy`).
///
/// Returns None if the name is unrecognized.
pub fn create_ai(name: &str, seed: Option<u64>) -> Option<Box<dyn AutoPlayer>> {
    registry::by_name(name).map(|factory| (factory.make)(seed))
}
