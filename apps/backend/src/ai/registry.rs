//! How to register a player
//!
//! 1) Implement `AutoPlayer` for your type in its module.
//! 2) Add a new `AiFactory` entry to the static list with stable `name` and `version`.
//! 3) Determinism: same seed ⇒ same behavior (where applicable).

use crate::ai::{AutoPlayer, GreedyPlayer, RandomPlayer, ZombiePlayer};

/// Factory definition for constructing player implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn AutoPlayer>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: ZombiePlayer::NAME,
        version: ZombiePlayer::VERSION,
        make: make_zombie,
    },
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random,
    },
    AiFactory {
        name: GreedyPlayer::NAME,
        version: GreedyPlayer::VERSION,
        make: make_greedy,
    },
];

/// Returns the statically registered player factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered factory by its name.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais().iter().find(|factory| factory.name == name)
}

fn make_zombie(_seed: Option<u64>) -> Box<dyn AutoPlayer> {
    Box::new(ZombiePlayer)
}

fn make_random(seed: Option<u64>) -> Box<dyn AutoPlayer> {
    Box::new(RandomPlayer::new(seed))
}

fn make_greedy(_seed: Option<u64>) -> Box<dyn AutoPlayer> {
    Box::new(GreedyPlayer)
}
