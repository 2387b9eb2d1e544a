//! Random player - makes random legal moves.
//!
//! Baseline for simulations and a template for other players: interior
//! mutability for the RNG, optional seeding, and no panics.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AutoPlayer, TurnView};
use crate::domain::auto_play::AutoPlay;

/// Player that picks uniformly among all legal actions, pass included.
pub struct RandomPlayer {
    /// `Mutex` because `AutoPlayer` methods take `&self`.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` is reproducible; `None` draws from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AutoPlayer for RandomPlayer {
    fn choose_action(&self, view: &TurnView) -> Result<AutoPlay, AiError> {
        let mut options: Vec<AutoPlay> = view.legal_plays().into_iter().map(AutoPlay::Play).collect();
        if view.can_pass {
            options.push(AutoPlay::Pass);
        }
        if options.is_empty() {
            return Err(AiError::InvalidMove("No legal actions available".into()));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        let idx = rng.random_range(0..options.len());
        Ok(options.swap_remove(idx))
    }
}
