//! The engine's fixed zombie policy exposed as a player.

use super::trait_def::{AiError, AutoPlayer, TurnView};
use crate::domain::auto_play::{zombie_auto_play, AutoPlay};

pub struct ZombiePlayer;

impl ZombiePlayer {
    pub const NAME: &'static str = "zombie";
    pub const VERSION: &'static str = "1.0.0";
}

impl AutoPlayer for ZombiePlayer {
    fn choose_action(&self, view: &TurnView) -> Result<AutoPlay, AiError> {
        let leading = view.is_leading();
        let action = zombie_auto_play(&view.hand, view.is_first_turn, leading, !leading);
        if action == AutoPlay::Pass && !view.can_pass {
            return Err(AiError::InvalidMove(format!(
                "Zombie policy passed for seat {} but passing is illegal",
                view.seat
            )));
        }
        Ok(action)
    }
}
