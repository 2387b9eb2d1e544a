//! Fixed play policy for zombie seats and for timeouts where passing is illegal.

use serde::{Deserialize, Serialize};

use super::cards_logic::includes_three_of_diamonds;
use super::cards_types::{Card, THREE_OF_DIAMONDS};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "cards", rename_all = "snake_case")]
pub enum AutoPlay {
    Play(Vec<Card>),
    Pass,
}

/// Zombie policy, first match wins:
/// 1. first turn holding 3♦ plays the single 3♦
/// 2. following always passes
/// 3. leading plays the lowest single
/// 4. anything else passes
pub fn zombie_auto_play(
    hand: &[Card],
    is_first_turn: bool,
    is_leading: bool,
    is_following: bool,
) -> AutoPlay {
    if is_first_turn && includes_three_of_diamonds(hand) {
        return AutoPlay::Play(vec![THREE_OF_DIAMONDS]);
    }
    if is_following {
        return AutoPlay::Pass;
    }
    if is_leading {
        if let Some(lowest) = hand.iter().min() {
            return AutoPlay::Play(vec![*lowest]);
        }
    }
    AutoPlay::Pass
}
