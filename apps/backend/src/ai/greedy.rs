//! Greedy player: sheds the weakest play that beats the table.
//!
//! When leading it prefers the largest combination it can form, so cards
//! leave the hand as quickly as possible; when following it plays the
//! smallest answer and saves bombs for a lone "2" or a five-card table.

use super::trait_def::{AiError, AutoPlayer, TurnView};
use crate::domain::auto_play::AutoPlay;
use crate::domain::combos::classify;

pub struct GreedyPlayer;

impl GreedyPlayer {
    pub const NAME: &'static str = "greedy";
    pub const VERSION: &'static str = "1.0.0";
}

impl AutoPlayer for GreedyPlayer {
    fn choose_action(&self, view: &TurnView) -> Result<AutoPlay, AiError> {
        let plays = view.legal_plays();

        let choice = if view.is_leading() {
            // legal_plays is grouped by size ascending and weakest first
            // within each size.
            plays
                .iter()
                .filter(|p| p.len() == plays.last().map_or(0, Vec::len))
                .min_by_key(|p| classify(p).rank)
                .cloned()
        } else {
            plays
                .iter()
                .filter(|p| !classify(p).is_bomb() || view.table_cards.len() == 1)
                .min_by_key(|p| classify(p).rank)
                .or_else(|| plays.first())
                .cloned()
        };

        match choice {
            Some(cards) => Ok(AutoPlay::Play(cards)),
            None if view.can_pass => Ok(AutoPlay::Pass),
            None => Err(AiError::InvalidMove(format!(
                "No legal play for seat {} and passing is illegal",
                view.seat
            ))),
        }
    }
}
