//! Domain layer: pure rules engine types and transitions.

pub mod auto_play;
pub mod bomb;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod combos;
pub mod dealing;
pub mod events;
pub mod match_flow;
pub mod rules;
pub mod scoring;
pub mod seats;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod turns;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_match_flow;
#[cfg(test)]
mod tests_props_combos;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_seats;

// Re-exports for ergonomics
pub use auto_play::{zombie_auto_play, AutoPlay};
pub use bomb::{detect_classic_bomb, detect_endgame_bomb, BombEvent, BombTrigger, EndgameGamble};
pub use cards_logic::{can_beat, find_three_of_diamonds_holder, includes_three_of_diamonds, legal_plays};
pub use cards_parsing::{format_cards, try_parse_cards};
pub use cards_types::{Card, Rank, Suit, THREE_OF_DIAMONDS};
pub use combos::{classify, ComboKind, Combination};
pub use dealing::deal_hands;
pub use events::TableEvent;
pub use match_flow::{advance_round, end_match, extend_rounds, force_stop, select_seat};
pub use scoring::{
    multiplier, multiplier_label, score_bomb_round, score_round, RoundRecord, SeatCount,
    SeatResult, Standings,
};
pub use seats::{disconnect, grace_expired, reconnect};
pub use seed_derivation::{derive_dealing_seed, derive_player_seed};
pub use snapshot::{table_snapshot, TableSnapshot};
pub use state::{ConnectionStatus, MatchStatus, Seat, SeatStatus, TableState};
pub use turns::{
    can_pass, pass, pending_zombie_turn, resolve_timeout, resolve_zombie_turns, submit_play,
};
