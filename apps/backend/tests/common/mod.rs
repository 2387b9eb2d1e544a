#![allow(dead_code)]

pub mod proptest_prelude;

use bigtwo_backend::domain::state::{MatchStatus, Seat, TableState, TrickState};
use bigtwo_backend::domain::{try_parse_cards, Card, TableEvent, TableSnapshot};
use bigtwo_backend::services::{TableActor, TableHandle, TableUpdate};
use bigtwo_backend::TableConfig;
use tokio::sync::broadcast;
use uuid::Uuid;

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("fixture tokens should parse")
}

/// A live table past its opening play, with `lead` to open a fresh trick.
pub fn table_with_hands(hands: [&[&str]; 4], lead: Seat) -> TableState {
    let mut state = TableState::new(25, 25, 1);
    for (seat, tokens) in state.seats.iter_mut().zip(hands) {
        seat.occupied = true;
        seat.hand = cards(tokens);
        seat.hand.sort();
    }
    state.status = MatchStatus::Playing;
    state.current_round = 1;
    state.trick = TrickState::opening(lead);
    state.trick.is_first_turn = false;
    state
}

pub fn test_config(seed: u64) -> TableConfig {
    TableConfig::default().with_seed(seed)
}

/// Spawn a table, take all four seats and return the opening snapshot.
pub async fn started_table(config: TableConfig) -> (TableHandle, TableSnapshot) {
    let handle = TableActor::spawn(Uuid::new_v4(), config).expect("config should be valid");
    for seat in 0..4 {
        handle.select_seat(seat).await.expect("seat should be free");
    }
    let snapshot = handle.snapshot(None).await.expect("table should be running");
    (handle, snapshot)
}

/// Everything broadcast so far, flattened.
pub fn drain_events(updates: &mut broadcast::Receiver<TableUpdate>) -> Vec<TableEvent> {
    let mut events = Vec::new();
    while let Ok(update) = updates.try_recv() {
        events.extend(update.events);
    }
    events
}

pub fn next(seat: Seat) -> Seat {
    (seat + 1) % 4
}
