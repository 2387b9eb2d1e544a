//! Turn state machine: plays, passes, timeouts and zombie turns.
//!
//! Every operation validates completely before touching the state, so a
//! rejected action leaves the table exactly as it was.

use crate::domain::auto_play::{zombie_auto_play, AutoPlay};
use crate::domain::bomb::{detect_classic_bomb, detect_endgame_bomb, is_endgame_gamble, BombTrigger};
use crate::domain::cards_logic::{beats_table, includes_three_of_diamonds};
use crate::domain::cards_parsing::format_cards;
use crate::domain::combos::{classify, Combination};
use crate::domain::events::TableEvent;
use crate::domain::match_flow::finish_round;
use crate::domain::rules::{PASSES_FOR_NEW_LEAD, PLAYERS};
use crate::domain::state::{
    seat_offset, ConnectionStatus, MatchStatus, PendingGamble, Seat, TableState, TrickState,
};
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

fn illegal_play(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::IllegalPlay, detail)
}

fn illegal_pass(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::IllegalPass, detail)
}

pub(crate) fn require_playing(state: &TableState, action: &str) -> Result<(), DomainError> {
    if state.status != MatchStatus::Playing {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("Cannot {action} while the match is {:?}", state.status),
        ));
    }
    Ok(())
}

/// Next seat clockwise from `from` that may act: any seat not locked out,
/// and the lead, who is always eligible.
pub fn next_active_seat(trick: &TrickState, from: Seat) -> Seat {
    (1..PLAYERS as i8)
        .map(|k| seat_offset(from, k))
        .find(|&s| s == trick.lead_seat || !trick.is_locked(s))
        .unwrap_or(trick.lead_seat)
}

/// Whether `seat` could legally pass right now (ignoring match status).
pub fn can_pass(state: &TableState, seat: Seat) -> bool {
    state.trick.turn_seat == seat && state.trick.lead_seat != seat && !state.trick.is_first_turn
}

/// Check a play against the current table without applying it.
pub fn validate_play(
    state: &TableState,
    seat: Seat,
    cards: &[Card],
) -> Result<Combination, DomainError> {
    require_playing(state, "play")?;
    let hand = &state.seat(seat)?.hand;
    let trick = &state.trick;

    if trick.turn_seat != seat {
        return Err(illegal_play(format!(
            "Not seat {seat}'s turn (seat {} to act)",
            trick.turn_seat
        )));
    }
    if trick.is_locked(seat) {
        return Err(illegal_play(format!(
            "Seat {seat} passed and is locked out of this trick"
        )));
    }

    let mut unique = cards.to_vec();
    unique.sort();
    unique.dedup();
    if unique.len() != cards.len() {
        return Err(illegal_play("Play contains the same card twice"));
    }
    if let Some(missing) = cards.iter().find(|c| !hand.contains(c)) {
        return Err(illegal_play(format!("Card {missing} is not in seat {seat}'s hand")));
    }

    let combo = classify(cards);
    if !combo.is_valid() {
        return Err(illegal_play(format!(
            "Not a valid combination: [{}]",
            format_cards(cards)
        )));
    }
    if trick.is_first_turn && !includes_three_of_diamonds(cards) {
        return Err(DomainError::validation(
            ValidationKind::MissingThreeOfDiamonds,
            "The first play of the round must include the 3 of diamonds",
        ));
    }
    if !trick.table_cards.is_empty() && !beats_table(cards, &trick.table_cards) {
        return Err(illegal_play(format!(
            "[{}] does not beat [{}]",
            format_cards(cards),
            format_cards(&trick.table_cards)
        )));
    }
    Ok(combo)
}

/// Play `cards` from `seat`'s hand onto the table.
pub fn submit_play(
    state: &mut TableState,
    seat: Seat,
    cards: &[Card],
) -> Result<Vec<TableEvent>, DomainError> {
    apply_play(state, seat, cards, false)
}

/// Pass and get locked out until the next new lead.
pub fn pass(state: &mut TableState, seat: Seat) -> Result<Vec<TableEvent>, DomainError> {
    apply_pass(state, seat, false)
}

/// The turn timer ran out for the seat on turn.
///
/// Resolves as a pass when passing is legal, otherwise the zombie policy
/// plays on the seat's behalf. The seat's connection status is unchanged.
pub fn resolve_timeout(state: &mut TableState) -> Result<Vec<TableEvent>, DomainError> {
    require_playing(state, "resolve a timeout")?;
    let seat = state.trick.turn_seat;
    if can_pass(state, seat) {
        apply_pass(state, seat, true)
    } else {
        apply_auto_play(state, seat)
    }
}

/// Seat on turn that the engine must play for, if any.
pub fn pending_zombie_turn(state: &TableState) -> Option<Seat> {
    if state.status != MatchStatus::Playing {
        return None;
    }
    let seat = state.trick.turn_seat;
    let seat_state = state.seats.get(seat as usize)?;
    (seat_state.connection == ConnectionStatus::Zombie).then_some(seat)
}

/// Resolve zombie turns until a connected seat is on turn or play stops.
pub fn resolve_zombie_turns(state: &mut TableState) -> Result<Vec<TableEvent>, DomainError> {
    let mut events = Vec::new();
    while let Some(seat) = pending_zombie_turn(state) {
        events.extend(apply_auto_play(state, seat)?);
    }
    Ok(events)
}

fn apply_auto_play(state: &mut TableState, seat: Seat) -> Result<Vec<TableEvent>, DomainError> {
    let hand = &state.seat(seat)?.hand;
    let leading = state.trick.table_cards.is_empty();
    match zombie_auto_play(hand, state.trick.is_first_turn, leading, !leading) {
        AutoPlay::Play(cards) => apply_play(state, seat, &cards, true),
        AutoPlay::Pass => apply_pass(state, seat, true),
    }
}

fn apply_play(
    state: &mut TableState,
    seat: Seat,
    cards: &[Card],
    auto: bool,
) -> Result<Vec<TableEvent>, DomainError> {
    let combo = validate_play(state, seat, cards)?;

    let mut played = cards.to_vec();
    played.sort();
    let was_leading = state.trick.table_cards.is_empty();
    let classic = detect_classic_bomb(&state.trick.table_cards, &played);
    let previous_lead = state.trick.lead_seat;

    let seat_state = state.seat_mut(seat)?;
    let hand_before = seat_state.hand.clone();
    seat_state.hand.retain(|c| !played.contains(c));
    let hand_empty = seat_state.hand.is_empty();

    let mut events = vec![TableEvent::PlayAccepted {
        seat,
        cards: played.clone(),
        combo: combo.kind,
        auto,
    }];

    let mut bomb = classic.then_some((BombTrigger::Classic, previous_lead));
    if let Some(gamble) = state.gamble.take() {
        let beaten = detect_endgame_bomb(
            gamble.hand_before.len(),
            gamble.card,
            &gamble.hand_before,
            gamble.seat != seat,
        );
        if beaten.triggered && bomb.is_none() {
            bomb = Some((BombTrigger::Endgame, gamble.seat));
        }
    }

    if let Some((trigger, culprit)) = bomb {
        events.extend(finish_round(state, seat, Some((trigger, culprit)))?);
        return Ok(events);
    }
    if hand_empty {
        events.extend(finish_round(state, seat, None)?);
        return Ok(events);
    }

    if was_leading && played.len() == 1 && is_endgame_gamble(&hand_before, played[0]) {
        state.gamble = Some(PendingGamble {
            seat,
            card: played[0],
            hand_before,
        });
    }

    let trick = &mut state.trick;
    trick.table_cards = played;
    trick.lead_seat = seat;
    trick.is_first_turn = false;
    trick.turn_seat = next_active_seat(trick, seat);
    Ok(events)
}

fn apply_pass(state: &mut TableState, seat: Seat, auto: bool) -> Result<Vec<TableEvent>, DomainError> {
    require_playing(state, "pass")?;
    state.seat(seat)?;
    let trick = &state.trick;
    if trick.turn_seat != seat {
        return Err(illegal_pass(format!(
            "Not seat {seat}'s turn (seat {} to act)",
            trick.turn_seat
        )));
    }
    if trick.is_first_turn {
        return Err(illegal_pass("The opening play of a round cannot be a pass"));
    }
    if trick.lead_seat == seat {
        return Err(illegal_pass("The lead seat cannot pass"));
    }

    let mut events = vec![TableEvent::Passed { seat, auto }];
    state.trick.passed_locked.push(seat);

    if state.trick.passed_locked.len() >= PASSES_FOR_NEW_LEAD {
        let lead = state.trick.lead_seat;
        state.trick.passed_locked.clear();
        state.trick.table_cards.clear();
        state.trick.turn_seat = lead;

        if let Some(gamble) = state.gamble.take() {
            let outcome =
                detect_endgame_bomb(gamble.hand_before.len(), gamble.card, &gamble.hand_before, false);
            if gamble.seat == lead && outcome.is_safe {
                events.push(TableEvent::GambleDefused { seat: lead });
            }
        }
        events.push(TableEvent::NewLead { seat: lead });
    } else {
        state.trick.turn_seat = next_active_seat(&state.trick, seat);
    }
    Ok(events)
}
