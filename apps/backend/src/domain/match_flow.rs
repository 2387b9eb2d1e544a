//! Match lifecycle: seat selection, dealing, round settlement and the
//! end-of-match decision.

use crate::domain::bomb::{BombEvent, BombTrigger};
use crate::domain::cards_logic::find_three_of_diamonds_holder;
use crate::domain::dealing::deal_hands;
use crate::domain::events::TableEvent;
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::{score_bomb_round, score_round, RoundRecord, SeatCount};
use crate::domain::seats::sync_pause;
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::{MatchStatus, Seat, TableState, TrickState};
use crate::errors::domain::{DomainError, ValidationKind};

fn phase_mismatch(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::PhaseMismatch, detail)
}

/// Claim a seat before the match starts. Round 1 is dealt once all four
/// seats are taken.
pub fn select_seat(state: &mut TableState, seat: Seat) -> Result<Vec<TableEvent>, DomainError> {
    if state.status != MatchStatus::Waiting {
        return Err(phase_mismatch("Seats can only be selected before the match starts"));
    }
    let Some(slot) = state.seats.get_mut(seat as usize) else {
        return Err(DomainError::validation(
            ValidationKind::InvalidSeatSelection,
            format!("Seat {seat} is out of range"),
        ));
    };
    if slot.occupied {
        return Err(DomainError::validation(
            ValidationKind::InvalidSeatSelection,
            format!("Seat {seat} is already taken"),
        ));
    }
    slot.occupied = true;

    let mut events = vec![TableEvent::SeatSelected { seat }];
    if state.seats.iter().all(|s| s.occupied) {
        state.status = MatchStatus::Playing;
        events.push(TableEvent::MatchStarted);
        events.extend(deal_next_round(state));
        events.extend(sync_pause(state));
    }
    Ok(events)
}

/// Deal the next round of a live match. Called whenever a round is settled
/// below the round target.
pub fn advance_round(state: &mut TableState) -> Result<Vec<TableEvent>, DomainError> {
    if !matches!(state.status, MatchStatus::Playing | MatchStatus::Paused) {
        return Err(phase_mismatch(format!(
            "Cannot deal a round while the match is {:?}",
            state.status
        )));
    }
    if state.current_round >= state.target_rounds {
        return Err(phase_mismatch("Round target already reached"));
    }
    Ok(deal_next_round(state))
}

fn deal_next_round(state: &mut TableState) -> Vec<TableEvent> {
    state.current_round += 1;
    let round_no = state.current_round;
    let hands = deal_hands(derive_dealing_seed(state.match_seed, round_no));
    let first = find_three_of_diamonds_holder(&hands);
    for (seat, hand) in state.seats.iter_mut().zip(hands) {
        seat.hand = hand;
    }
    state.trick = TrickState::opening(first);
    state.gamble = None;
    vec![TableEvent::RoundDealt {
        round_no,
        first_seat: first,
    }]
}

/// Settle the round `winner` just ended, then deal the next one or stop at
/// the round target.
///
/// With a bomb, `culprit` pays the winner the pool and the other two seats
/// are safe; card counts are taken as they stand.
pub(crate) fn finish_round(
    state: &mut TableState,
    winner: Seat,
    bomb: Option<(BombTrigger, Seat)>,
) -> Result<Vec<TableEvent>, DomainError> {
    let counts: Vec<SeatCount> = (0..PLAYERS as Seat)
        .map(|seat| SeatCount::new(seat, state.seats[seat as usize].card_count()))
        .collect();

    let mut events = Vec::new();
    let (results, bomb_event) = match bomb {
        Some((trigger, culprit)) => {
            let innocents: Vec<SeatCount> = counts
                .iter()
                .copied()
                .filter(|c| c.seat != culprit && c.seat != winner)
                .collect();
            let results = score_bomb_round(
                counts[culprit as usize],
                counts[winner as usize],
                &innocents,
                state.base_score,
            );
            let points = results
                .iter()
                .find(|r| r.is_winner)
                .map_or(0, |r| r.net_score);
            let event = BombEvent {
                trigger,
                culprit,
                winner,
                points,
            };
            events.push(TableEvent::BombTriggered { bomb: event });
            (results, Some(event))
        }
        None => (score_round(&counts, state.base_score, winner), None),
    };

    let round_no = state.current_round;
    state.history.push(RoundRecord {
        round_no,
        winner,
        bomb: bomb_event,
        results,
    });
    events.push(TableEvent::RoundOver { round_no, winner });

    state.trick = TrickState::opening(winner);
    state.trick.is_first_turn = false;
    state.gamble = None;

    if state.current_round >= state.target_rounds {
        state.status = MatchStatus::PendingDecision;
        events.push(TableEvent::PendingDecision {
            rounds_played: state.current_round,
        });
    } else {
        events.extend(advance_round(state)?);
    }
    Ok(events)
}

/// Raise the round target by `n`; scores are kept. From a pending decision
/// this resumes play with a fresh deal.
pub fn extend_rounds(state: &mut TableState, n: u32) -> Result<Vec<TableEvent>, DomainError> {
    if n == 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidRoundExtension,
            "Round extension must be at least 1",
        ));
    }
    if !matches!(
        state.status,
        MatchStatus::Playing | MatchStatus::Paused | MatchStatus::PendingDecision
    ) {
        return Err(phase_mismatch(format!(
            "Cannot extend rounds while the match is {:?}",
            state.status
        )));
    }
    let target_rounds = state.target_rounds.checked_add(n).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidRoundExtension,
            "Round extension overflows the round target",
        )
    })?;

    state.target_rounds = target_rounds;
    let mut events = vec![TableEvent::RoundsExtended { target_rounds }];
    if state.status == MatchStatus::PendingDecision {
        state.status = MatchStatus::Playing;
        events.extend(deal_next_round(state));
        events.extend(sync_pause(state));
    }
    Ok(events)
}

/// Lock in the final standings after the round target was reached.
pub fn end_match(state: &mut TableState) -> Result<Vec<TableEvent>, DomainError> {
    if state.status != MatchStatus::PendingDecision {
        return Err(phase_mismatch(format!(
            "Cannot end the match while it is {:?}",
            state.status
        )));
    }
    state.status = MatchStatus::Ended;
    Ok(vec![TableEvent::MatchEnded { forced: false }])
}

/// End the match from any state, discarding the trick in progress.
/// Standings from completed rounds are kept. Stopping an ended match is a no-op.
pub fn force_stop(state: &mut TableState) -> Vec<TableEvent> {
    if state.status == MatchStatus::Ended {
        return Vec::new();
    }
    state.status = MatchStatus::Ended;
    state.trick.table_cards.clear();
    state.trick.passed_locked.clear();
    state.gamble = None;
    vec![TableEvent::MatchEnded { forced: true }]
}
