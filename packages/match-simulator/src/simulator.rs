//! In-memory match runner.
//!
//! Drives the same transition functions a table actor uses, minus timers and
//! connections: every seat is an automated player.

use bigtwo_backend::ai::{AutoPlayer, TurnView};
use bigtwo_backend::domain::rules::PLAYERS;
use bigtwo_backend::domain::state::{MatchStatus, Seat, TableState};
use bigtwo_backend::domain::{
    end_match, pass, select_seat, submit_play, AutoPlay, RoundRecord, Standings,
};
use bigtwo_backend::AppError;
use tracing::{debug, trace};

/// Upper bound on turns per round; a round normally takes well under 100.
const MAX_TURNS_PER_ROUND: u32 = 2_000;

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub match_seed: u64,
    pub history: Vec<RoundRecord>,
    pub standings: Standings,
    pub ranking: Vec<Seat>,
    pub turns: u32,
    pub plays: [u32; PLAYERS],
    pub passes: [u32; PLAYERS],
}

pub struct Simulator {
    match_seed: u64,
    target_rounds: u32,
    base_score: u32,
}

impl Simulator {
    pub fn new(match_seed: u64, target_rounds: u32, base_score: u32) -> Self {
        Self {
            match_seed,
            target_rounds,
            base_score,
        }
    }

    /// Seat all four players, play every round, then settle the match.
    pub fn simulate_match(
        &self,
        players: &[Box<dyn AutoPlayer>; PLAYERS],
    ) -> Result<MatchResult, AppError> {
        let mut state = TableState::new(self.target_rounds, self.base_score, self.match_seed);
        for seat in 0..PLAYERS as Seat {
            select_seat(&mut state, seat)?;
        }

        let max_turns = self.target_rounds.saturating_mul(MAX_TURNS_PER_ROUND);
        let mut turns = 0u32;
        let mut plays = [0u32; PLAYERS];
        let mut passes = [0u32; PLAYERS];

        while state.status == MatchStatus::Playing {
            if turns >= max_turns {
                return Err(AppError::internal(format!(
                    "Match {} stalled after {turns} turns in round {}",
                    self.match_seed, state.current_round
                )));
            }
            turns += 1;

            let seat = state.trick.turn_seat;
            let view = TurnView::for_seat(&state, seat)
                .ok_or_else(|| AppError::internal(format!("Seat {seat} out of range")))?;
            let action = players[seat as usize].choose_action(&view)?;
            trace!(seat, ?action, "turn");

            match action {
                AutoPlay::Play(cards) => {
                    submit_play(&mut state, seat, &cards)?;
                    plays[seat as usize] += 1;
                }
                AutoPlay::Pass => {
                    pass(&mut state, seat)?;
                    passes[seat as usize] += 1;
                }
            }
        }

        end_match(&mut state)?;
        let standings = Standings::from_history(&state.history);
        debug!(
            match_seed = self.match_seed,
            turns,
            totals = ?standings.totals,
            "Match simulated"
        );

        Ok(MatchResult {
            match_seed: self.match_seed,
            ranking: standings.ranking(),
            standings,
            history: state.history,
            turns,
            plays,
            passes,
        })
    }
}
