//! Per-match metrics, serialized one JSON line per match, plus the CSV row.

use bigtwo_backend::domain::rules::{DRAGON_THRESHOLD, HEAVY_THRESHOLD, PLAYERS};
use bigtwo_backend::domain::state::Seat;
use bigtwo_backend::domain::{multiplier_label, BombTrigger, RoundRecord};
use serde::Serialize;

use crate::simulator::MatchResult;

#[derive(Debug, Clone, Serialize)]
pub struct MatchMetrics {
    pub match_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: MatchConfig,
    pub result: MatchResultMetrics,
    pub rounds: Vec<RoundMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchConfig {
    pub players: [String; PLAYERS],
    pub target_rounds: u32,
    pub base_score: u32,
    pub total_matches: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResultMetrics {
    pub final_totals: [i64; PLAYERS],
    pub ranking: Vec<Seat>,
    pub winner: Seat,
    pub turns: u32,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u32,
    pub winner: Seat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bomb: Option<BombMetrics>,
    pub card_counts: [u8; PLAYERS],
    /// `x1`, `Heavy (x2)`, `Dragon (x4)`, or `-` for the winner.
    pub multipliers: [String; PLAYERS],
    pub net_scores: [i64; PLAYERS],
}

#[derive(Debug, Clone, Serialize)]
pub struct BombMetrics {
    pub trigger: BombTrigger,
    pub culprit: Seat,
    pub winner: Seat,
    pub points: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: Seat,
    pub player: String,
    pub total_score: i64,
    pub rounds_won: u32,
    pub bombs_caused: u32,
    pub bombs_won: u32,
    /// Lost a round holding `HEAVY_THRESHOLD..DRAGON_THRESHOLD` cards.
    pub heavy_losses: u32,
    /// Lost a round holding all thirteen cards.
    pub dragon_losses: u32,
    pub plays: u32,
    pub passes: u32,
}

/// Flat row for the summary CSV.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub match_id: u32,
    pub seed: u64,
    pub winner: Seat,
    pub seat0_total: i64,
    pub seat1_total: i64,
    pub seat2_total: i64,
    pub seat3_total: i64,
    pub seat0_player: String,
    pub seat1_player: String,
    pub seat2_player: String,
    pub seat3_player: String,
    pub bombs: u32,
    pub dragons: u32,
}

impl From<&MatchMetrics> for CsvSummaryRow {
    fn from(m: &MatchMetrics) -> Self {
        let totals = m.result.final_totals;
        let players = &m.config.players;
        Self {
            match_id: m.match_id,
            seed: m.seed,
            winner: m.result.winner,
            seat0_total: totals[0],
            seat1_total: totals[1],
            seat2_total: totals[2],
            seat3_total: totals[3],
            seat0_player: players[0].clone(),
            seat1_player: players[1].clone(),
            seat2_player: players[2].clone(),
            seat3_player: players[3].clone(),
            bombs: m.rounds.iter().filter(|r| r.bomb.is_some()).count() as u32,
            dragons: m.player_metrics.iter().map(|p| p.dragon_losses).sum(),
        }
    }
}

pub fn build_match_metrics(
    match_id: u32,
    players: [String; PLAYERS],
    target_rounds: u32,
    base_score: u32,
    total_matches: u32,
    result: &MatchResult,
    duration_ms: f64,
) -> MatchMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let rounds: Vec<RoundMetrics> = result.history.iter().map(build_round_metrics).collect();
    let player_metrics = (0..PLAYERS)
        .map(|seat| build_player_metrics(seat as Seat, &players[seat], result))
        .collect();

    MatchMetrics {
        match_id,
        seed: result.match_seed,
        timestamp,
        config: MatchConfig {
            players,
            target_rounds,
            base_score,
            total_matches,
        },
        result: MatchResultMetrics {
            final_totals: result.standings.totals,
            ranking: result.ranking.clone(),
            winner: result.ranking.first().copied().unwrap_or(0),
            turns: result.turns,
            duration_ms,
        },
        rounds,
        player_metrics,
    }
}

fn build_round_metrics(record: &RoundRecord) -> RoundMetrics {
    let mut card_counts = [0u8; PLAYERS];
    let mut multipliers: [String; PLAYERS] = Default::default();
    let mut net_scores = [0i64; PLAYERS];
    for result in &record.results {
        let idx = result.seat as usize;
        if idx >= PLAYERS {
            continue;
        }
        card_counts[idx] = result.card_count;
        multipliers[idx] = multiplier_label(result.multiplier).to_string();
        net_scores[idx] = result.net_score;
    }

    RoundMetrics {
        round_no: record.round_no,
        winner: record.winner,
        bomb: record.bomb.map(|b| BombMetrics {
            trigger: b.trigger,
            culprit: b.culprit,
            winner: b.winner,
            points: b.points,
        }),
        card_counts,
        multipliers,
        net_scores,
    }
}

fn build_player_metrics(seat: Seat, player: &str, result: &MatchResult) -> PlayerMetrics {
    let idx = seat as usize;
    let own_results = result
        .history
        .iter()
        .flat_map(|r| r.results.iter())
        .filter(|r| r.seat == seat && !r.is_winner);
    let (mut heavy_losses, mut dragon_losses) = (0, 0);
    for r in own_results {
        if r.card_count >= DRAGON_THRESHOLD {
            dragon_losses += 1;
        } else if r.card_count >= HEAVY_THRESHOLD {
            heavy_losses += 1;
        }
    }

    let bombs = result.history.iter().filter_map(|r| r.bomb);
    let (mut bombs_caused, mut bombs_won) = (0, 0);
    for bomb in bombs {
        if bomb.culprit == seat {
            bombs_caused += 1;
        }
        if bomb.winner == seat {
            bombs_won += 1;
        }
    }

    PlayerMetrics {
        seat,
        player: player.to_string(),
        total_score: result.standings.totals[idx],
        rounds_won: result.standings.wins[idx],
        bombs_caused,
        bombs_won,
        heavy_losses,
        dragon_losses,
        plays: result.plays[idx],
        passes: result.passes[idx],
    }
}
