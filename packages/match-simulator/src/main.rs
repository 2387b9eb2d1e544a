//! Match simulator CLI: plays whole Big Two matches in memory with automated
//! players and records per-match metrics.

mod metrics;
mod output;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use bigtwo_backend::ai::{create_ai, AutoPlayer};
use bigtwo_backend::domain::derive_player_seed;
use bigtwo_backend::domain::rules::{DEFAULT_BASE_SCORE, DEFAULT_TARGET_ROUNDS, PLAYERS};
use clap::Parser;
use metrics::build_match_metrics;
use output::OutputWriter;
use simulator::{MatchResult, Simulator};
use tracing::{info, warn};
use types::{OutputFormat, PlayerKind};

#[derive(Parser)]
#[command(name = "match-simulator")]
#[command(about = "In-memory Big Two match simulator for automated players")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    matches: u32,

    /// Player kind for all seats (shortcut to set all 4 seats at once)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<PlayerKind>,

    /// Player kind for seat 0
    #[arg(long, default_value = "greedy")]
    seat0: PlayerKind,

    /// Player kind for seat 1
    #[arg(long, default_value = "greedy")]
    seat1: PlayerKind,

    /// Player kind for seat 2
    #[arg(long, default_value = "random")]
    seat2: PlayerKind,

    /// Player kind for seat 3
    #[arg(long, default_value = "random")]
    seat3: PlayerKind,

    /// Base seed; match `n` uses `seed + n`. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Rounds per match
    #[arg(long, default_value_t = DEFAULT_TARGET_ROUNDS)]
    target_rounds: u32,

    /// Base score for penalties
    #[arg(long, default_value_t = DEFAULT_BASE_SCORE)]
    base_score: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON logs filtered by RUST_LOG, as table hosts do
    #[arg(long)]
    json_logs: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: PathBuf,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Gzip the JSONL output
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.json_logs {
        bigtwo_backend::telemetry::init_tracing();
    } else {
        // Silent by default, only warnings/errors
        let filter = if args.verbose {
            "debug"
        } else if args.show_output {
            "info"
        } else {
            "warn"
        };
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    if args.target_rounds == 0 || args.base_score == 0 {
        return Err("--target-rounds and --base-score must be at least 1".into());
    }

    let seat_kinds = match args.seats {
        Some(kind) => [kind; PLAYERS],
        None => [args.seat0, args.seat1, args.seat2, args.seat3],
    };
    let player_names = seat_kinds.map(|kind| kind.name().to_string());
    info!(matches = args.matches, players = ?player_names, "Starting match simulator");

    let mut output_writer = OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    let base_seed = args.seed.unwrap_or_else(rand::random);

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for match_id in 1..=args.matches {
        let match_start = Instant::now();
        let match_seed = base_seed.wrapping_add(u64::from(match_id));

        let outcome = create_players(&seat_kinds, match_seed).and_then(|players| {
            Simulator::new(match_seed, args.target_rounds, args.base_score)
                .simulate_match(&players)
                .map_err(Into::into)
        });

        match outcome {
            Ok(result) => {
                let duration_ms = match_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_match_metrics(
                    match_id,
                    player_names.clone(),
                    args.target_rounds,
                    args.base_score,
                    args.matches,
                    &result,
                    duration_ms,
                );
                if let Err(e) = output_writer.write_match(&metrics) {
                    warn!(match_id, error = %e, "Failed to write metrics");
                }
                info!(match_id, totals = ?result.standings.totals, "Match completed");
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(match_id, match_seed, error = %e, "Match failed");
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let (jsonl_path, csv_path) = (jsonl_path.cloned(), csv_path.clone());
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, &player_names, errors, elapsed, args.matches);
    }

    Ok(())
}

/// Each seat gets its own seed derived from the match seed.
fn create_players(
    kinds: &[PlayerKind; PLAYERS],
    match_seed: u64,
) -> Result<[Box<dyn AutoPlayer>; PLAYERS], Box<dyn std::error::Error>> {
    let mut players = Vec::with_capacity(PLAYERS);
    for (seat, kind) in kinds.iter().enumerate() {
        let seed = derive_player_seed(match_seed, seat as u8);
        let player = create_ai(kind.name(), Some(seed))
            .ok_or_else(|| format!("Unknown player kind: {}", kind.name()))?;
        players.push(player);
    }
    players
        .try_into()
        .map_err(|_| "Expected exactly four players".into())
}

fn print_summary(
    results: &[MatchResult],
    names: &[String; PLAYERS],
    errors: u32,
    elapsed: Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Matches completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per match: {:?}",
        elapsed / results.len() as u32
    );

    let mut match_wins = [0u32; PLAYERS];
    let mut round_wins = [0u32; PLAYERS];
    let mut totals = [0i64; PLAYERS];
    let mut best = [i64::MIN; PLAYERS];
    let mut worst = [i64::MAX; PLAYERS];
    let mut bombs = 0usize;
    let mut dragons = 0usize;

    for result in results {
        if let Some(&winner) = result.ranking.first() {
            match_wins[winner as usize] += 1;
        }
        for seat in 0..PLAYERS {
            let total = result.standings.totals[seat];
            totals[seat] += total;
            best[seat] = best[seat].max(total);
            worst[seat] = worst[seat].min(total);
            round_wins[seat] += result.standings.wins[seat];
        }
        bombs += result.history.iter().filter(|r| r.bomb.is_some()).count();
        dragons += result
            .history
            .iter()
            .flat_map(|r| r.results.iter())
            .filter(|r| r.multiplier >= 4)
            .count();
    }

    println!("\n=== Results by Seat ===");
    let n = results.len() as f64;
    for seat in 0..PLAYERS {
        println!(
            "Seat {seat} ({}): avg={:.1}, min={}, max={}, match wins={} ({:.1}%), round wins={}",
            names[seat],
            totals[seat] as f64 / n,
            worst[seat],
            best[seat],
            match_wins[seat],
            match_wins[seat] as f64 / n * 100.0,
            round_wins[seat],
        );
    }
    println!("\nBombs: {bombs}, Dragons: {dragons}");
}
