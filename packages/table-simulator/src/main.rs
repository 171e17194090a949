//! Table simulator CLI - plays whole Hearts games in memory.
//!
//! Every seat is driven by a simple built-in strategy; one JSON line per game
//! is written to stdout. Engine settings come from `HEARTS_*` environment
//! variables, overridden by the flags below.

mod output;
mod simulator;

use std::time::Instant;

use clap::{Parser, ValueEnum};
use hearts_engine::EngineConfig;
use output::{GameRecord, OutputWriter};
use simulator::{SeatStrategy, Simulator};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "table-simulator")]
#[command(about = "Play seeded Hearts games with built-in seat strategies")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Base seed; game N uses seed + N. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Score that ends the game
    #[arg(long)]
    losing_total: Option<u16>,

    /// Strategy for all four seats
    #[arg(long, default_value = "first-legal")]
    strategy: StrategyArg,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print a summary to stderr after the last game
    #[arg(long)]
    summary: bool,
}

#[derive(Debug, Clone, ValueEnum)]
enum StrategyArg {
    FirstLegal,
    Random,
}

impl From<StrategyArg> for SeatStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::FirstLegal => SeatStrategy::FirstLegal,
            StrategyArg::Random => SeatStrategy::Random,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = EngineConfig::from_env()?;
    if let Some(losing_total) = args.losing_total {
        if losing_total == 0 {
            return Err("--losing-total must be at least 1".into());
        }
        config = config.with_losing_total(losing_total);
    }
    let base_seed = args.seed.or(config.seed);

    info!(
        games = args.games,
        losing_total = config.losing_total,
        ?base_seed,
        "Starting table simulator"
    );

    let simulator = Simulator::new(config, args.strategy.into());
    let mut writer = OutputWriter::new(std::io::stdout().lock());

    let start = Instant::now();
    let mut records = Vec::new();
    let mut errors = 0u32;

    for game_num in 1..=args.games {
        let game_seed = match base_seed {
            Some(seed) => seed.wrapping_add(u64::from(game_num)),
            None => rand::random(),
        };

        match simulator.simulate_game(game_seed) {
            Ok(outcome) => {
                let record = GameRecord::new(game_num, game_seed, &outcome);
                writer.write_game(&record)?;
                records.push(record);
            }
            Err(e) => {
                errors += 1;
                warn!(game_num, game_seed, error = %e, "Game failed");
            }
        }
    }

    writer.finish()?;

    if args.summary {
        print_summary(&records, errors, start.elapsed(), args.games);
    }
    Ok(())
}

fn print_summary(records: &[GameRecord], errors: u32, elapsed: std::time::Duration, total: u32) {
    eprintln!("\n=== Simulation Summary ===");
    eprintln!("Games completed: {}/{}", records.len(), total);
    if errors > 0 {
        eprintln!("Errors: {errors}");
    }
    eprintln!("Total time: {elapsed:?}");
    if records.is_empty() {
        return;
    }

    // Lowest score wins in Hearts; ties share the win.
    let mut wins = [0u32; 4];
    let mut total_scores = [0u64; 4];
    let mut moons = [0u32; 4];
    for record in records {
        let best = record.final_scores.iter().min().copied().unwrap_or(0);
        for (seat, &score) in record.final_scores.iter().enumerate() {
            total_scores[seat] += u64::from(score);
            if score == best {
                wins[seat] += 1;
            }
        }
        for &seat in &record.moon_shooters {
            moons[seat as usize] += 1;
        }
    }

    eprintln!("\n=== Results by Seat ===");
    for seat in 0..4 {
        let avg = total_scores[seat] as f64 / records.len() as f64;
        let win_rate = wins[seat] as f64 / records.len() as f64 * 100.0;
        eprintln!(
            "Seat {seat}: avg={avg:.1}, wins={} ({win_rate:.1}%), moons={}",
            wins[seat], moons[seat]
        );
    }
}
