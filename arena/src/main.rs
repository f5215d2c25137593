//! Team Deathmatch Arena
//!
//! Plays bot matches against the match core, one at a time or in bulk.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use arena::runner::{MatchRunner, REALTIME_INTERVAL_MS};
use arena::{ArenaMatch, ArenaSetup};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use tdm::phase::END_GRACE_SECONDS;
use tdm::{EndReason, MatchConfig, MatchSummary, TICK_RATE};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "tdm-arena")]
#[command(about = "Play team deathmatch bot matches", long_about = None)]
struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one match and print its summary
    Run {
        /// Match config JSON; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Bots per team
        #[arg(long, default_value_t = 8)]
        bots: u32,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Tick at engine speed on a background thread
        #[arg(long, default_value = "false")]
        realtime: bool,

        /// Write the summary JSON here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Play many matches in parallel and report timings
    Bench {
        /// Number of matches
        #[arg(long, default_value_t = 32)]
        matches: u64,

        /// Bots per team
        #[arg(long, default_value_t = 8)]
        bots: u32,

        /// Match config JSON; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> Result<MatchConfig> {
    match path {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("loading match config {}", path.display())),
        None => Ok(MatchConfig::default()),
    }
}

/// Enough ticks for any match to reach its close.
fn tick_budget(config: &MatchConfig) -> u64 {
    (config.host_time_limit() as u64 + END_GRACE_SECONDS + 1) * TICK_RATE
}

fn run(config: MatchConfig, bots: u32, seed: u64, realtime: bool) -> Result<MatchSummary> {
    let setup = ArenaSetup { bots_per_team: bots, ..Default::default() };
    let budget = tick_budget(&config);
    let mut game = ArenaMatch::new(config, setup, seed)?;

    if !realtime {
        return Ok(game.run_to_close(budget));
    }

    game.start();
    let game = Arc::new(Mutex::new(game));
    let mut runner = MatchRunner::new();
    runner.start(Arc::clone(&game), REALTIME_INTERVAL_MS, |result| {
        if result.activated {
            info!("Play started at tick {}", result.tick);
        }
        if result.ended {
            info!("Time expired at tick {}", result.tick);
        }
        if result.tick % (60 * TICK_RATE) == 0 {
            info!("{}s remaining ({:?})", result.remaining, result.phase);
        }
    });
    runner.wait();

    let game = game.lock().map_err(|_| anyhow!("match lock poisoned"))?;
    Ok(game.session().summary())
}

fn bench(config: MatchConfig, bots: u32, matches: u64) -> Result<()> {
    info!("Running {} matches with {} bots per team...", matches, bots);
    let budget = tick_budget(&config);
    let start = Instant::now();

    let summaries = (0..matches)
        .into_par_iter()
        .map(|seed| -> Result<MatchSummary> {
            let setup = ArenaSetup { bots_per_team: bots, ..Default::default() };
            let mut game = ArenaMatch::new(config.clone(), setup, seed)?;
            Ok(game.run_to_close(budget))
        })
        .collect::<Result<Vec<_>>>()?;

    let elapsed = start.elapsed();
    let total_ticks: u64 = summaries.iter().map(|s| s.tick).sum();
    let by_score = summaries
        .iter()
        .filter(|s| s.result.is_some_and(|r| r.reason == EndReason::ScoreLimit))
        .count();
    let draws = summaries
        .iter()
        .filter(|s| s.result.is_some_and(|r| r.draw))
        .count();

    info!(
        "Benchmark complete: {:?} total, {:?} per match, {} ticks",
        elapsed,
        elapsed / matches.max(1) as u32,
        total_ticks
    );
    info!(
        "Outcomes: {} by score limit, {} on time ({} draws)",
        by_score,
        summaries.len() - by_score,
        draws
    );

    let physical = memory_stats::memory_stats()
        .map(|stats| stats.physical_mem as u64)
        .unwrap_or(0);
    info!("Physical memory: {:.1} MiB", physical as f64 / (1024.0 * 1024.0));
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run { config, bots, seed, realtime, out } => {
            let config = load_config(config.as_deref())?;
            let seed = seed.unwrap_or_else(rand::random);
            info!("Playing one match, seed {}", seed);

            let summary = run(config, bots, seed, realtime)?;
            let json = summary.to_json();
            match out {
                Some(path) => std::fs::write(&path, json)
                    .with_context(|| format!("writing summary to {}", path.display()))?,
                None => println!("{}", json),
            }
        }
        Commands::Bench { matches, bots, config } => {
            let config = load_config(config.as_deref())?;
            bench(config, bots, matches)?;
        }
    }

    Ok(())
}
