use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use graze_app::autopilot::DodgePilot;
use graze_app::session::{self, RunSummary};
use graze_core::config::Tunables;
use graze_core::enums::GameMode;
use graze_leaderboard::{JsonFileStore, Leaderboard};
use graze_sim::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "graze", about = "Fly a GRAZE boss fight with the autopilot")]
struct Cli {
    /// RNG seed for the match
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// normal or endless
    #[arg(long, default_value = "normal", value_parser = parse_mode)]
    mode: GameMode,
    /// Match-time limit in seconds
    #[arg(long, default_value_t = 120.0)]
    seconds: f32,
    /// JSON file with tunables overrides
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON leaderboard to submit the result to
    #[arg(long)]
    leaderboard: Option<PathBuf>,
    #[arg(long, default_value = "autopilot")]
    name: String,
    /// Run on the 60Hz game loop instead of as fast as possible
    #[arg(long)]
    realtime: bool,
}

fn parse_mode(s: &str) -> Result<GameMode, String> {
    match s.to_lowercase().as_str() {
        "normal" => Ok(GameMode::Normal),
        "endless" => Ok(GameMode::Endless),
        other => Err(format!("unknown mode '{other}' (expected normal or endless)")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let tunables = match &cli.config {
        Some(path) => Tunables::from_json_file(path)
            .with_context(|| format!("failed to load tunables from {}", path.display()))?,
        None => Tunables::default(),
    };
    let config = SimConfig {
        seed: cli.seed,
        tunables,
    };

    let limit_ms = cli.seconds * 1000.0;
    let mut pilot = DodgePilot::new();
    let summary = if cli.realtime {
        session::run_realtime(config, cli.mode, limit_ms, &mut pilot)
            .context("real-time run failed")?
    } else {
        session::run_headless(config, cli.mode, limit_ms, &mut pilot)
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);

    if let Some(path) = &cli.leaderboard {
        record(path, &cli.name, &summary)?;
    }
    Ok(())
}

fn record(path: &Path, name: &str, summary: &RunSummary) -> Result<()> {
    let store = JsonFileStore::open(path)
        .with_context(|| format!("failed to open leaderboard {}", path.display()))?;
    let mut board = Leaderboard::new(store);

    let preview = board
        .try_fetch_rank_preview(summary.mode, summary.score, summary.wave)
        .context("failed to rank result")?;
    println!("rank {} on the {} board", preview.rank, summary.mode.as_str());

    board
        .try_submit(&summary.submission(name))
        .context("failed to submit score")?;

    for (i, entry) in board.fetch_leaderboard(summary.mode, None).iter().enumerate() {
        println!(
            "{:>2}. {:<16} score {:>8} wave {:>3} grazes {:>5}",
            i + 1,
            entry.player_name,
            entry.score,
            entry.wave,
            entry.graze_count
        );
    }
    Ok(())
}
