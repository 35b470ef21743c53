//! headless: drives the coin-collector engine without a window.
//!
//! Usage: `headless [config.json]`.  Without a path the default playfield is
//! used: 5 bots, 10 coins, 800 × 600, and the L-shaped pair of walls.  Set
//! `RUST_LOG=debug` to see spawns, search results, and rebinding.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use cc_core::{AgentId, TargetId, Tick};
use cc_sim::{EngineBuilder, EngineConfig, EngineObserver, RunSummary, Runner, TickReport};

// ── Constants ─────────────────────────────────────────────────────────────────

const MAX_TICKS:         u64 = 20_000;
const PROGRESS_INTERVAL: u64 = 100;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints every collection and a heartbeat line every `PROGRESS_INTERVAL`
/// ticks.
struct ProgressPrinter {
    blocked: usize,
}

impl EngineObserver for ProgressPrinter {
    fn on_collect(&mut self, tick: Tick, agent: AgentId, target: TargetId) {
        println!("{tick:>7}  {agent} collected {target}");
    }

    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        self.blocked += report.moves.blocked;
        if tick.0 > 0 && tick.0.is_multiple_of(PROGRESS_INTERVAL) {
            info!(%tick, moved = report.moves.moved, blocked = report.moves.blocked, "progress");
        }
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        info!(ticks = summary.ticks, blocked_moves = self.blocked, "run finished");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path)?,
        None => EngineConfig::default(),
    };

    println!("=== headless: coin collector ===");
    println!(
        "Bots: {}  |  Coins: {}  |  Field: {} x {}  |  Walls: {}  |  Seed: {}",
        config.agent_count,
        config.target_count,
        config.width,
        config.height,
        config.obstacles.len(),
        config.seed,
    );
    println!();

    let t0 = Instant::now();
    let mut engine = EngineBuilder::new(config).build()?;
    let solution = engine.optimize_assignments();
    println!(
        "Initial assignment: {} of {} bots bound, total distance {:.1} ({} search nodes) in {:.3} s",
        solution.assignment.assigned_count(),
        solution.assignment.len(),
        solution.total_distance,
        solution.stats.nodes,
        t0.elapsed().as_secs_f64(),
    );

    for (i, route) in engine.routes().iter().enumerate() {
        let order: Vec<String> = route.order.iter().map(|t| t.index().to_string()).collect();
        println!("  bot {i}: best full route {} ({:.1})", order.join(" → "), route.length);
    }
    println!();

    let mut observer = ProgressPrinter { blocked: 0 };
    let summary = Runner::new(MAX_TICKS).run(&mut engine, &mut observer);

    println!();
    println!(
        "{} after {} ticks: {} coins collected, score {}",
        if summary.completed { "Done" } else { "Stopped" },
        summary.ticks,
        summary.collected,
        summary.score,
    );
    println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config(path: &str) -> Result<EngineConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}
