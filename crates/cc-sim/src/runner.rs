//! External clock loop that drives an [`Engine`] tick by tick.

use tracing::{info, warn};

use cc_core::Tick;
use cc_plan::AssignmentSolver;

use crate::{Engine, EngineObserver, TickReport};

/// What a finished [`Runner::run`] reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// Ticks executed by this run.
    pub ticks:     u64,
    pub score:     u64,
    pub collected: usize,
    /// `true` if every target was collected before the tick cap.
    pub completed: bool,
}

/// Owns the tick counter and calls the engine's tick functions in order.
///
/// The engine itself has no notion of time; a GUI timer, a test, or this
/// runner decides when the next tick happens.
#[derive(Clone, Debug)]
pub struct Runner {
    /// Stop after this many ticks even if targets remain (walls can trap a
    /// bot forever).
    pub max_ticks:         u64,
    /// Call `on_snapshot` every N ticks.  0 disables snapshots.
    pub snapshot_interval: u64,
    tick:                  Tick,
}

impl Runner {
    pub fn new(max_ticks: u64) -> Self {
        Self { max_ticks, snapshot_interval: 0, tick: Tick::ZERO }
    }

    pub fn with_snapshot_interval(mut self, every: u64) -> Self {
        self.snapshot_interval = every;
        self
    }

    /// The tick the next [`step`](Self::step) will execute.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// Execute exactly one tick, calling observer hooks around it.
    pub fn step<S, O>(&mut self, engine: &mut Engine<S>, observer: &mut O) -> TickReport
    where
        S: AssignmentSolver,
        O: EngineObserver,
    {
        let now = self.tick;
        observer.on_tick_start(now);
        let report = engine.tick();
        for &(agent, target) in &report.collections.collected {
            observer.on_collect(now, agent, target);
        }
        observer.on_tick_end(now, &report);
        if self.snapshot_interval > 0 && now.0.is_multiple_of(self.snapshot_interval) {
            observer.on_snapshot(now, &engine.snapshot());
        }
        self.tick = now.next();
        report
    }

    /// Tick until every target is collected or `max_ticks` ticks have run.
    pub fn run<S, O>(&mut self, engine: &mut Engine<S>, observer: &mut O) -> RunSummary
    where
        S: AssignmentSolver,
        O: EngineObserver,
    {
        let start = self.tick;
        while !engine.all_collected() && self.tick.since(start) < self.max_ticks {
            self.step(engine, observer);
        }

        let summary = RunSummary {
            ticks:     self.tick.since(start),
            score:     engine.score(),
            collected: engine.world().target_count() - engine.world().uncollected_count(),
            completed: engine.all_collected(),
        };
        if summary.completed {
            info!(ticks = summary.ticks, score = summary.score, "all targets collected");
        } else {
            warn!(
                ticks     = summary.ticks,
                remaining = engine.world().uncollected_count(),
                "tick cap reached before all targets were collected"
            );
        }
        observer.on_run_end(&summary);
        summary
    }
}
