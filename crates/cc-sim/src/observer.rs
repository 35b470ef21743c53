//! Engine observer trait for progress reporting and data collection.

use cc_core::{AgentId, TargetId, Tick};

use crate::{RunSummary, Snapshot, TickReport};

/// Callbacks invoked by [`Runner`][crate::Runner] at key points in the tick
/// loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: collection logger
///
/// ```rust,ignore
/// struct Collections(Vec<(Tick, AgentId, TargetId)>);
///
/// impl EngineObserver for Collections {
///     fn on_collect(&mut self, tick: Tick, agent: AgentId, target: TargetId) {
///         self.0.push((tick, agent, target));
///     }
/// }
/// ```
pub trait EngineObserver {
    /// Called at the very start of each tick, before movement.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per target collected this tick, in agent order.
    fn on_collect(&mut self, _tick: Tick, _agent: AgentId, _target: TargetId) {}

    /// Called after movement and collection for the tick.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Called every `snapshot_interval` ticks with an owned copy of the state.
    fn on_snapshot(&mut self, _tick: Tick, _snapshot: &Snapshot) {}

    /// Called once after the last tick.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// An [`EngineObserver`] that does nothing.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
