//! The `Engine` struct: bindings, movement, and collection.

use tracing::{debug, info, trace};

use cc_core::{AgentId, Point, Segment, TargetId};
use cc_plan::{AssignmentSolver, ExhaustiveSolver, Route, Solution, reassess_all, reassign, revalidate_all};
use cc_world::{Agent, Target, World};

use crate::{AgentView, EngineBuilder, EngineConfig, SimResult, Snapshot, TargetView};

// ── Per-tick reports ──────────────────────────────────────────────────────────

/// Outcome of one [`Engine::update_positions`] call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveReport {
    /// Agents that stepped.
    pub moved:   usize,
    /// Agents whose step crossed a wall and stayed put.
    pub blocked: usize,
    /// Agents with no target, or already standing on it.
    pub idle:    usize,
}

/// Outcome of one [`Engine::update_collections`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectionReport {
    /// `(agent, target)` for every target collected, in agent order.
    pub collected:   Vec<(AgentId, TargetId)>,
    /// Agents re-checked by the post-collection revalidation pass.
    pub revalidated: usize,
}

impl CollectionReport {
    pub fn any(&self) -> bool {
        !self.collected.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub moves:       MoveReport,
    pub collections: CollectionReport,
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// The assignment-and-routing engine.
///
/// Holds the world, the solver used for [`optimize_assignments`], the
/// precomputed routes, and the score.  The tick functions
/// ([`update_positions`], [`update_collections`], [`tick`]) and the
/// assignment functions are the only mutators; presentation code reads
/// [`snapshot`]s.
///
/// The engine does not own a clock.  Drive it with [`Runner`] or call
/// [`tick`] from your own loop.
///
/// Create via [`Engine::new`] or [`EngineBuilder`].
///
/// [`optimize_assignments`]: Engine::optimize_assignments
/// [`update_positions`]: Engine::update_positions
/// [`update_collections`]: Engine::update_collections
/// [`tick`]: Engine::tick
/// [`snapshot`]: Engine::snapshot
/// [`Runner`]: crate::Runner
pub struct Engine<S: AssignmentSolver = ExhaustiveSolver> {
    pub(crate) config:        EngineConfig,
    pub(crate) world:         World,
    pub(crate) solver:        S,
    pub(crate) routes:        Vec<Route>,
    pub(crate) score:         u64,
    pub(crate) last_solution: Option<Solution>,
}

impl Engine<ExhaustiveSolver> {
    /// Spawn `agent_count` agents and `target_count` targets at random
    /// inside a `width × height` field with the given walls.  Every other
    /// setting takes its [`EngineConfig`] default.
    ///
    /// The spawn seed is always [`EngineConfig::DEFAULT_SEED`], so equal
    /// arguments give equal layouts.  Use [`EngineBuilder::seed`] for a
    /// different one.
    pub fn new(
        agent_count:  usize,
        target_count: usize,
        width:        i32,
        height:       i32,
        obstacles:    Vec<Segment>,
    ) -> SimResult<Self> {
        EngineBuilder::new(EngineConfig::new(agent_count, target_count, width, height, obstacles))
            .build()
    }
}

impl<S: AssignmentSolver> Engine<S> {
    // ── Assignment ────────────────────────────────────────────────────────

    /// Run the solver over the current world and replace every agent's
    /// binding with the result.  Collected targets are never chosen.
    pub fn optimize_assignments(&mut self) -> &Solution {
        let solution = self.solver.solve(self.world.agents(), self.world.targets());

        let (agents, _, _) = self.world.split_mut();
        for (agent, target) in solution.assignment.iter() {
            agents[agent.index()].set_target(target);
        }

        if solution.is_partial() {
            debug!(
                assigned = solution.assignment.assigned_count(),
                agents   = solution.assignment.len(),
                "partial assignment; some agents left unbound"
            );
        }
        info!(
            total_distance = solution.total_distance,
            nodes          = solution.stats.nodes,
            complete       = solution.stats.complete,
            "assignments optimized"
        );

        &*self.last_solution.insert(solution)
    }

    /// Clear every binding, then greedily rebind agents in index order.
    pub fn reassess_all(&mut self) {
        let (agents, targets, _) = self.world.split_mut();
        reassess_all(agents, targets);
        debug!("all assignments reassessed");
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    /// Step every bound agent toward its target.
    ///
    /// Both axis deltas are computed first and the combined move is applied
    /// only if it crosses no wall; a blocked agent does not slide along the
    /// free axis.
    pub fn update_positions(&mut self) -> MoveReport {
        let step = self.config.step_size;
        let mut report = MoveReport::default();
        let (agents, targets, obstacles) = self.world.split_mut();

        for (i, agent) in agents.iter_mut().enumerate() {
            let Some(target) = agent.current_target() else {
                report.idle += 1;
                continue;
            };
            let from = agent.position();
            let goal = targets[target.index()].position();
            let (dx, dy) = (axis_step(from.x, goal.x, step), axis_step(from.y, goal.y, step));
            if dx == 0 && dy == 0 {
                report.idle += 1;
                continue;
            }

            let to = from.offset(dx, dy);
            if obstacles.can_move(from, to) {
                agent.move_to(to);
                report.moved += 1;
            } else {
                trace!(agent = i, from = %from, to = %to, "move blocked");
                report.blocked += 1;
            }
        }
        report
    }

    /// Collect targets reached this tick and keep every binding valid.
    ///
    /// Per agent in index order: a bound agent within `collection_radius` of
    /// its uncollected target collects it, scores, and is rebound at once; an
    /// unbound agent (or one bound to an already-collected target) is
    /// rebound.  If anything was collected, every stale binding is
    /// revalidated before returning.
    pub fn update_collections(&mut self) -> CollectionReport {
        let radius = self.config.collection_radius;
        let reward = u64::from(self.config.reward);
        let mut report = CollectionReport::default();
        let (agents, targets, _) = self.world.split_mut();

        for i in 0..agents.len() {
            let agent = AgentId(i as u32);
            match agents[i].current_target() {
                Some(t) if !targets[t.index()].is_collected() => {
                    let position = agents[i].position();
                    let target = &mut targets[t.index()];
                    if position.distance(target.position()) <= radius && target.collect() {
                        self.score += reward;
                        report.collected.push((agent, t));
                        info!(%agent, target = %t, score = self.score, "target collected");
                        reassign(agent, agents, targets);
                    }
                }
                _ => {
                    reassign(agent, agents, targets);
                }
            }
        }

        if report.any() {
            report.revalidated = revalidate_all(agents, targets);
        }
        report
    }

    /// One tick: movement, then collection.
    pub fn tick(&mut self) -> TickReport {
        let moves = self.update_positions();
        let collections = self.update_collections();
        TickReport { moves, collections }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` once every target is collected.  Vacuously true with none.
    pub fn all_collected(&self) -> bool {
        self.world.all_collected()
    }

    pub fn assigned_target(&self, agent: AgentId) -> SimResult<Option<TargetId>> {
        Ok(self.world.agent(agent)?.current_target())
    }

    pub fn assigned_target_position(&self, agent: AgentId) -> SimResult<Option<Point>> {
        match self.assigned_target(agent)? {
            Some(t) => Ok(Some(self.world.target(t)?.position())),
            None    => Ok(None),
        }
    }

    /// Movement gate for one agent: may it step straight to `(x, y)`?
    pub fn can_move(&self, agent: AgentId, x: i32, y: i32) -> SimResult<bool> {
        Ok(self.world.can_move(agent, x, y)?)
    }

    pub fn agents(&self) -> &[Agent] {
        self.world.agents()
    }

    pub fn targets(&self) -> &[Target] {
        self.world.targets()
    }

    pub fn obstacles(&self) -> &[Segment] {
        self.world.obstacles().segments()
    }

    /// Precomputed best full visiting order per agent.  Empty when
    /// `precompute_routes` is off.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Result of the most recent [`optimize_assignments`](Self::optimize_assignments).
    pub fn last_solution(&self) -> Option<&Solution> {
        self.last_solution.as_ref()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            agents: self
                .world
                .agents()
                .iter()
                .enumerate()
                .map(|(i, a)| AgentView {
                    id:       AgentId(i as u32),
                    position: a.position(),
                    target:   a.current_target(),
                })
                .collect(),
            targets: self
                .world
                .targets()
                .iter()
                .enumerate()
                .map(|(i, t)| TargetView {
                    id:        TargetId(i as u32),
                    position:  t.position(),
                    collected: t.is_collected(),
                })
                .collect(),
            score: self.score,
        }
    }
}

/// Signed move along one axis: toward `to`, at most `step`, never past it.
fn axis_step(from: i32, to: i32, step: i32) -> i32 {
    let delta = i64::from(to) - i64::from(from);
    (delta.signum() * delta.abs().min(i64::from(step))) as i32
}
