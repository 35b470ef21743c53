//! Fluent builder for constructing an [`Engine`].

use tracing::info;

use cc_core::Point;
use cc_plan::{AssignmentSolver, ExhaustiveSolver, RoutePlanner};
use cc_world::{ObstacleSet, SpawnKind, World};

use crate::{Engine, EngineConfig, SimError, SimResult};

/// Fluent builder for [`Engine<S>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                         |
/// |--------------------------|-------------------------------------------------|
/// | `.solver(s)`             | `ExhaustiveSolver` with the config's budget     |
/// | `.seed(n)`               | `config.seed`                                   |
/// | `.agent_positions(v)`    | Random inside the agent spawn margins           |
/// | `.target_positions(v)`   | Random inside the target spawn margins          |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(config)
///     .solver(GreedySolver)
///     .target_positions(coins)
///     .build()?;
/// engine.optimize_assignments();
/// Runner::new(10_000).run(&mut engine, &mut NoopObserver);
/// ```
pub struct EngineBuilder<S: AssignmentSolver = ExhaustiveSolver> {
    config:           EngineConfig,
    solver:           S,
    agent_positions:  Option<Vec<Point>>,
    target_positions: Option<Vec<Point>>,
}

impl EngineBuilder<ExhaustiveSolver> {
    pub fn new(config: EngineConfig) -> Self {
        let solver = ExhaustiveSolver::new(config.search_budget);
        Self {
            config,
            solver,
            agent_positions:  None,
            target_positions: None,
        }
    }
}

impl<S: AssignmentSolver> EngineBuilder<S> {
    /// Swap the assignment strategy used by
    /// [`Engine::optimize_assignments`].
    pub fn solver<T: AssignmentSolver>(self, solver: T) -> EngineBuilder<T> {
        EngineBuilder {
            config:           self.config,
            solver,
            agent_positions:  self.agent_positions,
            target_positions: self.target_positions,
        }
    }

    /// Spawn seed for randomly placed entities.  Overrides `config.seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Place agents explicitly (must be length `agent_count`).
    pub fn agent_positions(mut self, positions: Vec<Point>) -> Self {
        self.agent_positions = Some(positions);
        self
    }

    /// Place targets explicitly (must be length `target_count`).
    pub fn target_positions(mut self, positions: Vec<Point>) -> Self {
        self.target_positions = Some(positions);
        self
    }

    /// Validate the config, place entities, and precompute routes.
    ///
    /// Assignments are left empty; call
    /// [`Engine::optimize_assignments`] before ticking.
    pub fn build(self) -> SimResult<Engine<S>> {
        let config = self.config;
        config.validate()?;
        config.check_search_size(self.solver.is_exhaustive())?;

        // ── Resolve positions ─────────────────────────────────────────────
        let agent_positions = match self.agent_positions {
            Some(p) => check_len(p, config.agent_count, "agent positions")?,
            None => config.agent_area()?.spawn(SpawnKind::Agent, config.agent_count, config.seed),
        };
        let target_positions = match self.target_positions {
            Some(p) => check_len(p, config.target_count, "target positions")?,
            None => config.target_area()?.spawn(SpawnKind::Target, config.target_count, config.seed),
        };

        let obstacles = ObstacleSet::new(config.obstacles.clone());
        let world = World::new(agent_positions, target_positions, obstacles)?;

        // ── Route precomputation ──────────────────────────────────────────
        let routes = if config.precompute_routes {
            RoutePlanner::new(config.search_budget)
                .plan_all(&world.agent_positions(), &world.target_positions())
        } else {
            Vec::new()
        };

        info!(
            agents    = world.agent_count(),
            targets   = world.target_count(),
            obstacles = world.obstacles().len(),
            routes    = routes.len(),
            "engine ready"
        );

        Ok(Engine {
            config,
            world,
            solver:        self.solver,
            routes,
            score:         0,
            last_solution: None,
        })
    }
}

fn check_len(positions: Vec<Point>, expected: usize, what: &'static str) -> SimResult<Vec<Point>> {
    if positions.len() != expected {
        return Err(SimError::CountMismatch { expected, got: positions.len(), what });
    }
    Ok(positions)
}
