//! Engine configuration.

use cc_core::{Point, Segment};
use cc_plan::SearchBudget;
use cc_world::SpawnArea;

use crate::{SimError, SimResult};

// ── EngineConfig ──────────────────────────────────────────────────────────────

/// Everything fixed at engine construction.
///
/// Typically built with [`EngineConfig::new`] or loaded from JSON by the
/// driver binary.  With the `serde` feature, missing fields fall back to
/// [`EngineConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    pub agent_count:  usize,
    pub target_count: usize,

    /// Playfield extent.  Spawn coordinates are drawn from
    /// `[margin, extent - 2 * margin)` on each axis.
    pub width:  i32,
    pub height: i32,

    pub agent_margin:  i32,
    pub target_margin: i32,

    /// Wall segments, in order.  Zero-length segments never block.
    pub obstacles: Vec<Segment>,

    /// A bound agent collects its target when within this Euclidean distance.
    pub collection_radius: f64,

    /// Score added per collected target.
    pub reward: u32,

    /// Maximum per-axis movement per tick.
    pub step_size: i32,

    /// Master RNG seed for spawning.  Same seed, same layout.
    pub seed: u64,

    /// Largest target count the exhaustive searches accept without a
    /// `search_budget`.  Both searches are factorial in the target count;
    /// see [`EngineConfig::check_search_size`].
    pub max_exhaustive_targets: usize,

    /// Node cap applied to both the assignment search and the route search.
    pub search_budget: SearchBudget,

    /// Compute each agent's best full visiting order at construction.
    pub precompute_routes: bool,
}

impl EngineConfig {
    pub const DEFAULT_AGENTS:  usize = 5;
    pub const DEFAULT_TARGETS: usize = 10;
    pub const DEFAULT_WIDTH:   i32   = 800;
    pub const DEFAULT_HEIGHT:  i32   = 600;
    pub const DEFAULT_MARGIN:  i32   = 20;
    pub const DEFAULT_RADIUS:  f64   = 5.0;
    pub const DEFAULT_REWARD:  u32   = 10;
    pub const DEFAULT_SEED:    u64   = 0x00C0_FFEE;
    pub const DEFAULT_MAX_EXHAUSTIVE_TARGETS: usize = 10;

    /// Config with the given dimensions and walls; every other field takes
    /// its default.
    pub fn new(
        agent_count:  usize,
        target_count: usize,
        width:        i32,
        height:       i32,
        obstacles:    Vec<Segment>,
    ) -> Self {
        Self {
            agent_count,
            target_count,
            width,
            height,
            agent_margin:           Self::DEFAULT_MARGIN,
            target_margin:          Self::DEFAULT_MARGIN,
            obstacles,
            collection_radius:      Self::DEFAULT_RADIUS,
            reward:                 Self::DEFAULT_REWARD,
            step_size:              1,
            seed:                   Self::DEFAULT_SEED,
            max_exhaustive_targets: Self::DEFAULT_MAX_EXHAUSTIVE_TARGETS,
            search_budget:          SearchBudget::UNBOUNDED,
            precompute_routes:      true,
        }
    }

    /// The L-shaped pair of walls the default playfield ships with.
    pub fn default_walls() -> Vec<Segment> {
        vec![
            Segment::new(Point::new(100, 100), Point::new(200, 100)),
            Segment::new(Point::new(200, 100), Point::new(200, 200)),
        ]
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> SimResult<()> {
        self.agent_area()?;
        self.target_area()?;

        if self.step_size < 1 {
            return Err(SimError::Config(format!(
                "step_size must be at least 1, got {}",
                self.step_size
            )));
        }
        if !(self.collection_radius.is_finite() && self.collection_radius >= 0.0) {
            return Err(SimError::Config(format!(
                "collection_radius must be a finite non-negative number, got {}",
                self.collection_radius
            )));
        }
        Ok(())
    }

    /// Reject target counts too large for an unbudgeted factorial search.
    ///
    /// Only applies when one will actually run: the assignment solver is
    /// exhaustive, or `precompute_routes` is set.
    pub fn check_search_size(&self, exhaustive_solver: bool) -> SimResult<()> {
        let searches = exhaustive_solver || self.precompute_routes;
        if searches && self.search_budget.is_unbounded() && self.target_count > self.max_exhaustive_targets {
            return Err(SimError::Config(format!(
                "{} targets exceeds max_exhaustive_targets ({}); \
                 raise the limit, set a search_budget, or use a non-exhaustive \
                 solver without precompute_routes",
                self.target_count, self.max_exhaustive_targets
            )));
        }
        Ok(())
    }

    pub fn agent_area(&self) -> SimResult<SpawnArea> {
        Ok(SpawnArea::new(self.width, self.height, self.agent_margin)?)
    }

    pub fn target_area(&self) -> SimResult<SpawnArea> {
        Ok(SpawnArea::new(self.width, self.height, self.target_margin)?)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_AGENTS,
            Self::DEFAULT_TARGETS,
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_HEIGHT,
            Self::default_walls(),
        )
    }
}
