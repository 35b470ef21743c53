//! The `World` container: agents, targets, and walls.

use cc_core::{AgentId, Point, TargetId};

use crate::spawn::SpawnKind;
use crate::{Agent, ObstacleSet, SpawnArea, Target, WorldError, WorldResult};

/// All entities of one simulation instance.
///
/// The agent and target vectors are indexed by `AgentId` / `TargetId` and
/// never change length after construction.
#[derive(Debug, Clone)]
pub struct World {
    agents:    Vec<Agent>,
    targets:   Vec<Target>,
    obstacles: ObstacleSet,
}

impl World {
    /// Build a world from explicit positions.
    ///
    /// Every agent starts unbound and every target uncollected.
    pub fn new(
        agent_positions:  Vec<Point>,
        target_positions: Vec<Point>,
        obstacles:        ObstacleSet,
    ) -> WorldResult<Self> {
        AgentId::check_count(agent_positions.len())?;
        TargetId::check_count(target_positions.len())?;
        Ok(Self {
            agents:  agent_positions.into_iter().map(Agent::new).collect(),
            targets: target_positions.into_iter().map(Target::new).collect(),
            obstacles,
        })
    }

    /// Build a world with randomly placed agents and targets.
    pub fn spawn(
        agent_count:  usize,
        target_count: usize,
        agent_area:   &SpawnArea,
        target_area:  &SpawnArea,
        obstacles:    ObstacleSet,
        seed:         u64,
    ) -> WorldResult<Self> {
        Self::new(
            agent_area.spawn(SpawnKind::Agent, agent_count, seed),
            target_area.spawn(SpawnKind::Target, target_count, seed),
            obstacles,
        )
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[inline]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    #[inline]
    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn agent(&self, id: AgentId) -> WorldResult<&Agent> {
        let len = self.agents.len();
        self.agents.get(id.index()).ok_or(WorldError::OutOfRange {
            kind:  "agent",
            index: id.index(),
            len,
        })
    }

    pub fn target(&self, id: TargetId) -> WorldResult<&Target> {
        let len = self.targets.len();
        self.targets.get(id.index()).ok_or(WorldError::OutOfRange {
            kind:  "target",
            index: id.index(),
            len,
        })
    }

    pub fn agent_positions(&self) -> Vec<Point> {
        self.agents.iter().map(Agent::position).collect()
    }

    pub fn target_positions(&self) -> Vec<Point> {
        self.targets.iter().map(Target::position).collect()
    }

    // ── Write access ──────────────────────────────────────────────────────

    pub fn target_mut(&mut self, id: TargetId) -> WorldResult<&mut Target> {
        let len = self.targets.len();
        self.targets.get_mut(id.index()).ok_or(WorldError::OutOfRange {
            kind:  "target",
            index: id.index(),
            len,
        })
    }

    /// Disjoint borrows of the agent and target arrays plus the walls, so the
    /// reassignment policy can rebind agents while reading targets.
    pub fn split_mut(&mut self) -> (&mut [Agent], &mut [Target], &ObstacleSet) {
        (&mut self.agents, &mut self.targets, &self.obstacles)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Movement gate for one agent: may it step straight to `(x, y)`?
    pub fn can_move(&self, agent: AgentId, x: i32, y: i32) -> WorldResult<bool> {
        let from = self.agent(agent)?.position();
        Ok(self.obstacles.can_move(from, Point::new(x, y)))
    }

    /// `true` once every target is collected.  Vacuously true with none.
    pub fn all_collected(&self) -> bool {
        self.targets.iter().all(Target::is_collected)
    }

    pub fn uncollected_count(&self) -> usize {
        self.targets.iter().filter(|t| !t.is_collected()).count()
    }
}
