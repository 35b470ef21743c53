//! Agent → target bindings.

use cc_core::{AgentId, Point, TargetId};

/// One optional target per agent, indexed by `AgentId`.
///
/// The optimizer always produces an injective assignment (no target appears
/// twice).  `None` means the agent has nothing to go after.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    targets: Vec<Option<TargetId>>,
}

impl Assignment {
    /// All `agent_count` agents unassigned.
    pub fn unassigned(agent_count: usize) -> Self {
        Self { targets: vec![None; agent_count] }
    }

    pub fn from_vec(targets: Vec<Option<TargetId>>) -> Self {
        Self { targets }
    }

    /// Target bound to `agent`; `None` if unassigned or out of range.
    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<TargetId> {
        self.targets.get(agent.index()).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn as_slice(&self) -> &[Option<TargetId>] {
        &self.targets
    }

    /// `(agent, target)` for every agent, in agent order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, Option<TargetId>)> + '_ {
        self.targets
            .iter()
            .enumerate()
            .map(|(i, &t)| (AgentId(i as u32), t))
    }

    /// Number of agents that received a target.
    pub fn assigned_count(&self) -> usize {
        self.targets.iter().filter(|t| t.is_some()).count()
    }

    /// `true` if no target is bound to more than one agent.
    pub fn is_injective(&self) -> bool {
        let mut seen: Vec<TargetId> = self.targets.iter().flatten().copied().collect();
        seen.sort_unstable();
        seen.windows(2).all(|w| w[0] != w[1])
    }

    /// Sum of agent → assigned-target distances.  Unassigned agents add 0.
    ///
    /// # Panics
    /// Panics if an id is out of range for the given slices.
    pub fn total_distance(&self, agents: &[Point], targets: &[Point]) -> f64 {
        self.iter()
            .filter_map(|(a, t)| t.map(|t| agents[a.index()].distance(targets[t.index()])))
            .sum()
    }
}
