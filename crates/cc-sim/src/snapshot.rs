//! Immutable views of engine state for presentation layers.

use cc_core::{AgentId, Point, TargetId};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentView {
    pub id:       AgentId,
    pub position: Point,
    pub target:   Option<TargetId>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetView {
    pub id:        TargetId,
    pub position:  Point,
    pub collected: bool,
}

/// Owned copy of everything a renderer needs for one frame.  Obstacles are
/// fixed for the engine's lifetime and are read once via
/// [`Engine::obstacles`](crate::Engine::obstacles) instead.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub agents:  Vec<AgentView>,
    pub targets: Vec<TargetView>,
    pub score:   u64,
}

impl Snapshot {
    pub fn collected_count(&self) -> usize {
        self.targets.iter().filter(|t| t.collected).count()
    }
}
