//! Agent and target records.

use cc_core::{Point, TargetId};

/// A mobile bot.
///
/// Position and binding are only changed through the engine's tick
/// functions and the reassignment policy; everything else reads.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    position:       Point,
    current_target: Option<TargetId>,
}

impl Agent {
    /// An unbound agent at `position`.
    #[inline]
    pub fn new(position: Point) -> Self {
        Self { position, current_target: None }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The target this agent is heading for, if any.
    #[inline]
    pub fn current_target(&self) -> Option<TargetId> {
        self.current_target
    }

    #[inline]
    pub fn is_bound_to(&self, target: TargetId) -> bool {
        self.current_target == Some(target)
    }

    #[inline]
    pub fn set_target(&mut self, target: Option<TargetId>) {
        self.current_target = target;
    }

    #[inline]
    pub fn move_to(&mut self, position: Point) {
        self.position = position;
    }
}

/// A collectible coin.
///
/// `collected` only ever goes from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    position:  Point,
    collected: bool,
}

impl Target {
    #[inline]
    pub fn new(position: Point) -> Self {
        Self { position, collected: false }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Mark the target collected.
    ///
    /// Returns `true` if this call performed the transition, `false` if the
    /// target had already been collected.
    #[inline]
    pub fn collect(&mut self) -> bool {
        !std::mem::replace(&mut self.collected, true)
    }
}
