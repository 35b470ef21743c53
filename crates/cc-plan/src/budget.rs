//! Optional node cap for the exhaustive searches.

/// Upper bound on how many search nodes (recursive calls) one search may
/// visit.  When the cap is hit the search stops and returns the best result
/// found so far.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchBudget {
    /// `None` = run to completion.
    pub max_nodes: Option<u64>,
}

impl SearchBudget {
    pub const UNBOUNDED: SearchBudget = SearchBudget { max_nodes: None };

    #[inline]
    pub fn nodes(max_nodes: u64) -> Self {
        Self { max_nodes: Some(max_nodes) }
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.max_nodes.is_none()
    }

    pub(crate) fn meter(self) -> BudgetMeter {
        BudgetMeter { limit: self.max_nodes, used: 0, exhausted: false }
    }
}

/// What a finished search reports about itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Search nodes visited.
    pub nodes:    u64,
    /// `false` if the budget ran out, in which case the result is only the
    /// best one seen before stopping.
    pub complete: bool,
}

/// Running node counter for one search.
pub(crate) struct BudgetMeter {
    limit:     Option<u64>,
    used:      u64,
    exhausted: bool,
}

impl BudgetMeter {
    /// Account for entering one node.  Returns `false` once the budget is
    /// spent; every later call also returns `false` so the recursion unwinds.
    #[inline]
    pub(crate) fn enter(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        if self.limit.is_some_and(|limit| self.used >= limit) {
            self.exhausted = true;
            return false;
        }
        self.used += 1;
        true
    }

    pub(crate) fn stats(&self) -> SearchStats {
        SearchStats { nodes: self.used, complete: !self.exhausted }
    }
}
