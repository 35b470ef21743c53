//! Per-agent visiting-order precomputation.
//!
//! For each agent, every permutation of all targets is enumerated by
//! depth-first backtracking over a visited set, in ascending index order.
//! The cost of a permutation is the sum of hop lengths starting at the
//! agent: `start → t₀ → t₁ → …`.  The lowest total wins; ties keep the first
//! permutation found.
//!
//! This is `O(T!)` per agent.  It is informational only (the engine never
//! steers by it) and is meant to run once at startup for small target
//! counts.  Each agent's search is independent; with the `parallel` feature
//! they run concurrently.

use tracing::{debug, warn};

use cc_core::{Point, TargetId};

use crate::budget::BudgetMeter;
use crate::{SearchBudget, SearchStats};

// ── Route ─────────────────────────────────────────────────────────────────────

/// An agent's best full visiting order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Targets in visiting order; a permutation of all target ids, or empty
    /// if the budget ran out before any full order was found.
    pub order:  Vec<TargetId>,
    /// Total path length from the agent's start through `order`.
    pub length: f64,
    pub stats:  SearchStats,
}

impl Route {
    /// Path length of `order` from `start`, recomputed hop by hop.
    pub fn path_length(start: Point, order: &[TargetId], targets: &[Point]) -> f64 {
        let mut last = start;
        let mut total = 0.0;
        for t in order {
            let next = targets[t.index()];
            total += last.distance(next);
            last = next;
        }
        total
    }

    /// Positions along the route, starting with `start`.  Handy for drawing.
    pub fn waypoints(&self, start: Point, targets: &[Point]) -> Vec<Point> {
        std::iter::once(start)
            .chain(self.order.iter().map(|t| targets[t.index()]))
            .collect()
    }
}

// ── RoutePlanner ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default)]
pub struct RoutePlanner {
    pub budget: SearchBudget,
}

impl RoutePlanner {
    pub fn new(budget: SearchBudget) -> Self {
        Self { budget }
    }

    /// Best visiting order over all `targets` from `start`.
    pub fn plan(&self, start: Point, targets: &[Point]) -> Route {
        let mut search = RouteSearch {
            targets,
            visited: vec![false; targets.len()],
            path:    Vec::with_capacity(targets.len()),
            best:    None,
            meter:   self.budget.meter(),
        };
        search.descend(start, 0.0);

        let stats = search.meter.stats();
        let (length, order) = search.best.unwrap_or((0.0, Vec::new()));
        Route { order, length, stats }
    }

    /// One route per agent start position, in agent order.
    ///
    /// With the `parallel` feature the starts are planned on the rayon pool.
    /// Each search is independent and deterministic, so the result equals
    /// calling [`plan`](Self::plan) for every start in turn.
    pub fn plan_all(&self, starts: &[Point], targets: &[Point]) -> Vec<Route> {
        #[cfg(not(feature = "parallel"))]
        let routes: Vec<Route> = starts.iter().map(|&s| self.plan(s, targets)).collect();

        #[cfg(feature = "parallel")]
        let routes: Vec<Route> = {
            use rayon::prelude::*;
            starts.par_iter().map(|&s| self.plan(s, targets)).collect()
        };

        for (agent, route) in routes.iter().enumerate() {
            if !route.stats.complete {
                warn!(agent, nodes = route.stats.nodes, "route search budget exhausted");
            }
            debug!(agent, length = route.length, nodes = route.stats.nodes, "route precomputed");
        }
        routes
    }
}

/// Mutable state of one route search, threaded through the recursion.
struct RouteSearch<'a> {
    targets: &'a [Point],
    visited: Vec<bool>,
    path:    Vec<TargetId>,
    best:    Option<(f64, Vec<TargetId>)>,
    meter:   BudgetMeter,
}

impl RouteSearch<'_> {
    fn descend(&mut self, last: Point, distance: f64) {
        if !self.meter.enter() {
            return;
        }
        // Hops are non-negative: no completion of this prefix can beat `best`.
        if self.best.as_ref().is_some_and(|(best, _)| distance >= *best) {
            return;
        }
        if self.path.len() == self.targets.len() {
            self.best = Some((distance, self.path.clone()));
            return;
        }

        for t in 0..self.targets.len() {
            if self.visited[t] {
                continue;
            }
            let next = self.targets[t];
            self.visited[t] = true;
            self.path.push(TargetId(t as u32));
            self.descend(next, distance + last.distance(next));
            self.path.pop();
            self.visited[t] = false;
        }
    }
}
