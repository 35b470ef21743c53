//! Assignment strategies.
//!
//! # Pluggability
//!
//! The engine calls the optimizer through the [`AssignmentSolver`] trait, so
//! a polynomial method (Hungarian, auction) can replace the default
//! [`ExhaustiveSolver`] without touching callers.
//!
//! # Complexity
//!
//! [`ExhaustiveSolver`] visits up to `T! / (T - A)!` leaves for `A` agents and
//! `T` targets.  Ten targets and five agents is ~30 K leaves; much beyond a
//! dozen targets it stops being a startup-time computation.  Use a
//! [`SearchBudget`] or [`GreedySolver`] there.

use tracing::{debug, warn};

use cc_core::{Point, TargetId};
use cc_world::{Agent, Target};

use crate::budget::BudgetMeter;
use crate::{Assignment, SearchBudget, SearchStats};

// ── Solution ──────────────────────────────────────────────────────────────────

/// Result of one [`AssignmentSolver::solve`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub assignment:     Assignment,
    /// Sum of agent → target distances over assigned agents.
    pub total_distance: f64,
    pub stats:          SearchStats,
}

impl Solution {
    /// `true` if some agents were left without a target (more agents than
    /// available targets, or the budget ran out before any full assignment).
    pub fn is_partial(&self) -> bool {
        self.assignment.assigned_count() < self.assignment.len()
    }
}

// ── Solver trait ──────────────────────────────────────────────────────────────

/// Pluggable initial-assignment strategy.
///
/// Collected targets are never assigned.  Implementations must return one
/// entry per agent and must not bind a target to two agents.
pub trait AssignmentSolver: Send + Sync {
    fn solve(&self, agents: &[Agent], targets: &[Target]) -> Solution;

    /// `true` if `solve` is factorial in the target count without a budget.
    fn is_exhaustive(&self) -> bool {
        false
    }
}

// ── ExhaustiveSolver ──────────────────────────────────────────────────────────

/// Backtracking search for the one-to-one assignment with minimum total
/// distance.
///
/// Agents are visited in index order; for each, candidate targets are tried
/// in index order, skipping those already taken on the current branch.  Ties
/// keep the first assignment found.
///
/// With more agents than available targets, exactly `agents - targets`
/// agents are left unassigned; the "no target" branch is tried after every
/// target for that agent.
#[derive(Copy, Clone, Debug, Default)]
pub struct ExhaustiveSolver {
    pub budget: SearchBudget,
}

impl ExhaustiveSolver {
    pub fn new(budget: SearchBudget) -> Self {
        Self { budget }
    }
}

impl AssignmentSolver for ExhaustiveSolver {
    fn solve(&self, agents: &[Agent], targets: &[Target]) -> Solution {
        let agent_pos:  Vec<Point> = agents.iter().map(Agent::position).collect();
        let target_pos: Vec<Point> = targets.iter().map(Target::position).collect();

        // Collected targets start out taken so no branch can pick them.
        let taken: Vec<bool> = targets.iter().map(Target::is_collected).collect();
        let available = taken.iter().filter(|&&t| !t).count();

        let mut search = AssignmentSearch {
            agents:     &agent_pos,
            targets:    &target_pos,
            taken,
            current:    vec![None; agents.len()],
            best:       None,
            skips_left: agents.len().saturating_sub(available),
            meter:      self.budget.meter(),
        };
        search.descend(0, 0.0);

        let stats = search.meter.stats();
        let assignment = match search.best {
            Some((_, best)) => Assignment::from_vec(best),
            None            => Assignment::unassigned(agents.len()),
        };
        let total_distance = assignment.total_distance(&agent_pos, &target_pos);

        if !stats.complete {
            warn!(nodes = stats.nodes, "assignment search budget exhausted; using best so far");
        }
        debug!(
            agents = agents.len(),
            available,
            nodes = stats.nodes,
            total_distance,
            "exhaustive assignment finished"
        );

        Solution { assignment, total_distance, stats }
    }

    fn is_exhaustive(&self) -> bool {
        true
    }
}

/// Mutable state of one assignment search, threaded through the recursion.
struct AssignmentSearch<'a> {
    agents:     &'a [Point],
    targets:    &'a [Point],
    /// `taken[t]`: target `t` is used on the current branch (or collected).
    taken:      Vec<bool>,
    current:    Vec<Option<TargetId>>,
    best:       Option<(f64, Vec<Option<TargetId>>)>,
    /// How many more agents may still be left without a target.
    skips_left: usize,
    meter:      BudgetMeter,
}

impl AssignmentSearch<'_> {
    fn descend(&mut self, agent: usize, distance: f64) {
        if !self.meter.enter() {
            return;
        }
        // Distances are non-negative, so a branch already at or above the
        // best total cannot produce a strictly better leaf.
        if self.best.as_ref().is_some_and(|(best, _)| distance >= *best) {
            return;
        }
        if agent == self.agents.len() {
            self.best = Some((distance, self.current.clone()));
            return;
        }

        let from = self.agents[agent];
        for t in 0..self.targets.len() {
            if self.taken[t] {
                continue;
            }
            self.taken[t] = true;
            self.current[agent] = Some(TargetId(t as u32));
            self.descend(agent + 1, distance + from.distance(self.targets[t]));
            self.taken[t] = false;
        }

        if self.skips_left > 0 {
            self.skips_left -= 1;
            self.current[agent] = None;
            self.descend(agent + 1, distance);
            self.skips_left += 1;
        }
        self.current[agent] = None;
    }
}

// ── GreedySolver ──────────────────────────────────────────────────────────────

/// Each agent in index order takes the nearest uncollected target not already
/// taken in this pass.  Linear per agent; not optimal.
#[derive(Copy, Clone, Debug, Default)]
pub struct GreedySolver;

impl AssignmentSolver for GreedySolver {
    fn solve(&self, agents: &[Agent], targets: &[Target]) -> Solution {
        let mut taken: Vec<bool> = targets.iter().map(Target::is_collected).collect();
        let mut chosen = Vec::with_capacity(agents.len());

        for agent in agents {
            let pick = nearest_free(agent.position(), targets, &taken);
            if let Some(t) = pick {
                taken[t.index()] = true;
            }
            chosen.push(pick);
        }

        let assignment = Assignment::from_vec(chosen);
        let agent_pos:  Vec<Point> = agents.iter().map(Agent::position).collect();
        let target_pos: Vec<Point> = targets.iter().map(Target::position).collect();
        let total_distance = assignment.total_distance(&agent_pos, &target_pos);

        Solution {
            assignment,
            total_distance,
            stats: SearchStats { nodes: agents.len() as u64, complete: true },
        }
    }
}

/// Nearest target with `taken[t] == false`; first minimum wins.
pub(crate) fn nearest_free(from: Point, targets: &[Target], taken: &[bool]) -> Option<TargetId> {
    let mut best: Option<(f64, usize)> = None;
    for (t, target) in targets.iter().enumerate() {
        if taken[t] {
            continue;
        }
        let d = from.distance(target.position());
        if best.is_none_or(|(best_d, _)| d < best_d) {
            best = Some((d, t));
        }
    }
    best.map(|(_, t)| TargetId(t as u32))
}
