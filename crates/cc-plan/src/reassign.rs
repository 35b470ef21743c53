//! Greedy rebinding used during the run.
//!
//! Cheap (`O(A + T)` per agent) replacement for re-running the exhaustive
//! optimizer every tick.  A target is eligible for an agent if it is not
//! collected and no *other* agent is currently bound to it.
//!
//! All functions index the slices directly and panic on an out-of-range
//! `AgentId`; the engine checks ids at its boundary.

use tracing::debug;

use cc_core::{AgentId, TargetId};
use cc_world::{Agent, Target};

use crate::solver::nearest_free;

/// Nearest eligible target for `agent`, first minimum on ties.
pub fn nearest_eligible(agent: AgentId, agents: &[Agent], targets: &[Target]) -> Option<TargetId> {
    let taken = unavailable_for(agent, agents, targets);
    nearest_free(agents[agent.index()].position(), targets, &taken)
}

/// Bind `agent` to its nearest eligible target, or unbind it if none is
/// eligible.  Returns the new binding.
pub fn reassign(agent: AgentId, agents: &mut [Agent], targets: &[Target]) -> Option<TargetId> {
    let pick = nearest_eligible(agent, agents, targets);
    let slot = &mut agents[agent.index()];
    if slot.current_target() != pick {
        debug!(%agent, from = ?slot.current_target(), to = ?pick, "rebinding agent");
    }
    slot.set_target(pick);
    pick
}

/// Re-run [`reassign`] for every agent that is unbound or bound to a
/// collected target, in agent order.  Returns how many agents were checked.
pub fn revalidate_all(agents: &mut [Agent], targets: &[Target]) -> usize {
    let mut checked = 0;
    for i in 0..agents.len() {
        let stale = match agents[i].current_target() {
            None    => true,
            Some(t) => targets[t.index()].is_collected(),
        };
        if stale {
            reassign(AgentId(i as u32), agents, targets);
            checked += 1;
        }
    }
    checked
}

/// Drop every binding, then rebind agents one by one in index order.
///
/// Later agents see the choices of earlier ones, so this is the same greedy
/// pass as [`GreedySolver`](crate::GreedySolver) applied to live state.
pub fn reassess_all(agents: &mut [Agent], targets: &[Target]) {
    for agent in agents.iter_mut() {
        agent.set_target(None);
    }
    for i in 0..agents.len() {
        reassign(AgentId(i as u32), agents, targets);
    }
}

/// `taken[t]` for targets `agent` may not pick: collected, or bound to
/// another agent.
fn unavailable_for(agent: AgentId, agents: &[Agent], targets: &[Target]) -> Vec<bool> {
    let mut taken: Vec<bool> = targets.iter().map(Target::is_collected).collect();
    for (i, other) in agents.iter().enumerate() {
        if i == agent.index() {
            continue;
        }
        if let Some(t) = other.current_target() {
            if let Some(slot) = taken.get_mut(t.index()) {
                *slot = true;
            }
        }
    }
    taken
}
