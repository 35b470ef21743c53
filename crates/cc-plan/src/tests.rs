//! Unit tests for cc-plan.
//!
//! Optimality checks compare against brute-force enumerations written here,
//! independent of the production search code.

#[cfg(test)]
mod helpers {
    use cc_core::{Point, SimRng, TargetId};
    use cc_world::{Agent, Target};

    pub fn agents(points: &[(i32, i32)]) -> Vec<Agent> {
        points.iter().map(|&(x, y)| Agent::new(Point::new(x, y))).collect()
    }

    pub fn targets(points: &[(i32, i32)]) -> Vec<Target> {
        points.iter().map(|&(x, y)| Target::new(Point::new(x, y))).collect()
    }

    pub fn positions_of_agents(agents: &[Agent]) -> Vec<Point> {
        agents.iter().map(Agent::position).collect()
    }

    pub fn positions_of_targets(targets: &[Target]) -> Vec<Point> {
        targets.iter().map(Target::position).collect()
    }

    pub fn random_points(n: usize, rng: &mut SimRng) -> Vec<(i32, i32)> {
        (0..n).map(|_| (rng.gen_range(0..200), rng.gen_range(0..200))).collect()
    }

    /// Every ordering of `0..n`, by plain recursion.
    pub fn all_permutations(n: usize) -> Vec<Vec<usize>> {
        if n == 0 {
            return vec![vec![]];
        }
        let mut out = Vec::new();
        for rest in all_permutations(n - 1) {
            for pos in 0..=rest.len() {
                let mut p = rest.clone();
                p.insert(pos, n - 1);
                out.push(p);
            }
        }
        out
    }

    /// Minimum total agent→target distance over all injective maps that
    /// assign `min(agents, targets)` agents.
    pub fn brute_force_assignment_cost(agents: &[Point], targets: &[Point]) -> f64 {
        fn go(agents: &[Point], targets: &[Point], a: usize, used: &mut Vec<bool>, skips: usize) -> f64 {
            if a == agents.len() {
                return 0.0;
            }
            let mut best = f64::INFINITY;
            for t in 0..targets.len() {
                if !used[t] {
                    used[t] = true;
                    let d = agents[a].distance(targets[t]) + go(agents, targets, a + 1, used, skips);
                    best = best.min(d);
                    used[t] = false;
                }
            }
            if skips > 0 {
                best = best.min(go(agents, targets, a + 1, used, skips - 1));
            }
            best
        }
        let skips = agents.len().saturating_sub(targets.len());
        go(agents, targets, 0, &mut vec![false; targets.len()], skips)
    }

    pub fn ids(raw: &[u32]) -> Vec<TargetId> {
        raw.iter().map(|&t| TargetId(t)).collect()
    }
}

// ── Assignment ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod assignment {
    use cc_core::{AgentId, Point, TargetId};

    use crate::Assignment;

    #[test]
    fn injectivity_check() {
        let ok = Assignment::from_vec(vec![Some(TargetId(1)), None, Some(TargetId(0)), None]);
        assert!(ok.is_injective());
        assert_eq!(ok.assigned_count(), 2);

        let dup = Assignment::from_vec(vec![Some(TargetId(1)), Some(TargetId(1))]);
        assert!(!dup.is_injective());
    }

    #[test]
    fn get_out_of_range_is_none() {
        let a = Assignment::from_vec(vec![Some(TargetId(0))]);
        assert_eq!(a.get(AgentId(0)), Some(TargetId(0)));
        assert_eq!(a.get(AgentId(1)), None);
    }

    #[test]
    fn total_distance_skips_unassigned() {
        let a = Assignment::from_vec(vec![Some(TargetId(0)), None]);
        let agents = [Point::new(0, 0), Point::new(100, 100)];
        let targets = [Point::new(3, 4)];
        assert_eq!(a.total_distance(&agents, &targets), 5.0);
    }
}

// ── Budget ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod budget {
    use crate::SearchBudget;

    #[test]
    fn meter_stops_at_limit_and_stays_stopped() {
        let mut m = SearchBudget::nodes(3).meter();
        assert!(m.enter());
        assert!(m.enter());
        assert!(m.enter());
        assert!(!m.enter());
        assert!(!m.enter());
        let stats = m.stats();
        assert_eq!(stats.nodes, 3);
        assert!(!stats.complete);
    }

    #[test]
    fn unbounded_meter_is_complete() {
        let mut m = SearchBudget::UNBOUNDED.meter();
        for _ in 0..10_000 {
            assert!(m.enter());
        }
        assert!(m.stats().complete);
        assert!(SearchBudget::default().is_unbounded());
    }
}

// ── ExhaustiveSolver ──────────────────────────────────────────────────────────

#[cfg(test)]
mod exhaustive {
    use cc_core::{SimRng, TargetId};

    use super::helpers::*;
    use crate::{AssignmentSolver, ExhaustiveSolver, SearchBudget};

    #[test]
    fn picks_the_short_pairing() {
        let agents = agents(&[(0, 0), (10, 0)]);
        let targets = targets(&[(1, 0), (11, 0)]);
        let sol = ExhaustiveSolver::default().solve(&agents, &targets);
        assert_eq!(sol.assignment.as_slice(), &[Some(TargetId(0)), Some(TargetId(1))]);
        assert_eq!(sol.total_distance, 2.0);
        assert!(sol.stats.complete);
        assert!(!sol.is_partial());
    }

    #[test]
    fn crossing_pairing_beats_greedy_order() {
        // Agent 0 is nearest target 0, but giving it target 1 frees target 0
        // for agent 1 and shortens the total.
        let agents = agents(&[(0, 0), (-10, 0)]);
        let targets = targets(&[(-1, 0), (3, 0)]);
        let sol = ExhaustiveSolver::default().solve(&agents, &targets);
        assert_eq!(sol.assignment.as_slice(), &[Some(TargetId(1)), Some(TargetId(0))]);
        assert_eq!(sol.total_distance, 12.0);
    }

    #[test]
    fn ties_keep_first_found() {
        // Both pairings cost 2 * sqrt(2); index order wins.
        let agents = agents(&[(0, 0), (2, 0)]);
        let targets = targets(&[(1, 1), (1, -1)]);
        let sol = ExhaustiveSolver::default().solve(&agents, &targets);
        assert_eq!(sol.assignment.as_slice(), &[Some(TargetId(0)), Some(TargetId(1))]);
    }

    #[test]
    fn matches_brute_force_and_is_injective() {
        let mut rng = SimRng::new(99);
        for n_targets in 0..=6 {
            for n_agents in 0..=n_targets {
                let agents = agents(&random_points(n_agents, &mut rng));
                let targets = targets(&random_points(n_targets, &mut rng));
                let sol = ExhaustiveSolver::default().solve(&agents, &targets);

                assert_eq!(sol.assignment.len(), n_agents);
                assert!(sol.assignment.is_injective());
                assert_eq!(sol.assignment.assigned_count(), n_agents);

                let expected = brute_force_assignment_cost(
                    &positions_of_agents(&agents),
                    &positions_of_targets(&targets),
                );
                assert!(
                    (sol.total_distance - expected).abs() < 1e-9,
                    "{n_agents}x{n_targets}: got {} want {expected}",
                    sol.total_distance
                );
            }
        }
    }

    #[test]
    fn more_agents_than_targets_is_partial() {
        let agents = agents(&[(0, 0), (100, 0), (50, 0)]);
        let targets = targets(&[(99, 0), (1, 0)]);
        let sol = ExhaustiveSolver::default().solve(&agents, &targets);
        assert!(sol.is_partial());
        assert!(sol.assignment.is_injective());
        assert_eq!(sol.assignment.assigned_count(), 2);
        assert_eq!(
            sol.assignment.as_slice(),
            &[Some(TargetId(1)), Some(TargetId(0)), None]
        );
        assert_eq!(sol.total_distance, 2.0);
    }

    #[test]
    fn partial_matches_brute_force() {
        let mut rng = SimRng::new(5);
        for n_agents in 2..=5 {
            let agents = agents(&random_points(n_agents, &mut rng));
            let targets = targets(&random_points(n_agents - 1, &mut rng));
            let sol = ExhaustiveSolver::default().solve(&agents, &targets);
            let expected = brute_force_assignment_cost(
                &positions_of_agents(&agents),
                &positions_of_targets(&targets),
            );
            assert!((sol.total_distance - expected).abs() < 1e-9);
            assert_eq!(sol.assignment.assigned_count(), n_agents - 1);
        }
    }

    #[test]
    fn empty_targets_terminate_with_empty_assignment() {
        let agents = agents(&[(0, 0), (5, 5)]);
        let sol = ExhaustiveSolver::default().solve(&agents, &[]);
        assert_eq!(sol.assignment.as_slice(), &[None, None]);
        assert_eq!(sol.total_distance, 0.0);
        assert!(sol.stats.complete);
    }

    #[test]
    fn no_agents_is_trivial() {
        let targets = targets(&[(0, 0)]);
        let sol = ExhaustiveSolver::default().solve(&[], &targets);
        assert!(sol.assignment.is_empty());
        assert!(!sol.is_partial());
    }

    #[test]
    fn collected_targets_are_never_assigned() {
        let agents = agents(&[(0, 0)]);
        let mut targets = targets(&[(1, 0), (50, 0)]);
        targets[0].collect();
        let sol = ExhaustiveSolver::default().solve(&agents, &targets);
        assert_eq!(sol.assignment.as_slice(), &[Some(TargetId(1))]);
    }

    #[test]
    fn budget_returns_best_so_far() {
        let mut rng = SimRng::new(3);
        let agents = agents(&random_points(4, &mut rng));
        let targets = targets(&random_points(8, &mut rng));
        let sol = ExhaustiveSolver::new(SearchBudget::nodes(50)).solve(&agents, &targets);
        assert!(!sol.stats.complete);
        assert_eq!(sol.stats.nodes, 50);
        // Depth-first reaches a leaf within 5 nodes, so something was found.
        assert_eq!(sol.assignment.assigned_count(), 4);
        assert!(sol.assignment.is_injective());

        let full = ExhaustiveSolver::default().solve(&agents, &targets);
        assert!(full.total_distance <= sol.total_distance);
    }
}

// ── GreedySolver ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod greedy {
    use cc_core::TargetId;

    use super::helpers::*;
    use crate::{AssignmentSolver, ExhaustiveSolver, GreedySolver, SearchBudget};

    #[test]
    fn only_the_backtracking_solver_is_exhaustive() {
        assert!(!GreedySolver.is_exhaustive());
        assert!(ExhaustiveSolver::default().is_exhaustive());
        assert!(ExhaustiveSolver::new(SearchBudget::nodes(10)).is_exhaustive());
    }

    #[test]
    fn nearest_in_agent_order() {
        let agents = agents(&[(0, 0), (-10, 0)]);
        let targets = targets(&[(-1, 0), (3, 0)]);
        let sol = GreedySolver.solve(&agents, &targets);
        // Agent 0 grabs its nearest first; agent 1 takes what is left.
        assert_eq!(sol.assignment.as_slice(), &[Some(TargetId(0)), Some(TargetId(1))]);
        assert_eq!(sol.total_distance, 14.0);
        assert!(sol.assignment.is_injective());
    }

    #[test]
    fn leaves_surplus_agents_unassigned() {
        let agents = agents(&[(0, 0), (1, 1)]);
        let targets = targets(&[(5, 5)]);
        let sol = GreedySolver.solve(&agents, &targets);
        assert_eq!(sol.assignment.as_slice(), &[Some(TargetId(0)), None]);
        assert!(sol.is_partial());
    }
}

// ── RoutePlanner ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use cc_core::{Point, SimRng};

    use super::helpers::*;
    use crate::{Route, RoutePlanner, SearchBudget};

    #[test]
    fn three_targets_on_a_line() {
        let targets = [Point::new(10, 0), Point::new(1, 0), Point::new(5, 0)];
        let route = RoutePlanner::default().plan(Point::new(0, 0), &targets);
        assert_eq!(route.order, ids(&[1, 2, 0]));
        assert_eq!(route.length, 10.0);
        assert!(route.stats.complete);
    }

    #[test]
    fn three_targets_matches_brute_force() {
        let start = Point::new(0, 0);
        let targets = [Point::new(0, 30), Point::new(40, 0), Point::new(40, 30)];
        let route = RoutePlanner::default().plan(start, &targets);

        let best = all_permutations(3)
            .into_iter()
            .map(|p| {
                let mut last = start;
                let mut total = 0.0;
                for t in p {
                    total += last.distance(targets[t]);
                    last = targets[t];
                }
                total
            })
            .fold(f64::INFINITY, f64::min);

        // 30 + 40 + 30 = 100 (up, across, down) beats any diagonal order.
        assert_eq!(best, 100.0);
        assert!((route.length - best).abs() < 1e-9);
        assert_eq!(route.order, ids(&[0, 2, 1]));
    }

    #[test]
    fn random_instances_match_brute_force() {
        let mut rng = SimRng::new(11);
        for n in 0..=6 {
            let start = Point::new(rng.gen_range(0..200), rng.gen_range(0..200));
            let targets: Vec<Point> = random_points(n, &mut rng)
                .into_iter()
                .map(|(x, y)| Point::new(x, y))
                .collect();
            let route = RoutePlanner::default().plan(start, &targets);

            let mut sorted: Vec<u32> = route.order.iter().map(|t| t.0).collect();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..n as u32).collect::<Vec<_>>(), "not a permutation");

            let best = all_permutations(n)
                .into_iter()
                .map(|p| {
                    let order: Vec<_> = p.iter().map(|&t| cc_core::TargetId(t as u32)).collect();
                    Route::path_length(start, &order, &targets)
                })
                .fold(f64::INFINITY, f64::min);
            assert!((route.length - best).abs() < 1e-9, "n={n}");
            assert_eq!(Route::path_length(start, &route.order, &targets), route.length);
        }
    }

    #[test]
    fn no_targets_gives_empty_route() {
        let route = RoutePlanner::default().plan(Point::new(3, 3), &[]);
        assert!(route.order.is_empty());
        assert_eq!(route.length, 0.0);
        assert_eq!(route.waypoints(Point::new(3, 3), &[]), vec![Point::new(3, 3)]);
    }

    #[test]
    fn plan_all_is_per_agent() {
        let targets = [Point::new(10, 0), Point::new(-10, 0)];
        let routes = RoutePlanner::default().plan_all(&[Point::new(9, 0), Point::new(-9, 0)], &targets);
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].order, ids(&[0, 1]));
        assert_eq!(routes[1].order, ids(&[1, 0]));
        assert_eq!(routes[0].length, 21.0);
        assert_eq!(
            routes[1].waypoints(Point::new(-9, 0), &targets),
            vec![Point::new(-9, 0), Point::new(-10, 0), Point::new(10, 0)]
        );
    }

    #[test]
    fn plan_all_equals_planning_each_start() {
        let mut rng = SimRng::new(23);
        let targets: Vec<Point> = random_points(6, &mut rng)
            .into_iter()
            .map(|(x, y)| Point::new(x, y))
            .collect();
        let starts: Vec<Point> = random_points(16, &mut rng)
            .into_iter()
            .map(|(x, y)| Point::new(x, y))
            .collect();

        for planner in [RoutePlanner::default(), RoutePlanner::new(SearchBudget::nodes(50))] {
            let all = planner.plan_all(&starts, &targets);
            let each: Vec<Route> = starts.iter().map(|&s| planner.plan(s, &targets)).collect();
            assert_eq!(all, each);
        }
    }

    /// Runs only with `--features parallel`, where `plan_all` fans out on
    /// the rayon pool.
    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_plan_all_keeps_agent_order() {
        let targets = [Point::new(0, 0), Point::new(100, 0)];
        let starts: Vec<Point> = (0..64)
            .map(|i| Point::new(if i % 2 == 0 { -5 } else { 105 }, i))
            .collect();
        let routes = RoutePlanner::default().plan_all(&starts, &targets);
        assert_eq!(routes.len(), 64);
        for (i, route) in routes.iter().enumerate() {
            let expected = if i % 2 == 0 { ids(&[0, 1]) } else { ids(&[1, 0]) };
            assert_eq!(route.order, expected, "agent {i}");
        }
    }

    #[test]
    fn budget_cuts_search_short() {
        let targets: Vec<Point> = (0..8).map(|i| Point::new(i * 7 % 13, i * 5 % 11)).collect();
        let route = RoutePlanner::new(SearchBudget::nodes(20)).plan(Point::new(0, 0), &targets);
        assert!(!route.stats.complete);
        // The first dive reaches a full permutation in 9 nodes.
        assert_eq!(route.order.len(), 8);
    }
}

// ── Reassignment ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod reassign {
    use cc_core::{AgentId, TargetId};

    use super::helpers::*;
    use crate::{nearest_eligible, reassess_all, reassign, revalidate_all};

    #[test]
    fn skips_collected_and_taken_targets() {
        let mut agents = agents(&[(0, 0), (0, 0)]);
        let mut targets = targets(&[(1, 0), (2, 0), (10, 0), (20, 0)]);
        targets[0].collect();
        agents[0].set_target(Some(TargetId(1)));

        assert_eq!(nearest_eligible(AgentId(1), &agents, &targets), Some(TargetId(2)));
        assert_eq!(reassign(AgentId(1), &mut agents, &targets), Some(TargetId(2)));
        assert!(agents[1].is_bound_to(TargetId(2)));
    }

    #[test]
    fn own_binding_does_not_exclude_itself() {
        let mut agents = agents(&[(0, 0)]);
        let targets = targets(&[(1, 0), (5, 0)]);
        agents[0].set_target(Some(TargetId(0)));
        assert_eq!(reassign(AgentId(0), &mut agents, &targets), Some(TargetId(0)));
    }

    #[test]
    fn first_minimum_wins_ties() {
        let agents = agents(&[(0, 0)]);
        let targets = targets(&[(0, 5), (5, 0), (3, 4)]);
        assert_eq!(nearest_eligible(AgentId(0), &agents, &targets), Some(TargetId(0)));
    }

    #[test]
    fn nothing_eligible_unbinds() {
        let mut agents = agents(&[(0, 0), (9, 9)]);
        let mut targets = targets(&[(1, 0), (2, 0)]);
        targets[0].collect();
        agents[0].set_target(Some(TargetId(0)));
        agents[1].set_target(Some(TargetId(1)));

        assert_eq!(reassign(AgentId(0), &mut agents, &targets), None);
        assert_eq!(agents[0].current_target(), None);
    }

    #[test]
    fn revalidate_only_touches_stale_agents() {
        let mut agents = agents(&[(0, 0), (50, 0), (100, 0)]);
        let mut targets = targets(&[(1, 0), (49, 0), (101, 0), (60, 0)]);
        agents[0].set_target(Some(TargetId(0)));
        agents[1].set_target(Some(TargetId(1)));
        // agent 2 unbound; agent 0's target gets collected.
        targets[0].collect();

        let checked = revalidate_all(&mut agents, &targets);
        assert_eq!(checked, 2);
        assert!(agents[1].is_bound_to(TargetId(1)), "healthy binding untouched");
        // Agent 0 (checked first) takes target 3 at (60, 0) over target 2 at
        // (101, 0); agent 2 then gets target 2.
        assert!(agents[0].is_bound_to(TargetId(3)));
        assert!(agents[2].is_bound_to(TargetId(2)));
    }

    #[test]
    fn reassess_all_rebinds_greedily() {
        let mut agents = agents(&[(0, 0), (-10, 0)]);
        let targets = targets(&[(-1, 0), (3, 0)]);
        agents[0].set_target(Some(TargetId(1)));
        agents[1].set_target(Some(TargetId(0)));

        reassess_all(&mut agents, &targets);
        assert!(agents[0].is_bound_to(TargetId(0)));
        assert!(agents[1].is_bound_to(TargetId(1)));
    }
}
