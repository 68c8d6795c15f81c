//! Branch-and-bound search for a maximum-weight independent set.
//!
//! The search is a maximum-weight clique search run on the complement of the
//! conflict graph without building it: when a node joins the candidate, the
//! remaining pool keeps only the nodes that do NOT conflict with it.
//!
//! Recursion is replaced by an explicit stack of frames, one per node of the
//! current candidate, so depth never exceeds the node count.

use std::time::{Duration, Instant};

use crate::config::SolverConfig;
use crate::conflict_graph::{ConflictGraph, NodeSet};
use crate::interner::NodeId;
use crate::models::SearchStatus;
use crate::{log_changes, log_checks, log_debug};

use super::bound::find_branching_nodes;

/// Result of a search.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveResult {
    pub best_weight: f64,
    /// Selected nodes, ascending.
    pub best_nodes: Vec<NodeId>,
    pub status: SearchStatus,
    pub expansions: u64,
}

/// One level of the search: the candidate's weight at this depth, the nodes
/// that may still extend it, and the branching nodes not yet tried.
struct Frame {
    weight: f64,
    pool: NodeSet,
    branching: Vec<NodeId>,
}

/// Depth-first branch-and-bound over a [`ConflictGraph`].
pub struct MaxWeightIndependentSetSolver<'a> {
    graph: &'a ConflictGraph,
    config: &'a SolverConfig,
    /// Nodes of the current candidate, one per non-root frame.
    candidate: Vec<NodeId>,
    incumbent_nodes: Vec<NodeId>,
    incumbent_weight: f64,
    expansions: u64,
    deadline: Option<Instant>,
}

impl<'a> MaxWeightIndependentSetSolver<'a> {
    pub fn new(graph: &'a ConflictGraph, config: &'a SolverConfig) -> Self {
        Self {
            graph,
            config,
            candidate: Vec::with_capacity(graph.node_count()),
            incumbent_nodes: Vec::new(),
            incumbent_weight: 0.0,
            expansions: 0,
            deadline: None,
        }
    }

    /// Run the search.
    ///
    /// Without a budget the result is optimal. With a budget the search may
    /// stop early and return the best independent set seen so far.
    pub fn solve(mut self) -> SolveResult {
        let verbosity = self.config.verbosity;
        self.deadline = self
            .config
            .time_limit_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));

        // Non-positive weights can never strictly improve the incumbent
        let mut pool = NodeSet::empty(self.graph.node_count());
        for v in 0..self.graph.node_count() as NodeId {
            if self.graph.weight(v) > 0.0 {
                pool.insert(v);
            }
        }

        let branching = find_branching_nodes(self.graph, &pool, self.incumbent_weight);
        let mut stack = vec![Frame {
            weight: 0.0,
            pool,
            branching,
        }];
        let mut status = SearchStatus::Optimal;

        while let Some(frame) = stack.last_mut() {
            let Some(v) = frame.branching.pop() else {
                stack.pop();
                self.candidate.pop();
                continue;
            };
            if self.budget_exhausted() {
                status = SearchStatus::BudgetExhausted;
                log_changes!(
                    verbosity,
                    "Search budget exhausted after {} expansions",
                    self.expansions
                );
                break;
            }

            frame.pool.remove(v);
            let mut pool = frame.pool.clone();
            pool.difference_with(self.graph.neighbors(v));
            let weight = frame.weight + self.graph.weight(v);

            self.expansions += 1;
            self.candidate.push(v);
            log_debug!(
                verbosity,
                "Expand {:?} (depth {}, weight {}, pool {})",
                self.graph.name(v),
                self.candidate.len(),
                weight,
                pool.len()
            );

            if weight > self.incumbent_weight {
                self.incumbent_weight = weight;
                self.incumbent_nodes.clone_from(&self.candidate);
                log_changes!(
                    verbosity,
                    "New incumbent: weight {} with {} tasks",
                    weight,
                    self.candidate.len()
                );
            }

            let branching =
                find_branching_nodes(self.graph, &pool, self.incumbent_weight - weight);
            log_checks!(
                verbosity,
                "Branching on {} of {} pool nodes",
                branching.len(),
                pool.len()
            );
            stack.push(Frame {
                weight,
                pool,
                branching,
            });
        }

        let mut best_nodes = self.incumbent_nodes;
        best_nodes.sort_unstable();
        SolveResult {
            best_weight: self.incumbent_weight,
            best_nodes,
            status,
            expansions: self.expansions,
        }
    }

    fn budget_exhausted(&self) -> bool {
        if let Some(limit) = self.config.max_expansions {
            if self.expansions >= limit {
                return true;
            }
        }
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Exact maximum-weight independent set of `graph`: `(best_weight, best_nodes)`.
pub fn solve(graph: &ConflictGraph) -> (f64, Vec<NodeId>) {
    let config = SolverConfig::default();
    let result = MaxWeightIndependentSetSolver::new(graph, &config).solve();
    (result.best_weight, result.best_nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mwis::reference::{brute_force_weight, random_graph};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_empty_graph() {
        let graph = ConflictGraph::from_edges(&[], &[]);
        let (weight, nodes) = solve(&graph);
        assert_eq!(weight, 0.0);
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_single_node() {
        let graph = ConflictGraph::from_edges(&[2.5], &[]);
        assert_eq!(solve(&graph), (2.5, vec![0]));
    }

    #[test]
    fn test_example_from_task_list() {
        // t1..t4 from the resource example; t3 + t4 = 9.5 beats t1 = 9.4
        let graph =
            ConflictGraph::from_edges(&[9.4, 1.4, 3.2, 6.3], &[(0, 1), (0, 2), (0, 3), (1, 3)]);
        let (weight, nodes) = solve(&graph);
        assert!((weight - 9.5).abs() < EPS);
        assert_eq!(nodes, vec![2, 3]);
    }

    #[test]
    fn test_complete_graph_picks_heaviest() {
        let weights = [3.0, 7.0, 1.0, 5.0];
        let mut edges = Vec::new();
        for u in 0..4 {
            for v in (u + 1)..4 {
                edges.push((u, v));
            }
        }
        let graph = ConflictGraph::from_edges(&weights, &edges);
        assert_eq!(solve(&graph), (7.0, vec![1]));
    }

    #[test]
    fn test_no_conflicts_takes_everything() {
        let graph = ConflictGraph::from_edges(&[1.0, 2.0, 3.0], &[]);
        assert_eq!(solve(&graph), (6.0, vec![0, 1, 2]));
    }

    #[test]
    fn test_non_positive_weights_are_never_selected() {
        let graph = ConflictGraph::from_edges(&[0.0, -2.0, 1.0], &[]);
        assert_eq!(solve(&graph), (1.0, vec![2]));

        let graph = ConflictGraph::from_edges(&[0.0], &[]);
        assert_eq!(solve(&graph), (0.0, vec![]));
    }

    #[test]
    fn test_path_prefers_heavy_interior() {
        // 1 - 10 - 1 - 10 - 1
        let graph = ConflictGraph::from_edges(
            &[1.0, 10.0, 1.0, 10.0, 1.0],
            &[(0, 1), (1, 2), (2, 3), (3, 4)],
        );
        assert_eq!(solve(&graph), (20.0, vec![1, 3]));
    }

    #[test]
    fn test_matches_brute_force_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(7);
        for round in 0..300 {
            let n = 1 + round % 14;
            let density = [0.1, 0.3, 0.5, 0.8][round % 4];
            let graph = random_graph(&mut rng, n, density);

            let (weight, nodes) = solve(&graph);
            let expected = brute_force_weight(&graph);

            assert!(graph.is_independent(&nodes), "round {}: not independent", round);
            assert!(
                (graph.total_weight(&nodes) - weight).abs() < EPS,
                "round {}: weight mismatch",
                round
            );
            assert!(
                (weight - expected).abs() < EPS,
                "round {}: got {}, brute force {}",
                round,
                weight,
                expected
            );
        }
    }

    #[test]
    fn test_expansion_budget_returns_valid_incumbent() {
        let mut rng = StdRng::seed_from_u64(11);
        let graph = random_graph(&mut rng, 40, 0.2);
        let config = SolverConfig {
            max_expansions: Some(5),
            ..Default::default()
        };
        let result = MaxWeightIndependentSetSolver::new(&graph, &config).solve();

        assert_eq!(result.status, SearchStatus::BudgetExhausted);
        assert_eq!(result.expansions, 5);
        assert!(graph.is_independent(&result.best_nodes));
        assert!(result.best_weight > 0.0);
    }

    #[test]
    fn test_generous_budget_is_optimal() {
        let graph =
            ConflictGraph::from_edges(&[9.4, 1.4, 3.2, 6.3], &[(0, 1), (0, 2), (0, 3), (1, 3)]);
        let config = SolverConfig {
            max_expansions: Some(1_000),
            time_limit_ms: Some(60_000),
            ..Default::default()
        };
        let result = MaxWeightIndependentSetSolver::new(&graph, &config).solve();
        assert_eq!(result.status, SearchStatus::Optimal);
        assert_eq!(result.best_nodes, vec![2, 3]);
        assert!(result.expansions <= 1_000);
    }

    #[test]
    fn test_zero_time_limit_stops_immediately() {
        let graph = ConflictGraph::from_edges(&[1.0, 2.0], &[(0, 1)]);
        let config = SolverConfig {
            time_limit_ms: Some(0),
            ..Default::default()
        };
        let result = MaxWeightIndependentSetSolver::new(&graph, &config).solve();
        assert_eq!(result.status, SearchStatus::BudgetExhausted);
        assert_eq!(result.expansions, 0);
        assert!(result.best_nodes.is_empty());
    }
}
