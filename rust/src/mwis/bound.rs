//! Weighted coloring bound on the complement of the conflict graph.
//!
//! A clique of the conflict graph holds at most one member of any independent
//! set. Covering the pool with cliques, each charged the smallest residual
//! weight among its members, gives an upper bound on what an independent set
//! drawn from the covered weight can earn.

use crate::conflict_graph::{ConflictGraph, NodeSet};
use crate::interner::NodeId;

/// Select the nodes of `pool` worth branching on.
///
/// Nodes whose whole weight is covered before the running bound exceeds
/// `target` are dropped: no independent set made of them alone is worth more
/// than `target`. The rest are returned in ascending index order.
///
/// Every node in `pool` must have a strictly positive weight.
pub fn find_branching_nodes(graph: &ConflictGraph, pool: &NodeSet, target: f64) -> Vec<NodeId> {
    let mut residual = vec![0.0; graph.node_count()];
    for v in pool.iter() {
        residual[v as usize] = graph.weight(v);
    }

    let mut remaining = pool.clone();
    let mut bound = 0.0;
    let mut class: Vec<NodeId> = Vec::new();

    while !remaining.is_empty() {
        // Greedy clique: every node added conflicts with all earlier ones
        class.clear();
        let mut candidates = remaining.clone();
        while let Some(v) = candidates.first() {
            class.push(v);
            candidates.intersect_with(graph.neighbors(v));
        }

        let charge = class
            .iter()
            .map(|&v| residual[v as usize])
            .fold(f64::INFINITY, f64::min);
        bound += charge;
        if bound > target {
            break;
        }

        for &v in &class {
            residual[v as usize] -= charge;
            if residual[v as usize] <= 0.0 {
                remaining.remove(v);
            }
        }
    }

    remaining.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pool() {
        let graph = ConflictGraph::from_edges(&[1.0, 2.0], &[]);
        assert!(find_branching_nodes(&graph, &NodeSet::empty(2), 0.0).is_empty());
    }

    #[test]
    fn test_zero_target_keeps_every_node() {
        // Any positive-weight node beats an empty incumbent
        let graph = ConflictGraph::from_edges(&[1.0, 2.0, 3.0], &[(0, 1)]);
        let branching = find_branching_nodes(&graph, &NodeSet::full(3), 0.0);
        assert_eq!(branching, vec![0, 1, 2]);
    }

    #[test]
    fn test_clique_is_charged_once() {
        // Triangle of mutually conflicting tasks: best completion is 5.0
        let graph = ConflictGraph::from_edges(&[5.0, 3.0, 4.0], &[(0, 1), (1, 2), (0, 2)]);
        assert!(find_branching_nodes(&graph, &NodeSet::full(3), 5.0).is_empty());

        let branching = find_branching_nodes(&graph, &NodeSet::full(3), 4.5);
        assert!(!branching.is_empty());
    }

    #[test]
    fn test_disjoint_tasks_add_up() {
        // No conflicts: every task can be taken, bound must reach the sum
        let graph = ConflictGraph::from_edges(&[1.0, 1.0, 1.0], &[]);
        assert!(find_branching_nodes(&graph, &NodeSet::full(3), 3.0).is_empty());
        assert!(!find_branching_nodes(&graph, &NodeSet::full(3), 2.9).is_empty());
    }

    #[test]
    fn test_pruned_nodes_cannot_beat_target() {
        let weights = [4.0, 2.0, 3.0, 1.0, 5.0];
        let edges = [(0, 1), (1, 2), (2, 3), (3, 4), (0, 4)];
        let graph = ConflictGraph::from_edges(&weights, &edges);
        let pool = NodeSet::full(5);

        for target in [0.0, 3.0, 5.0, 7.0, 8.0, 9.0] {
            let branching = find_branching_nodes(&graph, &pool, target);
            let dropped: Vec<NodeId> = pool.iter().filter(|v| !branching.contains(v)).collect();
            // Best independent subset of the dropped nodes, by enumeration
            let mut best = 0.0f64;
            for mask in 0u32..(1 << dropped.len()) {
                let subset: Vec<NodeId> = dropped
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, &v)| v)
                    .collect();
                if graph.is_independent(&subset) {
                    best = best.max(graph.total_weight(&subset));
                }
            }
            assert!(best <= target, "target {} dropped set worth {}", target, best);
        }
    }
}
