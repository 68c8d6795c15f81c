//! Exhaustive reference used to check the search on small graphs.

use rand::Rng;

use crate::conflict_graph::ConflictGraph;
use crate::interner::NodeId;

/// Best independent-set weight by enumerating every subset. Small graphs only.
pub fn brute_force_weight(graph: &ConflictGraph) -> f64 {
    let n = graph.node_count();
    assert!(n <= 20, "brute force is exponential, got {} nodes", n);
    let mut best = 0.0f64;
    let mut subset: Vec<NodeId> = Vec::with_capacity(n);
    for mask in 0u32..(1u32 << n) {
        subset.clear();
        subset.extend((0..n as NodeId).filter(|&v| mask & (1 << v) != 0));
        if graph.is_independent(&subset) {
            best = best.max(graph.total_weight(&subset));
        }
    }
    best
}

/// Random graph with weights in `0.1..=10.0` and each edge present with
/// probability `density`.
pub fn random_graph<R: Rng>(rng: &mut R, n: usize, density: f64) -> ConflictGraph {
    let weights: Vec<f64> = (0..n)
        .map(|_| rng.random_range(1..=100u32) as f64 / 10.0)
        .collect();
    let mut edges = Vec::new();
    for u in 0..n as NodeId {
        for v in (u + 1)..n as NodeId {
            if rng.random_bool(density) {
                edges.push((u, v));
            }
        }
    }
    ConflictGraph::from_edges(&weights, &edges)
}
