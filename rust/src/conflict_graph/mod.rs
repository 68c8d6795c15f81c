//! Conflict graph over tasks.
//!
//! Nodes are tasks weighted by profit; an edge joins two tasks that share at
//! least one resource and therefore cannot run together.

mod builder;
mod node_set;

pub use builder::{build_conflict_graph, resources_conflict};
pub use node_set::NodeSet;

use crate::interner::{NodeId, TaskNameInterner};

/// Undirected, simple, node-weighted graph with bitset adjacency.
#[derive(Debug, Clone)]
pub struct ConflictGraph {
    names: TaskNameInterner,
    weights: Vec<f64>,
    adjacency: Vec<NodeSet>,
    edge_count: usize,
}

impl ConflictGraph {
    /// Graph with the given nodes and no edges.
    pub fn new(names: TaskNameInterner, weights: Vec<f64>) -> Self {
        debug_assert_eq!(names.len(), weights.len());
        let n = weights.len();
        Self {
            names,
            weights,
            adjacency: vec![NodeSet::empty(n); n],
            edge_count: 0,
        }
    }

    /// Graph from node weights and an edge list. Nodes are named `n0`, `n1`, ...
    pub fn from_edges(weights: &[f64], edges: &[(NodeId, NodeId)]) -> Self {
        let mut names = TaskNameInterner::with_capacity(weights.len());
        for i in 0..weights.len() {
            names.intern(&format!("n{}", i));
        }
        let mut graph = Self::new(names, weights.to_vec());
        for &(u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Add the edge `{u, v}`. Self-loops and repeated edges are ignored.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        if u == v || self.adjacency[u as usize].contains(v) {
            return;
        }
        self.adjacency[u as usize].insert(v);
        self.adjacency[v as usize].insert(u);
        self.edge_count += 1;
    }

    pub fn node_count(&self) -> usize {
        self.weights.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn weight(&self, node: NodeId) -> f64 {
        self.weights[node as usize]
    }

    #[inline]
    pub fn are_conflicting(&self, u: NodeId, v: NodeId) -> bool {
        self.adjacency[u as usize].contains(v)
    }

    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &NodeSet {
        &self.adjacency[node as usize]
    }

    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.names.resolve(node)
    }

    pub fn index_of(&self, name: &str) -> Option<NodeId> {
        self.names.get(name)
    }

    /// True if no two of `nodes` conflict.
    pub fn is_independent(&self, nodes: &[NodeId]) -> bool {
        nodes.iter().enumerate().all(|(i, &u)| {
            nodes[i + 1..]
                .iter()
                .all(|&v| u != v && !self.are_conflicting(u, v))
        })
    }

    pub fn total_weight(&self, nodes: &[NodeId]) -> f64 {
        nodes.iter().map(|&n| self.weight(n)).sum()
    }
}
