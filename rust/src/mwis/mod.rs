//! Maximum-weight independent set search.
//!
//! A depth-first branch-and-bound over the conflict graph, pruned with a
//! weighted clique-cover bound.

mod bound;
#[cfg(test)]
pub(crate) mod reference;
mod solver;

pub use bound::find_branching_nodes;
pub use solver::{solve, MaxWeightIndependentSetSolver, SolveResult};
