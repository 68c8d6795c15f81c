//! Conflict graph construction from task records.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::interner::{NodeId, TaskNameInterner};
use crate::models::{RawTask, ScheduleError};
use crate::{log_changes, log_checks, log_error};

use super::ConflictGraph;

/// True if the two resource sets share at least one resource.
pub fn resources_conflict(a: &FxHashSet<String>, b: &FxHashSet<String>) -> bool {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().any(|r| large.contains(r))
}

/// Build the conflict graph for a task list.
///
/// Every record is validated before any edge is added, so a malformed record
/// anywhere in the list fails the whole build with
/// [`ScheduleError::InvalidTaskFormat`].
///
/// Duplicate task names: the last record wins. Its profit and resources
/// replace those of earlier records with the same name, and the node keeps
/// the index of the first occurrence.
pub fn build_conflict_graph(
    tasks: &[RawTask],
    verbosity: u8,
) -> Result<ConflictGraph, ScheduleError> {
    let mut names = TaskNameInterner::with_capacity(tasks.len());
    let mut weights: Vec<f64> = Vec::with_capacity(tasks.len());
    let mut resources: Vec<FxHashSet<String>> = Vec::with_capacity(tasks.len());

    for raw in tasks {
        let task = raw.validate().inspect_err(|err| {
            log_error!("{}", err);
        })?;
        let (id, is_new) = names.intern(&task.name);
        let task_resources: FxHashSet<String> = task.resources.into_iter().collect();
        if is_new {
            weights.push(task.profit);
            resources.push(task_resources);
        } else {
            log_checks!(
                verbosity,
                "Duplicate task name {:?}: replacing earlier record",
                task.name
            );
            weights[id as usize] = task.profit;
            resources[id as usize] = task_resources;
        }
    }

    // Index tasks by resource so only pairs sharing a resource are visited
    let mut users: FxHashMap<&str, Vec<NodeId>> = FxHashMap::default();
    for (id, task_resources) in resources.iter().enumerate() {
        for resource in task_resources {
            users.entry(resource.as_str()).or_default().push(id as NodeId);
        }
    }

    let mut graph = ConflictGraph::new(names, weights);
    for nodes in users.values() {
        for (i, &u) in nodes.iter().enumerate() {
            for &v in &nodes[i + 1..] {
                graph.add_edge(u, v);
            }
        }
    }

    log_changes!(
        verbosity,
        "Conflict graph: {} tasks, {} conflicts, {} resources",
        graph.node_count(),
        graph.edge_count(),
        users.len()
    );
    Ok(graph)
}
