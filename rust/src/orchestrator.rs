//! Schedule computation: conflict graph, search, result formatting.

use crate::config::SolverConfig;
use crate::conflict_graph::build_conflict_graph;
use crate::log_changes;
use crate::models::{parse_task_document, RawTask, ScheduleError, ScheduleOutcome};
use crate::mwis::MaxWeightIndependentSetSolver;

/// Compute the highest-profit set of tasks that share no resource.
///
/// Returns the selected task names in input order. Fails with
/// [`ScheduleError::InvalidTaskFormat`] if any record is incomplete.
pub fn compute_schedule(tasks: &[RawTask]) -> Result<Vec<String>, ScheduleError> {
    compute_schedule_with_config(tasks, &SolverConfig::default()).map(|o| o.task_names)
}

/// [`compute_schedule`] with logging and search budgets, returning the total
/// profit and search statistics alongside the task names.
pub fn compute_schedule_with_config(
    tasks: &[RawTask],
    config: &SolverConfig,
) -> Result<ScheduleOutcome, ScheduleError> {
    let graph = build_conflict_graph(tasks, config.verbosity)?;
    let result = MaxWeightIndependentSetSolver::new(&graph, config).solve();

    let task_names: Vec<String> = result
        .best_nodes
        .iter()
        .filter_map(|&v| graph.name(v).map(str::to_owned))
        .collect();

    log_changes!(
        config.verbosity,
        "The max profit is: {} and the tasks schedule are: {:?} ({:?}, {} expansions)",
        result.best_weight,
        task_names,
        result.status,
        result.expansions
    );

    Ok(ScheduleOutcome {
        task_names,
        total_profit: result.best_weight,
        status: result.status,
        expansions: result.expansions,
    })
}

/// Compute the schedule for an uploaded JSON task document.
pub fn schedule_from_json(document: &str) -> Result<Vec<String>, ScheduleError> {
    let tasks = parse_task_document(document)?;
    compute_schedule(&tasks)
}
