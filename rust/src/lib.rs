//! Profit-maximal selection of tasks that share no exclusive resource.
//!
//! Tasks competing for a resource are joined in a conflict graph; the
//! schedule is a maximum-weight independent set of that graph, found by an
//! exact branch-and-bound search.
//!
//! With the `python` feature the crate also builds the `task_scheduler`
//! Python extension module.

// Allow clippy warning triggered by PyO3 macro expansion
#![cfg_attr(feature = "python", allow(clippy::useless_conversion))]

pub mod config;
pub mod conflict_graph;
pub mod interner;
pub mod logging;
pub mod models;
pub mod mwis;
mod orchestrator;

pub use config::SolverConfig;
pub use conflict_graph::{build_conflict_graph, ConflictGraph, NodeSet};
pub use interner::NodeId;
pub use models::{parse_task_document, RawTask, ScheduleError, ScheduleOutcome, SearchStatus, Task};
pub use mwis::{MaxWeightIndependentSetSolver, SolveResult};
pub use orchestrator::{compute_schedule, compute_schedule_with_config, schedule_from_json};

#[cfg(feature = "python")]
mod python {
    use pyo3::create_exception;
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::{RawTask, ScheduleError, SolverConfig};

    create_exception!(task_scheduler, InvalidTaskFormat, PyValueError);

    fn to_py_err(err: ScheduleError) -> PyErr {
        match err {
            ScheduleError::InvalidTaskFormat(_) => InvalidTaskFormat::new_err(err.to_string()),
            ScheduleError::MalformedDocument(_) => PyValueError::new_err(err.to_string()),
        }
    }

    /// Compute the highest-profit list of task names that share no resource.
    ///
    /// # Arguments
    /// * `tasks` - List of dicts with `name`, `resources` and `profit` keys
    /// * `config` - Optional SolverConfig (verbosity, search budgets)
    ///
    /// # Raises
    /// * InvalidTaskFormat if a task is missing a key
    #[pyfunction]
    #[pyo3(signature = (tasks, config=None))]
    fn compute_schedule(tasks: Vec<RawTask>, config: Option<SolverConfig>) -> PyResult<Vec<String>> {
        let config = config.unwrap_or_default();
        crate::compute_schedule_with_config(&tasks, &config)
            .map(|outcome| outcome.task_names)
            .map_err(to_py_err)
    }

    /// The task_scheduler Python module.
    #[pymodule]
    fn task_scheduler(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_class::<SolverConfig>()?;
        m.add("InvalidTaskFormat", m.py().get_type_bound::<InvalidTaskFormat>())?;
        m.add_function(wrap_pyfunction!(compute_schedule, m)?)?;
        Ok(())
    }
}
