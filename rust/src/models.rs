//! Core data types for the schedule optimizer.

use serde_json::{json, Value};
use thiserror::Error;

#[cfg(feature = "python")]
use pyo3::{prelude::*, types::PyDict};

pub const NAME_KEY: &str = "name";
pub const RESOURCES_KEY: &str = "resources";
pub const PROFIT_KEY: &str = "profit";

/// Errors surfaced by the schedule optimizer.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A task record is missing `name`, `resources` or `profit`.
    #[error("Invalid task format for task: {0}. Please, review task structure and try again.")]
    InvalidTaskFormat(String),
    /// The uploaded task document is not a JSON array.
    #[error("Malformed task document: {0}")]
    MalformedDocument(#[from] serde_json::Error),
}

/// A task record as supplied by the caller, possibly incomplete.
///
/// Fields that are absent or carry the wrong type are `None`. The original
/// textual form of the record is kept for error reporting.
#[derive(Clone, Debug, PartialEq)]
pub struct RawTask {
    pub name: Option<String>,
    pub resources: Option<Vec<String>>,
    pub profit: Option<f64>,
    content: String,
}

impl RawTask {
    /// Build a complete record.
    pub fn new<S: Into<String>>(name: S, resources: Vec<String>, profit: f64) -> Self {
        let name = name.into();
        let content = json!({
            "name": name,
            "resources": resources,
            "profit": profit,
        })
        .to_string();
        Self {
            name: Some(name),
            resources: Some(resources),
            profit: Some(profit),
            content,
        }
    }

    /// Decode a record from a JSON value. Never fails: malformed fields are
    /// left empty and rejected later by [`RawTask::validate`].
    pub fn from_json(value: &Value) -> Self {
        let name = value
            .get(NAME_KEY)
            .and_then(Value::as_str)
            .map(str::to_owned);
        let resources = value.get(RESOURCES_KEY).and_then(Value::as_array).and_then(|items| {
            items
                .iter()
                .map(|r| r.as_str().map(str::to_owned))
                .collect::<Option<Vec<_>>>()
        });
        let profit = value.get(PROFIT_KEY).and_then(Value::as_f64);
        Self {
            name,
            resources,
            profit,
            content: value.to_string(),
        }
    }

    /// Textual representation of the record, as received.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check that every required field is present.
    pub fn validate(&self) -> Result<Task, ScheduleError> {
        match (&self.name, &self.resources, self.profit) {
            (Some(name), Some(resources), Some(profit)) => Ok(Task {
                name: name.clone(),
                resources: resources.clone(),
                profit,
            }),
            _ => Err(ScheduleError::InvalidTaskFormat(self.content.clone())),
        }
    }
}

#[cfg(feature = "python")]
impl<'py> FromPyObject<'py> for RawTask {
    fn extract_bound(ob: &Bound<'py, PyAny>) -> PyResult<Self> {
        let content = ob.str()?.to_string();
        let Ok(dict) = ob.downcast::<PyDict>() else {
            return Ok(Self {
                name: None,
                resources: None,
                profit: None,
                content,
            });
        };
        let name = dict
            .get_item(NAME_KEY)?
            .and_then(|v| v.extract::<String>().ok());
        let resources = dict
            .get_item(RESOURCES_KEY)?
            .and_then(|v| v.extract::<Vec<String>>().ok());
        let profit = dict
            .get_item(PROFIT_KEY)?
            .and_then(|v| v.extract::<f64>().ok());
        Ok(Self {
            name,
            resources,
            profit,
            content,
        })
    }
}

/// A validated task record.
///
/// Profits are expected to be non-negative. Tasks with a non-positive profit
/// are accepted but can never be part of a computed schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    pub name: String,
    pub resources: Vec<String>,
    pub profit: f64,
}

/// How the search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// The search space was exhausted; the schedule is optimal.
    Optimal,
    /// A configured budget ran out; the schedule is the best found so far.
    BudgetExhausted,
}

/// A computed schedule together with search statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleOutcome {
    /// Selected task names, in input order.
    pub task_names: Vec<String>,
    pub total_profit: f64,
    pub status: SearchStatus,
    /// Number of search nodes expanded.
    pub expansions: u64,
}

/// Decode an uploaded task document (a JSON array of task objects).
pub fn parse_task_document(document: &str) -> Result<Vec<RawTask>, ScheduleError> {
    let values: Vec<Value> = serde_json::from_str(document)?;
    Ok(values.iter().map(RawTask::from_json).collect())
}
