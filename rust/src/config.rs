//! Configuration types for the schedule optimizer.

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Configuration for the branch-and-bound search.
///
/// The default runs the search to proven optimality. Setting either budget
/// lets the search stop early and report the best schedule found so far.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Logging verbosity (0 = silent, 3 = debug), see [`crate::logging`]
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub verbosity: u8,
    /// Maximum number of node expansions before the search gives up
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub max_expansions: Option<u64>,
    /// Wall-clock limit for the search in milliseconds
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub time_limit_ms: Option<u64>,
}

impl SolverConfig {
    /// True when neither budget is set.
    pub fn is_exact(&self) -> bool {
        self.max_expansions.is_none() && self.time_limit_ms.is_none()
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl SolverConfig {
    #[new]
    #[pyo3(signature = (verbosity=0, max_expansions=None, time_limit_ms=None))]
    fn py_new(verbosity: u8, max_expansions: Option<u64>, time_limit_ms: Option<u64>) -> Self {
        Self {
            verbosity,
            max_expansions,
            time_limit_ms,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SolverConfig(verbosity={}, max_expansions={:?}, time_limit_ms={:?})",
            self.verbosity, self.max_expansions, self.time_limit_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_exact() {
        let config = SolverConfig::default();
        assert_eq!(config.verbosity, 0);
        assert!(config.is_exact());
    }

    #[test]
    fn test_budget_makes_config_inexact() {
        let config = SolverConfig {
            max_expansions: Some(10),
            ..Default::default()
        };
        assert!(!config.is_exact());

        let config = SolverConfig {
            time_limit_ms: Some(5),
            ..Default::default()
        };
        assert!(!config.is_exact());
    }
}
