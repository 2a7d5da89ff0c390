//! Solver configuration.
//!
//! Every field has a default, so a configuration deserializes from a
//! partial document:
//!
//! ```
//! use u_jobselect::config::SolverConfig;
//! use u_jobselect::search::Strategy;
//!
//! let config = SolverConfig::default()
//!     .with_strategy(Strategy::Recursive)
//!     .with_exact_task_limit(Some(20));
//! assert_eq!(config.exact_task_limit, Some(20));
//! ```

use serde::{Deserialize, Serialize};

use crate::search::Strategy;

/// Default cap on the task count accepted by the exhaustive strategies.
///
/// 2^30 candidates already take minutes on a desktop machine.
pub const DEFAULT_EXACT_TASK_LIMIT: usize = 30;

/// Strategy selection and search limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Strategy to run.
    pub strategy: Strategy,
    /// Largest task count the exhaustive strategies accept.
    /// `None` = no limit beyond the model's 64 tasks.
    pub exact_task_limit: Option<usize>,
}

impl SolverConfig {
    /// Creates the default configuration (exact search, default limit).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the exhaustive task limit.
    pub fn with_exact_task_limit(mut self, limit: Option<usize>) -> Self {
        self.exact_task_limit = limit;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Exact,
            exact_task_limit: Some(DEFAULT_EXACT_TASK_LIMIT),
        }
    }
}
