//! Assignment search strategies and the solve driver.
//!
//! Every strategy implements [`AssignmentSolver`]: it reads a problem and
//! returns an [`Assignment`]. [`solve`] validates the problem, runs the
//! strategy selected by a [`SolverConfig`], and writes the result back
//! onto the problem's tasks.
//!
//! # Strategies
//!
//! | Strategy | Kind | Modes | Guarantee |
//! |----------|------|-------|-----------|
//! | `Exact` | bitmask enumeration | profit, count | optimal under the packing policy |
//! | `Recursive` | tree enumeration | profit, count | same, with a cardinality cut |
//! | `ForwardBackward` | greedy | count | none |
//! | `Compatibility` | greedy | count | none |
//! | `Replacement` | greedy + one local sweep | count | none |
//!
//! # Usage
//!
//! ```
//! use u_jobselect::config::SolverConfig;
//! use u_jobselect::models::{Problem, Task};
//! use u_jobselect::search::{self, Strategy};
//!
//! let mut problem = Problem::new(
//!     vec![Task::new(0, 2, 10), Task::new(1, 3, 5), Task::new(3, 5, 8)],
//!     2,
//!     false,
//! )
//! .unwrap();
//! let config = SolverConfig::new().with_strategy(Strategy::Exact);
//! let assignment = search::solve(&mut problem, &config).unwrap();
//! assert_eq!(assignment.total_value(), 23);
//! assert_eq!(problem.total_profit, 23);
//! ```

mod best;
mod exact;
mod recursive;

pub use best::{BestCandidate, SearchStats};
pub use exact::ExactSearch;
pub use recursive::RecursiveSearch;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::time::Instant;
use tracing::info;

use crate::config::SolverConfig;
use crate::error::SolveError;
use crate::heuristics::{CompatibilityGreedy, ForwardBackwardGreedy, ReplacementGreedy};
use crate::models::{Assignment, Problem};
use crate::validation::validate_problem;

/// A strategy deciding which tasks to perform and by whom.
pub trait AssignmentSolver: Debug {
    /// Strategy name (e.g., "exact").
    fn name(&self) -> &'static str;

    /// Whether the strategy optimizes profits, not only task counts.
    fn supports_profit(&self) -> bool {
        true
    }

    /// Computes an assignment for `problem` without modifying it.
    fn solve(&self, problem: &Problem) -> Result<Assignment, SolveError>;
}

/// The closed set of built-in strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Bitmask enumeration of every subset.
    #[default]
    Exact,
    /// Binary-recursion enumeration with a cardinality cut.
    Recursive,
    /// Per-worker forward/backward greedy pass.
    ForwardBackward,
    /// Greedy chains over the compatibility matrix.
    Compatibility,
    /// First-fit followed by one local replacement sweep.
    Replacement,
}

impl Strategy {
    /// Every strategy, exhaustive ones first.
    pub const ALL: [Strategy; 5] = [
        Strategy::Exact,
        Strategy::Recursive,
        Strategy::ForwardBackward,
        Strategy::Compatibility,
        Strategy::Replacement,
    ];

    /// Name reported by the strategy's solver.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Exact => "exact",
            Strategy::Recursive => "recursive",
            Strategy::ForwardBackward => "forward-backward",
            Strategy::Compatibility => "compatibility",
            Strategy::Replacement => "replacement",
        }
    }

    /// Whether the strategy enumerates every subset.
    pub fn is_exhaustive(&self) -> bool {
        matches!(self, Strategy::Exact | Strategy::Recursive)
    }

    /// Whether the strategy runs with profits enabled.
    pub fn supports_profit(&self) -> bool {
        self.is_exhaustive()
    }

    /// Builds the solver, applying the limits in `config`.
    pub fn build(&self, config: &SolverConfig) -> Box<dyn AssignmentSolver> {
        match self {
            Strategy::Exact => {
                Box::new(ExactSearch::new().with_task_limit(config.exact_task_limit))
            }
            Strategy::Recursive => {
                Box::new(RecursiveSearch::new().with_task_limit(config.exact_task_limit))
            }
            Strategy::ForwardBackward => Box::new(ForwardBackwardGreedy),
            Strategy::Compatibility => Box::new(CompatibilityGreedy),
            Strategy::Replacement => Box::new(ReplacementGreedy),
        }
    }
}

/// Solves `problem` with the strategy selected by `config`.
///
/// On success every task's `assigned_worker`, the problem's
/// `total_profit` and its `elapsed` time hold the result, which is also
/// returned. On error the problem is left untouched.
///
/// # Errors
/// - `InvalidProblem` if the problem's sizes or tasks are out of range.
/// - `TooManyTasks` if an exhaustive strategy exceeds the task limit.
/// - `ProfitsNotIgnored` if a heuristic is used with profits enabled.
pub fn solve(problem: &mut Problem, config: &SolverConfig) -> Result<Assignment, SolveError> {
    let solver = config.strategy.build(config);
    solve_with(problem, solver.as_ref())
}

/// Solves `problem` with any solver, e.g. a search using a custom
/// packing policy. Same contract as [`solve`].
#[tracing::instrument(
    level = "info",
    name = "solve",
    skip_all,
    fields(
        strategy = solver.name(),
        tasks = problem.task_count(),
        workers = problem.worker_count,
        ignore_profit = problem.ignore_profit,
    )
)]
pub fn solve_with(
    problem: &mut Problem,
    solver: &dyn AssignmentSolver,
) -> Result<Assignment, SolveError> {
    validate_problem(&problem.tasks, problem.worker_count).map_err(SolveError::invalid)?;
    if !problem.ignore_profit && !solver.supports_profit() {
        return Err(SolveError::ProfitsNotIgnored {
            strategy: solver.name(),
        });
    }

    let started = Instant::now();
    let assignment = solver.solve(problem)?;
    let elapsed = started.elapsed();

    problem.apply(&assignment, elapsed);
    info!(
        total = assignment.total_value(),
        assigned = assignment.assigned_count(),
        elapsed_us = elapsed.as_micros() as u64,
        "solved"
    );
    Ok(assignment)
}

/// Rejects problems an exhaustive strategy cannot or should not enumerate.
pub(crate) fn check_enumerable(
    strategy: &'static str,
    problem: &Problem,
    task_limit: Option<usize>,
) -> Result<(), SolveError> {
    validate_problem(&problem.tasks, problem.worker_count).map_err(SolveError::invalid)?;
    if let Some(limit) = task_limit {
        if problem.task_count() > limit {
            return Err(SolveError::TooManyTasks {
                strategy,
                tasks: problem.task_count(),
                limit,
            });
        }
    }
    Ok(())
}
