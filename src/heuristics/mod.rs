//! Polynomial greedy heuristics for the task-count objective.
//!
//! Every heuristic builds one chain of non-overlapping tasks per worker,
//! worker by worker, and commits it before moving on to the next worker.
//! None of them is optimal, and all of them refuse to run with profits
//! enabled.
//!
//! | Heuristic | Per-worker step | Complexity |
//! |-----------|-----------------|------------|
//! | [`ForwardBackwardGreedy`] | best first task, forward then backward scan | O(P * T^2) |
//! | [`CompatibilityGreedy`] | best pivot over the compatibility matrix | O(P * T^3) |
//! | [`ReplacementGreedy`] | first-fit, then one replacement sweep | O(P * T^2) |
//!
//! The heuristics process tasks in the problem's stored order. Results
//! are always valid; they are best when tasks are sorted by start date.

mod compatibility;
mod forward_backward;
mod replacement;

pub use compatibility::{CompatibilityGreedy, CompatibilityMatrix};
pub use forward_backward::ForwardBackwardGreedy;
pub use replacement::ReplacementGreedy;

use crate::error::SolveError;
use crate::models::Problem;
use crate::validation::validate_problem;

/// Checks that `problem` is valid and runs in count mode.
pub(crate) fn require_count_mode(
    strategy: &'static str,
    problem: &Problem,
) -> Result<(), SolveError> {
    validate_problem(&problem.tasks, problem.worker_count).map_err(SolveError::invalid)?;
    if !problem.ignore_profit {
        return Err(SolveError::ProfitsNotIgnored { strategy });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    #[test]
    fn test_require_count_mode() {
        let tasks = vec![Task::new(0, 1, 5)];
        let count = Problem::new(tasks.clone(), 1, true).unwrap();
        assert!(require_count_mode("any", &count).is_ok());

        let profit = Problem::new(tasks, 1, false).unwrap();
        assert_eq!(
            require_count_mode("any", &profit),
            Err(SolveError::ProfitsNotIgnored { strategy: "any" })
        );
    }
}
