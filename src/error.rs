//! Error types for problem construction and solving.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised before or instead of a search.
///
/// Infeasible candidates and empty results are not errors: the search
/// skips the former and reports the latter as an empty assignment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The problem failed input validation.
    #[error("invalid problem: {}", join_messages(.errors))]
    InvalidProblem {
        /// Every issue found, in detection order.
        errors: Vec<ValidationError>,
    },

    /// An exhaustive strategy was asked to enumerate too many subsets.
    #[error("{strategy} would enumerate 2^{tasks} subsets; the limit is {limit} tasks")]
    TooManyTasks {
        /// Strategy name.
        strategy: &'static str,
        /// Number of tasks in the problem.
        tasks: usize,
        /// Configured task limit.
        limit: usize,
    },

    /// A count-only heuristic was run on a profit-aware problem.
    #[error("{strategy} only maximizes the task count; set ignore_profit to use it")]
    ProfitsNotIgnored {
        /// Strategy name.
        strategy: &'static str,
    },
}

impl SolveError {
    pub(crate) fn invalid(errors: Vec<ValidationError>) -> Self {
        Self::InvalidProblem { errors }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_problem_message_joins_errors() {
        let err = SolveError::invalid(vec![
            ValidationError::new(ValidationErrorKind::TaskCountOutOfRange, "no tasks"),
            ValidationError::new(ValidationErrorKind::WorkerCountOutOfRange, "no workers"),
        ]);
        assert_eq!(err.to_string(), "invalid problem: no tasks; no workers");
    }

    #[test]
    fn test_too_many_tasks_message() {
        let err = SolveError::TooManyTasks {
            strategy: "exact",
            tasks: 40,
            limit: 30,
        };
        assert_eq!(
            err.to_string(),
            "exact would enumerate 2^40 subsets; the limit is 30 tasks"
        );
    }
}
