//! Exhaustive bitmask search.
//!
//! # Algorithm
//!
//! 1. For every counter in `0..=2^T - 1`, task 0 being the most
//!    significant digit:
//! 2. Pack the inclusion vector with the packing policy.
//! 3. Keep the feasible candidate with the strictly greatest value.
//!
//! Optimal with respect to the packing policy: a subset that the policy
//! rejects is never reconsidered with another worker arrangement.
//!
//! # Complexity
//! O(2^T * P * T) time, O(T + P) memory.

use tracing::debug;

use super::{check_enumerable, AssignmentSolver, BestCandidate, SearchStats};
use crate::error::SolveError;
use crate::models::{Assignment, Problem};
use crate::packing::{FirstFitPacking, InclusionVector, PackingPolicy, PackingScratch};

/// Exhaustive search over all inclusion vectors in increasing counter order.
///
/// Visits subsets in the same order as [`RecursiveSearch`](super::RecursiveSearch),
/// so both break ties the same way.
///
/// # Example
///
/// ```
/// use u_jobselect::models::{Problem, Task};
/// use u_jobselect::search::{AssignmentSolver, ExactSearch};
///
/// let problem = Problem::new(
///     vec![Task::new(0, 2, 10), Task::new(1, 3, 5), Task::new(3, 5, 8)],
///     1,
///     false,
/// )
/// .unwrap();
/// let assignment = ExactSearch::new().solve(&problem).unwrap();
/// assert_eq!(assignment.total_value(), 18);
/// ```
#[derive(Debug, Clone)]
pub struct ExactSearch<P = FirstFitPacking> {
    policy: P,
    task_limit: Option<usize>,
}

impl ExactSearch<FirstFitPacking> {
    /// Creates a first-fit exact search without a task limit.
    pub fn new() -> Self {
        Self {
            policy: FirstFitPacking,
            task_limit: None,
        }
    }
}

impl Default for ExactSearch<FirstFitPacking> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PackingPolicy> ExactSearch<P> {
    /// Replaces the packing policy.
    pub fn with_policy<Q: PackingPolicy>(self, policy: Q) -> ExactSearch<Q> {
        ExactSearch {
            policy,
            task_limit: self.task_limit,
        }
    }

    /// Rejects problems with more than `limit` tasks.
    pub fn with_task_limit(mut self, limit: Option<usize>) -> Self {
        self.task_limit = limit;
        self
    }

    /// The packing policy in use.
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<P: PackingPolicy> AssignmentSolver for ExactSearch<P> {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn solve(&self, problem: &Problem) -> Result<Assignment, SolveError> {
        check_enumerable(self.name(), problem, self.task_limit)?;

        let task_count = problem.task_count();
        let mut scratch = PackingScratch::for_problem(problem);
        let mut best = BestCandidate::new(task_count);
        let mut stats = SearchStats::default();

        for counter in 0..=InclusionVector::full_mask(task_count) {
            let inclusion = InclusionVector::from_counter(counter, task_count);
            let outcome = self.policy.pack(problem, inclusion, &mut scratch);
            stats.record(outcome);
            if let Some(value) = outcome.value() {
                best.offer(value, inclusion, scratch.assigned());
            }
        }

        debug!(
            policy = self.policy.name(),
            evaluated = stats.evaluated,
            feasible = stats.feasible,
            improvements = best.improvements(),
            best = best.value(),
            "exact enumeration finished"
        );
        Ok(best.into_assignment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use crate::packing::PackOutcome;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    fn sample(workers: usize, ignore_profit: bool) -> Problem {
        Problem::new(
            vec![Task::new(0, 2, 10), Task::new(1, 3, 5), Task::new(3, 5, 8)],
            workers,
            ignore_profit,
        )
        .unwrap()
    }

    #[derive(Debug, Default)]
    struct CountingPacking {
        calls: AtomicU64,
    }

    impl PackingPolicy for CountingPacking {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn pack(
            &self,
            problem: &Problem,
            inclusion: InclusionVector,
            scratch: &mut PackingScratch,
        ) -> PackOutcome {
            self.calls.fetch_add(1, Ordering::Relaxed);
            FirstFitPacking.pack(problem, inclusion, scratch)
        }
    }

    #[derive(Debug, Default)]
    struct RecordingPacking {
        seen: Mutex<Vec<u64>>,
    }

    impl PackingPolicy for RecordingPacking {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn pack(
            &self,
            problem: &Problem,
            inclusion: InclusionVector,
            scratch: &mut PackingScratch,
        ) -> PackOutcome {
            self.seen.lock().unwrap().push(inclusion.bits());
            FirstFitPacking.pack(problem, inclusion, scratch)
        }
    }

    #[test]
    fn test_single_worker_optimum() {
        let a = ExactSearch::new().solve(&sample(1, false)).unwrap();
        assert_eq!(a.workers(), &[Some(0), None, Some(0)]);
        assert_eq!(a.total_value(), 18);
    }

    #[test]
    fn test_two_workers_take_everything() {
        let problem = sample(2, false);
        let a = ExactSearch::new().solve(&problem).unwrap();
        assert_eq!(a.total_value(), 23);
        assert_eq!(a.workers(), &[Some(0), Some(1), Some(0)]);
        assert!(a.is_valid(&problem));
    }

    #[test]
    fn test_ignore_profit_counts() {
        let a = ExactSearch::new().solve(&sample(1, true)).unwrap();
        assert_eq!(a.total_value(), 2);
        assert_eq!(a.assigned_count(), 2);
    }

    #[test]
    fn test_first_found_wins_ties() {
        // Tasks 0 and 1 overlap and have the same profit; counter 0b01
        // (task 1 only) comes before 0b10 (task 0 only).
        let problem = Problem::new(vec![Task::new(0, 4, 7), Task::new(1, 5, 7)], 1, false).unwrap();
        let a = ExactSearch::new().solve(&problem).unwrap();
        assert_eq!(a.workers(), &[None, Some(0)]);
    }

    #[test]
    fn test_visits_vectors_in_counter_order() {
        let search = ExactSearch::new().with_policy(RecordingPacking::default());
        search.solve(&sample(1, false)).unwrap();
        assert_eq!(
            *search.policy().seen.lock().unwrap(),
            vec![0b000, 0b100, 0b010, 0b110, 0b001, 0b101, 0b011, 0b111]
        );
    }

    #[test]
    fn test_single_task_single_worker() {
        let problem = Problem::new(vec![Task::new(3, 9, 4)], 1, false).unwrap();
        let a = ExactSearch::new().solve(&problem).unwrap();
        assert_eq!(a.workers(), &[Some(0)]);
        assert_eq!(a.total_value(), 4);
    }

    #[test]
    fn test_enumerates_every_vector() {
        let search = ExactSearch::new().with_policy(CountingPacking::default());
        search.solve(&sample(2, false)).unwrap();
        assert_eq!(search.policy().calls.load(Ordering::Relaxed), 8);
    }

    #[test]
    fn test_task_limit() {
        let problem = Problem::new(vec![Task::new(0, 1, 1); 5], 1, false).unwrap();
        let err = ExactSearch::new()
            .with_task_limit(Some(4))
            .solve(&problem)
            .unwrap_err();
        assert_eq!(
            err,
            SolveError::TooManyTasks {
                strategy: "exact",
                tasks: 5,
                limit: 4
            }
        );
        assert!(ExactSearch::new().with_task_limit(Some(5)).solve(&problem).is_ok());
    }
}
