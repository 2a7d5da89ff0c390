//! Exhaustive search by binary recursion.
//!
//! # Algorithm
//!
//! Depth-first over a binary tree of depth T: at depth `d` task `d` is
//! first excluded, then included. Leaves are inclusion vectors and are
//! packed like in the bitmask search.
//!
//! When `T >= P`, only vectors including at least `P` tasks are packed,
//! and a subtree is cut as soon as it can no longer reach `P` included
//! tasks. Otherwise every vector is packed.
//!
//! # Complexity
//! O(2^T * P * T) time, recursion depth T <= 64.

use tracing::debug;

use super::{check_enumerable, AssignmentSolver, BestCandidate, SearchStats};
use crate::error::SolveError;
use crate::models::{Assignment, Problem};
use crate::packing::{FirstFitPacking, InclusionVector, PackingPolicy, PackingScratch};

/// Tree-form exhaustive search with a minimum-cardinality cut.
#[derive(Debug, Clone)]
pub struct RecursiveSearch<P = FirstFitPacking> {
    policy: P,
    task_limit: Option<usize>,
}

impl RecursiveSearch<FirstFitPacking> {
    /// Creates a first-fit recursive search without a task limit.
    pub fn new() -> Self {
        Self {
            policy: FirstFitPacking,
            task_limit: None,
        }
    }
}

impl Default for RecursiveSearch<FirstFitPacking> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PackingPolicy> RecursiveSearch<P> {
    /// Replaces the packing policy.
    pub fn with_policy<Q: PackingPolicy>(self, policy: Q) -> RecursiveSearch<Q> {
        RecursiveSearch {
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

impl<P: PackingPolicy> AssignmentSolver for RecursiveSearch<P> {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn solve(&self, problem: &Problem) -> Result<Assignment, SolveError> {
        check_enumerable(self.name(), problem, self.task_limit)?;

        let task_count = problem.task_count();
        let min_included = if task_count >= problem.worker_count {
            problem.worker_count
        } else {
            0
        };

        let mut walk = Walk {
            problem,
            policy: &self.policy,
            min_included,
            scratch: PackingScratch::for_problem(problem),
            best: BestCandidate::new(task_count),
            stats: SearchStats::default(),
        };
        walk.descend(0, InclusionVector::empty(task_count));

        debug!(
            policy = self.policy.name(),
            min_included,
            evaluated = walk.stats.evaluated,
            feasible = walk.stats.feasible,
            improvements = walk.best.improvements(),
            best = walk.best.value(),
            "recursive enumeration finished"
        );
        Ok(walk.best.into_assignment())
    }
}

/// State of one recursive run.
struct Walk<'a, P> {
    problem: &'a Problem,
    policy: &'a P,
    min_included: usize,
    scratch: PackingScratch,
    best: BestCandidate,
    stats: SearchStats,
}

impl<P: PackingPolicy> Walk<'_, P> {
    fn descend(&mut self, depth: usize, inclusion: InclusionVector) {
        let remaining = inclusion.len() - depth;
        if inclusion.included_count() + remaining < self.min_included {
            return;
        }

        if depth == inclusion.len() {
            let outcome = self.policy.pack(self.problem, inclusion, &mut self.scratch);
            self.stats.record(outcome);
            if let Some(value) = outcome.value() {
                self.best.offer(value, inclusion, self.scratch.assigned());
            }
            return;
        }

        self.descend(depth + 1, inclusion);
        self.descend(depth + 1, inclusion.with(depth));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use crate::packing::PackOutcome;
    use crate::search::ExactSearch;
    use std::sync::Mutex;

    fn sample(workers: usize) -> Problem {
        Problem::new(
            vec![Task::new(0, 2, 10), Task::new(1, 3, 5), Task::new(3, 5, 8)],
            workers,
            false,
        )
        .unwrap()
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
    fn test_matches_exact_on_sample() {
        for workers in 1..=3 {
            let problem = sample(workers);
            let exact = ExactSearch::new().solve(&problem).unwrap();
            let recursive = RecursiveSearch::new().solve(&problem).unwrap();
            assert_eq!(recursive.total_value(), exact.total_value());
            assert!(recursive.is_valid(&problem));
        }
    }

    #[test]
    fn test_single_worker_optimum() {
        let a = RecursiveSearch::new().solve(&sample(1)).unwrap();
        assert_eq!(a.workers(), &[Some(0), None, Some(0)]);
        assert_eq!(a.total_value(), 18);
    }

    #[test]
    fn test_traversal_order_excludes_first() {
        // Three tasks, three workers: only the full vector has >= 3 tasks.
        let search = RecursiveSearch::new().with_policy(RecordingPacking::default());
        search.solve(&sample(3)).unwrap();
        assert_eq!(*search.policy().seen.lock().unwrap(), vec![0b111]);

        // One worker: every non-empty vector, depth-first, exclude first.
        let search = RecursiveSearch::new().with_policy(RecordingPacking::default());
        search.solve(&sample(1)).unwrap();
        assert_eq!(
            *search.policy().seen.lock().unwrap(),
            vec![0b100, 0b010, 0b110, 0b001, 0b101, 0b011, 0b111]
        );
    }

    #[test]
    fn test_no_cut_with_more_workers_than_tasks() {
        let problem = Problem::new(vec![Task::new(0, 1, 3), Task::new(0, 1, 4)], 4, false).unwrap();
        let search = RecursiveSearch::new().with_policy(RecordingPacking::default());
        let a = search.solve(&problem).unwrap();
        assert_eq!(search.policy().seen.lock().unwrap().len(), 4);
        assert_eq!(a.total_value(), 7);
    }

    #[test]
    fn test_three_way_overlap_on_two_workers() {
        let problem = Problem::new(
            vec![Task::new(0, 5, 1), Task::new(1, 6, 1), Task::new(2, 7, 1)],
            2,
            false,
        )
        .unwrap();
        // The full vector needs three workers; the first pair reached is {1, 2}.
        let a = RecursiveSearch::new().solve(&problem).unwrap();
        assert_eq!(a.total_value(), 2);
        assert_eq!(a.workers(), &[None, Some(0), Some(1)]);
    }

    #[test]
    fn test_task_limit() {
        let problem = Problem::new(vec![Task::new(0, 1, 1); 3], 1, false).unwrap();
        let err = RecursiveSearch::new()
            .with_task_limit(Some(2))
            .solve(&problem)
            .unwrap_err();
        assert!(matches!(err, SolveError::TooManyTasks { strategy: "recursive", .. }));
    }
}
