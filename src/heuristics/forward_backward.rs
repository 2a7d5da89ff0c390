//! Forward/backward single-pass greedy.
//!
//! # Algorithm
//!
//! For each worker in index order, and for each candidate first task `t`:
//!
//! 1. Scan forward from `t`, accepting every available task that starts
//!    strictly after the worker becomes free.
//! 2. Scan backward from `t - 1` down to `0`, accepting every available
//!    task that ends strictly before the earliest reserved start.
//!
//! The first `t` giving strictly the most tasks wins. Its chain is
//! committed and its tasks become unavailable to later workers.
//!
//! # Complexity
//! O(P * T^2) time, O(T) memory.

use tracing::debug;

use super::require_count_mode;
use crate::error::SolveError;
use crate::models::{Assignment, Problem, Task, Worker};
use crate::search::AssignmentSolver;

/// Greedy chain builder trying every first task per worker.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardBackwardGreedy;

impl ForwardBackwardGreedy {
    /// Builds the chain of one worker starting at `first`.
    ///
    /// Returned indices are sorted in task order.
    fn chain_from(tasks: &[Task], available: &[bool], first: usize) -> Vec<usize> {
        let mut chain = Vec::new();

        let mut worker = Worker::idle();
        for (k, task) in tasks.iter().enumerate().skip(first) {
            if available[k] && worker.can_take(task) {
                worker.take(task);
                chain.push(k);
            }
        }

        let mut floor = chain.iter().map(|&k| tasks[k].start).min();
        for k in (0..first).rev() {
            if available[k] && floor.map_or(true, |f| tasks[k].end < f) {
                floor = Some(tasks[k].start);
                chain.push(k);
            }
        }

        chain.sort_unstable();
        chain
    }
}

impl AssignmentSolver for ForwardBackwardGreedy {
    fn name(&self) -> &'static str {
        "forward-backward"
    }

    fn supports_profit(&self) -> bool {
        false
    }

    fn solve(&self, problem: &Problem) -> Result<Assignment, SolveError> {
        require_count_mode(self.name(), problem)?;

        let tasks = &problem.tasks;
        let mut available = vec![true; tasks.len()];
        let mut chains = Vec::with_capacity(problem.worker_count);

        for worker in 0..problem.worker_count {
            let mut best: Vec<usize> = Vec::new();
            let mut best_first = 0;
            for first in 0..tasks.len() {
                let chain = Self::chain_from(tasks, &available, first);
                if chain.len() > best.len() {
                    best = chain;
                    best_first = first;
                }
            }

            for &k in &best {
                available[k] = false;
            }
            debug!(worker, first = best_first, tasks = ?best, "worker chain committed");
            chains.push(best);
        }

        Ok(Assignment::from_chains(problem, &chains))
    }
}
