//! Sequential assignment with one local replacement sweep.
//!
//! # Algorithm
//!
//! For each worker in index order:
//!
//! 1. First-fit: scan the unassigned tasks in order, accepting each one
//!    that starts strictly after the worker becomes free.
//! 2. Sweep the chain once. At each position, every unassigned task that
//!    is strictly longer than the task first-fit placed there and fits
//!    between the neighbouring chain tasks replaces the current one, which
//!    returns to the pool. The last such task in order keeps the slot.
//!
//! The sweep keeps the task count and lengthens the chain's covered time,
//! leaving shorter tasks to later workers. It runs once, with no fixed
//! point iteration.
//!
//! # Complexity
//! O(P * T^2) time, O(T) memory.

use tracing::debug;

use super::require_count_mode;
use crate::error::SolveError;
use crate::models::{Assignment, Problem, Task, Worker};
use crate::search::AssignmentSolver;

/// First-fit per worker followed by longer-task replacement.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplacementGreedy;

impl ReplacementGreedy {
    /// First-fit chain over the tasks not yet taken.
    fn first_fit(tasks: &[Task], taken: &mut [bool]) -> Vec<usize> {
        let mut worker = Worker::idle();
        let mut chain = Vec::new();
        for (k, task) in tasks.iter().enumerate() {
            if !taken[k] && worker.can_take(task) {
                worker.take(task);
                taken[k] = true;
                chain.push(k);
            }
        }
        chain
    }

    /// One replacement pass over `chain`. Returns the number of swaps.
    ///
    /// `chain` must be in chronological order.
    fn sweep(tasks: &[Task], chain: &mut [usize], taken: &mut [bool]) -> usize {
        let mut swaps = 0;
        for pos in 0..chain.len() {
            let after = pos.checked_sub(1).map(|prev| tasks[chain[prev]].end);
            let before = chain.get(pos + 1).map(|&next| tasks[next].start);
            let baseline = tasks[chain[pos]].duration();

            for (k, candidate) in tasks.iter().enumerate() {
                if taken[k] || candidate.duration() <= baseline {
                    continue;
                }
                let fits = after.map_or(true, |a| candidate.start > a)
                    && before.map_or(true, |b| candidate.end < b);
                if fits {
                    taken[chain[pos]] = false;
                    taken[k] = true;
                    chain[pos] = k;
                    swaps += 1;
                }
            }
        }
        swaps
    }
}

impl AssignmentSolver for ReplacementGreedy {
    fn name(&self) -> &'static str {
        "replacement"
    }

    fn supports_profit(&self) -> bool {
        false
    }

    fn solve(&self, problem: &Problem) -> Result<Assignment, SolveError> {
        require_count_mode(self.name(), problem)?;

        let tasks = &problem.tasks;
        let mut taken = vec![false; tasks.len()];
        let mut chains = Vec::with_capacity(problem.worker_count);

        for worker in 0..problem.worker_count {
            let mut chain = Self::first_fit(tasks, &mut taken);
            let swaps = Self::sweep(tasks, &mut chain, &mut taken);
            debug!(worker, swaps, tasks = ?chain, "worker chain committed");
            chains.push(chain);
        }

        Ok(Assignment::from_chains(problem, &chains))
    }
}
