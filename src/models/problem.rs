//! Problem instance model.
//!
//! A problem bundles the ordered task list, the number of workers and the
//! objective mode. The search writes its result back onto the problem:
//! each task's `assigned_worker`, the `total_profit` and the `elapsed`
//! solve time.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{Assignment, Task};
use crate::error::SolveError;
use crate::ordering::TaskOrder;
use crate::validation::validate_problem;

/// Largest supported number of tasks (one bit per task in a `u64`).
pub const MAX_TASKS: usize = 64;

/// Largest supported number of workers.
pub const MAX_WORKERS: usize = 10;

/// A job selection problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    /// Tasks, in the order every strategy processes them.
    pub tasks: Vec<Task>,
    /// Number of interchangeable workers.
    pub worker_count: usize,
    /// Maximize the number of performed tasks instead of the profit.
    pub ignore_profit: bool,
    /// Achieved total profit (task count when profits are ignored).
    pub total_profit: i64,
    /// Wall-clock time of the last solve.
    pub elapsed: Option<Duration>,
}

impl Problem {
    /// Creates a validated problem.
    ///
    /// When `ignore_profit` is set every profit is forced to 1, so the total
    /// profit of an assignment equals its task count. Any previous
    /// assignment on the tasks is cleared.
    ///
    /// # Errors
    /// `SolveError::InvalidProblem` listing every range or interval issue.
    pub fn new(
        mut tasks: Vec<Task>,
        worker_count: usize,
        ignore_profit: bool,
    ) -> Result<Self, SolveError> {
        validate_problem(&tasks, worker_count).map_err(SolveError::invalid)?;

        for task in &mut tasks {
            task.assigned_worker = None;
            if ignore_profit {
                task.profit = 1;
            }
        }

        Ok(Self {
            tasks,
            worker_count,
            ignore_profit,
            total_profit: 0,
            elapsed: None,
        })
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Objective contribution of task `index`.
    #[inline]
    pub fn value_of(&self, index: usize) -> i64 {
        if self.ignore_profit {
            1
        } else {
            self.tasks[index].profit
        }
    }

    /// Reorders the tasks and drops any stored assignment.
    pub fn sort_tasks(&mut self, order: TaskOrder) {
        order.sort(&mut self.tasks);
        self.clear_assignment();
    }

    /// Resets every task to unassigned and the total profit to zero.
    pub fn clear_assignment(&mut self) {
        for task in &mut self.tasks {
            task.assigned_worker = None;
        }
        self.total_profit = 0;
    }

    /// Writes a search result onto the tasks.
    pub fn apply(&mut self, assignment: &Assignment, elapsed: Duration) {
        for (task, worker) in self.tasks.iter_mut().zip(assignment.workers()) {
            task.assigned_worker = *worker;
        }
        self.total_profit = assignment.total_value();
        self.elapsed = Some(elapsed);
    }

    /// Indices of the tasks currently assigned to `worker`, in task order.
    pub fn tasks_for_worker(&self, worker: usize) -> Vec<usize> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.assigned_worker == Some(worker))
            .map(|(i, _)| i)
            .collect()
    }

    /// The assignment currently stored on the tasks.
    pub fn current_assignment(&self) -> Assignment {
        Assignment::from_workers(
            self.tasks.iter().map(|t| t.assigned_worker).collect(),
            self.total_profit,
        )
    }
}
