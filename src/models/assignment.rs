//! Assignment (solution) model.
//!
//! An assignment maps every task to a worker or leaves it undone, and
//! carries the objective value it achieves. It can be checked against a
//! problem for overlapping tasks and inconsistent totals.

use serde::{Deserialize, Serialize};

use super::Problem;

/// A per-task worker assignment with its objective value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    workers: Vec<Option<usize>>,
    total_value: i64,
}

/// A broken invariant in an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Offending task index.
    pub task: usize,
    /// Human-readable description.
    pub message: String,
}

/// Classification of assignment violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Two tasks on the same worker overlap.
    Overlap,
    /// Worker index is not below the problem's worker count.
    UnknownWorker,
    /// The assignment covers a different number of tasks than the problem.
    LengthMismatch,
    /// The stored total differs from the sum over assigned tasks.
    ValueMismatch,
}

impl Assignment {
    /// Creates an assignment with every task unassigned and value 0.
    pub fn unassigned(task_count: usize) -> Self {
        Self {
            workers: vec![None; task_count],
            total_value: 0,
        }
    }

    /// Creates an assignment from per-task workers and a precomputed value.
    pub fn from_workers(workers: Vec<Option<usize>>, total_value: i64) -> Self {
        Self {
            workers,
            total_value,
        }
    }

    /// Builds an assignment from per-worker task chains.
    ///
    /// `chains[w]` lists the task indices performed by worker `w`. The
    /// value is recomputed from the problem's objective.
    pub fn from_chains(problem: &Problem, chains: &[Vec<usize>]) -> Self {
        let mut workers = vec![None; problem.task_count()];
        let mut total_value = 0;
        for (worker, chain) in chains.iter().enumerate() {
            for &task in chain {
                workers[task] = Some(worker);
                total_value += problem.value_of(task);
            }
        }
        Self {
            workers,
            total_value,
        }
    }

    /// Per-task workers, indexed like the problem's tasks.
    pub fn workers(&self) -> &[Option<usize>] {
        &self.workers
    }

    /// Worker of task `task`, if assigned.
    pub fn worker_of(&self, task: usize) -> Option<usize> {
        self.workers.get(task).copied().flatten()
    }

    /// Achieved profit, or task count when profits are ignored.
    pub fn total_value(&self) -> i64 {
        self.total_value
    }

    /// Number of performed tasks.
    pub fn assigned_count(&self) -> usize {
        self.workers.iter().filter(|w| w.is_some()).count()
    }

    /// Task indices performed by `worker`, in task order.
    pub fn tasks_for_worker(&self, worker: usize) -> Vec<usize> {
        self.workers
            .iter()
            .enumerate()
            .filter(|(_, w)| **w == Some(worker))
            .map(|(i, _)| i)
            .collect()
    }

    /// Checks the assignment against `problem`.
    ///
    /// Detects unknown workers, overlapping tasks on one worker and a
    /// total that disagrees with the assigned tasks. Returns an empty
    /// vector when the assignment is sound.
    pub fn violations(&self, problem: &Problem) -> Vec<Violation> {
        let mut violations = Vec::new();

        if self.workers.len() != problem.task_count() {
            violations.push(Violation::new(
                ViolationType::LengthMismatch,
                0,
                format!(
                    "assignment covers {} tasks, problem has {}",
                    self.workers.len(),
                    problem.task_count()
                ),
            ));
            return violations;
        }

        for (i, worker) in self.workers.iter().enumerate() {
            if let Some(w) = worker {
                if *w >= problem.worker_count {
                    violations.push(Violation::new(
                        ViolationType::UnknownWorker,
                        i,
                        format!(
                            "task {i} assigned to worker {w}, only {} workers",
                            problem.worker_count
                        ),
                    ));
                }
            }
        }

        for i in 0..self.workers.len() {
            let Some(wi) = self.workers[i] else { continue };
            for j in (i + 1)..self.workers.len() {
                if self.workers[j] == Some(wi) && problem.tasks[i].overlaps(&problem.tasks[j]) {
                    violations.push(Violation::new(
                        ViolationType::Overlap,
                        j,
                        format!("tasks {i} and {j} overlap on worker {wi}"),
                    ));
                }
            }
        }

        let expected: i64 = (0..self.workers.len())
            .filter(|&i| self.workers[i].is_some())
            .map(|i| problem.value_of(i))
            .sum();
        if expected != self.total_value {
            violations.push(Violation::new(
                ViolationType::ValueMismatch,
                0,
                format!(
                    "stored total {} differs from assigned total {expected}",
                    self.total_value
                ),
            ));
        }

        violations
    }

    /// Whether `violations` finds nothing.
    pub fn is_valid(&self, problem: &Problem) -> bool {
        self.violations(problem).is_empty()
    }
}

impl Violation {
    fn new(violation_type: ViolationType, task: usize, message: impl Into<String>) -> Self {
        Self {
            violation_type,
            task,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn sample_problem(workers: usize) -> Problem {
        Problem::new(
            vec![Task::new(0, 2, 10), Task::new(1, 3, 5), Task::new(3, 5, 8)],
            workers,
            false,
        )
        .unwrap()
    }

    #[test]
    fn test_unassigned() {
        let a = Assignment::unassigned(3);
        assert_eq!(a.assigned_count(), 0);
        assert_eq!(a.total_value(), 0);
        assert_eq!(a.worker_of(1), None);
        assert!(a.is_valid(&sample_problem(1)));
    }

    #[test]
    fn test_from_chains() {
        let problem = sample_problem(2);
        let a = Assignment::from_chains(&problem, &[vec![0, 2], vec![1]]);
        assert_eq!(a.workers(), &[Some(0), Some(1), Some(0)]);
        assert_eq!(a.total_value(), 23);
        assert_eq!(a.tasks_for_worker(0), vec![0, 2]);
        assert_eq!(a.tasks_for_worker(1), vec![1]);
        assert!(a.is_valid(&problem));
    }

    #[test]
    fn test_overlap_detected() {
        let problem = sample_problem(1);
        let a = Assignment::from_workers(vec![Some(0), Some(0), None], 15);
        let violations = a.violations(&problem);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].violation_type, ViolationType::Overlap);
        assert_eq!(violations[0].task, 1);
    }

    #[test]
    fn test_unknown_worker_and_value_mismatch() {
        let problem = sample_problem(1);
        let a = Assignment::from_workers(vec![Some(3), None, None], 99);
        let kinds: Vec<ViolationType> = a
            .violations(&problem)
            .into_iter()
            .map(|v| v.violation_type)
            .collect();
        assert!(kinds.contains(&ViolationType::UnknownWorker));
        assert!(kinds.contains(&ViolationType::ValueMismatch));
    }

    #[test]
    fn test_length_mismatch() {
        let problem = sample_problem(1);
        let a = Assignment::unassigned(2);
        let violations = a.violations(&problem);
        assert_eq!(violations[0].violation_type, ViolationType::LengthMismatch);
    }

    #[test]
    fn test_worker_of_out_of_range() {
        let a = Assignment::unassigned(1);
        assert_eq!(a.worker_of(5), None);
    }
}
