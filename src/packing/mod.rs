//! Feasibility and packing evaluation.
//!
//! Given an inclusion vector (the tasks a candidate must perform), a
//! packing policy decides which worker performs each included task, or
//! reports that some included task cannot be placed. Every exhaustive
//! strategy evaluates its candidates through this module.
//!
//! # Policy
//!
//! The only policy shipped is [`FirstFitPacking`]: workers are filled one
//! at a time in index order, each scanning the tasks in the problem's
//! order. It is deterministic but not complete: a subset that could be
//! packed another way may still be rejected. The policy is a type
//! parameter of the searches so a matching-based policy can replace it.

mod first_fit;
mod inclusion;

pub use first_fit::FirstFitPacking;
pub use inclusion::InclusionVector;

use std::fmt::Debug;

use crate::models::{Assignment, Problem, Worker};

/// Result of packing one inclusion vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackOutcome {
    /// Every included task was placed; `value` is the achieved objective.
    Feasible {
        /// Sum of the placed tasks' values.
        value: i64,
    },
    /// At least one included task found no worker.
    Infeasible,
}

impl PackOutcome {
    /// Whether the candidate is feasible.
    pub fn is_feasible(&self) -> bool {
        matches!(self, PackOutcome::Feasible { .. })
    }

    /// Achieved value of a feasible candidate.
    pub fn value(&self) -> Option<i64> {
        match self {
            PackOutcome::Feasible { value } => Some(*value),
            PackOutcome::Infeasible => None,
        }
    }
}

/// Transient state of one packing pass.
///
/// Holds the workers' busy dates and the per-task worker chosen for the
/// current candidate. Allocated once per search and reset per candidate.
#[derive(Debug, Clone)]
pub struct PackingScratch {
    workers: Vec<Worker>,
    assigned: Vec<Option<usize>>,
}

impl PackingScratch {
    /// Creates scratch space for `task_count` tasks and `worker_count` workers.
    pub fn new(task_count: usize, worker_count: usize) -> Self {
        Self {
            workers: vec![Worker::idle(); worker_count],
            assigned: vec![None; task_count],
        }
    }

    /// Creates scratch space sized for `problem`.
    pub fn for_problem(problem: &Problem) -> Self {
        Self::new(problem.task_count(), problem.worker_count)
    }

    /// Idles every worker and unassigns every task.
    pub fn reset(&mut self) {
        self.workers.iter_mut().for_each(Worker::reset);
        self.assigned.iter_mut().for_each(|a| *a = None);
    }

    /// Worker states after the last pass.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Per-task workers after the last pass.
    pub fn assigned(&self) -> &[Option<usize>] {
        &self.assigned
    }

    /// Splits the scratch into workers and per-task assignment.
    pub(crate) fn parts_mut(&mut self) -> (&mut [Worker], &mut [Option<usize>]) {
        (&mut self.workers, &mut self.assigned)
    }
}

/// A deterministic rule placing included tasks onto workers.
///
/// Implementations must reset `scratch` before packing, leave the
/// chosen workers in `scratch.assigned()`, and return the same outcome
/// every time they are given the same problem and vector.
pub trait PackingPolicy: Debug + Send + Sync {
    /// Policy name (e.g., "first-fit").
    fn name(&self) -> &'static str;

    /// Packs the tasks included by `inclusion`.
    fn pack(
        &self,
        problem: &Problem,
        inclusion: InclusionVector,
        scratch: &mut PackingScratch,
    ) -> PackOutcome;
}

/// Packs a single vector with fresh scratch space.
///
/// Returns the resulting assignment, or `None` if the candidate is
/// infeasible.
pub fn evaluate<P: PackingPolicy + ?Sized>(
    policy: &P,
    problem: &Problem,
    inclusion: InclusionVector,
) -> Option<Assignment> {
    let mut scratch = PackingScratch::for_problem(problem);
    policy
        .pack(problem, inclusion, &mut scratch)
        .value()
        .map(|value| Assignment::from_workers(scratch.assigned().to_vec(), value))
}
