//! Best-so-far accumulator for the exhaustive searches.

use tracing::trace;

use crate::models::Assignment;
use crate::packing::{InclusionVector, PackOutcome};

/// The best feasible candidate seen by a search loop.
///
/// Starts as the empty assignment with value 0, which is always feasible.
/// A candidate replaces it only with a strictly greater value, so among
/// equal values the first one enumerated wins.
#[derive(Debug, Clone)]
pub struct BestCandidate {
    value: i64,
    inclusion: InclusionVector,
    workers: Vec<Option<usize>>,
    improvements: usize,
}

impl BestCandidate {
    /// Creates the accumulator for `task_count` tasks.
    pub fn new(task_count: usize) -> Self {
        Self {
            value: 0,
            inclusion: InclusionVector::empty(task_count),
            workers: vec![None; task_count],
            improvements: 0,
        }
    }

    /// Offers a feasible candidate. Returns whether it became the best.
    pub fn offer(
        &mut self,
        value: i64,
        inclusion: InclusionVector,
        assigned: &[Option<usize>],
    ) -> bool {
        if value <= self.value {
            return false;
        }
        trace!(value, bits = inclusion.bits(), "new best candidate");
        self.value = value;
        self.inclusion = inclusion;
        self.workers.copy_from_slice(assigned);
        self.improvements += 1;
        true
    }

    /// Best value so far.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Inclusion vector of the best candidate.
    pub fn inclusion(&self) -> InclusionVector {
        self.inclusion
    }

    /// How many times the best was replaced.
    pub fn improvements(&self) -> usize {
        self.improvements
    }

    /// Converts the best candidate into an assignment.
    pub fn into_assignment(self) -> Assignment {
        Assignment::from_workers(self.workers, self.value)
    }
}

/// Candidate counters of one exhaustive run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidates packed.
    pub evaluated: u64,
    /// Candidates that packed completely.
    pub feasible: u64,
}

impl SearchStats {
    /// Counts one packed candidate.
    pub fn record(&mut self, outcome: PackOutcome) {
        self.evaluated += 1;
        if outcome.is_feasible() {
            self.feasible += 1;
        }
    }
}
