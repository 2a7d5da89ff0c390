//! Compatibility-matrix greedy.
//!
//! # Algorithm
//!
//! Two tasks are compatible when they do not overlap; a task is
//! compatible with itself while it is still available. For each worker
//! in index order, and for each pivot task:
//!
//! 1. Scan forward from the pivot, then backward from it.
//! 2. Accept a task if it is compatible with the pivot and with every
//!    task already in the chain.
//!
//! The first pivot giving strictly the longest chain wins. Its tasks are
//! consumed: their rows and columns are cleared, so they drop out of
//! every later chain.
//!
//! # Complexity
//! O(P * T^3) time, O(T^2) memory.

use tracing::debug;

use super::require_count_mode;
use crate::error::SolveError;
use crate::models::{Assignment, Problem, Task};
use crate::search::AssignmentSolver;

/// Symmetric task compatibility matrix.
///
/// # Invariants
/// - `is_compatible(i, j) == is_compatible(j, i)`
/// - After `consume(i)`, task `i` is compatible with nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl CompatibilityMatrix {
    /// Builds the matrix for `tasks`, with every task available.
    pub fn new(tasks: &[Task]) -> Self {
        let size = tasks.len();
        let mut cells = vec![false; size * size];
        for i in 0..size {
            for j in i..size {
                let compatible = i == j || !tasks[i].overlaps(&tasks[j]);
                cells[i * size + j] = compatible;
                cells[j * size + i] = compatible;
            }
        }
        Self { size, cells }
    }

    /// Number of tasks.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether tasks `i` and `j` may share a worker.
    #[inline]
    pub fn is_compatible(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.size + j]
    }

    /// Whether task `i` has not been consumed.
    #[inline]
    pub fn is_available(&self, i: usize) -> bool {
        self.is_compatible(i, i)
    }

    /// Marks task `i` as taken by clearing its row and column.
    pub fn consume(&mut self, i: usize) {
        for k in 0..self.size {
            self.cells[i * self.size + k] = false;
            self.cells[k * self.size + i] = false;
        }
    }

    /// Chain of pairwise compatible tasks grown around `pivot`.
    ///
    /// Empty when the pivot itself is consumed.
    pub fn chain_around(&self, pivot: usize) -> Vec<usize> {
        let mut chain: Vec<usize> = Vec::new();
        for k in (pivot..self.size).chain((0..pivot).rev()) {
            if self.is_compatible(pivot, k)
                && !chain.contains(&k)
                && chain.iter().all(|&c| self.is_compatible(c, k))
            {
                chain.push(k);
            }
        }
        chain
    }
}

/// Greedy chain builder over the compatibility matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityGreedy;

impl AssignmentSolver for CompatibilityGreedy {
    fn name(&self) -> &'static str {
        "compatibility"
    }

    fn supports_profit(&self) -> bool {
        false
    }

    fn solve(&self, problem: &Problem) -> Result<Assignment, SolveError> {
        require_count_mode(self.name(), problem)?;

        let mut matrix = CompatibilityMatrix::new(&problem.tasks);
        let mut chains = Vec::with_capacity(problem.worker_count);

        for worker in 0..problem.worker_count {
            let mut best: Vec<usize> = Vec::new();
            for pivot in 0..matrix.size() {
                let chain = matrix.chain_around(pivot);
                if chain.len() > best.len() {
                    best = chain;
                }
            }

            for &k in &best {
                matrix.consume(k);
            }
            best.sort_unstable();
            debug!(worker, tasks = ?best, "worker chain committed");
            chains.push(best);
        }

        Ok(Assignment::from_chains(problem, &chains))
    }
}
