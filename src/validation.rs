//! Input validation for job selection problems.
//!
//! Checks the supported ranges and the structural integrity of tasks
//! before any search runs. Detects:
//! - Task counts outside `1..=64`
//! - Worker counts outside `1..=10`
//! - Inverted intervals (`end < start`)
//! - Negative profits
//!
//! All issues are collected; validation does not stop at the first one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Task, MAX_TASKS, MAX_WORKERS};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Fewer than one or more than `MAX_TASKS` tasks.
    TaskCountOutOfRange,
    /// Fewer than one or more than `MAX_WORKERS` workers.
    WorkerCountOutOfRange,
    /// A task ends before it starts.
    InvertedInterval,
    /// A task has a negative profit.
    NegativeProfit,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a job selection problem.
///
/// Checks:
/// 1. `1 <= tasks.len() <= MAX_TASKS`
/// 2. `1 <= worker_count <= MAX_WORKERS`
/// 3. Every task has `start <= end`
/// 4. Every task has `profit >= 0`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(tasks: &[Task], worker_count: usize) -> ValidationResult {
    let mut errors = Vec::new();
    check_sizes(tasks.len(), worker_count, &mut errors);

    for (i, task) in tasks.iter().enumerate() {
        if task.end < task.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedInterval,
                format!("Task {i} ends ({}) before it starts ({})", task.end, task.start),
            ));
        }
        if task.profit < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeProfit,
                format!("Task {i} has negative profit {}", task.profit),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates only the task and worker counts.
///
/// Used where the tasks do not exist yet, e.g. before generating them.
pub fn validate_sizes(task_count: usize, worker_count: usize) -> ValidationResult {
    let mut errors = Vec::new();
    check_sizes(task_count, worker_count, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_sizes(task_count: usize, worker_count: usize, errors: &mut Vec<ValidationError>) {
    if task_count == 0 || task_count > MAX_TASKS {
        errors.push(ValidationError::new(
            ValidationErrorKind::TaskCountOutOfRange,
            format!("Bad task count (1 <= T ({task_count}) <= {MAX_TASKS})"),
        ));
    }

    if worker_count == 0 || worker_count > MAX_WORKERS {
        errors.push(ValidationError::new(
            ValidationErrorKind::WorkerCountOutOfRange,
            format!("Bad worker count (1 <= P ({worker_count}) <= {MAX_WORKERS})"),
        ));
    }
}
