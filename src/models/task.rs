//! Task model.
//!
//! A task is a fixed time interval `[start, end]` (both ends inclusive)
//! with a profit. It is performed by at most one worker, or left undone.

use serde::{Deserialize, Serialize};

/// A task to be selected and assigned.
///
/// # Time Representation
/// Dates are plain integers. Two tasks overlap unless one ends strictly
/// before the other starts, so `[0, 2]` and `[2, 4]` overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Starting date.
    pub start: i64,
    /// Ending date (`start <= end`).
    pub end: i64,
    /// Profit earned if the task is performed.
    pub profit: i64,
    /// Worker performing this task. `None` = unassigned.
    pub assigned_worker: Option<usize>,
}

impl Task {
    /// Creates an unassigned task.
    pub fn new(start: i64, end: i64, profit: i64) -> Self {
        Self {
            start,
            end,
            profit,
            assigned_worker: None,
        }
    }

    /// Length of the interval (`end - start`), saturating at `i64::MAX`.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    /// Whether the two intervals share at least one date.
    #[inline]
    pub fn overlaps(&self, other: &Task) -> bool {
        !(self.end < other.start || other.end < self.start)
    }

    /// Whether this task may follow a worker busy until `busy_until`.
    ///
    /// An idle worker (`None`) accepts any task.
    #[inline]
    pub fn fits_after(&self, busy_until: Option<i64>) -> bool {
        busy_until.map_or(true, |busy| self.start > busy)
    }

    /// Whether a worker is currently assigned.
    pub fn is_assigned(&self) -> bool {
        self.assigned_worker.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new_is_unassigned() {
        let task = Task::new(3, 7, 12);
        assert_eq!(task.start, 3);
        assert_eq!(task.end, 7);
        assert_eq!(task.profit, 12);
        assert!(!task.is_assigned());
        assert_eq!(task.duration(), 4);
    }

    #[test]
    fn test_overlap_is_inclusive() {
        let a = Task::new(0, 2, 1);
        let b = Task::new(2, 4, 1);
        let c = Task::new(3, 5, 1);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_fits_after() {
        let task = Task::new(5, 6, 1);
        assert!(task.fits_after(None));
        assert!(task.fits_after(Some(4)));
        assert!(!task.fits_after(Some(5)));
    }

    #[test]
    fn test_duration_saturates_on_extreme_dates() {
        assert_eq!(Task::new(i64::MIN, i64::MAX, 1).duration(), i64::MAX);
        assert_eq!(Task::new(i64::MIN, 0, 1).duration(), i64::MAX);
        assert_eq!(Task::new(-3, 4, 1).duration(), 7);
    }

    #[test]
    fn test_zero_length_task() {
        let task = Task::new(4, 4, 1);
        assert_eq!(task.duration(), 0);
        assert!(task.overlaps(&Task::new(4, 9, 1)));
    }
}
