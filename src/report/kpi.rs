//! Solution quality metrics (KPIs).
//!
//! Computes indicators from a solved problem, reading the assignment
//! stored on its tasks.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assignment rate | Performed tasks / all tasks |
//! | Busy time | Dates covered by a worker's tasks (inclusive) |
//! | Utilization | Busy time / dates in the horizon |
//! | Avg Utilization | Mean over workers, idle ones included |
//!
//! The horizon runs from the earliest start to the latest end over all
//! tasks, performed or not.

use serde::{Deserialize, Serialize};

use crate::models::Problem;

/// Solution performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionKpi {
    /// Number of performed tasks.
    pub assigned_count: usize,
    /// Number of tasks left undone.
    pub unassigned_count: usize,
    /// Total profit (task count when profits are ignored).
    pub total_value: i64,
    /// Earliest start date over all tasks.
    pub horizon_start: i64,
    /// Latest end date over all tasks.
    pub horizon_end: i64,
    /// Tasks performed by each worker.
    pub tasks_by_worker: Vec<usize>,
    /// Dates covered by each worker's tasks.
    pub busy_time_by_worker: Vec<i64>,
    /// Per-worker utilization (0.0..=1.0).
    pub utilization_by_worker: Vec<f64>,
    /// Mean utilization over all workers.
    pub avg_utilization: f64,
    /// Fraction of tasks performed (0.0..=1.0).
    pub assignment_rate: f64,
}

impl SolutionKpi {
    /// Computes KPIs from the assignment stored on `problem`.
    pub fn calculate(problem: &Problem) -> Self {
        let workers = problem.worker_count;
        let mut tasks_by_worker = vec![0usize; workers];
        let mut busy_time_by_worker = vec![0i64; workers];

        for task in &problem.tasks {
            if let Some(w) = task.assigned_worker.filter(|&w| w < workers) {
                tasks_by_worker[w] += 1;
                let span = task.duration().saturating_add(1);
                busy_time_by_worker[w] = busy_time_by_worker[w].saturating_add(span);
            }
        }

        let horizon_start = problem.tasks.iter().map(|t| t.start).min().unwrap_or(0);
        let horizon_end = problem.tasks.iter().map(|t| t.end).max().unwrap_or(0);
        let horizon_len = if problem.tasks.is_empty() {
            0
        } else {
            horizon_end.saturating_sub(horizon_start).saturating_add(1)
        };

        let utilization_by_worker: Vec<f64> = busy_time_by_worker
            .iter()
            .map(|&busy| {
                if horizon_len == 0 {
                    0.0
                } else {
                    busy as f64 / horizon_len as f64
                }
            })
            .collect();
        let avg_utilization = if utilization_by_worker.is_empty() {
            0.0
        } else {
            utilization_by_worker.iter().sum::<f64>() / utilization_by_worker.len() as f64
        };

        let assigned_count: usize = tasks_by_worker.iter().sum();
        let task_count = problem.task_count();
        let assignment_rate = if task_count == 0 {
            0.0
        } else {
            assigned_count as f64 / task_count as f64
        };

        Self {
            assigned_count,
            unassigned_count: task_count - assigned_count,
            total_value: problem.total_profit,
            horizon_start,
            horizon_end,
            tasks_by_worker,
            busy_time_by_worker,
            utilization_by_worker,
            avg_utilization,
            assignment_rate,
        }
    }

    /// Whether the solution meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_assignment_rate: f64, min_utilization: f64) -> bool {
        self.assignment_rate >= min_assignment_rate && self.avg_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, Task};
    use std::time::Duration;

    fn solved(workers: usize, assigned: Vec<Option<usize>>, total: i64) -> Problem {
        let mut problem = Problem::new(
            vec![Task::new(0, 2, 10), Task::new(1, 3, 5), Task::new(3, 5, 8)],
            workers,
            false,
        )
        .unwrap();
        problem.apply(&Assignment::from_workers(assigned, total), Duration::ZERO);
        problem
    }

    #[test]
    fn test_kpi_basic() {
        let kpi = SolutionKpi::calculate(&solved(1, vec![Some(0), None, Some(0)], 18));
        assert_eq!(kpi.assigned_count, 2);
        assert_eq!(kpi.unassigned_count, 1);
        assert_eq!(kpi.total_value, 18);
        assert_eq!(kpi.tasks_by_worker, vec![2]);
        assert_eq!(kpi.busy_time_by_worker, vec![6]);
        assert!((kpi.assignment_rate - 2.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_utilization() {
        let kpi = SolutionKpi::calculate(&solved(2, vec![Some(0), Some(1), Some(0)], 23));
        assert_eq!((kpi.horizon_start, kpi.horizon_end), (0, 5));
        // Worker 0: 6/6 dates, worker 1: 3/6.
        assert!((kpi.utilization_by_worker[0] - 1.0).abs() < 1e-10);
        assert!((kpi.utilization_by_worker[1] - 0.5).abs() < 1e-10);
        assert!((kpi.avg_utilization - 0.75).abs() < 1e-10);
        assert!((kpi.assignment_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_idle_workers_count() {
        let kpi = SolutionKpi::calculate(&solved(3, vec![None, Some(2), None], 5));
        assert_eq!(kpi.tasks_by_worker, vec![0, 0, 1]);
        assert!((kpi.avg_utilization - 0.5 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_unsolved() {
        let problem = Problem::new(vec![Task::new(4, 4, 1)], 1, false).unwrap();
        let kpi = SolutionKpi::calculate(&problem);
        assert_eq!(kpi.assigned_count, 0);
        assert_eq!(kpi.total_value, 0);
        assert!((kpi.assignment_rate - 0.0).abs() < 1e-10);
        assert!((kpi.avg_utilization - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_extreme_dates() {
        let mut problem =
            Problem::new(vec![Task::new(i64::MIN, i64::MAX, 1)], 1, false).unwrap();
        problem.apply(&Assignment::from_workers(vec![Some(0)], 1), Duration::ZERO);
        let kpi = SolutionKpi::calculate(&problem);
        assert_eq!(kpi.busy_time_by_worker, vec![i64::MAX]);
        assert!((kpi.utilization_by_worker[0] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let kpi = SolutionKpi::calculate(&solved(2, vec![Some(0), Some(1), Some(0)], 23));
        assert!(kpi.meets_thresholds(1.0, 0.75));
        assert!(!kpi.meets_thresholds(1.0, 0.8));
    }
}
