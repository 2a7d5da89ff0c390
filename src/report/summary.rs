//! Plain-text solution summary.

use std::fmt;

use super::SolutionKpi;
use crate::models::Problem;

/// Human-readable report of a solved problem.
///
/// Lists each worker's tasks, the totals, the run parameters and the
/// full task table. Writing it anywhere is left to the caller.
///
/// # Example
///
/// ```
/// use u_jobselect::config::SolverConfig;
/// use u_jobselect::models::{Problem, Task};
/// use u_jobselect::report::SolutionReport;
/// use u_jobselect::search;
///
/// let mut problem = Problem::new(vec![Task::new(0, 2, 10)], 1, false).unwrap();
/// search::solve(&mut problem, &SolverConfig::new()).unwrap();
/// let text = SolutionReport::new(&problem).with_strategy("exact").to_string();
/// assert!(text.contains("Total profit = 10"));
/// ```
#[derive(Debug, Clone)]
pub struct SolutionReport<'a> {
    problem: &'a Problem,
    kpi: SolutionKpi,
    strategy: Option<&'a str>,
    seed: Option<u64>,
}

impl<'a> SolutionReport<'a> {
    /// Creates a report for the assignment stored on `problem`.
    pub fn new(problem: &'a Problem) -> Self {
        Self {
            problem,
            kpi: SolutionKpi::calculate(problem),
            strategy: None,
            seed: None,
        }
    }

    /// Names the strategy in the run parameters.
    pub fn with_strategy(mut self, strategy: &'a str) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Records the generator seed in the run parameters.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Indicators the report is built from.
    pub fn kpi(&self) -> &SolutionKpi {
        &self.kpi
    }
}

impl fmt::Display for SolutionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let problem = self.problem;

        for worker in 0..problem.worker_count {
            writeln!(f, "Worker {}", worker + 1)?;
            let tasks = problem.tasks_for_worker(worker);
            if tasks.is_empty() {
                writeln!(f, "  idle")?;
            }
            for i in tasks {
                let task = &problem.tasks[i];
                writeln!(
                    f,
                    "  task {i}: starts {} ends {} profit {}",
                    task.start, task.end, task.profit
                )?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Assigned {} of {} tasks",
            self.kpi.assigned_count,
            problem.task_count()
        )?;
        writeln!(f, "Total profit = {}", problem.total_profit)?;
        writeln!(f)?;

        if let Some(strategy) = self.strategy {
            writeln!(f, "Strategy = {strategy}")?;
        }
        if let Some(seed) = self.seed {
            writeln!(f, "Seed = {seed}")?;
        }
        writeln!(f, "T = {}", problem.task_count())?;
        writeln!(f, "P = {}", problem.worker_count)?;
        writeln!(
            f,
            "Profits{} ignored",
            if problem.ignore_profit { "" } else { " not" }
        )?;
        if let Some(elapsed) = problem.elapsed {
            writeln!(f, "Solution time = {:.3e} s", elapsed.as_secs_f64())?;
        }

        writeln!(
            f,
            "{:>5} {:>15} {:>15} {:>10}",
            "Task", "Starting date", "Ending date", "Profit"
        )?;
        for (i, task) in problem.tasks.iter().enumerate() {
            writeln!(f, "{i:>5} {:>15} {:>15} {:>10}", task.start, task.end, task.profit)?;
        }
        Ok(())
    }
}
