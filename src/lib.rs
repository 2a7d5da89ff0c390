//! Weighted interval job selection.
//!
//! Given tasks with fixed start dates, end dates and profits, and a number
//! of interchangeable workers, decides which tasks to perform and by whom
//! so that no worker runs two overlapping tasks and the total profit (or
//! the number of performed tasks) is maximized.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `Worker`, `Problem`, `Assignment`
//! - **`validation`**: Input range and integrity checks
//! - **`ordering`**: Task orderings (`TaskOrder`)
//! - **`packing`**: Inclusion vectors and the first-fit packing policy
//! - **`search`**: Exhaustive strategies, the `Strategy` selector and the
//!   `solve` driver
//! - **`heuristics`**: Greedy strategies for the task-count objective
//! - **`generator`**: Reproducible random instances
//! - **`report`**: KPIs and a plain-text summary
//! - **`config`**: Solver configuration
//!
//! # Example
//!
//! ```
//! use u_jobselect::config::SolverConfig;
//! use u_jobselect::generator::{GeneratorConfig, InstanceGenerator};
//! use u_jobselect::report::SolutionReport;
//! use u_jobselect::search::{self, Strategy};
//!
//! let config = GeneratorConfig::new(2020, 8, 2).with_ignore_profit(true);
//! let mut problem = InstanceGenerator::new(config).generate().unwrap();
//!
//! let exact = search::solve(&mut problem, &SolverConfig::new()).unwrap();
//! let greedy = search::solve(
//!     &mut problem,
//!     &SolverConfig::new().with_strategy(Strategy::Compatibility),
//! )
//! .unwrap();
//! assert!(greedy.is_valid(&problem));
//! assert!(exact.assigned_count() > 0);
//!
//! println!("{}", SolutionReport::new(&problem).with_strategy("compatibility"));
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` events and spans; installing a subscriber is
//! left to the application.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1 and 6.1
//! - Kolen et al. (2007), "Interval scheduling: A survey"

pub mod config;
pub mod error;
pub mod generator;
pub mod heuristics;
pub mod models;
pub mod ordering;
pub mod packing;
pub mod report;
pub mod search;
pub mod validation;

pub use config::SolverConfig;
pub use error::SolveError;
pub use models::{Assignment, Problem, Task};
pub use search::{solve, AssignmentSolver, Strategy};
