//! Reproducible random problem instances.
//!
//! # Algorithm
//!
//! The planning horizon is `max(30, ceil(10T / P))` dates, so that the
//! workers are roughly ten tasks deep. For each task:
//!
//! 1. Draw a span (number of dates covered) from a weighted distribution:
//!    weight 0 for spans 0 and 1, rising as `2s` up to span 10, falling as
//!    `30 - s` up to span 29, and a flat tail beyond. The weights are
//!    scaled so that the tail holds about 10% of the mass.
//! 2. Draw the start uniformly so that the task fits the horizon.
//! 3. Draw a rate in `50..=300` from a density made of two triangles
//!    (peak at 100, the second four times the area of the first) and set
//!    `profit = 1 + round(span * rate)`.
//!
//! Tasks are then sorted by the configured [`TaskOrder`].
//!
//! # Example
//!
//! ```
//! use u_jobselect::generator::{GeneratorConfig, InstanceGenerator};
//!
//! let config = GeneratorConfig::new(2024, 12, 2);
//! let problem = InstanceGenerator::new(config.clone()).generate().unwrap();
//! let again = InstanceGenerator::new(config).generate().unwrap();
//! assert_eq!(problem.task_count(), 12);
//! assert_eq!(problem.tasks, again.tasks);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SolveError;
use crate::models::{Problem, Task};
use crate::ordering::TaskOrder;
use crate::validation::validate_sizes;

/// Shortest planning horizon.
const MIN_HORIZON: i64 = 30;

/// Weight of every span in the tail (span >= 30).
const TAIL_WEIGHT: i64 = 100;

/// Sum of the unscaled weights for spans 2..=29.
const BODY_WEIGHT_SUM: i64 = 298;

/// Upper bound of the profit-rate draw.
const RATE_SCALE: i64 = 12_500;

/// Instance generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Base seed. Mixed with the sizes, so every (seed, T, P) triple
    /// yields its own instance.
    pub seed: u64,
    /// Number of tasks (T).
    pub task_count: usize,
    /// Number of workers (P).
    pub worker_count: usize,
    /// Generate a count-mode problem.
    pub ignore_profit: bool,
    /// Order of the generated tasks.
    pub order: TaskOrder,
}

impl GeneratorConfig {
    /// Creates a profit-aware configuration sorted by start date.
    pub fn new(seed: u64, task_count: usize, worker_count: usize) -> Self {
        Self {
            seed,
            task_count,
            worker_count,
            ..Self::default()
        }
    }

    /// Sets the objective mode.
    pub fn with_ignore_profit(mut self, ignore_profit: bool) -> Self {
        self.ignore_profit = ignore_profit;
        self
    }

    /// Sets the task order.
    pub fn with_order(mut self, order: TaskOrder) -> Self {
        self.order = order;
        self
    }

    /// Seed actually fed to the random generator.
    pub fn mixed_seed(&self) -> u64 {
        self.seed
            .wrapping_add(314_161u64.wrapping_mul(self.task_count as u64))
            .wrapping_add(271_829u64.wrapping_mul(self.worker_count as u64))
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            task_count: 10,
            worker_count: 1,
            ignore_profit: false,
            order: TaskOrder::ByStart,
        }
    }
}

/// Builds random problems from a [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub struct InstanceGenerator {
    config: GeneratorConfig,
}

impl InstanceGenerator {
    /// Creates a generator.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the problem. The same configuration always yields the
    /// same tasks.
    ///
    /// # Errors
    /// `SolveError::InvalidProblem` if the task or worker count is out of
    /// range.
    pub fn generate(&self) -> Result<Problem, SolveError> {
        let config = &self.config;
        validate_sizes(config.task_count, config.worker_count).map_err(SolveError::invalid)?;

        let horizon = horizon(config.task_count, config.worker_count);
        let cumulative = span_weights(horizon);
        let total_weight = cumulative[cumulative.len() - 1];
        let mut rng = ChaCha8Rng::seed_from_u64(config.mixed_seed());

        let mut tasks = Vec::with_capacity(config.task_count);
        for _ in 0..config.task_count {
            let r = rng.random_range(1..=total_weight);
            let span = cumulative.partition_point(|&w| w < r) as i64;
            let start = rng.random_range(0..=horizon - span);
            let profit = profit_for(span, rng.random_range(0..=RATE_SCALE));
            tasks.push(Task::new(start, start + span - 1, profit));
        }
        config.order.sort(&mut tasks);

        debug!(
            seed = config.seed,
            tasks = config.task_count,
            workers = config.worker_count,
            horizon,
            order = config.order.name(),
            "instance generated"
        );
        Problem::new(tasks, config.worker_count, config.ignore_profit)
    }
}

/// Planning horizon for `task_count` tasks over `worker_count` workers.
///
/// `worker_count` must be at least 1.
pub fn horizon(task_count: usize, worker_count: usize) -> i64 {
    let (t, p) = (task_count as i64, worker_count as i64);
    ((10 * t + p - 1) / p).max(MIN_HORIZON)
}

/// Cumulative span weights for spans `0..=horizon`.
fn span_weights(horizon: i64) -> Vec<i64> {
    let tail_spans = horizon - 29;
    let scale = (TAIL_WEIGHT * 10 * tail_spans + BODY_WEIGHT_SUM - 1) / BODY_WEIGHT_SUM;
    let scale = scale.max(TAIL_WEIGHT);

    let mut cumulative = Vec::with_capacity(horizon as usize + 1);
    let mut total = 0;
    for span in 0..=horizon {
        total += match span {
            0 | 1 => 0,
            2..=10 => scale * 2 * span,
            11..=29 => scale * (30 - span),
            _ => TAIL_WEIGHT,
        };
        cumulative.push(total);
    }
    cumulative
}

/// Profit of a task covering `span` dates, given a draw in `0..=12500`.
fn profit_for(span: i64, draw: i64) -> i64 {
    let span = span as f64;
    let rate = if draw <= 2_500 {
        50.0 + (draw as f64).sqrt()
    } else {
        300.0 - 2.0 * ((RATE_SCALE - draw) as f64).sqrt()
    };
    1 + (span * rate).round() as i64
}
