//! Task orderings.
//!
//! Every strategy processes tasks in the problem's stored order, and the
//! greedy rules depend on it. The default is by starting date, which is
//! what the packing policy and the heuristics are tuned for.
//!
//! | Order | Primary key | Tie-break |
//! |-------|-------------|-----------|
//! | `ByStart` | start ascending | end ascending |
//! | `ByEnd` | end ascending | start ascending |
//! | `ByEndDescending` | end descending | start descending |

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::Task;

/// A total order over tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskOrder {
    /// Earliest start first.
    #[default]
    ByStart,
    /// Earliest end first.
    ByEnd,
    /// Latest end first.
    ByEndDescending,
}

impl TaskOrder {
    /// Short name.
    pub fn name(&self) -> &'static str {
        match self {
            TaskOrder::ByStart => "by_start",
            TaskOrder::ByEnd => "by_end",
            TaskOrder::ByEndDescending => "by_end_descending",
        }
    }

    /// Compares two tasks under this order.
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            TaskOrder::ByStart => a.start.cmp(&b.start).then(a.end.cmp(&b.end)),
            TaskOrder::ByEnd => a.end.cmp(&b.end).then(a.start.cmp(&b.start)),
            TaskOrder::ByEndDescending => b.end.cmp(&a.end).then(b.start.cmp(&a.start)),
        }
    }

    /// Sorts `tasks` in place. Equal tasks keep their relative order.
    pub fn sort(&self, tasks: &mut [Task]) {
        tasks.sort_by(|a, b| self.compare(a, b));
    }

    /// Whether `tasks` is already sorted under this order.
    pub fn is_sorted(&self, tasks: &[Task]) -> bool {
        tasks
            .windows(2)
            .all(|w| self.compare(&w[0], &w[1]) != Ordering::Greater)
    }
}
