//! Worker scratch state.

use serde::{Deserialize, Serialize};

use super::Task;

/// An interchangeable worker during one packing pass.
///
/// Only tracks the date until which the worker is busy. Workers are
/// rebuilt (or reset) for every candidate and never stored in a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Ending date of the last accepted task. `None` = idle.
    pub busy_until: Option<i64>,
}

impl Worker {
    /// Creates an idle worker.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Whether the worker has no task yet.
    pub fn is_idle(&self) -> bool {
        self.busy_until.is_none()
    }

    /// Whether `task` starts strictly after the worker becomes free.
    #[inline]
    pub fn can_take(&self, task: &Task) -> bool {
        task.fits_after(self.busy_until)
    }

    /// Reserves the worker until the end of `task`.
    #[inline]
    pub fn take(&mut self, task: &Task) {
        self.busy_until = Some(task.end);
    }

    /// Returns the worker to idle.
    #[inline]
    pub fn reset(&mut self) {
        self.busy_until = None;
    }
}
