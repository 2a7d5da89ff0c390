//! Job selection domain models.
//!
//! Provides the data types shared by every search strategy: the tasks
//! to select, the workers performing them, the problem instance and the
//! resulting assignment.
//!
//! # Domain Mappings
//!
//! | u-jobselect | Software team | Rental fleet | Operating rooms |
//! |-------------|---------------|--------------|-----------------|
//! | Task | Programming task | Booking | Surgery slot |
//! | Worker | Programmer | Vehicle | Room |
//! | Profit | Contract value | Rental fee | Priority score |

mod assignment;
mod problem;
mod task;
mod worker;

pub use assignment::{Assignment, Violation, ViolationType};
pub use problem::{Problem, MAX_TASKS, MAX_WORKERS};
pub use task::Task;
pub use worker::Worker;
