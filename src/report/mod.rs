//! Solution reporting.
//!
//! [`SolutionKpi`] summarizes a solved problem in numbers;
//! [`SolutionReport`] renders it as plain text.

mod kpi;
mod summary;

pub use kpi::SolutionKpi;
pub use summary::SolutionReport;
