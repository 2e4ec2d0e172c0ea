//! Pipeline entry points for analysis operations.
//!
//! - `run_analysis`: fetch and aggregate a handle's contest history
//! - `render`: produce the stdout report from the accumulated counters

pub mod aggregate;
pub mod analyze;
pub mod report;

pub use aggregate::TagCounters;
pub use analyze::{AnalysisOutcome, RunStats, run_analysis};
pub use report::render;
