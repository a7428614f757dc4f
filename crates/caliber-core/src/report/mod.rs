//! Scouting report domain module.
//!
//! # Module Structure
//!
//! - `grade`: Letter grade thresholds (`Grade`, `PASSING_THRESHOLD`)
//! - `model`: Report derivation (`ScoutingReport`, `Metric`, `MetricScore`)

mod grade;
mod model;

// Re-export public API
pub use grade::{Grade, PASSING_THRESHOLD};
pub use model::{Metric, MetricScore, ScoutingReport};
