//! Scouting report derivation.
//!
//! A report is derived exactly once, when a session transitions out of
//! `Running`, and stored on the session. Sub-metric scores are cosmetic
//! perturbations around the final score and carry no information about the
//! transcript itself.

use super::grade::Grade;
use crate::track::Track;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The fixed set of cosmetic sub-metrics shown on a report card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[strum(to_string = "Rapport")]
    Rapport,
    #[strum(to_string = "Discovery")]
    Discovery,
    #[strum(to_string = "Objection Handling")]
    ObjectionHandling,
    #[strum(to_string = "Closing")]
    Closing,
}

impl Metric {
    /// Inclusive offset range applied around the final score for this metric.
    fn offset_range(&self) -> (i32, i32) {
        match self {
            Metric::Rapport => (-5, 8),
            Metric::Discovery => (-10, 5),
            Metric::ObjectionHandling => (-8, 8),
            Metric::Closing => (-12, 4),
        }
    }
}

/// One sub-metric score on the report card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricScore {
    pub metric: Metric,
    pub score: u8,
}

/// Summary card shown after a session ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoutingReport {
    /// The session's score at the moment it ended.
    pub final_score: u8,
    pub grade: Grade,
    pub passing: bool,
    pub track: Track,
    /// Cosmetic sub-metrics, one entry per [`Metric`] in declaration order.
    pub metrics: Vec<MetricScore>,
}

impl ScoutingReport {
    /// Derives a report from a final score and track.
    ///
    /// Grade and passing flag are pure functions of the score; sub-metrics
    /// are `clamp(final_score + offset, 0, 100)` with a per-metric offset
    /// range drawn from `rng`.
    pub fn derive(final_score: u8, track: Track, rng: &mut impl Rng) -> Self {
        use strum::IntoEnumIterator;

        let metrics = Metric::iter()
            .map(|metric| {
                let (min, max) = metric.offset_range();
                let offset = rng.gen_range(min..=max);
                MetricScore {
                    metric,
                    score: (final_score as i32 + offset).clamp(0, 100) as u8,
                }
            })
            .collect();

        Self {
            final_score,
            grade: Grade::for_score(final_score),
            passing: Grade::is_passing(final_score),
            track,
            metrics,
        }
    }
}
