//! Session phase types.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of an arena session.
///
/// Transitions are strictly linear: `Idle -> Running -> Ended`. `Ended` is
/// terminal; a reset means constructing a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Created but not started.
    Idle,
    /// Live call: countdown active, turns accepted.
    Running,
    /// Finished: score frozen, report derived.
    Ended,
}

impl SessionPhase {
    /// Static name used in phase-mismatch error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Running => "running",
            SessionPhase::Ended => "ended",
        }
    }
}
