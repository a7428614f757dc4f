//! Session events.

use crate::report::ScoutingReport;
use crate::track::Track;
use serde::{Deserialize, Serialize};

/// High-level events a live session publishes to its frontend.
///
/// These are the in-process contract between the arena runner and whatever
/// view renders the call; there is no wire protocol behind them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The call went live.
    SessionStarted { track: Track, remaining_secs: u32 },
    /// The operator's utterance was accepted into the transcript.
    OperatorTurn { text: String },
    /// The counterpart is "thinking"; a reply will follow unless the call ends first.
    CounterpartTyping,
    /// The counterpart spoke.
    CounterpartTurn { text: String },
    /// The running score moved.
    ScoreChanged { score: u8, delta: i32 },
    /// One second elapsed on the call clock.
    CountdownTick { remaining_secs: u32 },
    /// The call ended and the report was derived.
    SessionEnded { report: ScoutingReport },
}
