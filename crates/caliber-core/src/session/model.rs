//! Session domain model.
//!
//! This module contains the core `ArenaSession` entity: a timed roleplay
//! call between the operator and a scripted counterpart, with a running
//! score and an append-only transcript.

use super::phase::SessionPhase;
use super::turn::Turn;
use crate::config::ArenaConfig;
use crate::error::{CaliberError, Result};
use crate::report::{Grade, ScoutingReport};
use crate::track::Track;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A simulated sales call session.
///
/// A session owns all of its mutable state: phase, countdown, score, and
/// transcript. State-changing methods enforce the phase machine:
///
/// - [`begin`](Self::begin) moves `Idle -> Running` and is an error elsewhere.
/// - [`tick`](Self::tick) and [`record_counterpart_turn`](Self::record_counterpart_turn)
///   are silent no-ops outside `Running`, so a stray timer callback firing
///   after teardown cannot corrupt a finished session.
/// - [`end_call`](Self::end_call) moves `Running -> Ended`, freezes the
///   score, and derives the scouting report exactly once. It is idempotent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaSession {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Human-readable session title
    pub title: String,
    /// Scenario track this session runs against
    pub track: Track,
    /// Current lifecycle phase
    pub phase: SessionPhase,
    /// Seconds left on the call clock
    pub remaining_secs: u32,
    /// Running score, always within [0, 100]
    pub score: u8,
    /// Append-only conversation transcript
    pub transcript: Vec<Turn>,
    /// Report derived once at the end of the call
    pub report: Option<ScoutingReport>,
    /// Timestamp when the session was created (ISO 8601 format)
    pub created_at: String,
    /// Timestamp when the session was last updated (ISO 8601 format)
    pub updated_at: String,
}

impl ArenaSession {
    /// Creates a new idle session for the given track.
    pub fn new(track: Track, config: &ArenaConfig) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: format!("{} call", track),
            track,
            phase: SessionPhase::Idle,
            remaining_secs: config.session_secs,
            score: config.starting_score.min(100),
            transcript: Vec::new(),
            report: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Whether the session is currently live.
    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Whether the session has finished.
    pub fn is_ended(&self) -> bool {
        self.phase == SessionPhase::Ended
    }

    /// Starts the call.
    ///
    /// # Errors
    ///
    /// Returns an invalid-phase error unless the session is `Idle`.
    pub fn begin(&mut self) -> Result<()> {
        if self.phase != SessionPhase::Idle {
            return Err(CaliberError::InvalidPhase {
                expected: SessionPhase::Idle.as_str(),
                actual: self.phase.as_str(),
            });
        }
        self.phase = SessionPhase::Running;
        self.touch();
        tracing::debug!(session_id = %self.id, track = %self.track, "session started");
        Ok(())
    }

    /// Advances the call clock by one second.
    ///
    /// Only meaningful while `Running`; in any other phase this is a no-op,
    /// which makes a timer that fires after teardown harmless. Reaching zero
    /// ends the call and derives the report from the current score.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        if self.phase != SessionPhase::Running {
            return;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.touch();
        if self.remaining_secs == 0 {
            tracing::debug!(session_id = %self.id, "call clock expired");
            self.finalize(rng);
        }
    }

    /// Appends an operator turn.
    ///
    /// # Errors
    ///
    /// Returns an invalid-phase error unless the session is `Running`, and
    /// an invalid-input error for empty or whitespace-only text. Callers
    /// treat the latter as a local no-op rather than a user-facing fault.
    pub fn submit_operator_turn(&mut self, text: &str) -> Result<&Turn> {
        if self.phase != SessionPhase::Running {
            return Err(CaliberError::InvalidPhase {
                expected: SessionPhase::Running.as_str(),
                actual: self.phase.as_str(),
            });
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CaliberError::invalid_input("empty operator utterance"));
        }
        self.transcript.push(Turn::operator(trimmed));
        self.touch();
        // Safe to unwrap: we just pushed an element
        Ok(self.transcript.last().unwrap())
    }

    /// Appends a counterpart turn and applies a score delta.
    ///
    /// The score is saturating-clamped to [0, 100] regardless of the delta.
    /// Outside `Running` this is a no-op: a delayed reply that lands after
    /// the call ended must not mutate the frozen score or transcript.
    pub fn record_counterpart_turn(&mut self, text: &str, delta: i32) {
        if self.phase != SessionPhase::Running {
            tracing::debug!(session_id = %self.id, "dropping counterpart turn outside running phase");
            return;
        }
        self.transcript.push(Turn::counterpart(text));
        self.score = (self.score as i32).saturating_add(delta).clamp(0, 100) as u8;
        self.touch();
    }

    /// Ends the call immediately, freezing the score.
    ///
    /// Idempotent: ending an already-ended session changes nothing. Returns
    /// the stored report once the session has ended at least once.
    pub fn end_call(&mut self, rng: &mut impl Rng) -> Option<&ScoutingReport> {
        if self.phase == SessionPhase::Running {
            tracing::debug!(session_id = %self.id, score = self.score, "call ended early");
            self.finalize(rng);
        }
        self.report.as_ref()
    }

    /// Summary row for completed-session list views.
    ///
    /// Returns `None` until the session has ended.
    pub fn summary(&self) -> Option<SessionSummary> {
        let report = self.report.as_ref()?;
        Some(SessionSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            track: self.track,
            final_score: report.final_score,
            grade: report.grade,
            passing: report.passing,
            ended_at: self.updated_at.clone(),
        })
    }

    fn finalize(&mut self, rng: &mut impl Rng) {
        self.phase = SessionPhase::Ended;
        self.report = Some(ScoutingReport::derive(self.score, self.track, rng));
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }
}

/// Flattened row describing a completed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: String,
    pub title: String,
    pub track: Track,
    pub final_score: u8,
    pub grade: Grade,
    pub passing: bool,
    pub ended_at: String,
}
