//! Conversation turn types.
//!
//! This module contains types for representing one message exchange unit
//! within a simulated call.

use serde::{Deserialize, Serialize};

/// Represents who produced a turn in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    /// The human trainee running the call.
    Operator,
    /// The scripted prospect on the other end.
    Counterpart,
}

/// A single turn in a session transcript.
///
/// Turns are immutable once appended; transcript ordering is append order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who spoke.
    pub speaker: Speaker,
    /// What was said.
    pub text: String,
    /// Timestamp when the turn was recorded (ISO 8601 format).
    pub occurred_at: String,
}

impl Turn {
    /// Creates an operator turn stamped with the current time.
    pub fn operator(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Operator,
            text: text.into(),
            occurred_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Creates a counterpart turn stamped with the current time.
    pub fn counterpart(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Counterpart,
            text: text.into(),
            occurred_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
