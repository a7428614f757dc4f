//! Arena configuration.
//!
//! Timing and scoring knobs for a roleplay session. Everything has a
//! sensible default so an empty TOML file (or no file at all) yields the
//! stock 15-minute call.

use crate::error::{CaliberError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Inclusive millisecond range for the counterpart's simulated thinking delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min: u64,
    pub max: u64,
}

impl Default for DelayRange {
    fn default() -> Self {
        Self {
            min: 1_500,
            max: 3_500,
        }
    }
}

/// Inclusive range for the per-exchange score adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaRange {
    pub min: i32,
    pub max: i32,
}

impl Default for DeltaRange {
    fn default() -> Self {
        Self { min: -3, max: 7 }
    }
}

/// Configuration for an arena session.
///
/// Loadable from TOML via [`ArenaConfig::load`]; all fields are optional in
/// the file and fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Total call length in seconds.
    #[serde(default = "default_session_secs")]
    pub session_secs: u32,
    /// Score a session starts from.
    #[serde(default = "default_starting_score")]
    pub starting_score: u8,
    /// Countdown tick interval. Semantically one second; tests shrink it.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Counterpart thinking delay range in milliseconds.
    #[serde(default)]
    pub reply_delay_ms: DelayRange,
    /// Per-exchange score delta range.
    #[serde(default)]
    pub score_delta: DeltaRange,
}

fn default_session_secs() -> u32 {
    900
}

fn default_starting_score() -> u8 {
    50
}

fn default_tick_interval_ms() -> u64 {
    1_000
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            session_secs: default_session_secs(),
            starting_score: default_starting_score(),
            tick_interval_ms: default_tick_interval_ms(),
            reply_delay_ms: DelayRange::default(),
            score_delta: DeltaRange::default(),
        }
    }
}

impl ArenaConfig {
    /// Parses a configuration from a TOML string and validates it.
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed TOML, or a config error
    /// if validation fails.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: ArenaConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read, or the same errors
    /// as [`ArenaConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns a config error for a zero session length, a zero tick
    /// interval, a starting score above 100, or an inverted range.
    pub fn validate(&self) -> Result<()> {
        if self.session_secs == 0 {
            return Err(CaliberError::config("session_secs must be positive"));
        }
        if self.tick_interval_ms == 0 {
            return Err(CaliberError::config("tick_interval_ms must be positive"));
        }
        if self.starting_score > 100 {
            return Err(CaliberError::config(format!(
                "starting_score must be at most 100, got {}",
                self.starting_score
            )));
        }
        if self.reply_delay_ms.min > self.reply_delay_ms.max {
            return Err(CaliberError::config(format!(
                "reply_delay_ms range is inverted: {}..{}",
                self.reply_delay_ms.min, self.reply_delay_ms.max
            )));
        }
        if self.score_delta.min > self.score_delta.max {
            return Err(CaliberError::config(format!(
                "score_delta range is inverted: {}..{}",
                self.score_delta.min, self.score_delta.max
            )));
        }
        Ok(())
    }

    /// Returns the tick interval as a [`Duration`].
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
