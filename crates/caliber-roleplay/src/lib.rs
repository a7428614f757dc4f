//! Interaction layer for Caliber: the scripted counterpart.
//!
//! Every "AI" behavior in the product is a fixed pool of canned lines and
//! bounded random numbers. This crate owns those pools and the trait seam
//! (`Counterpart`) the arena runner drives, keeping the runner testable
//! with deterministic doubles.

mod counterpart;
mod persona;
mod scripts;

// Re-export public API
pub use counterpart::{Counterpart, ScriptedCounterpart, sample_reply_delay, sample_score_delta};
pub use persona::{B2B_PERSONA, B2C_PERSONA, CounterpartPersona, persona_for};
pub use scripts::{ReplyScript, choose_reply, script_for};
