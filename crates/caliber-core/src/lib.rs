//! Core domain layer for Caliber, the sales roleplay training engine.
//!
//! This crate holds the pure domain: the session state machine and its
//! transcript, scenario tracks, the prospect description parser, scouting
//! report derivation, configuration, and the shared error type. Everything
//! async (timers, delayed replies, cancellation) lives in
//! `caliber-application`; the scripted counterpart lives in
//! `caliber-roleplay`.

pub mod config;
pub mod error;
pub mod prospect;
pub mod report;
pub mod session;
pub mod track;

// Re-export common error type
pub use error::CaliberError;
