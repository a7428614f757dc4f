//! Session domain module.
//!
//! This module contains the session state machine, its transcript types,
//! the events a live session publishes, and the repository interface.
//!
//! # Module Structure
//!
//! - `model`: Core session entity (`ArenaSession`, `SessionSummary`)
//! - `phase`: Lifecycle phases (`SessionPhase`)
//! - `turn`: Transcript types (`Speaker`, `Turn`)
//! - `event`: Events published to the frontend (`SessionEvent`)
//! - `repository`: Repository trait for session storage

mod event;
mod model;
mod phase;
mod repository;
mod turn;

// Re-export public API
pub use event::SessionEvent;
pub use model::{ArenaSession, SessionSummary};
pub use phase::SessionPhase;
pub use repository::SessionRepository;
pub use turn::{Speaker, Turn};
