//! Prospect domain module.
//!
//! The chat-creator flow: a free-text description goes in, an immutable
//! [`ProspectProfile`] comes out.
//!
//! # Module Structure
//!
//! - `model`: Profile record and taxonomies (`ProspectProfile`, `Personality`, `CallType`)
//! - `parser`: Keyword classification and profile assembly
//! - `pools`: Fixed pools for randomized fields

mod model;
mod parser;
mod pools;

// Re-export public API
pub use model::{CallType, Personality, ProspectProfile};
pub use parser::{classify_call_type, classify_personality, classify_role, parse_description};
pub use pools::{COMPANIES, FALLBACK_ROLES, NAMES};
