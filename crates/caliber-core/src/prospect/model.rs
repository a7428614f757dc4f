//! Prospect profile domain model.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Personality taxonomy for generated prospects.
///
/// Declaration order is the classifier's priority order: when a description
/// matches several personalities, the first listed here wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "lowercase")]
pub enum Personality {
    Skeptical,
    Friendly,
    Busy,
    Aggressive,
    Neutral,
}

/// Call type taxonomy. Declaration order is the classifier's priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "lowercase")]
pub enum CallType {
    Cold,
    Warm,
    Discovery,
}

/// A generated prospect: the output of the chat creator flow.
///
/// Immutable once built. There is no error path: any description, including
/// the empty string, degrades to defaults and random pool picks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProspectProfile {
    pub name: String,
    pub company: String,
    pub role: String,
    pub personality: Personality,
    pub call_type: CallType,
}
