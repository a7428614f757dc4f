//! Letter grade derivation.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Minimum final score that counts as a passing call.
pub const PASSING_THRESHOLD: u8 = 85;

/// Letter grade for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Grade {
    #[serde(rename = "S")]
    #[strum(to_string = "S")]
    S,
    #[serde(rename = "A+")]
    #[strum(to_string = "A+")]
    APlus,
    #[serde(rename = "A")]
    #[strum(to_string = "A")]
    A,
    #[serde(rename = "B+")]
    #[strum(to_string = "B+")]
    BPlus,
    #[serde(rename = "B")]
    #[strum(to_string = "B")]
    B,
    #[serde(rename = "C+")]
    #[strum(to_string = "C+")]
    CPlus,
    #[serde(rename = "C")]
    #[strum(to_string = "C")]
    C,
    #[serde(rename = "D")]
    #[strum(to_string = "D")]
    D,
}

impl Grade {
    /// Maps a final score to its letter grade via the fixed threshold table.
    pub fn for_score(score: u8) -> Self {
        match score {
            95..=u8::MAX => Grade::S,
            90..=94 => Grade::APlus,
            85..=89 => Grade::A,
            80..=84 => Grade::BPlus,
            75..=79 => Grade::B,
            70..=74 => Grade::CPlus,
            65..=69 => Grade::C,
            _ => Grade::D,
        }
    }

    /// Whether a score clears the passing bar.
    pub fn is_passing(score: u8) -> bool {
        score >= PASSING_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_table_boundaries() {
        let cases = [
            (0, Grade::D),
            (64, Grade::D),
            (65, Grade::C),
            (69, Grade::C),
            (70, Grade::CPlus),
            (74, Grade::CPlus),
            (75, Grade::B),
            (79, Grade::B),
            (80, Grade::BPlus),
            (84, Grade::BPlus),
            (85, Grade::A),
            (89, Grade::A),
            (90, Grade::APlus),
            (94, Grade::APlus),
            (95, Grade::S),
            (100, Grade::S),
        ];
        for (score, expected) in cases {
            assert_eq!(Grade::for_score(score), expected, "score {}", score);
        }
    }

    #[test]
    fn test_passing_boundary() {
        assert!(!Grade::is_passing(84));
        assert!(Grade::is_passing(85));
        assert!(Grade::is_passing(100));
    }

    #[test]
    fn test_display() {
        assert_eq!(Grade::APlus.to_string(), "A+");
        assert_eq!(Grade::S.to_string(), "S");
    }
}
