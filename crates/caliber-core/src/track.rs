//! Scenario tracks.
//!
//! A track selects which counterpart persona and reply pool a roleplay
//! session runs against. There are exactly two, matching the product's two
//! scenario cards.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The two fixed scenario categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum Track {
    /// Enterprise software sale to a technical buyer.
    #[strum(to_string = "B2B Enterprise", serialize = "b2b", serialize = "b2b_enterprise")]
    B2bEnterprise,
    /// High-ticket consumer sale to an individual buyer.
    #[strum(to_string = "B2C High Ticket", serialize = "b2c", serialize = "b2c_high_ticket")]
    B2cHighTicket,
}

impl Track {
    /// Short description shown on the track selection card.
    pub fn blurb(&self) -> &'static str {
        match self {
            Track::B2bEnterprise => {
                "Pitch an enterprise platform to a skeptical CTO guarding budget and engineering time."
            }
            Track::B2cHighTicket => {
                "Close a premium home installation with a price-conscious buyer comparing quotes."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_short_names() {
        assert_eq!(Track::from_str("b2b").unwrap(), Track::B2bEnterprise);
        assert_eq!(Track::from_str("B2C").unwrap(), Track::B2cHighTicket);
        assert!(Track::from_str("b2g").is_err());
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Track::B2bEnterprise.to_string(), "B2B Enterprise");
        assert_eq!(Track::B2cHighTicket.to_string(), "B2C High Ticket");
    }

    #[test]
    fn test_exactly_two_tracks() {
        assert_eq!(Track::iter().count(), 2);
    }
}
