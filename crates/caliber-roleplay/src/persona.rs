//! Counterpart personas.

use caliber_core::track::Track;
use serde::Serialize;

/// Profile of the scripted prospect on the other end of a call.
#[derive(Debug, Clone, Serialize)]
pub struct CounterpartPersona {
    pub name: &'static str,
    pub role: &'static str,
    pub organization: &'static str,
    pub disposition: &'static str,
}

/// Elena: the B2B enterprise buyer.
///
/// A CTO who has seen every pitch deck twice and guards her engineers'
/// time ruthlessly.
pub static B2B_PERSONA: CounterpartPersona = CounterpartPersona {
    name: "Elena Vasquez",
    role: "CTO",
    organization: "Corewave Systems",
    disposition: "Skeptical and analytical. Wants numbers, references, and a small integration surface before anything else.",
};

/// Jordan: the B2C high-ticket buyer.
///
/// A homeowner comparing premium installation quotes, price-conscious and
/// wary of sales pressure.
pub static B2C_PERSONA: CounterpartPersona = CounterpartPersona {
    name: "Jordan Avery",
    role: "Homeowner",
    organization: "Residential prospect",
    disposition: "Price-conscious and deliberate. Shops around, consults the household, and pushes back on urgency tactics.",
};

/// Returns the preset persona for a track.
pub fn persona_for(track: Track) -> &'static CounterpartPersona {
    match track {
        Track::B2bEnterprise => &B2B_PERSONA,
        Track::B2cHighTicket => &B2C_PERSONA,
    }
}
