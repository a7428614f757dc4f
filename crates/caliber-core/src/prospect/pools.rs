//! Fixed pools for randomized prospect fields.

/// Prospect names, picked uniformly at random regardless of the description.
pub const NAMES: &[&str] = &[
    "Sarah Chen",
    "Marcus Webb",
    "Priya Natarajan",
    "David Kim",
    "Rachel Foster",
    "Tom Bradley",
    "Alicia Grant",
    "Omar Haddad",
];

/// Prospect companies, picked uniformly at random.
pub const COMPANIES: &[&str] = &[
    "Apex Logistics",
    "Brightline Software",
    "Corewave Systems",
    "Meridian Health",
    "Summit Financial",
    "Northstar Manufacturing",
    "Harbor & Pine",
    "Vantage Retail Group",
];

/// Roles used when the description names no recognized title.
pub const FALLBACK_ROLES: &[&str] = &[
    "CEO",
    "COO",
    "VP of Marketing",
    "Head of Procurement",
    "Director of Operations",
];
