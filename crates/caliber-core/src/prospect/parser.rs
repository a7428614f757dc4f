//! Prospect description parser.
//!
//! Classifies a free-text prospect description into the fixed taxonomy by
//! case-insensitive substring match. Each classifier checks its keyword
//! table in a fixed priority order and the first match wins; anything
//! unmatched falls back to a default or a random pool pick.

use super::model::{CallType, Personality, ProspectProfile};
use super::pools;
use rand::Rng;
use rand::seq::SliceRandom;

/// Personality keywords, checked in priority order.
const PERSONALITY_KEYWORDS: &[(Personality, &[&str])] = &[
    (Personality::Skeptical, &["skeptic", "doubt", "distrust", "cynical"]),
    (Personality::Friendly, &["friendly", "warm", "cheerful", "pleasant"]),
    (Personality::Busy, &["busy", "rushed", "no time", "hurry", "swamped"]),
    (
        Personality::Aggressive,
        &["aggressive", "hostile", "confrontational", "blunt"],
    ),
];

/// Call type keywords, checked in priority order.
const CALL_TYPE_KEYWORDS: &[(CallType, &[&str])] = &[
    (CallType::Cold, &["cold"]),
    (CallType::Warm, &["warm", "referral", "follow-up", "followup"]),
    (CallType::Discovery, &["discovery", "demo", "qualif"]),
];

/// Role titles with their trigger keywords. An explicit match takes
/// precedence over the random fallback pool.
const ROLE_KEYWORDS: &[(&str, &[&str])] = &[
    ("CTO", &["cto", "chief technology"]),
    ("VP of Sales", &["vp of sales", "vp sales", "head of sales"]),
    ("CFO", &["cfo", "chief financial"]),
];

/// Classifies the prospect's personality. Defaults to `Neutral`.
pub fn classify_personality(description: &str) -> Personality {
    let haystack = description.to_lowercase();
    for (personality, keywords) in PERSONALITY_KEYWORDS {
        if keywords.iter().any(|k| haystack.contains(k)) {
            return *personality;
        }
    }
    Personality::Neutral
}

/// Classifies the call type. Defaults to `Cold`.
pub fn classify_call_type(description: &str) -> CallType {
    let haystack = description.to_lowercase();
    for (call_type, keywords) in CALL_TYPE_KEYWORDS {
        if keywords.iter().any(|k| haystack.contains(k)) {
            return *call_type;
        }
    }
    CallType::Cold
}

/// Resolves the prospect's role: explicit keyword match first, otherwise a
/// uniformly random pick from the fallback pool.
pub fn classify_role(description: &str, rng: &mut impl Rng) -> String {
    let haystack = description.to_lowercase();
    for (role, keywords) in ROLE_KEYWORDS {
        if keywords.iter().any(|k| haystack.contains(k)) {
            return (*role).to_string();
        }
    }
    random_pick(pools::FALLBACK_ROLES, rng)
}

/// Builds a full prospect profile from a free-text description.
///
/// Name and company are always random pool picks, independent of the input.
pub fn parse_description(description: &str, rng: &mut impl Rng) -> ProspectProfile {
    let profile = ProspectProfile {
        name: random_pick(pools::NAMES, rng),
        company: random_pick(pools::COMPANIES, rng),
        role: classify_role(description, rng),
        personality: classify_personality(description),
        call_type: classify_call_type(description),
    };
    tracing::debug!(
        personality = %profile.personality,
        call_type = %profile.call_type,
        role = %profile.role,
        "parsed prospect description"
    );
    profile
}

fn random_pick(pool: &[&str], rng: &mut impl Rng) -> String {
    // Pools are non-empty consts; choose only returns None on an empty slice
    pool.choose(rng).copied().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_personality_priority_is_order_stable() {
        // Contains both "skeptical" and "friendly"; skeptical is checked first
        assert_eq!(
            classify_personality("skeptical but friendly"),
            Personality::Skeptical
        );
        assert_eq!(
            classify_personality("friendly yet skeptical"),
            Personality::Skeptical
        );
    }

    #[test]
    fn test_personality_matching_is_case_insensitive() {
        assert_eq!(classify_personality("VERY BUSY executive"), Personality::Busy);
        assert_eq!(classify_personality("Hostile negotiator"), Personality::Aggressive);
    }

    #[test]
    fn test_personality_defaults_to_neutral() {
        assert_eq!(classify_personality(""), Personality::Neutral);
        assert_eq!(classify_personality("a perfectly ordinary buyer"), Personality::Neutral);
    }

    #[test]
    fn test_call_type_classification() {
        assert_eq!(classify_call_type("a cold outreach"), CallType::Cold);
        assert_eq!(classify_call_type("a warm intro"), CallType::Warm);
        assert_eq!(classify_call_type("came in as a referral"), CallType::Warm);
        assert_eq!(classify_call_type("discovery call with their team"), CallType::Discovery);
        assert_eq!(classify_call_type("scheduled a demo"), CallType::Discovery);
        assert_eq!(classify_call_type(""), CallType::Cold);
    }

    #[test]
    fn test_explicit_role_beats_random_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(classify_role("their CTO is hands-on", &mut rng), "CTO");
        assert_eq!(classify_role("the vp of sales owns the budget", &mut rng), "VP of Sales");
        assert_eq!(classify_role("chief financial officer", &mut rng), "CFO");
    }

    #[test]
    fn test_unrecognized_role_comes_from_pool() {
        let mut rng = StdRng::seed_from_u64(2);
        let role = classify_role("someone in the org", &mut rng);
        assert!(pools::FALLBACK_ROLES.contains(&role.as_str()));
    }

    #[test]
    fn test_empty_description_degrades_to_defaults() {
        let mut rng = StdRng::seed_from_u64(3);
        let profile = parse_description("", &mut rng);
        assert_eq!(profile.personality, Personality::Neutral);
        assert_eq!(profile.call_type, CallType::Cold);
        assert!(!profile.name.is_empty());
        assert!(!profile.company.is_empty());
        assert!(pools::NAMES.contains(&profile.name.as_str()));
        assert!(pools::COMPANIES.contains(&profile.company.as_str()));
    }

    #[test]
    fn test_parse_is_deterministic_under_seed() {
        let a = parse_description("busy CFO, cold call", &mut StdRng::seed_from_u64(9));
        let b = parse_description("busy CFO, cold call", &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        assert_eq!(a.personality, Personality::Busy);
        assert_eq!(a.call_type, CallType::Cold);
        assert_eq!(a.role, "CFO");
    }
}
