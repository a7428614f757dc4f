//! Cross-track script integration tests.

use caliber_core::track::Track;
use caliber_roleplay::{
    Counterpart, ScriptedCounterpart, choose_reply, persona_for, script_for,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strum::IntoEnumIterator;

#[test]
fn every_track_has_a_complete_persona_card() {
    for track in Track::iter() {
        let persona = persona_for(track);
        assert!(!persona.name.is_empty());
        assert!(!persona.role.is_empty());
        assert!(!persona.organization.is_empty());
        assert!(!persona.disposition.is_empty());
    }
}

#[test]
fn tracks_never_share_reply_pools() {
    let b2b = script_for(Track::B2bEnterprise);
    let b2c = script_for(Track::B2cHighTicket);
    for reply in b2b.replies {
        assert!(!b2c.replies.contains(reply), "shared reply: {}", reply);
    }
}

#[test]
fn seeded_selection_is_reproducible() {
    let a: Vec<&str> = (0..20)
        .scan(StdRng::seed_from_u64(42), |rng, _| {
            Some(choose_reply(Track::B2bEnterprise, rng))
        })
        .collect();
    let b: Vec<&str> = (0..20)
        .scan(StdRng::seed_from_u64(42), |rng, _| {
            Some(choose_reply(Track::B2bEnterprise, rng))
        })
        .collect();
    assert_eq!(a, b);
}

#[test]
fn counterpart_opener_matches_script() {
    for track in Track::iter() {
        let counterpart = ScriptedCounterpart::new(track);
        assert_eq!(counterpart.opener(), script_for(track).opener);
    }
}
