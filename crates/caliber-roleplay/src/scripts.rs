//! Scripted reply pools.
//!
//! One pool per track. Replies are picked uniformly at random; nothing here
//! inspects the operator's words. The opener is separate so the first
//! counterpart turn of a call is always a scene-setting line.

use caliber_core::track::Track;
use rand::Rng;
use rand::seq::SliceRandom;

/// A track's canned lines.
pub struct ReplyScript {
    pub opener: &'static str,
    pub replies: &'static [&'static str],
}

static B2B_SCRIPT: ReplyScript = ReplyScript {
    opener: "This is Elena. I have a hard stop in fifteen minutes, so make this count.",
    replies: &[
        "We already have a vendor for this. Why would I rip that out?",
        "Every vendor says they integrate in a week. Nobody ever has.",
        "What does your security review look like? I'm not adding risk for a dashboard.",
        "I have maybe two quarters of budget flexibility, and this isn't on the roadmap.",
        "Send me a reference from a company our size. Logos on a slide don't count.",
        "My engineers hate migrations. What's the actual lift on our side?",
        "Give me the one number I should care about.",
        "Interesting. I'm not convinced, but keep going.",
        "If this breaks at 2 a.m., who picks up the phone?",
        "Skip the value story and give me the pricing model.",
    ],
};

static B2C_SCRIPT: ReplyScript = ReplyScript {
    opener: "Hi, yeah, I saw your ad. Honestly, I'm still comparing a couple of quotes.",
    replies: &[
        "That's a lot of money. What am I actually getting over the cheaper option?",
        "I'd want to talk it over with my partner before signing anything.",
        "Do you offer financing? Paying that up front isn't happening.",
        "The last company that quoted us promised a lot and delivered late.",
        "How long does installation actually take, door to door?",
        "I read some mixed reviews. What went wrong for those customers?",
        "If I say no today, does the price change tomorrow? That trick annoys me.",
        "Okay, that part actually sounds good. Go on.",
        "What does the warranty cover, in plain English?",
        "We're not in a rush. Why should we do this now?",
    ],
};

/// Returns the reply script for a track.
pub fn script_for(track: Track) -> &'static ReplyScript {
    match track {
        Track::B2bEnterprise => &B2B_SCRIPT,
        Track::B2cHighTicket => &B2C_SCRIPT,
    }
}

/// Picks one reply uniformly at random from the track's pool.
pub fn choose_reply(track: Track, rng: &mut impl Rng) -> &'static str {
    // Pools are non-empty statics; choose only returns None on an empty slice
    script_for(track).replies.choose(rng).copied().unwrap_or_default()
}
