//! The counterpart seam.
//!
//! The arena runner talks to the prospect through the [`Counterpart`]
//! trait so tests can swap in a deterministic double. The shipped
//! implementation is [`ScriptedCounterpart`], which draws from the track's
//! fixed reply pool.

use crate::persona::{CounterpartPersona, persona_for};
use crate::scripts::{choose_reply, script_for};
use caliber_core::config::{DelayRange, DeltaRange};
use caliber_core::track::Track;
use rand::Rng;
use std::time::Duration;

/// The prospect on the other end of a simulated call.
pub trait Counterpart: Send + Sync {
    /// The persona card for this counterpart.
    fn persona(&self) -> &CounterpartPersona;

    /// The scene-setting first line of the call.
    fn opener(&self) -> String;

    /// Produces the next reply. No semantic analysis of the operator's
    /// words happens here; grading is not content-based.
    fn reply(&self) -> String;
}

/// Scripted counterpart backed by a track's fixed reply pool.
pub struct ScriptedCounterpart {
    track: Track,
}

impl ScriptedCounterpart {
    pub fn new(track: Track) -> Self {
        Self { track }
    }

    pub fn track(&self) -> Track {
        self.track
    }
}

impl Counterpart for ScriptedCounterpart {
    fn persona(&self) -> &CounterpartPersona {
        persona_for(self.track)
    }

    fn opener(&self) -> String {
        script_for(self.track).opener.to_string()
    }

    fn reply(&self) -> String {
        let reply = choose_reply(self.track, &mut rand::thread_rng());
        tracing::trace!(track = %self.track, reply, "picked scripted reply");
        reply.to_string()
    }
}

/// Samples a thinking delay from the configured range.
pub fn sample_reply_delay(range: &DelayRange, rng: &mut impl Rng) -> Duration {
    Duration::from_millis(rng.gen_range(range.min..=range.max))
}

/// Samples a per-exchange score delta from the configured range.
pub fn sample_score_delta(range: &DeltaRange, rng: &mut impl Rng) -> i32 {
    rng.gen_range(range.min..=range.max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_scripted_counterpart_uses_track_persona() {
        let counterpart = ScriptedCounterpart::new(Track::B2bEnterprise);
        assert_eq!(counterpart.persona().name, "Elena Vasquez");
        assert_eq!(
            counterpart.opener(),
            script_for(Track::B2bEnterprise).opener
        );
    }

    #[test]
    fn test_reply_is_member_of_pool() {
        let counterpart = ScriptedCounterpart::new(Track::B2cHighTicket);
        for _ in 0..50 {
            let reply = counterpart.reply();
            assert!(
                script_for(Track::B2cHighTicket)
                    .replies
                    .contains(&reply.as_str())
            );
        }
    }

    #[test]
    fn test_delay_sampling_stays_in_range() {
        let range = DelayRange { min: 1_500, max: 3_500 };
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let delay = sample_reply_delay(&range, &mut rng);
            assert!(delay >= Duration::from_millis(1_500));
            assert!(delay <= Duration::from_millis(3_500));
        }
    }

    #[test]
    fn test_delta_sampling_stays_in_range() {
        let range = DeltaRange { min: -3, max: 7 };
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..200 {
            let delta = sample_score_delta(&range, &mut rng);
            assert!((-3..=7).contains(&delta));
        }
    }

    #[test]
    fn test_degenerate_ranges_are_fixed_points() {
        let mut rng = StdRng::seed_from_u64(7);
        let delay = sample_reply_delay(&DelayRange { min: 10, max: 10 }, &mut rng);
        assert_eq!(delay, Duration::from_millis(10));
        let delta = sample_score_delta(&DeltaRange { min: 0, max: 0 }, &mut rng);
        assert_eq!(delta, 0);
    }
}
