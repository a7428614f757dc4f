//! `caliber grade` - inspect the report derivation for a score.

use super::render::print_report;
use anyhow::Result;
use caliber_core::report::ScoutingReport;
use caliber_core::track::Track;

pub fn run(score: u8, track: Track, json: bool) -> Result<()> {
    let report = ScoutingReport::derive(score, track, &mut rand::thread_rng());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}
