//! Shared terminal rendering for report and profile cards.

use caliber_core::prospect::ProspectProfile;
use caliber_core::report::ScoutingReport;
use colored::Colorize;

/// Prints the scouting report card.
pub fn print_report(report: &ScoutingReport) {
    println!();
    println!("{}", "==== SCOUTING REPORT ====".bright_magenta().bold());
    println!("  Track:  {}", report.track.to_string().bright_cyan());
    let verdict = if report.passing {
        "passing".bright_green()
    } else {
        "not passing".bright_red()
    };
    println!(
        "  Score:  {} / 100   grade {}   ({})",
        report.final_score.to_string().bold(),
        report.grade.to_string().bold(),
        verdict
    );
    for metric in &report.metrics {
        println!(
            "  {:<20} {:>3}  {}",
            metric.metric.to_string(),
            metric.score,
            score_bar(metric.score).bright_black()
        );
    }
    println!();
}

/// Prints the prospect profile card.
pub fn print_profile(profile: &ProspectProfile) {
    println!();
    println!("{}", "==== PROSPECT ====".bright_magenta().bold());
    println!("  Name:         {}", profile.name.bold());
    println!("  Company:      {}", profile.company);
    println!("  Role:         {}", profile.role);
    println!("  Personality:  {}", profile.personality.to_string().bright_cyan());
    println!("  Call type:    {}", profile.call_type.to_string().bright_cyan());
    println!();
}

fn score_bar(score: u8) -> String {
    "#".repeat((score / 5) as usize)
}
