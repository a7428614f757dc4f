//! `caliber prospect` - the chat-creator flow in the terminal.

use super::render::print_profile;
use anyhow::Result;
use caliber_core::prospect::parse_description;
use colored::Colorize;
use rustyline::DefaultEditor;

pub fn run(description: &[String], json: bool) -> Result<()> {
    let description = if description.is_empty() {
        prompt_description()?
    } else {
        description.join(" ")
    };

    let profile = parse_description(&description, &mut rand::thread_rng());

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print_profile(&profile);
    }
    Ok(())
}

fn prompt_description() -> Result<String> {
    println!(
        "{}",
        "Describe the prospect you want to practice against (personality, role, call type):"
            .bold()
    );
    println!(
        "{}",
        "Anything goes; an empty description gets you a random profile.".bright_black()
    );
    let mut rl = DefaultEditor::new()?;
    let line = rl.readline("prospect> ")?;
    Ok(line)
}
