//! `caliber arena` - the interactive roleplay REPL.
//!
//! A rustyline loop reads operator lines on the main task while a spawned
//! printer task drains session events (counterpart replies, score moves,
//! countdown, the final report) and renders them with colored output.

use super::render::print_report;
use anyhow::Result;
use caliber_application::{ArenaService, InMemorySessionRepository};
use caliber_core::config::ArenaConfig;
use caliber_core::session::SessionEvent;
use caliber_core::track::Track;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use rustyline::error::ReadlineError;
use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// REPL helper that provides completion, highlighting, and hints for the
/// in-call slash commands.
#[derive(Clone)]
struct ArenaHelper {
    commands: Vec<String>,
}

impl ArenaHelper {
    fn new() -> Self {
        Self {
            commands: vec!["/end".to_string(), "/score".to_string()],
        }
    }
}

impl Helper for ArenaHelper {}

impl Completer for ArenaHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for ArenaHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ArenaHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for ArenaHelper {}

pub async fn run(track: Option<Track>, config_path: Option<PathBuf>) -> Result<()> {
    let config = match config_path {
        Some(path) => ArenaConfig::load(path)?,
        None => ArenaConfig::default(),
    };

    let helper = ArenaHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    let track = match track {
        Some(track) => track,
        None => prompt_track(&mut rl)?,
    };

    let service = Arc::new(ArenaService::new(
        Arc::new(InMemorySessionRepository::new()),
        config,
    ));
    let (runner, mut events) = service.start_session(track).await?;

    let persona = runner.persona();
    println!();
    println!("{}", "=== Caliber Arena ===".bright_magenta().bold());
    println!(
        "{}",
        format!(
            "On the line: {} ({}, {})",
            persona.name, persona.role, persona.organization
        )
        .bright_black()
    );
    println!(
        "{}",
        "Type to speak. '/end' hangs up, '/score' shows the clock, 'quit' exits.".bright_black()
    );
    println!();

    // The printer task sets this when it sees the session end, so the REPL
    // loop can stop at the next prompt.
    let ended = Arc::new(AtomicBool::new(false));
    let counterpart_name = persona.name;
    let printer_ended = Arc::clone(&ended);
    let printer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match event {
                SessionEvent::SessionStarted { remaining_secs, .. } => {
                    println!(
                        "{}",
                        format!("Call connected. {} on the clock.", fmt_clock(remaining_secs))
                            .bright_black()
                    );
                }
                // The operator's own line is already on screen via readline
                SessionEvent::OperatorTurn { .. } => {}
                SessionEvent::CounterpartTyping => {
                    println!("{}", format!("{} is typing...", counterpart_name).bright_black());
                }
                SessionEvent::CounterpartTurn { text } => {
                    println!("{}", format!("[{}]", counterpart_name).bright_magenta());
                    for line in text.lines() {
                        println!("{}", line.bright_blue());
                    }
                }
                SessionEvent::ScoreChanged { score, delta } => {
                    println!("{}", format!("score {} ({:+})", score, delta).bright_black());
                }
                SessionEvent::CountdownTick { remaining_secs } => {
                    if remaining_secs > 0 && remaining_secs % 60 == 0 {
                        println!("{}", format!("{} left", fmt_clock(remaining_secs)).yellow());
                    } else if remaining_secs == 10 {
                        println!("{}", "10 seconds left!".bright_yellow().bold());
                    }
                }
                SessionEvent::SessionEnded { report } => {
                    println!();
                    println!("{}", "The call is over.".bright_yellow());
                    print_report(&report);
                    printer_ended.store(true, Ordering::SeqCst);
                }
            }
        }
    });

    loop {
        if ended.load(Ordering::SeqCst) {
            break;
        }
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    // Whitespace-only input is a local no-op, not an error
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match trimmed {
                    "quit" | "exit" => break,
                    "/end" => {
                        runner.end_call().await;
                        break;
                    }
                    "/score" => {
                        println!(
                            "{}",
                            format!(
                                "score {} with {} left",
                                runner.score().await,
                                fmt_clock(runner.remaining_secs().await)
                            )
                            .bright_black()
                        );
                    }
                    _ => {
                        if let Err(err) = runner.submit(trimmed).await {
                            if err.is_invalid_phase() {
                                // The clock ran out under us
                                break;
                            }
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", format!("readline error: {:?}", err).red());
                break;
            }
        }
    }

    // Archive the session (ending it first if the user just quit)
    service.finish_active().await?;

    // Let the printer flush the final report before we print the history
    tokio::time::sleep(Duration::from_millis(200)).await;
    printer.abort();

    let completed = service.list_completed().await?;
    if !completed.is_empty() {
        println!("{}", "Past calls this run:".bold());
        for summary in completed {
            let verdict = if summary.passing {
                "pass".bright_green()
            } else {
                "miss".bright_red()
            };
            println!(
                "  {}  {:>3} pts  grade {:<2} {}",
                summary.title, summary.final_score, summary.grade, verdict
            );
        }
    }

    Ok(())
}

fn prompt_track(rl: &mut Editor<ArenaHelper, rustyline::history::DefaultHistory>) -> Result<Track> {
    use strum::IntoEnumIterator;

    println!("{}", "Choose your arena:".bold());
    for (i, track) in Track::iter().enumerate() {
        let persona = caliber_roleplay::persona_for(track);
        println!(
            "  {}. {} - {}",
            i + 1,
            track.to_string().bright_cyan().bold(),
            track.blurb()
        );
        println!(
            "     {}",
            format!(
                "vs {} ({}, {})",
                persona.name, persona.role, persona.organization
            )
            .bright_black()
        );
    }

    loop {
        let line = rl.readline("track> ")?;
        let trimmed = line.trim();
        match trimmed {
            "1" => return Ok(Track::B2bEnterprise),
            "2" => return Ok(Track::B2cHighTicket),
            other => {
                if let Ok(track) = Track::from_str(other) {
                    return Ok(track);
                }
                println!("{}", "Pick 1, 2, b2b, or b2c.".yellow());
            }
        }
    }
}

fn fmt_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
