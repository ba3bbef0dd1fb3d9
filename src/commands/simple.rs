//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. There is no animation, so every
//! completion signal is delivered as soon as the session asks for it.

use crate::game::{InputEvent, Response, Session};
use crate::output::{print_board, print_keyboard, print_notice, print_outcome};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error on an I/O failure reading input, or with the
/// configuration error that halted the session.
pub fn run_simple(mut session: Session) -> Result<()> {
    println!("\n╔════════════════════════════════════════╗");
    println!("║        Daily Wordle - Line Mode        ║");
    println!("╚════════════════════════════════════════╝\n");
    println!(
        "Guess the word in {} tries. Type a word and press Enter.",
        session.config().rows
    );
    println!("Commands: 'quit' to exit\n");

    let stdin = io::stdin();
    play(&mut session, stdin.lock())
}

/// Play `session` with guesses read from `input`
///
/// Stops at the end of the game, on `quit`, or at end of input.
///
/// # Errors
///
/// Returns an error on an I/O failure, or with the configuration error that
/// halted the session.
pub fn play<R: BufRead>(session: &mut Session, mut input: R) -> Result<()> {
    loop {
        show_notices(session);
        if let Some(err) = session.fatal_error() {
            return Err(err.clone()).context("Game halted");
        }

        print_board(session.board());
        if session.phase().is_terminal() {
            print_outcome(session);
            return Ok(());
        }
        print_keyboard(session.keyboard());

        print!("Guess: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        let line = line.trim();
        if matches!(line, "quit" | "q" | "exit") {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
        submit_line(session, line);
    }
}

/// Replace the active row with `line` and submit it
fn submit_line(session: &mut Session, line: &str) -> Response {
    while session.handle_input(InputEvent::Delete) == Response::Updated {}
    let response = session.guess(line);

    if response == Response::RevealStarted {
        let phase = session.reveal_all();
        debug!(?phase, "Reveal finished");
    }
    // Nothing here animates
    for effect in session.drain_effects() {
        debug!(?effect, "Skipping effect");
    }
    response
}

/// Print every visible notice, oldest first, then dismiss it
fn show_notices(session: &mut Session) {
    let ids: Vec<_> = session.notifier().iter().map(|n| n.id).collect();
    for notice in session.notifier().iter().rev() {
        print_notice(notice);
    }
    for id in ids {
        session.clear_notice(id);
        session.notice_faded(id);
    }
}
