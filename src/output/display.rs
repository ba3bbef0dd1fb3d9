//! Line-mode printers for game state

use super::formatters::{format_key, format_notice, format_tile, key_row_indent};
use crate::commands::TodayInfo;
use crate::game::{Board, GamePhase, Keyboard, LAYOUT, Notice, Session};
use colored::Colorize;

/// Print every row of the board
pub fn print_board(board: &Board) {
    println!();
    for row in board.rows() {
        let tiles: Vec<String> = row.tiles().iter().map(|t| format_tile(t).to_string()).collect();
        println!("    {}", tiles.join(" "));
    }
    println!();
}

/// Print the keyboard in QWERTY rows
pub fn print_keyboard(keyboard: &Keyboard) {
    let widest = LAYOUT.iter().map(|row| row.len()).max().unwrap_or(0);
    for row in LAYOUT {
        let keys: Vec<String> = row
            .chars()
            .filter_map(|ch| keyboard.state(ch).map(|state| format_key(ch, state).to_string()))
            .collect();
        println!("  {}{}", key_row_indent(row.len(), widest), keys.join(" "));
    }
    println!();
}

pub fn print_notice(notice: &Notice) {
    println!("  {}", format_notice(&notice.text, notice.style));
}

/// Print the end-of-game banner with the shareable grid
pub fn print_outcome(session: &Session) {
    println!("{}", "═".repeat(40).bright_cyan());
    match session.phase() {
        GamePhase::Won => println!("  {}", "🎉 Solved!".bright_green().bold()),
        GamePhase::Lost => {
            let target = session
                .revealed_target()
                .map_or_else(String::new, |w| w.text().to_uppercase());
            println!("  {} {}", "The word was".bright_white(), target.bright_yellow().bold());
        }
        GamePhase::AwaitingInput | GamePhase::Revealing => {}
    }
    println!("{}", "═".repeat(40).bright_cyan());
    println!("\n{}\n", session.share_text());
}

/// Print which puzzle is up, without the word
pub fn print_today(info: &TodayInfo) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("  Date:    {}", info.date.to_string().bright_yellow().bold());
    println!("  Epoch:   {}", info.epoch);
    if info.has_puzzle() {
        println!("  Puzzle:  {}", format!("#{}", info.offset).bright_cyan().bold());
        println!("  Words left in list: {}", info.days_remaining());
    } else {
        println!(
            "  {}",
            format!(
                "No puzzle for day {}: the list covers days 0 to {}",
                info.offset,
                info.available.saturating_sub(1)
            )
            .red()
        );
    }
    println!("{}", "─".repeat(40).cyan());
}
