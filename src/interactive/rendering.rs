//! TUI rendering with ratatui
//!
//! Board, keyboard and notices for the daily puzzle.

use super::app::App;
use crate::game::{GamePhase, KeyState, LAYOUT, NoticeStyle, Tile, TileState};
use crate::output::formatters::tile_label;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let rows = u16::try_from(app.session.board().rows().len()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                      // Header
            Constraint::Length(rows.saturating_add(2)), // Board
            Constraint::Length(5),                      // Keyboard
            Constraint::Min(3),                         // Notices
            Constraint::Length(1),                      // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    if app.show_share && app.session.phase().is_terminal() {
        render_share(f, app, chunks[3]);
    } else {
        render_notices(f, app, chunks[3]);
    }
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Plain)
                .style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(header, area);
}

fn tile_style(state: TileState) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match state {
        TileState::Empty => Style::default().fg(Color::DarkGray),
        TileState::Active => style.fg(Color::White),
        TileState::Correct => style.fg(Color::Black).bg(Color::Green),
        TileState::WrongLocation => style.fg(Color::Black).bg(Color::Yellow),
        TileState::Wrong => style.fg(Color::White).bg(Color::DarkGray),
    }
}

fn tile_span(app: &App, row: usize, tile: &Tile) -> Span<'static> {
    let col = tile.position;
    let mut style = tile_style(tile.state);

    // Edge-on halfway through a flip
    if let Some(p) = app.animator.flip_progress(row, col)
        && (0.35..0.65).contains(&p)
    {
        return Span::styled(" ─ ", Style::default().fg(Color::Gray));
    }
    if let Some(p) = app.animator.dance_progress(row, col)
        && p < 0.5
    {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(tile_label(tile), style)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .session
        .board()
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = Vec::with_capacity(row.tiles().len() * 2 + 1);
            let shake = app.animator.shake_offset(i);
            if shake > 0 {
                spans.push(Span::raw("  "));
            }
            for tile in row.tiles() {
                spans.push(tile_span(app, i, tile));
                spans.push(Span::raw(" "));
            }
            if shake < 0 {
                spans.push(Span::raw("  "));
            }
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(board, area);
}

fn key_style(state: KeyState) -> Style {
    match state {
        KeyState::Unused => Style::default().fg(Color::White).bg(Color::Gray),
        KeyState::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        KeyState::WrongLocation => Style::default().fg(Color::Black).bg(Color::Yellow),
        KeyState::Wrong => Style::default().fg(Color::DarkGray),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();
    let lines: Vec<Line> = LAYOUT
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .filter_map(|ch| {
                    keyboard.state(ch).map(|state| {
                        Span::styled(
                            format!(" {} ", ch.to_ascii_uppercase()),
                            key_style(state).add_modifier(Modifier::BOLD),
                        )
                    })
                })
                .flat_map(|key| [key, Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(paragraph, area);
}

fn render_notices(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .notifier()
        .iter()
        .map(|notice| {
            let style = if notice.fading {
                Style::default().fg(Color::DarkGray)
            } else {
                match notice.style {
                    NoticeStyle::Info => Style::default()
                        .fg(Color::Black)
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD),
                    NoticeStyle::Success => Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                    NoticeStyle::Error => Style::default().fg(Color::Red),
                }
            };
            ListItem::new(Line::from(format!(" {} ", notice.text)).alignment(Alignment::Center))
                .style(style)
        })
        .collect();

    f.render_widget(List::new(items), area);
}

fn render_share(f: &mut Frame, app: &App, area: Rect) {
    let share = Paragraph::new(app.session.share_text())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Share ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(share, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let text = if session.fatal_error().is_some() {
        "Halted | Esc: Quit".to_string()
    } else {
        match session.phase() {
            GamePhase::AwaitingInput => {
                let used = session.board().committed_rows().count();
                format!(
                    "Guess {}/{} | Enter: Submit | Backspace: Delete | Esc: Quit",
                    used + 1,
                    session.config().rows
                )
            }
            GamePhase::Revealing => "Revealing...".to_string(),
            GamePhase::Won | GamePhase::Lost => "Tab: Share | Esc: Quit".to_string(),
        }
    };

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
