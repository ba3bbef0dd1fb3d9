//! TUI application state and logic

use super::animator::{Animator, Signal};
use crate::game::{InputEvent, Response, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long to wait for a key before drawing the next frame
const FRAME: Duration = Duration::from_millis(16);

/// Application state
pub struct App {
    pub session: Session,
    pub animator: Animator,
    pub should_quit: bool,
    /// Show the share grid under the board
    pub show_share: bool,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let animator = Animator::new(session.config());
        let mut app = Self {
            session,
            animator,
            should_quit: false,
            show_share: false,
        };
        app.play_effects();
        app
    }

    /// Handle one key press
    ///
    /// Quitting works at any time; everything else goes through the
    /// session's input gate.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Response> {
        let event = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return None;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return None;
            }
            KeyCode::Tab if self.session.phase().is_terminal() => {
                self.show_share = !self.show_share;
                return None;
            }
            KeyCode::Char(c) => InputEvent::Letter(c),
            KeyCode::Enter => InputEvent::Enter,
            KeyCode::Backspace => InputEvent::Delete,
            _ => return None,
        };

        let response = self.session.handle_input(event);
        self.play_effects();
        Some(response)
    }

    /// Advance animations by `elapsed` and deliver what finished
    pub fn tick(&mut self, elapsed: Duration, now: Instant) {
        for signal in self.animator.tick(elapsed) {
            match signal {
                Signal::TileFlipped => {
                    let phase = self.session.tile_revealed();
                    debug!(?phase, "Tile flipped");
                }
                Signal::NoticeFaded(id) => {
                    self.session.notice_faded(id);
                }
            }
        }

        for id in self.session.expire_notices(now) {
            self.animator.fade(id);
        }
        self.play_effects();
    }

    fn play_effects(&mut self) {
        for effect in self.session.drain_effects() {
            self.animator.play(effect);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let app = res?;
    if app.session.phase().is_terminal() {
        println!("{}", app.session.share_text());
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<App> {
    info!("TUI started");
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(FRAME)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let response = app.handle_key(key);
            debug!(code = ?key.code, ?response, "Key handled");
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_tick), now);
        last_tick = now;

        if app.should_quit {
            break;
        }
    }

    info!(phase = ?app.session.phase(), "TUI closed");
    Ok(app)
}
