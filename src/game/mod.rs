//! Game state and the turn state machine
//!
//! Front-ends talk to a [`Session`]; the other types are exposed for
//! rendering.

pub mod board;
pub mod controller;
pub mod effects;
pub mod keyboard;
pub mod notifier;
pub mod session;

pub use board::{Board, Row, Tile, TileState};
pub use controller::{GamePhase, InputGate, TileReveal, TurnController};
pub use effects::{Effect, stagger_offsets};
pub use keyboard::{KeyState, Keyboard, LAYOUT};
pub use notifier::{Lifetime, Notice, NoticeId, NoticeStyle, Notifier};
pub use session::{InputEvent, Response, Session};
