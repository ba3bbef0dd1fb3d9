//! Interactive TUI interface
//!
//! Full-screen play with animated reveals. The [`animator`] plays the
//! session's effects and feeds completion signals back into it.

pub mod animator;
pub mod app;
pub mod rendering;

pub use animator::{Animator, Signal};
pub use app::{App, run_tui};
