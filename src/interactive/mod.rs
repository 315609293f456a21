//! Interactive TUI for playing the day's puzzle

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
