//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the widget core does not depend on terminal
//! crates.

pub mod crossterm;
pub mod terminal_guard;
pub mod view;
