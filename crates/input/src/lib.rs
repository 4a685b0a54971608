//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::InputEvent`], the only
//! thing the maze session understands.

pub mod map;

pub use tui_maze_types as types;

pub use map::{map_key_event, should_quit};
