//! TUI Maze (workspace facade crate).
//!
//! Re-exports the member crates under `tui_maze::{core,input,term,types}` and
//! holds the command-line surface shared by the binary and its tests.

pub mod cli;

pub use tui_maze_core as core;
pub use tui_maze_input as input;
pub use tui_maze_term as term;
pub use tui_maze_types as types;
