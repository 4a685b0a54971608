//! Terminal maze renderer.
//!
//! A small, game-oriented rendering layer. Frames are diffed into a list of
//! [`DrawOp`]s by pure code, and only [`TerminalRenderer`] touches the
//! terminal.
//!
//! - [`palette`]: tile to color lookup
//! - [`diff`]: half-block packing and per-column diffing
//! - [`renderer`]: escape-sequence encoding and atomic frame flushes

pub mod diff;
pub mod palette;
pub mod renderer;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use diff::{display_rows, render, render_into, DrawOp};
pub use palette::tile_color;
pub use renderer::{encode_ops_into, TerminalRenderer};
