//! Structural precondition errors.
//!
//! None of these are transient. They are raised before generation starts, or
//! when decoding raw tile symbols, and there is nothing to retry.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze dimensions must be odd and at least 3, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("start ({row}, {col}) is not a room inside the border")]
    InvalidStart { row: usize, col: usize },

    #[error("unknown tile symbol {0:#04x}")]
    UnknownTileKind(u8),
}

pub type Result<T> = std::result::Result<T, MazeError>;
