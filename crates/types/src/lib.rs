//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable from the maze
//! logic, the terminal renderer and the input mapping alike.
//!
//! # Grid Coordinates
//!
//! Positions are `(row, col)` with row 0 at the top. A cell whose row and
//! column are both odd is a **room**; every other cell is a wall or a seam
//! between two rooms.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 35 | Tile rows of a generated maze |
//! | `DEFAULT_COLS` | 35 | Tile columns of a generated maze |
//! | `DEFAULT_START` | (1, 1) | Entrance room |
//! | `MIN_DIMENSION` | 3 | Smallest legal row/column count |
//!
//! # Examples
//!
//! ```
//! use tui_maze_types::{Direction, Pos, Tile};
//!
//! let start = Pos::new(1, 1);
//! assert!(start.is_room());
//!
//! let below = start.step(Direction::Down, 1).unwrap();
//! assert_eq!(below, Pos::new(2, 1));
//! assert!(!below.is_room());
//!
//! assert_eq!(Tile::try_from(b'3'), Ok(Tile::Goal));
//! ```

pub mod error;

pub use error::{MazeError, Result};

/// Default tile rows of a generated maze.
pub const DEFAULT_ROWS: usize = 35;

/// Default tile columns of a generated maze.
pub const DEFAULT_COLS: usize = 35;

/// Default entrance room.
pub const DEFAULT_START: Pos = Pos::new(1, 1);

/// Smallest legal row/column count (one room plus its border).
pub const MIN_DIMENSION: usize = 3;

/// Upper half block. Foreground paints the top tile, background the bottom one.
pub const HALF_BLOCK: char = '▀';

/// A single tile of the maze.
///
/// The discriminants double as the tile's text symbol, so a tile fits in one
/// byte and indexes the palette directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tile {
    Path = b'0',
    Wall = b'1',
    Player = b'2',
    Goal = b'3',
}

impl Tile {
    /// All tile kinds, in palette order.
    pub const ALL: [Tile; 4] = [Tile::Path, Tile::Wall, Tile::Player, Tile::Goal];

    /// The one-byte symbol for this tile.
    pub fn symbol(self) -> u8 {
        self as u8
    }

    /// Whether the player may stand on this tile.
    pub fn is_walkable(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

impl TryFrom<u8> for Tile {
    type Error = MazeError;

    fn try_from(symbol: u8) -> Result<Self> {
        match symbol {
            b'0' => Ok(Tile::Path),
            b'1' => Ok(Tile::Wall),
            b'2' => Ok(Tile::Player),
            b'3' => Ok(Tile::Goal),
            other => Err(MazeError::UnknownTileKind(other)),
        }
    }
}

/// A `(row, col)` grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Rooms sit at odd row and odd column.
    pub fn is_room(self) -> bool {
        self.row % 2 == 1 && self.col % 2 == 1
    }

    /// Move `distance` cells in `dir`.
    ///
    /// Returns `None` if the result would have a negative coordinate. Upper
    /// bounds are the grid's business.
    pub fn step(self, dir: Direction, distance: usize) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr * distance as isize)?;
        let col = self.col.checked_add_signed(dc * distance as isize)?;
        Some(Pos { row, col })
    }

    /// The cell halfway between two rooms two steps apart.
    pub fn midpoint(self, other: Pos) -> Pos {
        Pos {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four grid directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in carving order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Neighbour order used by breadth-first search: down, up, right, left.
    ///
    /// Farthest-cell selection depends on this order, so it must not change.
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// `(row, col)` unit offset.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// One polled input, already decoupled from the keyboard backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Up,
    Down,
    Left,
    Right,
    Quit,
    /// Anything that is neither movement nor quit.
    None,
}

impl InputEvent {
    /// The movement direction, if this is a movement event.
    pub fn direction(self) -> Option<Direction> {
        match self {
            InputEvent::Up => Some(Direction::Up),
            InputEvent::Down => Some(Direction::Down),
            InputEvent::Left => Some(Direction::Left),
            InputEvent::Right => Some(Direction::Right),
            InputEvent::Quit | InputEvent::None => None,
        }
    }
}
