//! Core maze logic module - pure, deterministic, and testable
//!
//! This crate contains maze generation, goal placement and player movement.
//! It has **no dependencies** on terminals or input devices, making it:
//!
//! - **Deterministic**: the same seed produces the same maze
//! - **Testable**: every algorithm runs on plain in-memory grids
//!
//! # Module Structure
//!
//! - [`grid`]: odd-sized tile matrix with wall/room parity
//! - [`rng`]: the randomness port plus seeded and OS-backed sources
//! - [`generator`]: iterative randomized depth-first carving
//! - [`search`]: breadth-first farthest-point search for goal placement
//! - [`maze`]: config validation and the generate-then-place-goal pipeline
//! - [`frame`]: static maze layer with the player composed on top
//! - [`session`]: input handling, move counting and the end-of-run summary
//!
//! # Example
//!
//! ```
//! use tui_maze_core::{GameSession, Maze, MazeConfig, SessionStep, SimpleRng};
//! use tui_maze_types::{InputEvent, Pos};
//!
//! let config = MazeConfig::new(11, 11, Pos::new(1, 1));
//! let maze = Maze::generate(&config, &mut SimpleRng::new(12345)).unwrap();
//! assert_eq!(maze.grid.carved_seams().count(), maze.grid.room_count() - 1);
//!
//! let mut session = GameSession::new(&maze);
//! assert_ne!(session.apply(InputEvent::Quit), SessionStep::Moved);
//! ```

pub mod frame;
pub mod generator;
pub mod grid;
pub mod maze;
pub mod rng;
pub mod search;
pub mod session;

pub use tui_maze_types as types;

// Re-export commonly used types for convenience
pub use frame::FrameBuffer;
pub use generator::carve;
pub use grid::MazeGrid;
pub use maze::{Maze, MazeConfig};
pub use rng::{shuffle, EntropyRng, RngPort, SimpleRng};
pub use search::{farthest_point, SearchResult};
pub use session::{GameSession, RunSummary, SessionStep};
