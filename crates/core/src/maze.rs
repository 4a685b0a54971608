//! Maze assembly - validated config in, carved maze with a goal out.

use crate::generator::carve;
use crate::grid::{validate_dimensions, MazeGrid};
use crate::rng::RngPort;
use crate::search::farthest_point;
use crate::types::{MazeError, Pos, Result, Tile, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_START};

/// Startup configuration. Fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Pos,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start: DEFAULT_START,
        }
    }
}

impl MazeConfig {
    pub fn new(rows: usize, cols: usize, start: Pos) -> Self {
        Self { rows, cols, start }
    }

    /// Check dimensions and start before any work is done.
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.rows, self.cols)?;

        let s = self.start;
        let interior = s.row < self.rows - 1 && s.col < self.cols - 1;
        if !s.is_room() || !interior {
            return Err(MazeError::InvalidStart {
                row: s.row,
                col: s.col,
            });
        }
        Ok(())
    }
}

/// A generated maze with its goal in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    /// Static layer: walls, paths and the goal. Never mutated after generation.
    pub grid: MazeGrid,
    pub start: Pos,
    pub goal: Pos,
    /// Length of the only path from start to goal.
    pub min_moves: usize,
}

impl Maze {
    pub fn generate<R: RngPort + ?Sized>(config: &MazeConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let mut grid = MazeGrid::skeleton(config.rows, config.cols)?;
        carve(&mut grid, config.start, rng)?;

        let found = farthest_point(&grid, config.start)?;
        // A single-room maze has nowhere to go; leave the start open rather
        // than putting the goal under the player.
        if found.farthest != config.start {
            grid.set(found.farthest, Tile::Goal);
        }

        log::debug!(
            "maze ready: goal {} needs {} moves",
            found.farthest,
            found.max_distance
        );

        Ok(Self {
            grid,
            start: config.start,
            goal: found.farthest,
            min_moves: found.max_distance,
        })
    }
}
