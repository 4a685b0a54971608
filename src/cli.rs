//! Command-line configuration.

use clap::Parser;

use crate::core::{EntropyRng, MazeConfig, RngPort, SimpleRng};
use crate::types::{Pos, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_START};

/// Walk from the entrance to the hardest-to-reach cell of a random maze.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Maze height in tiles (odd, at least 3)
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Maze width in tiles (odd, at least 3)
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Entrance row (odd)
    #[arg(long, default_value_t = DEFAULT_START.row)]
    pub start_row: usize,

    /// Entrance column (odd)
    #[arg(long, default_value_t = DEFAULT_START.col)]
    pub start_col: usize,

    /// Seed for a reproducible maze
    #[arg(long)]
    pub seed: Option<u32>,
}

impl Args {
    pub fn maze_config(&self) -> MazeConfig {
        MazeConfig::new(self.rows, self.cols, Pos::new(self.start_row, self.start_col))
    }

    /// Seeded LCG when `--seed` is given, OS entropy otherwise.
    pub fn rng(&self) -> Box<dyn RngPort> {
        match self.seed {
            Some(seed) => Box::new(SimpleRng::new(seed)),
            None => Box::new(EntropyRng::new()),
        }
    }
}
