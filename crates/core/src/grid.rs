//! Maze grid - tile matrix with wall/room parity
//!
//! The grid is stored as a flat row-major vector (like the playfield in a
//! falling-block game). Rows and columns are always odd and at least
//! [`MIN_DIMENSION`], so every room has a wall or seam on each side and the
//! outer border is never a room.

use std::fmt;

use crate::types::{MazeError, Pos, Result, Tile, MIN_DIMENSION};

/// Rectangular tile matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

/// Reject even or undersized dimensions.
pub fn validate_dimensions(rows: usize, cols: usize) -> Result<()> {
    let ok = |n: usize| n >= MIN_DIMENSION && n % 2 == 1;
    if ok(rows) && ok(cols) {
        Ok(())
    } else {
        Err(MazeError::InvalidDimensions { rows, cols })
    }
}

impl MazeGrid {
    /// All walls, then every room opened up.
    ///
    /// This is the isolated-rooms skeleton the generator carves into.
    pub fn skeleton(rows: usize, cols: usize) -> Result<Self> {
        validate_dimensions(rows, cols)?;

        let mut grid = Self {
            rows,
            cols,
            tiles: vec![Tile::Wall; rows * cols],
        };
        for row in (1..rows).step_by(2) {
            for col in (1..cols).step_by(2) {
                grid.set(Pos::new(row, col), Tile::Path);
            }
        }
        Ok(grid)
    }

    /// Build a grid from rows of tile symbols (`'1'` wall, `'0'` path,
    /// `'2'` player, `'3'` goal).
    pub fn from_symbols(lines: &[&str]) -> Result<Self> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.len());
        if lines.iter().any(|l| l.len() != cols) {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        validate_dimensions(rows, cols)?;

        let tiles = lines
            .iter()
            .flat_map(|l| l.bytes())
            .map(Tile::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows, cols, tiles })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline(always)]
    fn idx(&self, pos: Pos) -> Option<usize> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        Some(pos.row * self.cols + pos.col)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.idx(pos).is_some()
    }

    pub fn get(&self, pos: Pos) -> Option<Tile> {
        self.idx(pos).map(|i| self.tiles[i])
    }

    /// Out-of-bounds writes are ignored.
    pub fn set(&mut self, pos: Pos, tile: Tile) {
        if let Some(i) = self.idx(pos) {
            self.tiles[i] = tile;
        }
    }

    /// Strictly inside the outer border.
    pub fn is_interior(&self, pos: Pos) -> bool {
        pos.row > 0 && pos.col > 0 && pos.row < self.rows - 1 && pos.col < self.cols - 1
    }

    /// A room cell strictly inside the border.
    pub fn is_interior_room(&self, pos: Pos) -> bool {
        pos.is_room() && self.is_interior(pos)
    }

    pub fn is_walkable(&self, pos: Pos) -> bool {
        self.get(pos).is_some_and(Tile::is_walkable)
    }

    /// Row-major iterator over every room coordinate.
    pub fn rooms(&self) -> impl Iterator<Item = Pos> + '_ {
        (1..self.rows)
            .step_by(2)
            .flat_map(move |row| (1..self.cols).step_by(2).map(move |col| Pos::new(row, col)))
    }

    pub fn room_count(&self) -> usize {
        ((self.rows - 1) / 2) * ((self.cols - 1) / 2)
    }

    /// Seams between two rooms that have been carved open.
    ///
    /// A seam has exactly one odd coordinate and lies inside the border.
    pub fn carved_seams(&self) -> impl Iterator<Item = Pos> + '_ {
        (1..self.rows - 1)
            .flat_map(move |row| (1..self.cols - 1).map(move |col| Pos::new(row, col)))
            .filter(|p| (p.row % 2 == 1) != (p.col % 2 == 1))
            .filter(move |p| self.is_walkable(*p))
    }

    /// Iterator over tile rows.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.tiles.chunks(self.cols)
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_slices() {
            for tile in row {
                write!(f, "{}", tile.symbol() as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
