//! Frame buffer - static maze layer plus the player overlay
//!
//! The base grid is shared and never written after generation. The player is
//! composed on top when a tile is read, so the displayed frame differs from
//! the base in exactly the player's cell and a vacated cell always shows its
//! original tile again.

use std::rc::Rc;

use crate::grid::MazeGrid;
use crate::maze::Maze;
use crate::types::{Direction, MazeError, Pos, Result, Tile};

/// One displayable state of the maze.
///
/// Cloning is cheap: the base grid is reference counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    base: Rc<MazeGrid>,
    player: Pos,
}

impl FrameBuffer {
    pub fn new(base: Rc<MazeGrid>, player: Pos) -> Result<Self> {
        if !base.is_walkable(player) {
            return Err(MazeError::InvalidStart {
                row: player.row,
                col: player.col,
            });
        }
        Ok(Self { base, player })
    }

    /// Player standing on the maze entrance.
    pub fn from_maze(maze: &Maze) -> Self {
        Self {
            base: Rc::new(maze.grid.clone()),
            player: maze.start,
        }
    }

    pub fn base(&self) -> &MazeGrid {
        &self.base
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn rows(&self) -> usize {
        self.base.rows()
    }

    pub fn cols(&self) -> usize {
        self.base.cols()
    }

    /// The displayed tile at `pos`.
    pub fn tile(&self, pos: Pos) -> Option<Tile> {
        if pos == self.player {
            return Some(Tile::Player);
        }
        self.base.get(pos)
    }

    /// Materialize the displayed layer.
    pub fn displayed(&self) -> MazeGrid {
        let mut grid = (*self.base).clone();
        grid.set(self.player, Tile::Player);
        grid
    }

    /// Whether both frames draw over the same base maze.
    pub fn shares_base(&self, other: &FrameBuffer) -> bool {
        Rc::ptr_eq(&self.base, &other.base)
    }

    /// Move the player one cell.
    ///
    /// Returns `None` when the target is off the grid or a wall; the current
    /// frame is left untouched either way.
    pub fn try_move(&self, dir: Direction) -> Option<FrameBuffer> {
        let target = self.player.step(dir, 1)?;
        if !self.base.is_walkable(target) {
            return None;
        }
        Some(Self {
            base: Rc::clone(&self.base),
            player: target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> FrameBuffer {
        // Player at (1,1), goal at (1,3).
        let grid = MazeGrid::from_symbols(&[
            "11111", //
            "10031", //
            "11111",
        ])
        .unwrap();
        FrameBuffer::new(Rc::new(grid), Pos::new(1, 1)).unwrap()
    }

    #[test]
    fn player_is_overlaid_on_read() {
        let fb = corridor();
        assert_eq!(fb.tile(Pos::new(1, 1)), Some(Tile::Player));
        assert_eq!(fb.base().get(Pos::new(1, 1)), Some(Tile::Path));
        assert_eq!(fb.tile(Pos::new(7, 7)), None);
    }

    #[test]
    fn displayed_differs_from_base_in_one_cell() {
        let fb = corridor();
        let shown = fb.displayed();
        let diffs = shown
            .tiles()
            .iter()
            .zip(fb.base().tiles())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(diffs, 1);
        assert_eq!(shown.get(fb.player()), Some(Tile::Player));
    }

    #[test]
    fn wall_blocks_movement() {
        let fb = corridor();
        assert_eq!(fb.try_move(Direction::Up), None);
        assert_eq!(fb.try_move(Direction::Left), None);
        assert_eq!(fb.player(), Pos::new(1, 1));
    }

    #[test]
    fn edge_of_grid_blocks_movement() {
        let grid = MazeGrid::from_symbols(&["000", "000", "000"]).unwrap();
        let fb = FrameBuffer::new(Rc::new(grid), Pos::new(0, 0)).unwrap();
        assert_eq!(fb.try_move(Direction::Up), None);
        assert_eq!(fb.try_move(Direction::Left), None);
        let fb = FrameBuffer::new(Rc::clone(&fb.base), Pos::new(2, 2)).unwrap();
        assert_eq!(fb.try_move(Direction::Down), None);
        assert_eq!(fb.try_move(Direction::Right), None);
    }

    #[test]
    fn leaving_the_goal_restores_it() {
        let fb = corridor();
        let on_goal = fb
            .try_move(Direction::Right)
            .and_then(|f| f.try_move(Direction::Right))
            .unwrap();
        assert_eq!(on_goal.tile(Pos::new(1, 3)), Some(Tile::Player));

        let off_goal = on_goal.try_move(Direction::Left).unwrap();
        assert_eq!(off_goal.tile(Pos::new(1, 3)), Some(Tile::Goal));
        assert_eq!(off_goal.tile(Pos::new(1, 2)), Some(Tile::Player));
        assert_eq!(off_goal.tile(Pos::new(1, 1)), Some(Tile::Path));
    }

    #[test]
    fn moves_share_the_base() {
        let fb = corridor();
        let moved = fb.try_move(Direction::Right).unwrap();
        assert!(fb.shares_base(&moved));
    }

    #[test]
    fn player_cannot_start_in_a_wall() {
        let grid = MazeGrid::skeleton(3, 3).unwrap();
        assert_eq!(
            FrameBuffer::new(Rc::new(grid), Pos::new(0, 1)),
            Err(MazeError::InvalidStart { row: 0, col: 1 })
        );
    }
}
