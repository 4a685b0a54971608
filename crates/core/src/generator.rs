//! Maze generator - randomized depth-first carving
//!
//! Recursion is emulated with an explicit stack of [`CarveFrame`]s so large
//! mazes never hit the call-stack limit. Each frame owns the directions it
//! still has to try, shuffled once when the frame is created and consumed from
//! the back one at a time.

use arrayvec::ArrayVec;

use crate::grid::MazeGrid;
use crate::rng::{shuffle, RngPort};
use crate::types::{Direction, MazeError, Pos, Result, Tile};

/// Rooms are two cells apart.
const ROOM_STRIDE: usize = 2;

/// One level of the emulated recursion.
#[derive(Debug, Clone)]
struct CarveFrame {
    room: Pos,
    remaining: ArrayVec<Direction, 4>,
}

impl CarveFrame {
    fn new<R: RngPort + ?Sized>(room: Pos, rng: &mut R) -> Self {
        let mut remaining = ArrayVec::from(Direction::ALL);
        shuffle(rng, remaining.as_mut_slice());
        Self { room, remaining }
    }
}

/// Carve a perfect maze into `grid` starting from `start`.
///
/// `grid` is expected to be a fresh [`MazeGrid::skeleton`]. Every room ends up
/// connected to `start` through exactly one chain of carved seams. Returns the
/// number of seams carved, which is always `room_count() - 1`.
pub fn carve<R: RngPort + ?Sized>(grid: &mut MazeGrid, start: Pos, rng: &mut R) -> Result<usize> {
    if !grid.is_interior_room(start) {
        return Err(MazeError::InvalidStart {
            row: start.row,
            col: start.col,
        });
    }

    let cols = grid.cols();
    let mut visited = vec![false; grid.rows() * cols];
    let mut stack = Vec::with_capacity(grid.room_count());
    let mut carved = 0usize;

    visited[start.row * cols + start.col] = true;
    stack.push(CarveFrame::new(start, rng));

    while let Some(frame) = stack.last_mut() {
        let Some(dir) = frame.remaining.pop() else {
            stack.pop();
            continue;
        };

        let from = frame.room;
        let Some(to) = from.step(dir, ROOM_STRIDE) else {
            continue;
        };
        if !grid.is_interior(to) || visited[to.row * cols + to.col] {
            continue;
        }

        grid.set(from.midpoint(to), Tile::Path);
        visited[to.row * cols + to.col] = true;
        carved += 1;
        stack.push(CarveFrame::new(to, rng));
    }

    log::debug!(
        "carved {}x{} maze from {}: {} seams over {} rooms",
        grid.rows(),
        grid.cols(),
        start,
        carved,
        grid.room_count()
    );
    Ok(carved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    fn carved(rows: usize, cols: usize, seed: u32) -> MazeGrid {
        let mut grid = MazeGrid::skeleton(rows, cols).unwrap();
        carve(&mut grid, Pos::new(1, 1), &mut SimpleRng::new(seed)).unwrap();
        grid
    }

    #[test]
    fn single_room_carves_nothing() {
        let mut grid = MazeGrid::skeleton(3, 3).unwrap();
        let before = grid.clone();
        let n = carve(&mut grid, Pos::new(1, 1), &mut SimpleRng::new(1)).unwrap();
        assert_eq!(n, 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn seam_count_is_rooms_minus_one() {
        for seed in 1..20 {
            let grid = carved(11, 15, seed);
            assert_eq!(grid.carved_seams().count(), grid.room_count() - 1);
        }
    }

    #[test]
    fn border_stays_wall() {
        let grid = carved(9, 13, 42);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let pos = Pos::new(row, col);
                if !grid.is_interior(pos) {
                    assert_eq!(grid.get(pos), Some(Tile::Wall), "border at {pos}");
                }
            }
        }
    }

    #[test]
    fn even_even_cells_are_never_opened() {
        let grid = carved(15, 15, 5);
        for row in (0..grid.rows()).step_by(2) {
            for col in (0..grid.cols()).step_by(2) {
                assert_eq!(grid.get(Pos::new(row, col)), Some(Tile::Wall));
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        assert_eq!(carved(21, 21, 777), carved(21, 21, 777));
    }

    #[test]
    fn five_by_five_opens_three_of_four_seams() {
        let candidates = [Pos::new(1, 2), Pos::new(2, 1), Pos::new(2, 3), Pos::new(3, 2)];
        for seed in 1..50 {
            let grid = carved(5, 5, seed);
            let open = candidates
                .iter()
                .filter(|p| grid.get(**p) == Some(Tile::Path))
                .count();
            assert_eq!(open, 3, "seed {seed}");
        }
    }

    #[test]
    fn start_must_be_an_interior_room() {
        let mut grid = MazeGrid::skeleton(5, 5).unwrap();
        let mut rng = SimpleRng::new(1);
        for start in [Pos::new(2, 1), Pos::new(0, 0), Pos::new(5, 5), Pos::new(1, 2)] {
            assert_eq!(
                carve(&mut grid, start, &mut rng),
                Err(MazeError::InvalidStart {
                    row: start.row,
                    col: start.col
                })
            );
        }
    }

    #[test]
    fn any_room_can_be_the_start() {
        let mut grid = MazeGrid::skeleton(7, 9).unwrap();
        let n = carve(&mut grid, Pos::new(5, 7), &mut SimpleRng::new(3)).unwrap();
        assert_eq!(n, grid.room_count() - 1);
    }
}
