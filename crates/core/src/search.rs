//! Farthest-point search - breadth-first distances over open tiles
//!
//! Used once after carving to place the goal: the farthest tile from the
//! entrance is the hardest one to reach, and its distance is the minimum
//! number of moves needed to solve the maze.

use std::collections::VecDeque;

use crate::grid::MazeGrid;
use crate::types::{Direction, MazeError, Pos, Result, Tile};

/// Farthest tile and its distance, in tile steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub farthest: Pos,
    pub max_distance: usize,
}

impl SearchResult {
    /// Distance in the room graph. Adjacent rooms are two tile steps apart.
    pub fn room_hops(&self) -> usize {
        self.max_distance / 2
    }
}

/// Breadth-first search from `source` across `Path` tiles.
///
/// Neighbours are visited in [`Direction::SEARCH_ORDER`]. The farthest cell
/// only changes on a strictly greater distance, so among tied cells the one
/// dequeued first wins. Running this twice on the same grid always picks the
/// same cell.
pub fn farthest_point(grid: &MazeGrid, source: Pos) -> Result<SearchResult> {
    if grid.get(source) != Some(Tile::Path) {
        return Err(MazeError::InvalidStart {
            row: source.row,
            col: source.col,
        });
    }

    let cols = grid.cols();
    let mut distance: Vec<Option<usize>> = vec![None; grid.rows() * cols];
    let mut queue = VecDeque::new();

    distance[source.row * cols + source.col] = Some(0);
    queue.push_back((source, 0usize));

    let mut best = SearchResult {
        farthest: source,
        max_distance: 0,
    };

    while let Some((pos, dist)) = queue.pop_front() {
        if dist > best.max_distance {
            best = SearchResult {
                farthest: pos,
                max_distance: dist,
            };
        }

        for dir in Direction::SEARCH_ORDER {
            let Some(next) = pos.step(dir, 1) else {
                continue;
            };
            if grid.get(next) != Some(Tile::Path) {
                continue;
            }
            let slot = &mut distance[next.row * cols + next.col];
            if slot.is_none() {
                *slot = Some(dist + 1);
                queue.push_back((next, dist + 1));
            }
        }
    }

    log::debug!(
        "farthest from {} is {} at distance {}",
        source,
        best.farthest,
        best.max_distance
    );
    Ok(best)
}
