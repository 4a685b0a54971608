//! Tile colors.
//!
//! Four tiles, four colors. The lookup is total over [`Tile`], so a tile that
//! made it into a grid always has a color.

use crossterm::style::Color;

use crate::types::Tile;

pub fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Path => Color::Black,
        Tile::Wall => Color::White,
        Tile::Player => Color::Red,
        Tile::Goal => Color::Yellow,
    }
}
