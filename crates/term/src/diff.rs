//! Diff renderer: two frames in, display operations out.
//!
//! Two tile rows share one terminal row. The upper half block takes the top
//! tile as foreground and the bottom tile as background. An odd final tile row
//! is drawn with foreground only.
//!
//! After the first frame, columns whose two tiles did not change are skipped
//! with a cursor move instead of a repaint. Every terminal row still ends with
//! a style reset and a line break so the cursor always lands in the same place
//! and the next frame can jump back up by a fixed amount.

use crate::core::FrameBuffer;
use crate::types::{Pos, Tile};

/// One display instruction, applied in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    CursorUp(u16),
    CursorRight(u16),
    /// Half block with `top` as foreground and `bottom` as background.
    Pixel { top: Tile, bottom: Tile },
    /// Half block with `top` as foreground over the default background.
    HalfPixel { top: Tile },
    ResetStyle,
    NewLine,
}

impl DrawOp {
    /// Whether this op paints a glyph.
    pub fn is_glyph(&self) -> bool {
        matches!(self, DrawOp::Pixel { .. } | DrawOp::HalfPixel { .. })
    }
}

/// Terminal rows needed for `tile_rows` tile rows.
pub fn display_rows(tile_rows: usize) -> usize {
    (tile_rows + 1) / 2
}

/// Render `next`, diffing against `prev` when there is one.
pub fn render(prev: Option<&FrameBuffer>, next: &FrameBuffer) -> Vec<DrawOp> {
    let mut ops = Vec::new();
    render_into(prev, next, &mut ops);
    ops
}

/// Like [`render`], reusing `ops` to avoid allocating per frame.
///
/// A `prev` of a different size is overwritten from its top-left corner with
/// a full repaint.
pub fn render_into(prev: Option<&FrameBuffer>, next: &FrameBuffer, ops: &mut Vec<DrawOp>) {
    ops.clear();

    if let Some(prev) = prev {
        let up = u16::try_from(display_rows(prev.rows())).unwrap_or(u16::MAX);
        ops.push(DrawOp::CursorUp(up));
    }
    let prev = prev.filter(|p| p.rows() == next.rows() && p.cols() == next.cols());

    let rows = next.rows();
    let cols = next.cols();
    let changed = |pos: Pos| prev.map_or(true, |p| p.tile(pos) != next.tile(pos));

    let mut row = 0;
    while row + 1 < rows {
        for col in 0..cols {
            let top = Pos::new(row, col);
            let bottom = Pos::new(row + 1, col);
            if changed(top) || changed(bottom) {
                ops.push(DrawOp::Pixel {
                    top: tile_or_wall(next, top),
                    bottom: tile_or_wall(next, bottom),
                });
            } else {
                ops.push(DrawOp::CursorRight(1));
            }
        }
        ops.push(DrawOp::ResetStyle);
        ops.push(DrawOp::NewLine);
        row += 2;
    }

    if rows % 2 == 1 {
        let last = rows - 1;
        for col in 0..cols {
            let pos = Pos::new(last, col);
            if changed(pos) {
                ops.push(DrawOp::HalfPixel {
                    top: tile_or_wall(next, pos),
                });
            } else {
                ops.push(DrawOp::CursorRight(1));
            }
        }
        ops.push(DrawOp::ResetStyle);
        ops.push(DrawOp::NewLine);
    }

    log::trace!(
        "frame: {} ops, {} glyphs",
        ops.len(),
        ops.iter().filter(|op| op.is_glyph()).count()
    );
}

// Positions come from the frame's own bounds; the fallback is never taken.
fn tile_or_wall(frame: &FrameBuffer, pos: Pos) -> Tile {
    frame.tile(pos).unwrap_or(Tile::Wall)
}
