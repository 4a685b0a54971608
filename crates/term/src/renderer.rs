//! TerminalRenderer: flushes maze frames to a real terminal.
//!
//! Draws inline below the current cursor position rather than on the
//! alternate screen, then jumps back up to overwrite the previous frame.
//! Every frame is encoded into one buffer and written with a single flush, so
//! a half-applied frame is never visible.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::FrameBuffer;
use crate::diff::{render_into, DrawOp};
use crate::palette::tile_color;
use crate::types::HALF_BLOCK;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    ops: Vec<DrawOp>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Render into any writer. Terminal modes are only touched by
    /// [`enter`](Self::enter) and [`exit`](Self::exit).
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            ops: Vec::new(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw `next`, diffing against the previously drawn frame.
    pub fn draw(&mut self, next: &FrameBuffer) -> Result<()> {
        render_into(self.last.as_ref(), next, &mut self.ops);

        self.buf.clear();
        encode_ops_into(&self.ops, &mut self.buf)?;
        self.flush_buf()?;

        self.last = Some(next.clone());
        Ok(())
    }

    /// Forget the last frame so the next draw repaints in full below the
    /// cursor.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode display operations as terminal escape sequences into `out`.
pub fn encode_ops_into(ops: &[DrawOp], out: &mut Vec<u8>) -> Result<()> {
    for op in ops {
        match *op {
            DrawOp::CursorUp(0) | DrawOp::CursorRight(0) => {}
            DrawOp::CursorUp(n) => {
                out.queue(cursor::MoveUp(n))?;
            }
            DrawOp::CursorRight(n) => {
                out.queue(cursor::MoveRight(n))?;
            }
            DrawOp::Pixel { top, bottom } => {
                out.queue(SetForegroundColor(tile_color(top)))?;
                out.queue(SetBackgroundColor(tile_color(bottom)))?;
                out.queue(Print(HALF_BLOCK))?;
            }
            DrawOp::HalfPixel { top } => {
                out.queue(SetForegroundColor(tile_color(top)))?;
                out.queue(Print(HALF_BLOCK))?;
            }
            DrawOp::ResetStyle => {
                out.queue(ResetColor)?;
            }
            // Raw mode does not turn LF into CRLF.
            DrawOp::NewLine => {
                out.queue(Print("\r\n"))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::core::MazeGrid;
    use crate::types::{Direction, Pos, Tile};

    fn encode(ops: &[DrawOp]) -> String {
        let mut out = Vec::new();
        encode_ops_into(ops, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn cursor_moves_encode_as_csi() {
        assert_eq!(encode(&[DrawOp::CursorUp(18)]), "\x1b[18A");
        assert_eq!(encode(&[DrawOp::CursorRight(1)]), "\x1b[1C");
        assert_eq!(encode(&[DrawOp::CursorUp(0)]), "");
    }

    #[test]
    fn rows_end_with_reset_and_crlf() {
        let s = encode(&[DrawOp::ResetStyle, DrawOp::NewLine]);
        assert!(s.ends_with("\r\n"));
        assert!(s.starts_with("\x1b["));
    }

    #[test]
    fn pixels_print_a_half_block() {
        let full = encode(&[DrawOp::Pixel {
            top: Tile::Wall,
            bottom: Tile::Path,
        }]);
        let half = encode(&[DrawOp::HalfPixel { top: Tile::Goal }]);
        assert_eq!(full.matches(HALF_BLOCK).count(), 1);
        assert_eq!(half.matches(HALF_BLOCK).count(), 1);
        // Foreground plus background versus foreground only.
        assert_eq!(full.matches("\x1b[").count(), 2);
        assert_eq!(half.matches("\x1b[").count(), 1);
    }

    #[test]
    fn draw_repaints_then_diffs() {
        let grid = MazeGrid::from_symbols(&["11111", "10001", "11111"]).unwrap();
        let fb = FrameBuffer::new(Rc::new(grid), Pos::new(1, 1)).unwrap();
        let mut term = TerminalRenderer::with_writer(Vec::new());

        term.draw(&fb).unwrap();
        let first = String::from_utf8(term.writer().clone()).unwrap();
        assert_eq!(first.matches(HALF_BLOCK).count(), 10);
        assert!(!first.contains("A"));

        let moved = fb.try_move(Direction::Right).unwrap();
        term.draw(&moved).unwrap();
        let all = String::from_utf8(term.writer().clone()).unwrap();
        let second = &all[first.len()..];
        assert!(second.starts_with("\x1b[2A"));
        assert_eq!(second.matches(HALF_BLOCK).count(), 2);
        assert_eq!(second.matches("\r\n").count(), 2);
    }

    #[test]
    fn invalidate_forces_a_full_repaint() {
        let grid = MazeGrid::from_symbols(&["111", "101", "111"]).unwrap();
        let fb = FrameBuffer::new(Rc::new(grid), Pos::new(1, 1)).unwrap();
        let mut term = TerminalRenderer::with_writer(Vec::new());

        term.draw(&fb).unwrap();
        let first_len = term.writer().len();
        term.invalidate();
        term.draw(&fb).unwrap();
        let second = String::from_utf8(term.writer()[first_len..].to_vec()).unwrap();
        assert_eq!(second.matches(HALF_BLOCK).count(), 6);
    }
}
