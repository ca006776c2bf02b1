//! crossterm-backed `Surface`.  Field coordinates are scaled down onto the
//! terminal grid; glyphs falling outside the grid are clipped.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use super::sprites::{art, color_of};
use super::Surface;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::entities::Sprite;
use crate::geometry::Rect;

/// Text at or above this size gets a frame around it.
const BANNER_TEXT_SIZE: u16 = 60;

pub struct TerminalSurface<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        TerminalSurface {
            out,
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Field position → terminal cell.  May land off-grid.
    fn to_cell(&self, x: i32, y: i32) -> (i32, i32) {
        let col = (x as i64 * self.cols as i64).div_euclid(FIELD_WIDTH as i64);
        let row = (y as i64 * self.rows as i64).div_euclid(FIELD_HEIGHT as i64);
        (col as i32, row as i32)
    }

    fn print_clipped(&mut self, col: i32, row: i32, text: &str) -> io::Result<()> {
        if row < 0 || row >= self.rows as i32 {
            return Ok(());
        }
        let start = col.max(0);
        if start >= self.cols as i32 {
            return Ok(());
        }
        let skip = (start - col) as usize;
        let room = (self.cols as i32 - start) as usize;
        let visible: String = text.chars().skip(skip).take(room).collect();
        if visible.is_empty() {
            return Ok(());
        }
        self.out.queue(cursor::MoveTo(start as u16, row as u16))?;
        self.out.queue(Print(visible))?;
        Ok(())
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn blit(&mut self, sprite: Sprite, at: Rect) -> io::Result<()> {
        if sprite == Sprite::Background {
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
            return Ok(());
        }

        let (col, row) = self.to_cell(at.x, at.y);
        self.out.queue(style::SetForegroundColor(color_of(sprite)))?;
        for (i, line) in art(sprite).iter().enumerate() {
            self.print_clipped(col, row + i as i32, line)?;
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, color: Color, size: u16, at: (i32, i32)) -> io::Result<()> {
        let (col, row) = self.to_cell(at.0, at.1);
        self.out.queue(style::SetForegroundColor(color))?;

        if size < BANNER_TEXT_SIZE {
            return self.print_clipped(col, row, text);
        }

        // ╔════════════╗
        // ║  GAME OVER ║
        // ╚════════════╝
        let inner = text.chars().count() + 4;
        let lines = [
            format!("╔{}╗", "═".repeat(inner)),
            format!("║  {}  ║", text),
            format!("╚{}╝", "═".repeat(inner)),
        ];
        for (i, line) in lines.iter().enumerate() {
            self.print_clipped(col, row + i as i32, line)?;
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}
