//! Rendering layer.
//!
//! The game loop only ever talks to a `Surface`: put a sprite in a rectangle,
//! put some text somewhere, present the frame.  `TerminalSurface` does that
//! with crossterm; `RecordingSurface` just remembers the calls so tests can
//! look at them.  Draw order is the compositing order: later calls land on
//! top of earlier ones.

mod sprites;
mod terminal;

use std::io;

use crossterm::style::Color;

use crate::entities::Sprite;
use crate::geometry::Rect;

pub use terminal::TerminalSurface;

/// A frame target.  Every call may fail because the backing device does I/O.
pub trait Surface {
    /// Draws `sprite` with its top-left corner at `at`.
    fn blit(&mut self, sprite: Sprite, at: Rect) -> io::Result<()>;

    /// Draws `text` with its top-left corner at field position `at`.
    fn draw_text(&mut self, text: &str, color: Color, size: u16, at: (i32, i32)) -> io::Result<()>;

    /// Makes everything drawn so far visible.
    fn present(&mut self) -> io::Result<()>;
}

// ── Recording surface ─────────────────────────────────────────────────────────

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Blit(Sprite, Rect),
    Text {
        text: String,
        color: Color,
        size: u16,
        at: (i32, i32),
    },
    Present,
}

/// A surface that keeps every call in order and draws nothing.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn presents(&self) -> usize {
        self.calls.iter().filter(|c| **c == DrawCall::Present).count()
    }

    /// Every sprite blitted, in order.
    pub fn sprites(&self) -> Vec<Sprite> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Blit(sprite, _) => Some(*sprite),
                _ => None,
            })
            .collect()
    }

    /// Every text string drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn blit(&mut self, sprite: Sprite, at: Rect) -> io::Result<()> {
        self.calls.push(DrawCall::Blit(sprite, at));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, color: Color, size: u16, at: (i32, i32)) -> io::Result<()> {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            color,
            size,
            at,
        });
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.calls.push(DrawCall::Present);
        Ok(())
    }
}
