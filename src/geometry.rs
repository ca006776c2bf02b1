//! Integer rectangles in field coordinates and the field bounds test.

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    /// Rectangle of the given size whose centre sits at `(cx, cy)`.
    pub fn centered(cx: i32, cy: i32, w: i32, h: i32) -> Self {
        Rect { x: cx - w / 2, y: cy - h / 2, w, h }
    }

    /// The whole play field.
    pub fn field() -> Self {
        Rect::new(0, 0, FIELD_WIDTH, FIELD_HEIGHT)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// True when the two rectangles share interior area.  Touching edges and
    /// empty rectangles never collide.
    pub fn collides(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Checks `rect` against a `width` x `height` field.
///
/// Returns `(within_horizontal, within_vertical)`; an axis is `false` when the
/// leading edge is below 0 or the trailing edge passes the field extent.
pub fn check_bound(rect: &Rect, width: i32, height: i32) -> (bool, bool) {
    let horizontal = !(rect.left() < 0 || width < rect.right());
    let vertical = !(rect.top() < 0 || height < rect.bottom());
    (horizontal, vertical)
}

/// `check_bound` against the game field, both axes.
pub fn in_field(rect: &Rect) -> bool {
    check_bound(rect, FIELD_WIDTH, FIELD_HEIGHT) == (true, true)
}
