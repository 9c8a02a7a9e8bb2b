use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, `x`/`y` at the top-left corner.
///
/// Width and height are expected to stay positive; nothing here checks that,
/// collision results are meaningless otherwise.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    #[inline]
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    #[inline]
    pub fn grow(&mut self, dw: f32, dh: f32) {
        self.w += dw;
        self.h += dh;
    }

    /// Expand (or shrink, with negative deltas) around the centre.
    pub fn inflate(&mut self, dw: f32, dh: f32) {
        self.translate(-dw, -dh);
        self.grow(2.0 * dw, 2.0 * dh);
    }

    /// Overlap test with touching edges counted as a hit.
    #[inline]
    pub fn colliding(&self, other: &Rect) -> bool {
        !(self.x + self.w < other.x
            || self.y + self.h < other.y
            || self.x > other.x + other.w
            || self.y > other.y + other.h)
    }

    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.w > 0.0 && self.h > 0.0 && self.x.is_finite() && self.y.is_finite()
    }
}
