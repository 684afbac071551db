//! Stamp placement and canvas clipping.

use crate::util::math::clip_span;

/// Requested square stamp area in canvas coordinates.
///
/// The square may extend past any canvas edge; `clip` yields the part that
/// can actually be read and written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// Left edge, may be negative.
    pub x: i64,
    /// Top edge, may be negative.
    pub y: i64,
    /// Side length in pixels.
    pub size: u32,
}

impl Region {
    /// Square of side `size` centered on `(center_x, center_y)`.
    ///
    /// The top-left corner is `center - size / 2` with integer division, so
    /// even sizes put the center on the lower-right of the middle four pixels.
    pub fn centered(center_x: i64, center_y: i64, size: u32) -> Self {
        let half = i64::from(size / 2);
        Self {
            x: center_x.saturating_sub(half),
            y: center_y.saturating_sub(half),
            size,
        }
    }

    /// Intersects the region with a `width x height` canvas.
    pub fn clip(&self, width: usize, height: usize) -> Option<TileRect> {
        let (x, w) = clip_span(self.x, self.size, width)?;
        let (y, h) = clip_span(self.y, self.size, height)?;
        Some(TileRect {
            x,
            y,
            width: w,
            height: h,
        })
    }
}

/// Non-empty rectangle fully inside a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl TileRect {
    /// Returns true when the pixel `(x, y)` lies inside the rectangle.
    pub fn contains_point(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Number of pixels covered.
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}
