//! Undoable stamp operation.

use crate::image::{PixelBuffer, Region, TileRect};

use super::gesture::{BrushConfig, Point};

/// One stamp wrapped with the pixels it overwrote.
///
/// `execute` runs synchronously; returning from it is the completion
/// signal. `undo` writes the saved tile back.
#[derive(Debug)]
pub struct StampCommand {
    config: BrushConfig,
    at: Point,
    snapshot: Option<(TileRect, PixelBuffer)>,
}

impl StampCommand {
    pub fn new(config: BrushConfig, at: Point) -> Self {
        Self {
            config,
            at,
            snapshot: None,
        }
    }

    /// Configuration the stamp runs with.
    pub fn config(&self) -> BrushConfig {
        self.config
    }

    pub fn point(&self) -> Point {
        self.at
    }

    /// True once `execute` has written pixels that `undo` can restore.
    pub fn is_applied(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Saves the target tile, then stamps it.
    pub fn execute(&mut self, canvas: &mut PixelBuffer) -> Option<TileRect> {
        let (x, y) = self.at.to_pixel();
        let (width, height) = canvas.dimensions();
        let rect = Region::centered(x, y, self.config.width).clip(width, height)?;
        let before = canvas.crop(rect);
        let written = super::stamp(canvas, x, y, self.config.width, self.config.strength)?;
        debug_assert_eq!(written, rect);
        self.snapshot = Some((rect, before));
        Some(written)
    }

    /// Restores the pixels saved by the last `execute`.
    ///
    /// Returns false when there is nothing to restore.
    ///
    /// # Panics
    ///
    /// Panics if the canvas no longer contains the saved rectangle.
    pub fn undo(&mut self, canvas: &mut PixelBuffer) -> bool {
        match self.snapshot.take() {
            Some((rect, before)) => {
                canvas.paste(&before, rect);
                true
            }
            None => false,
        }
    }
}
