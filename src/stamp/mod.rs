//! Blur stamping: compositing a blurred tile back into a canvas.
//!
//! A stamp blurs a downsampled copy of the *whole* canvas so the tile sees
//! its surroundings, then upsamples only the tile and writes it back. Pixels
//! outside the clipped tile are never written.

use crate::blur::{box_blur_with_scratch, BlurRadius};
use crate::image::resample::{downsample, upsample_rect_into};
use crate::image::{PixelBuffer, Region, TileRect};
use crate::trace::{trace_event, trace_span};

mod command;
mod gesture;

pub use command::StampCommand;
pub use gesture::{BlurBrush, BrushConfig, Cursor, GestureState, Point, StampTool};

/// Blurs the `brush_width`-sided square centered on `(center_x, center_y)`.
///
/// The square is clipped to the canvas; `None` means nothing was inside it
/// and the canvas is untouched. Otherwise the written rectangle is returned.
pub fn stamp(
    canvas: &mut PixelBuffer,
    center_x: i64,
    center_y: i64,
    brush_width: u32,
    strength: f32,
) -> Option<TileRect> {
    let (width, height) = canvas.dimensions();
    let tile = Region::centered(center_x, center_y, brush_width).clip(width, height)?;
    let _span = trace_span!("stamp", x = tile.x, y = tile.y, size = brush_width).entered();

    let params = BlurRadius::normalize(strength);
    trace_event!(
        "blur_params",
        radius = params.radius,
        resize_factor = params.resize_factor,
        working_radius = params.working_radius()
    );

    let mut working = downsample(canvas, params.resize_factor);
    debug_assert_eq!(
        working.dimensions(),
        params.working_dims(width, height),
        "downsampled canvas shape"
    );
    let mut scratch = working.scratch_like();
    box_blur_with_scratch(&mut working, &mut scratch, params.working_radius());

    upsample_rect_into(&working, width, height, canvas, tile);
    trace_event!("stamp_tile", width = tile.width, height = tile.height);
    Some(tile)
}
