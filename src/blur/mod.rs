//! Four-pass box blur.
//!
//! The blur runs four causal sweeps in a fixed order: right, down, left, up.
//! Sweeps ping-pong between the buffer and a scratch buffer of the same
//! shape, so the result ends up back in the buffer. Cost is linear in the
//! pixel count for any radius.

use crate::image::PixelBuffer;
use crate::trace::trace_span;

pub mod radius;
pub mod sweep;

pub use radius::BlurRadius;

/// Blurs `buffer` in place, allocating a scratch buffer for the call.
///
/// A radius of zero is treated as one.
pub fn box_blur(buffer: &mut PixelBuffer, radius: u32) {
    let mut scratch = buffer.scratch_like();
    box_blur_with_scratch(buffer, &mut scratch, radius);
}

/// Blurs `buffer` in place using caller-owned scratch space.
///
/// The scratch contents on entry are ignored and undefined on return.
///
/// # Panics
///
/// Panics if `scratch` does not have the same shape as `buffer`.
pub fn box_blur_with_scratch(buffer: &mut PixelBuffer, scratch: &mut PixelBuffer, radius: u32) {
    assert!(
        buffer.same_shape(scratch),
        "scratch is {}x{}, buffer is {}x{}",
        scratch.width(),
        scratch.height(),
        buffer.width(),
        buffer.height()
    );
    let radius = radius.max(1) as usize;
    let _span = trace_span!(
        "box_blur",
        width = buffer.width(),
        height = buffer.height(),
        radius = radius
    )
    .entered();

    sweep::blur_right(buffer, scratch, radius);
    sweep::blur_down(scratch, buffer, radius);
    sweep::blur_left(buffer, scratch, radius);
    sweep::blur_up(scratch, buffer, radius);
}
