//! One-dimensional causal box sweeps over RGBA buffers.
//!
//! Every sweep walks each line once, keeping a per-channel running sum over
//! a trailing window. With `ramp = min(radius, len)`:
//!
//! - the first `ramp` positions grow the window and emit `sum / (i + 1)`
//!   with `sum` already including position `i`;
//! - every later position emits `sum / radius` (the `radius` pixels *before*
//!   it) and only then slides the window forward by adding position `i` and
//!   dropping position `i - radius`.
//!
//! A single sweep therefore lags by up to `radius` pixels in its walking
//! direction; the right/left and down/up pairs cancel that lag out.

use crate::image::{PixelBuffer, CHANNELS};

/// Filters one line whose pixels sit at byte offsets `pos(0), .., pos(len - 1)`
/// in walking order.
#[inline]
fn sweep_line<F>(src: &[u8], dst: &mut [u8], len: usize, radius: usize, pos: F)
where
    F: Fn(usize) -> usize,
{
    let mut sum = [0u32; CHANNELS];
    let ramp = radius.min(len);

    for i in 0..ramp {
        let p = pos(i);
        let count = (i + 1) as u32;
        for c in 0..CHANNELS {
            sum[c] += u32::from(src[p + c]);
            dst[p + c] = (sum[c] / count) as u8;
        }
    }

    let divisor = radius as u32;
    for i in ramp..len {
        let p = pos(i);
        let q = pos(i - radius);
        for c in 0..CHANNELS {
            dst[p + c] = (sum[c] / divisor) as u8;
            sum[c] = sum[c] + u32::from(src[p + c]) - u32::from(src[q + c]);
        }
    }
}

fn check_pair(src: &PixelBuffer, dst: &PixelBuffer) {
    assert!(
        src.same_shape(dst),
        "sweep buffers differ in shape: {}x{} vs {}x{}",
        src.width(),
        src.height(),
        dst.width(),
        dst.height()
    );
}

/// Left-to-right sweep along every row.
pub fn blur_right(src: &PixelBuffer, dst: &mut PixelBuffer, radius: usize) {
    check_pair(src, dst);
    let (w, h) = src.dimensions();
    let radius = radius.max(1);
    let (s, d) = (src.data(), dst.data_mut());
    for y in 0..h {
        let row = y * w;
        sweep_line(s, d, w, radius, |i| (row + i) * CHANNELS);
    }
}

/// Right-to-left sweep along every row.
pub fn blur_left(src: &PixelBuffer, dst: &mut PixelBuffer, radius: usize) {
    check_pair(src, dst);
    let (w, h) = src.dimensions();
    let radius = radius.max(1);
    let (s, d) = (src.data(), dst.data_mut());
    for y in 0..h {
        let last = y * w + w - 1;
        sweep_line(s, d, w, radius, |i| (last - i) * CHANNELS);
    }
}

/// Top-to-bottom sweep along every column.
pub fn blur_down(src: &PixelBuffer, dst: &mut PixelBuffer, radius: usize) {
    check_pair(src, dst);
    let (w, h) = src.dimensions();
    let radius = radius.max(1);
    let (s, d) = (src.data(), dst.data_mut());
    for x in 0..w {
        sweep_line(s, d, h, radius, |j| (j * w + x) * CHANNELS);
    }
}

/// Bottom-to-top sweep along every column.
pub fn blur_up(src: &PixelBuffer, dst: &mut PixelBuffer, radius: usize) {
    check_pair(src, dst);
    let (w, h) = src.dimensions();
    let radius = radius.max(1);
    let (s, d) = (src.data(), dst.data_mut());
    for x in 0..w {
        sweep_line(s, d, h, radius, |j| ((h - 1 - j) * w + x) * CHANNELS);
    }
}
