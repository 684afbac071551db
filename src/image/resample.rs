//! Power-of-two downsampling and bilinear upsampling for RGBA buffers.
//!
//! Each halving step uses a 2x2 box filter with integer rounding per
//! channel: `dst = (a + b + c + d + 2) / 4`. Odd trailing rows and columns
//! are dropped, except that a dimension never shrinks below one pixel (the
//! last column or row is then sampled twice).
//!
//! Upsampling maps destination pixel centers onto the source grid with
//! `src = (dst + 0.5) * src_len / dst_len - 0.5`, clamps to the valid range
//! and interpolates bilinearly, rounding to the nearest integer.

use crate::image::{PixelBuffer, TileRect, CHANNELS};

/// Halves both dimensions once.
pub fn halve(src: &PixelBuffer) -> PixelBuffer {
    let (src_w, src_h) = src.dimensions();
    let dst_w = (src_w / 2).max(1);
    let dst_h = (src_h / 2).max(1);
    let mut dst = Vec::with_capacity(dst_w * dst_h * CHANNELS);

    for y in 0..dst_h {
        let row0 = src.row(2 * y).expect("row in bounds");
        let row1 = src.row((2 * y + 1).min(src_h - 1)).expect("row in bounds");
        for x in 0..dst_w {
            let i0 = 2 * x * CHANNELS;
            let i1 = (2 * x + 1).min(src_w - 1) * CHANNELS;
            for c in 0..CHANNELS {
                let sum = u16::from(row0[i0 + c])
                    + u16::from(row0[i1 + c])
                    + u16::from(row1[i0 + c])
                    + u16::from(row1[i1 + c]);
                dst.push(((sum + 2) / 4) as u8);
            }
        }
    }

    PixelBuffer::new(dst, dst_w, dst_h).expect("halved buffer is contiguous")
}

/// Halves `src` `factor` times. A factor of zero returns a copy.
pub fn downsample(src: &PixelBuffer, factor: u32) -> PixelBuffer {
    let mut out = src.clone();
    for _ in 0..factor {
        if out.width() == 1 && out.height() == 1 {
            break;
        }
        out = halve(&out);
    }
    out
}

/// Upsamples `small` to a `full_width x full_height` grid and writes only
/// the pixels under `rect` into `dst`.
///
/// # Panics
///
/// Panics if `dst` is not `full_width x full_height` or `rect` is outside it.
pub fn upsample_rect_into(
    small: &PixelBuffer,
    full_width: usize,
    full_height: usize,
    dst: &mut PixelBuffer,
    rect: TileRect,
) {
    assert!(
        dst.width() == full_width && dst.height() == full_height,
        "destination is {}x{}, expected {full_width}x{full_height}",
        dst.width(),
        dst.height()
    );
    assert!(dst.contains(rect), "rect {rect:?} outside destination");

    if small.width() == full_width && small.height() == full_height {
        dst.paste(&small.crop(rect), rect);
        return;
    }

    let sw = small.width();
    let sh = small.height();
    let scale_x = sw as f32 / full_width as f32;
    let scale_y = sh as f32 / full_height as f32;
    let max_x = sw as f32 - 1.0;
    let max_y = sh as f32 - 1.0;

    for y in rect.y..rect.y + rect.height {
        let src_y = ((y as f32 + 0.5) * scale_y - 0.5).clamp(0.0, max_y);
        let y0 = src_y.floor() as usize;
        let y1 = (y0 + 1).min(sh - 1);
        let fy = src_y - y0 as f32;
        let row0 = small.row(y0).expect("row in bounds");
        let row1 = small.row(y1).expect("row in bounds");
        let out_row = dst.row_mut(y).expect("row in bounds");

        for x in rect.x..rect.x + rect.width {
            let src_x = ((x as f32 + 0.5) * scale_x - 0.5).clamp(0.0, max_x);
            let x0 = src_x.floor() as usize;
            let x1 = (x0 + 1).min(sw - 1);
            let fx = src_x - x0 as f32;

            let w00 = (1.0 - fx) * (1.0 - fy);
            let w10 = fx * (1.0 - fy);
            let w01 = (1.0 - fx) * fy;
            let w11 = fx * fy;

            let (i0, i1) = (x0 * CHANNELS, x1 * CHANNELS);
            for c in 0..CHANNELS {
                let value = f32::from(row0[i0 + c]) * w00
                    + f32::from(row0[i1 + c]) * w10
                    + f32::from(row1[i0 + c]) * w01
                    + f32::from(row1[i1 + c]) * w11;
                out_row[x * CHANNELS + c] = value.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

/// Upsamples `small` to a full `full_width x full_height` buffer.
///
/// # Panics
///
/// Panics if either target dimension is zero.
pub fn upsample(small: &PixelBuffer, full_width: usize, full_height: usize) -> PixelBuffer {
    let mut out =
        PixelBuffer::zeroed(full_width, full_height).expect("upsample target must be non-empty");
    let rect = TileRect {
        x: 0,
        y: 0,
        width: full_width,
        height: full_height,
    };
    upsample_rect_into(small, full_width, full_height, &mut out, rect);
    out
}

#[cfg(test)]
mod tests {
    use super::{downsample, halve, upsample};
    use crate::image::PixelBuffer;

    #[test]
    fn halve_averages_blocks_with_rounding() {
        let mut data = Vec::new();
        for v in [0u8, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15] {
            data.extend_from_slice(&[v, v, v, 255]);
        }
        let src = PixelBuffer::new(data, 4, 4).unwrap();
        let half = halve(&src);
        assert_eq!(half.dimensions(), (2, 2));
        assert_eq!(half.pixel(0, 0), Some([3, 3, 3, 255]));
        assert_eq!(half.pixel(1, 0), Some([5, 5, 5, 255]));
        assert_eq!(half.pixel(0, 1), Some([11, 11, 11, 255]));
        assert_eq!(half.pixel(1, 1), Some([13, 13, 13, 255]));
    }

    #[test]
    fn downsample_matches_shifted_dimensions() {
        let src = PixelBuffer::filled(37, 20, [9, 9, 9, 9]).unwrap();
        assert_eq!(downsample(&src, 0).dimensions(), (37, 20));
        assert_eq!(downsample(&src, 2).dimensions(), (37 >> 2, 20 >> 2));
        assert_eq!(downsample(&src, 5).dimensions(), (1, 1));
    }

    #[test]
    fn upsample_of_uniform_is_uniform() {
        let small = PixelBuffer::filled(3, 2, [40, 80, 120, 200]).unwrap();
        let big = upsample(&small, 13, 7);
        assert_eq!(big.dimensions(), (13, 7));
        assert_eq!(big, PixelBuffer::filled(13, 7, [40, 80, 120, 200]).unwrap());
    }

    #[test]
    fn upsample_same_size_is_copy() {
        let mut src = PixelBuffer::zeroed(4, 3).unwrap();
        src.set_pixel(2, 1, [10, 20, 30, 40]);
        assert_eq!(upsample(&src, 4, 3), src);
    }
}
