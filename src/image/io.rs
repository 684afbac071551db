//! Loading and saving pixel buffers via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::PixelBuffer;
use crate::util::{BlurBrushError, BlurBrushResult};
use std::path::Path;

/// Copies an RGBA image into a pixel buffer.
pub fn from_rgba_image(img: &image::RgbaImage) -> BlurBrushResult<PixelBuffer> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    PixelBuffer::new(img.as_raw().clone(), width, height)
}

/// Converts any decoded image to RGBA and wraps it in a pixel buffer.
pub fn from_dynamic_image(img: &image::DynamicImage) -> BlurBrushResult<PixelBuffer> {
    from_rgba_image(&img.to_rgba8())
}

/// Copies a pixel buffer into an RGBA image.
pub fn to_rgba_image(buffer: &PixelBuffer) -> BlurBrushResult<image::RgbaImage> {
    let (width, height) = buffer.dimensions();
    let too_large = || BlurBrushError::InvalidDimensions { width, height };
    let w = u32::try_from(width).map_err(|_| too_large())?;
    let h = u32::try_from(height).map_err(|_| too_large())?;
    image::RgbaImage::from_raw(w, h, buffer.data().to_vec()).ok_or(
        BlurBrushError::BufferSizeMismatch {
            expected: width * height * 4,
            got: buffer.data().len(),
        },
    )
}

/// Loads an image from disk as RGBA.
pub fn load_rgba_image<P: AsRef<Path>>(path: P) -> BlurBrushResult<PixelBuffer> {
    let img = image::open(path).map_err(|err| BlurBrushError::ImageIo {
        reason: err.to_string(),
    })?;
    from_dynamic_image(&img)
}

/// Saves a pixel buffer; the format is chosen from the file extension.
pub fn save_rgba_image<P: AsRef<Path>>(path: P, buffer: &PixelBuffer) -> BlurBrushResult<()> {
    to_rgba_image(buffer)?
        .save(path)
        .map_err(|err| BlurBrushError::ImageIo {
            reason: err.to_string(),
        })
}
