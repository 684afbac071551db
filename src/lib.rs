//! blurbrush is a localized box-blur brush for RGBA rasters.
//!
//! A stamp downsamples the whole canvas by a power of two chosen from the
//! brush strength, runs a four-pass running-sum box blur over it, upsamples
//! and writes back only the square under the brush. Everything is
//! synchronous CPU work over plain byte buffers; image file I/O is available
//! behind the `image-io` feature.

pub mod blur;
pub mod image;
pub mod lowlevel;
pub mod stamp;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;

pub use crate::blur::{box_blur, box_blur_with_scratch, BlurRadius};
pub use crate::image::{PixelBuffer, Region, TileRect};
pub use crate::stamp::{
    stamp, BlurBrush, BrushConfig, Cursor, GestureState, Point, StampCommand, StampTool,
};
pub use crate::util::{BlurBrushError, BlurBrushResult};
