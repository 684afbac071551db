//! RGBA pixel buffers, stamp regions and resampling.
//!
//! `PixelBuffer` owns a contiguous row-major RGBA raster: four bytes per
//! pixel in R, G, B, A order with no row padding, so the row stride in bytes
//! is always `width * 4`. A buffer's shape is fixed at construction.

use crate::util::{BlurBrushError, BlurBrushResult};

#[cfg(feature = "image-io")]
pub mod io;
pub mod region;
pub mod resample;

pub use region::{Region, TileRect};

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Owned RGBA raster with a fixed shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Wraps an RGBA byte vector of exactly `width * height * 4` bytes.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> BlurBrushResult<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(BlurBrushError::BufferSizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a buffer where every pixel is `rgba`.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> BlurBrushResult<Self> {
        let len = byte_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..width * height {
            data.extend_from_slice(&rgba);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a fully transparent black buffer.
    pub fn zeroed(width: usize, height: usize) -> BlurBrushResult<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            data: vec![0u8; len],
            width,
            height,
        })
    }

    /// Returns a zeroed buffer of the same shape, used as blur scratch space.
    pub fn scratch_like(&self) -> Self {
        Self {
            data: vec![0u8; self.data.len()],
            width: self.width,
            height: self.height,
        }
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns the row stride in bytes.
    pub fn stride(&self) -> usize {
        self.width * CHANNELS
    }

    /// Returns true when both buffers have the same width and height.
    pub fn same_shape(&self, other: &PixelBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Returns the raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the raw RGBA bytes mutably. The length cannot change.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer and returns its bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Returns the bytes of row `y`.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.stride();
        self.data.get(start..start + self.stride())
    }

    /// Returns the bytes of row `y` mutably.
    pub fn row_mut(&mut self, y: usize) -> Option<&mut [u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.stride();
        let start = y * stride;
        self.data.get_mut(start..start + stride)
    }

    /// Returns the pixel at `(x, y)` if it is within bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width {
            return None;
        }
        let row = self.row(y)?;
        let idx = x * CHANNELS;
        Some([row[idx], row[idx + 1], row[idx + 2], row[idx + 3]])
    }

    /// Overwrites the pixel at `(x, y)`. Returns false when out of bounds.
    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) -> bool {
        if x >= self.width {
            return false;
        }
        match self.row_mut(y) {
            Some(row) => {
                row[x * CHANNELS..x * CHANNELS + CHANNELS].copy_from_slice(&rgba);
                true
            }
            None => false,
        }
    }

    /// Returns true when `rect` lies fully inside this buffer.
    pub fn contains(&self, rect: TileRect) -> bool {
        rect.x + rect.width <= self.width && rect.y + rect.height <= self.height
    }

    /// Copies the pixels under `rect` into a new buffer.
    ///
    /// # Panics
    ///
    /// Panics if `rect` is not inside the buffer.
    pub fn crop(&self, rect: TileRect) -> PixelBuffer {
        assert!(self.contains(rect), "crop rect {rect:?} outside buffer");
        let row_bytes = rect.width * CHANNELS;
        let mut data = Vec::with_capacity(row_bytes * rect.height);
        for y in rect.y..rect.y + rect.height {
            let start = y * self.stride() + rect.x * CHANNELS;
            data.extend_from_slice(&self.data[start..start + row_bytes]);
        }
        PixelBuffer {
            data,
            width: rect.width,
            height: rect.height,
        }
    }

    /// Writes `tile` with its top-left corner at `(rect.x, rect.y)`.
    ///
    /// # Panics
    ///
    /// Panics if the tile's shape differs from `rect` or `rect` is not
    /// inside the buffer.
    pub fn paste(&mut self, tile: &PixelBuffer, rect: TileRect) {
        assert!(
            tile.width == rect.width && tile.height == rect.height,
            "tile {}x{} does not match rect {rect:?}",
            tile.width,
            tile.height
        );
        assert!(self.contains(rect), "paste rect {rect:?} outside buffer");
        let row_bytes = rect.width * CHANNELS;
        let stride = self.stride();
        for (ty, src) in tile.data.chunks_exact(row_bytes).enumerate() {
            let start = (rect.y + ty) * stride + rect.x * CHANNELS;
            self.data[start..start + row_bytes].copy_from_slice(src);
        }
    }
}

fn byte_len(width: usize, height: usize) -> BlurBrushResult<usize> {
    if width == 0 || height == 0 {
        return Err(BlurBrushError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or(BlurBrushError::InvalidDimensions { width, height })
}
