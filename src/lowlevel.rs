//! Low-level building blocks for custom blur pipelines.
//!
//! These expose the individual sweeps and resamplers behind [`crate::stamp()`]
//! and [`crate::box_blur`]. Most users should prefer those entry points.

pub use crate::blur::radius::{MAX_RADIUS, MIN_RADIUS, RADIUS_STEP};
pub use crate::blur::sweep::{blur_down, blur_left, blur_right, blur_up};
pub use crate::image::resample::{downsample, halve, upsample, upsample_rect_into};
pub use crate::image::CHANNELS;
