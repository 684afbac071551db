//! Mapping from brush strength to blur radius and working resolution.

use crate::util::math::floor_log2;

/// Radius granted per unit of strength, in source pixels.
pub const RADIUS_STEP: u32 = 32;
/// Smallest effective radius.
pub const MIN_RADIUS: u32 = 32;
/// Largest effective radius; bounds the downsample depth.
pub const MAX_RADIUS: u32 = 256;

/// Effective blur radius plus the number of 2x downsampling steps applied
/// before blurring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlurRadius {
    /// Radius at full canvas resolution, in `[MIN_RADIUS, MAX_RADIUS]`.
    pub radius: u32,
    /// Number of halvings applied to the canvas before blurring.
    pub resize_factor: u32,
}

impl BlurRadius {
    /// Normalizes a user-facing strength.
    ///
    /// `radius = clamp(round(strength) * 32, 32, 256)` and
    /// `resize_factor = max(0, floor(log2(radius)) - 3)`. NaN and any
    /// strength below one map to the minimum radius; `+inf` maps to the
    /// maximum.
    pub fn normalize(strength: f32) -> Self {
        let scaled = strength.round() * RADIUS_STEP as f32;
        let radius = if scaled.is_nan() {
            MIN_RADIUS
        } else {
            scaled.clamp(MIN_RADIUS as f32, MAX_RADIUS as f32) as u32
        };
        Self {
            radius,
            resize_factor: floor_log2(radius).saturating_sub(3),
        }
    }

    /// Radius to use on the downsampled buffer, at least one pixel.
    pub fn working_radius(&self) -> u32 {
        (self.radius >> self.resize_factor).max(1)
    }

    /// Dimensions of a `width x height` canvas after downsampling.
    pub fn working_dims(&self, width: usize, height: usize) -> (usize, usize) {
        (
            (width >> self.resize_factor).max(1),
            (height >> self.resize_factor).max(1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::BlurRadius;

    #[test]
    fn strength_rounds_before_scaling() {
        assert_eq!(BlurRadius::normalize(2.4).radius, 64);
        assert_eq!(BlurRadius::normalize(2.5).radius, 96);
        assert_eq!(BlurRadius::normalize(7.0).radius, 224);
    }

    #[test]
    fn resize_factor_tracks_log2() {
        let r = BlurRadius::normalize(3.0);
        assert_eq!(r.radius, 96);
        assert_eq!(r.resize_factor, 3);
        assert_eq!(r.working_radius(), 12);
        assert_eq!(r.working_dims(100, 7), (12, 1));
    }

    #[test]
    fn non_finite_strengths_are_clamped() {
        assert_eq!(BlurRadius::normalize(f32::NAN).radius, 32);
        assert_eq!(BlurRadius::normalize(f32::NEG_INFINITY).radius, 32);
        assert_eq!(BlurRadius::normalize(f32::INFINITY).radius, 256);
        assert_eq!(BlurRadius::normalize(-4.0).radius, 32);
    }
}
