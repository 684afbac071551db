//! Integer helpers shared by the radius normalizer and region clipping.

/// Returns `floor(log2(value))`, treating zero as one.
pub(crate) fn floor_log2(value: u32) -> u32 {
    value.max(1).ilog2()
}

/// Clips the half-open span `[start, start + len)` to `[0, limit)`.
///
/// Returns the clipped `(start, len)` or `None` when nothing remains.
pub(crate) fn clip_span(start: i64, len: u32, limit: usize) -> Option<(usize, usize)> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let lo = start.max(0);
    let hi = start.saturating_add(i64::from(len)).min(limit);
    if hi <= lo {
        return None;
    }
    Some((lo as usize, (hi - lo) as usize))
}

#[cfg(test)]
mod tests {
    use super::{clip_span, floor_log2};

    #[test]
    fn floor_log2_matches_powers_and_between() {
        assert_eq!(floor_log2(0), 0);
        assert_eq!(floor_log2(1), 0);
        assert_eq!(floor_log2(32), 5);
        assert_eq!(floor_log2(96), 6);
        assert_eq!(floor_log2(256), 8);
    }

    #[test]
    fn clip_span_handles_edges() {
        assert_eq!(clip_span(2, 4, 10), Some((2, 4)));
        assert_eq!(clip_span(-3, 5, 10), Some((0, 2)));
        assert_eq!(clip_span(8, 5, 10), Some((8, 2)));
        assert_eq!(clip_span(-10, 5, 10), None);
        assert_eq!(clip_span(10, 5, 10), None);
        assert_eq!(clip_span(0, 0, 10), None);
    }
}
