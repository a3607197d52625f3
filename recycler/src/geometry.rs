//! Axis-agnostic sizing helpers.
//!
//! These only use operations available in `core`, so rounding is done through integer casts.
//! All inputs are expected to be finite; negative inputs saturate to zero where a count is
//! produced.

use crate::{Align, Vec2};

/// Cell size plus spacing: the distance between the starts of two neighbouring cells.
pub fn cell_step(cell_size: Vec2, spacing: Vec2) -> Vec2 {
    cell_size + spacing
}

/// Number of lines needed along the scroll axis for `object_count` items on `line_count` lines.
pub fn lines_along(object_count: usize, line_count: usize) -> usize {
    if line_count == 0 {
        return 0;
    }
    object_count.div_ceil(line_count)
}

/// Number of slots needed to cover `viewport_extent` plus one overscan cell on each side.
pub fn window_size(viewport_extent: f32, cell_extent: f32, line_count: usize) -> usize {
    line_count.saturating_mul(ceil_ratio(viewport_extent, cell_extent).saturating_add(2))
}

/// Total content extent along the scroll axis.
pub fn content_extent(
    object_count: usize,
    line_count: usize,
    step: f32,
    padding_total: f32,
) -> f32 {
    step * lines_along(object_count, line_count) as f32 + padding_total
}

/// Offset of the first cell along one axis.
///
/// `container` is the content size on that axis and `required` the space taken by the cells.
/// Whatever is left after padding is distributed according to `align`.
pub fn start_offset(
    padding_leading: f32,
    padding_total: f32,
    container: f32,
    required: f32,
    align: Align,
) -> f32 {
    let surplus = container - padding_total - required;
    padding_leading + surplus * align.fraction()
}

/// `ceil(num / den)` for non-negative values; zero when `den` is not positive.
pub(crate) fn ceil_ratio(num: f32, den: f32) -> usize {
    if den <= 0.0 || num <= 0.0 {
        return 0;
    }
    let ratio = num / den;
    let q = ratio as usize;
    if (q as f32) < ratio { q + 1 } else { q }
}

/// `floor(v)` for a count; negative values map to zero.
pub(crate) fn floor_count(v: f32) -> usize {
    // `as` saturates: negatives and NaN become 0.
    v as usize
}

pub(crate) fn abs(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_size_adds_one_overscan_cell_per_side() {
        assert_eq!(window_size(300.0, 50.0, 1), 8);
        assert_eq!(window_size(310.0, 50.0, 1), 9);
        assert_eq!(window_size(300.0, 50.0, 3), 24);
        assert_eq!(window_size(0.0, 50.0, 2), 4);
    }

    #[test]
    fn lines_along_rounds_partial_lines_up() {
        assert_eq!(lines_along(10, 3), 4);
        assert_eq!(lines_along(9, 3), 3);
        assert_eq!(lines_along(0, 3), 0);
        assert_eq!(lines_along(7, 1), 7);
    }

    #[test]
    fn content_extent_includes_padding() {
        assert_eq!(content_extent(100, 1, 50.0, 0.0), 5000.0);
        assert_eq!(content_extent(10, 3, 20.0, 15.0), 95.0);
        assert_eq!(content_extent(0, 1, 50.0, 8.0), 8.0);
    }

    #[test]
    fn start_offset_distributes_surplus_by_alignment() {
        assert_eq!(start_offset(5.0, 10.0, 110.0, 100.0, Align::Start), 5.0);
        assert_eq!(start_offset(0.0, 0.0, 300.0, 100.0, Align::Center), 100.0);
        assert_eq!(start_offset(4.0, 8.0, 308.0, 100.0, Align::End), 204.0);
    }

    #[test]
    fn ceil_ratio_handles_exact_and_fractional_ratios() {
        assert_eq!(ceil_ratio(300.0, 50.0), 6);
        assert_eq!(ceil_ratio(301.0, 50.0), 7);
        assert_eq!(ceil_ratio(0.5, 50.0), 1);
        assert_eq!(ceil_ratio(-10.0, 50.0), 0);
        assert_eq!(ceil_ratio(10.0, 0.0), 0);
    }

    #[test]
    fn floor_count_saturates_negatives() {
        assert_eq!(floor_count(2.9), 2);
        assert_eq!(floor_count(-3.0), 0);
        assert_eq!(abs(-2.5), 2.5);
    }
}
