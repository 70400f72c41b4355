#![forbid(unsafe_code)]

//! Drag bounds for a resize boundary.
//!
//! Bounds are expressed in the pointer (pixel) domain. A boundary between
//! `left` and `right` may move left until the left header hits its minimum or
//! the right header hits its maximum, and right until the right header hits
//! its minimum or the left header hits its maximum.
//!
//! ```text
//! min = max(left.min  - left.width / r,  right.width / r - right.max)
//! max = min(right.width / r - right.min, left.max - left.width / r)
//! ```
//!
//! where `r` is width units per pixel.

use serde::{Deserialize, Serialize};

use crate::header::HeaderNode;

/// Valid pointer-delta range for one drag, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxChangePx {
    pub min: f64,
    pub max: f64,
}

impl MaxChangePx {
    /// Compute the range for the boundary between `left` and `right`.
    #[must_use]
    pub fn between(left: &HeaderNode, right: &HeaderNode, width_unit_per_px: f64) -> Self {
        let left_px = left.total_width / width_unit_per_px;
        let right_px = right.total_width / width_unit_per_px;
        Self {
            min: (left.total_min_width - left_px).max(right_px - right.total_max_width),
            max: (right_px - right.total_min_width).min(left.total_max_width - left_px),
        }
    }

    /// Clamp a raw pointer delta into this range.
    ///
    /// Degenerate ranges (`min > max`) resolve to `min`.
    #[must_use]
    pub fn clamp(self, delta: f64) -> f64 {
        delta.min(self.max).max(self.min)
    }

    #[must_use]
    pub fn contains(self, delta: f64) -> bool {
        delta >= self.min && delta <= self.max
    }
}

/// Ratio between the table's logical width and its rendered pixel width.
///
/// Returns `None` when the container has not been measured or measures zero.
#[must_use]
pub fn width_unit_per_px(total_columns_width: f64, container_px: f64) -> Option<f64> {
    if container_px.is_finite() && container_px > 0.0 {
        Some(total_columns_width / container_px)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(id: &str, width: f64, min: f64, max: f64) -> HeaderNode {
        HeaderNode::leaf(id, width, min, max)
    }

    #[test]
    fn symmetric_headers_unit_ratio() {
        let left = header("l", 100.0, 50.0, 300.0);
        let right = header("r", 100.0, 50.0, 300.0);
        let range = MaxChangePx::between(&left, &right, 1.0);
        assert_eq!(range, MaxChangePx { min: -50.0, max: 50.0 });
    }

    #[test]
    fn right_max_limits_shrinking_left() {
        // Right may only grow by 20, so the boundary may only move 20 left.
        let left = header("l", 200.0, 0.0, 400.0);
        let right = header("r", 100.0, 0.0, 120.0);
        let range = MaxChangePx::between(&left, &right, 1.0);
        assert_eq!(range.min, -20.0);
        assert_eq!(range.max, 100.0);
    }

    #[test]
    fn left_max_limits_growing_left() {
        let left = header("l", 100.0, 0.0, 130.0);
        let right = header("r", 100.0, 0.0, 400.0);
        let range = MaxChangePx::between(&left, &right, 1.0);
        assert_eq!(range.max, 30.0);
        assert_eq!(range.min, -100.0);
    }

    #[test]
    fn ratio_scales_widths_into_pixels() {
        // Two width units per pixel: 100 units render as 50px.
        let left = header("l", 100.0, 0.0, 1000.0);
        let right = header("r", 100.0, 0.0, 1000.0);
        let range = MaxChangePx::between(&left, &right, 2.0);
        assert_eq!(range.min, -50.0);
        assert_eq!(range.max, 50.0);
    }

    #[test]
    fn clamp_holds_delta_inside_range() {
        let range = MaxChangePx { min: -50.0, max: 50.0 };
        assert_eq!(range.clamp(500.0), 50.0);
        assert_eq!(range.clamp(-500.0), -50.0);
        assert_eq!(range.clamp(12.5), 12.5);
        assert!(range.contains(range.clamp(1e9)));
    }

    #[test]
    fn degenerate_range_does_not_panic() {
        let left = header("l", 100.0, 300.0, 50.0);
        let right = header("r", 100.0, 50.0, 300.0);
        let range = MaxChangePx::between(&left, &right, 1.0);
        assert!(range.min > range.max);
        assert_eq!(range.clamp(0.0), range.min);
    }

    #[test]
    fn unmeasured_container_has_no_ratio() {
        assert_eq!(width_unit_per_px(300.0, 0.0), None);
        assert_eq!(width_unit_per_px(300.0, f64::NAN), None);
        assert_eq!(width_unit_per_px(300.0, 150.0), Some(2.0));
    }
}
