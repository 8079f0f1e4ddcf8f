// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! Weight ⇄ pixel mapping for the slider tracks.

use crate::settings::weight::{MAX, MIN};
use kurbo::Point;

/// Pixel x of `value` on a track spanning `x1..x2`.
///
/// Requires `x2 > x1`.
pub fn value_to_x(value: f64, x1: f64, x2: f64) -> f64 {
    debug_assert!(x2 > x1, "degenerate slider track: {x1}..{x2}");
    let fraction = (value - MIN) / (MAX - MIN);
    x1 * (1.0 - fraction) + x2 * fraction
}

/// Weight at pixel `x` on a track spanning `x1..x2`.
///
/// Requires `x2 > x1`. Does not clamp: callers clamp `x` into the track
/// first (see [`SliderTrack::value_at`]).
pub fn x_to_value(x: f64, x1: f64, x2: f64) -> f64 {
    debug_assert!(x2 > x1, "degenerate slider track: {x1}..{x2}");
    let fraction = (x - x1) / (x2 - x1);
    MIN * (1.0 - fraction) + MAX * fraction
}

/// Horizontal extent of a slider track, shared by every row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderTrack {
    pub x1: f64,
    pub x2: f64,
}

impl SliderTrack {
    /// Track from `x1` with the given width, never narrower than `min_width`
    pub fn new(x1: f64, width: f64, min_width: f64) -> Self {
        Self {
            x1,
            x2: x1 + width.max(min_width),
        }
    }

    pub fn x_for(&self, value: f64) -> f64 {
        value_to_x(value, self.x1, self.x2)
    }

    /// Weight under display `x`, clamping `x` onto the track first
    pub fn value_at(&self, x: f64) -> f64 {
        let x = x.clamp(self.x1, self.x2);
        x_to_value(x, self.x1, self.x2).clamp(MIN, MAX)
    }
}

/// Slider layout published by the most recent render pass and read by
/// pointer hit testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    pub track: SliderTrack,
    /// Display y of each row, top to bottom, index-matched to the weights
    pub rows: [f64; 4],
}

impl SliderGeometry {
    /// Display position of the handle for `row` at `value`
    pub fn handle_position(&self, row: usize, value: f64) -> Point {
        Point::new(self.track.x_for(value), self.rows[row])
    }
}
