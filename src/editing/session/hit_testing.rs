// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing methods for CurveSession

use super::CurveSession;
use crate::editing::hit_test;
use crate::editing::selection::Selection;
use kurbo::Point;

impl CurveSession {
    /// Control point under the cursor, lowest index first
    pub fn hit_test_point(&self, screen_pos: Point) -> Option<usize> {
        hit_test::first_hit(screen_pos, self.display_points(), self.handle_size)
    }

    /// Slider handle under the cursor, lowest index first.
    ///
    /// Uses the layout from the last render; before anything has been
    /// drawn there are no handles to hit.
    pub fn hit_test_slider(&self, screen_pos: Point) -> Option<usize> {
        let geometry = self.slider_geometry()?;
        let handles = (0..4).map(|row| geometry.handle_position(row, self.weights.get(row)));
        hit_test::first_hit(screen_pos, handles, self.handle_size)
    }

    /// What a press at `screen_pos` would grab: points, then sliders, then
    /// the background
    pub fn target_at(&self, screen_pos: Point) -> Selection {
        if let Some(index) = self.hit_test_point(screen_pos) {
            return Selection::Point(index);
        }
        if let Some(index) = self.hit_test_slider(screen_pos) {
            return Selection::Slider(index);
        }
        Selection::Background
    }
}
