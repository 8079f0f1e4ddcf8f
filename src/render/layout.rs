// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! Slider panel layout, recomputed from the window size every frame.

use crate::editing::{SliderGeometry, SliderTrack};
use crate::settings::slider_panel;
use kurbo::{Rect, Size};

/// Where the weight panel and its rows go for a given window size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPanelLayout {
    /// Opaque panel anchored to the bottom-right corner
    pub panel: Rect,
    /// Track bounds and row positions, also used for hit testing
    pub geometry: SliderGeometry,
    /// Left edge of the value labels
    pub label_x: f64,
}

impl SliderPanelLayout {
    pub fn compute(window: Size) -> Self {
        let outer = slider_panel::OUTER_PADDING;
        let width = (window.width / 2.0 - outer).max(1.0);
        let height = (window.height / slider_panel::HEIGHT_DIVISOR).max(1.0);
        let x0 = window.width - width - outer;
        let y0 = window.height - height - outer;
        let panel = Rect::new(x0, y0, x0 + width, y0 + height);

        let inner = height / slider_panel::INNER_PADDING_DIVISOR;

        // Rows spread evenly over the padded height; the -1 keeps the last
        // one-pixel track inside the padding
        let span = (height - inner * 2.0 - 1.0).max(0.0);
        let rows = [0.0, 1.0, 2.0, 3.0].map(|i| y0 + inner + span * i / 3.0);

        let track_width = (width - inner * 2.0) * slider_panel::TRACK_WIDTH_RATIO;
        let track = SliderTrack::new(x0 + inner, track_width, slider_panel::TRACK_MIN_WIDTH);

        Self {
            panel,
            geometry: SliderGeometry { track, rows },
            label_x: track.x2 + inner,
        }
    }
}
