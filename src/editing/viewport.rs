// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! World ⇄ display coordinate transform.
//!
//! The view is described by a pan center in world space and a signed
//! logarithmic zoom level. The linear scale is `ZOOM_BASE^|level|`, applied
//! as a multiplication when zoomed in and as a division when zoomed out, so
//! that levels `+n` and `-n` are exact inverses of each other.
//!
//! ```text
//! display = (world - pan) * scale + view_center
//! world   = (display - view_center) / scale + pan
//! ```

use crate::settings;
use kurbo::{Point, Size, Vec2};

/// Linear scale for a log zoom level, kept as a factor ≥ 1 plus a direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale {
    factor: f64,
    zoom_in: bool,
}

impl ZoomScale {
    pub fn from_log_zoom(log_zoom: f64) -> Self {
        Self {
            factor: settings::viewport::ZOOM_BASE.powf(log_zoom.abs()),
            zoom_in: log_zoom >= 0.0,
        }
    }

    /// World length → display length
    pub fn apply(&self, v: Vec2) -> Vec2 {
        if self.zoom_in {
            v * self.factor
        } else {
            v / self.factor
        }
    }

    /// Display length → world length
    pub fn invert(&self, v: Vec2) -> Vec2 {
        if self.zoom_in {
            v / self.factor
        } else {
            v * self.factor
        }
    }

    /// Display pixels per world unit
    pub fn linear(&self) -> f64 {
        if self.zoom_in {
            self.factor
        } else {
            1.0 / self.factor
        }
    }
}

fn view_center(view: Size) -> Vec2 {
    Vec2::new(view.width / 2.0, view.height / 2.0)
}

/// Map a world point to display pixels
pub fn to_display(world: Point, pan: Vec2, log_zoom: f64, view: Size) -> Point {
    let scaled = ZoomScale::from_log_zoom(log_zoom).apply(world.to_vec2() - pan);
    (scaled + view_center(view)).to_point()
}

/// Map display pixels back to a world point (exact inverse of
/// [`to_display`])
pub fn to_world(display: Point, pan: Vec2, log_zoom: f64, view: Size) -> Point {
    let unscaled = ZoomScale::from_log_zoom(log_zoom).invert(display.to_vec2() - view_center(view));
    (unscaled + pan).to_point()
}

/// How background drags move the pan center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanMode {
    /// Pixel deltas are converted to world units, so a drag covers the same
    /// screen distance at every zoom level
    #[default]
    Scaled,
    /// Pixel deltas are applied to the pan center unchanged
    Raw,
}

/// Pan and zoom state of the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPort {
    /// World point shown at the center of the view
    pub pan: Vec2,
    /// Signed log zoom; 0 is 1:1
    pub log_zoom: f64,
}

impl ViewPort {
    pub fn new() -> Self {
        Self {
            pan: Vec2::ZERO,
            log_zoom: 0.0,
        }
    }

    pub fn scale(&self) -> ZoomScale {
        ZoomScale::from_log_zoom(self.log_zoom)
    }

    pub fn to_display(&self, world: Point, view: Size) -> Point {
        to_display(world, self.pan, self.log_zoom, view)
    }

    pub fn to_world(&self, display: Point, view: Size) -> Point {
        to_world(display, self.pan, self.log_zoom, view)
    }

    /// Change the zoom by `delta` levels, keeping the world point under
    /// `anchor` (display space) fixed on screen.
    pub fn zoom_at(&mut self, anchor: Point, delta: f64, view: Size) {
        let anchored_world = self.to_world(anchor, view);

        let new_zoom = (self.log_zoom + delta).clamp(
            settings::viewport::MIN_LOG_ZOOM,
            settings::viewport::MAX_LOG_ZOOM,
        );
        let new_scale = ZoomScale::from_log_zoom(new_zoom);

        // Solve (world - pan) * new_scale + center = anchor for pan
        self.pan = anchored_world.to_vec2() - new_scale.invert(anchor.to_vec2() - view_center(view));
        self.log_zoom = new_zoom;
    }

    /// Move the pan center by a pointer motion delta (display pixels)
    pub fn pan_by(&mut self, delta: Vec2, mode: PanMode) {
        let world_delta = match mode {
            PanMode::Scaled => self.scale().invert(delta),
            PanMode::Raw => delta,
        };
        self.pan += world_delta;
    }

    /// Back to zero pan and 1:1 zoom
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ViewPort {
    fn default() -> Self {
        Self::new()
    }
}
