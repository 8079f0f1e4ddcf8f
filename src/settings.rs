// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! These are the compile-time defaults. Anything a user may want to tweak
//! without rebuilding is also exposed through `config::EditorConfig`, which
//! falls back to the values here. Visual styling (colors) belongs in
//! `theme.rs`.

// ============================================================================
// WINDOW SETTINGS
// ============================================================================
/// Initial drawable width in pixels
const WINDOW_WIDTH: f64 = 640.0;

/// Initial drawable height in pixels
const WINDOW_HEIGHT: f64 = 480.0;

// ============================================================================
// CURVE SETTINGS
// ============================================================================
/// Number of straight segments used to draw the curve
const CURVE_SEGMENTS: usize = 100;

// ============================================================================
// HANDLE SETTINGS
// ============================================================================
/// Side length of the square hit box and marker for points and slider
/// handles (display pixels)
const HANDLE_SIZE: f64 = 10.0;

// ============================================================================
// WEIGHT SETTINGS
// ============================================================================
/// Smallest weight a slider can produce
const WEIGHT_MIN: f64 = 0.01;

/// Largest weight a slider can produce
const WEIGHT_MAX: f64 = 2.00;

/// Initial weight; 1.0 everywhere reduces to an ordinary cubic
const WEIGHT_DEFAULT: f64 = 1.00;

// ============================================================================
// VIEWPORT SETTINGS
// ============================================================================
/// Base of the logarithmic zoom: one level multiplies scale by this
const ZOOM_BASE: f64 = 1.1;

/// Lowest log zoom level (1.1^-40, about 2% of actual size)
const MIN_LOG_ZOOM: f64 = -40.0;

/// Highest log zoom level (1.1^40, about 45x actual size)
const MAX_LOG_ZOOM: f64 = 40.0;

/// Log zoom levels per wheel notch
const WHEEL_STEP: f64 = 1.0;

/// Trackpad pixels that count as one wheel notch
const PIXELS_PER_NOTCH: f64 = 50.0;

// ============================================================================
// SLIDER PANEL LAYOUT
// ============================================================================
/// Gap between the panel and the window's bottom-right corner
const SLIDER_PANEL_OUTER_PADDING: f64 = 20.0;

/// Panel height is window height divided by this
const SLIDER_PANEL_HEIGHT_DIVISOR: f64 = 6.0;

/// Inner padding is panel height divided by this
const SLIDER_PANEL_INNER_PADDING_DIVISOR: f64 = 5.0;

/// Share of the padded panel width taken by the track (rest holds labels)
const SLIDER_TRACK_WIDTH_RATIO: f64 = 0.75;

/// Narrowest track allowed, keeps the slider mapping non-degenerate
const SLIDER_TRACK_MIN_WIDTH: f64 = 1.0;

/// Label text size in pixels
const SLIDER_LABEL_FONT_SIZE: f32 = 14.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Window defaults
pub mod window {
    pub const WIDTH: f64 = super::WINDOW_WIDTH;
    pub const HEIGHT: f64 = super::WINDOW_HEIGHT;
}

/// Curve sampling
pub mod curve {
    /// Segments drawn per frame (also the minimum a config may request)
    pub const SEGMENTS: usize = super::CURVE_SEGMENTS;
}

/// Point and slider handles
pub mod handle {
    pub const SIZE: f64 = super::HANDLE_SIZE;
}

/// Weight range
pub mod weight {
    pub const MIN: f64 = super::WEIGHT_MIN;
    pub const MAX: f64 = super::WEIGHT_MAX;
    pub const DEFAULT: f64 = super::WEIGHT_DEFAULT;
}

/// Viewport zoom
pub mod viewport {
    pub const ZOOM_BASE: f64 = super::ZOOM_BASE;
    pub const MIN_LOG_ZOOM: f64 = super::MIN_LOG_ZOOM;
    pub const MAX_LOG_ZOOM: f64 = super::MAX_LOG_ZOOM;
    pub const WHEEL_STEP: f64 = super::WHEEL_STEP;
    pub const PIXELS_PER_NOTCH: f64 = super::PIXELS_PER_NOTCH;
}

/// Slider panel geometry, proportional to the window
pub mod slider_panel {
    pub const OUTER_PADDING: f64 = super::SLIDER_PANEL_OUTER_PADDING;
    pub const HEIGHT_DIVISOR: f64 = super::SLIDER_PANEL_HEIGHT_DIVISOR;
    pub const INNER_PADDING_DIVISOR: f64 = super::SLIDER_PANEL_INNER_PADDING_DIVISOR;
    pub const TRACK_WIDTH_RATIO: f64 = super::SLIDER_TRACK_WIDTH_RATIO;
    pub const TRACK_MIN_WIDTH: f64 = super::SLIDER_TRACK_MIN_WIDTH;
    pub const LABEL_FONT_SIZE: f32 = super::SLIDER_LABEL_FONT_SIZE;
}
