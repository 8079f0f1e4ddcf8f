// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors for UI, a dark to light gradient by default
// ============================================================================
const BASE_B: Color = Color::from_rgb8(0x20, 0x20, 0x20);
const BASE_C: Color = Color::from_rgb8(0x30, 0x30, 0x30);
const BASE_F: Color = Color::from_rgb8(0x60, 0x60, 0x60);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_L: Color = Color::from_rgb8(0xc0, 0xc0, 0xc0);

// ============================================================================
// CANVAS
// ============================================================================
const CANVAS_BACKGROUND: Color = BASE_B;

// ============================================================================
// CURVE AND CONTROL POLYGON
// ============================================================================
const CURVE_STROKE: Color = Color::from_rgb8(0x57, 0x9a, 0xff);
const CONTROL_POLYGON: Color = BASE_F;

// ============================================================================
// POINT COLORS
// ============================================================================
// Endpoints sit on the curve - GREEN
const ENDPOINT: Color = Color::from_rgb8(0x6a, 0xe7, 0x56);
// Interior control points pull the curve - PURPLE
const CONTROL_POINT: Color = Color::from_rgb8(0xcc, 0x99, 0xff);
const SELECTED_POINT: Color = Color::from_rgb8(0xff, 0xee, 0x55);

// ============================================================================
// SLIDER PANEL
// ============================================================================
const SLIDER_PANEL_BACKGROUND: Color = BASE_C;
const SLIDER_TRACK: Color = BASE_I;
const SLIDER_HANDLE: Color = Color::from_rgb8(0xff, 0xaa, 0x33);
const SLIDER_LABEL: Color = BASE_L;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Colors for the curve canvas
pub mod canvas {
    use super::Color;
    pub const BACKGROUND: Color = super::CANVAS_BACKGROUND;
}

/// Colors for the curve itself and its control polygon
pub mod curve {
    use super::Color;
    pub const STROKE: Color = super::CURVE_STROKE;
    pub const CONTROL_POLYGON: Color = super::CONTROL_POLYGON;
}

/// Colors for point markers
pub mod point {
    use super::Color;
    pub const ENDPOINT: Color = super::ENDPOINT;
    pub const CONTROL: Color = super::CONTROL_POINT;
    pub const SELECTED: Color = super::SELECTED_POINT;
}

/// Colors for the weight slider panel
pub mod slider {
    use super::Color;
    pub const PANEL: Color = super::SLIDER_PANEL_BACKGROUND;
    pub const TRACK: Color = super::SLIDER_TRACK;
    pub const HANDLE: Color = super::SLIDER_HANDLE;
    pub const LABEL: Color = super::SLIDER_LABEL;
}

/// Sizes for rendering
pub mod size {
    /// Width of the curve polyline
    pub const CURVE_STROKE_WIDTH: f64 = 1.5;

    /// Width of control polygon edges and slider tracks
    pub const LINE_WIDTH: f64 = 1.0;
}
