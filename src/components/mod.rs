// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! Widgets for the weighted Bézier editor

pub mod curve_canvas;
mod scene_canvas;

pub use curve_canvas::curve_canvas;
