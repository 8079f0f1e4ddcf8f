// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! Rational cubic Bézier evaluation.
//!
//! A rational cubic blends its four control points with the cubic
//! Bernstein basis scaled by per-point weights, then divides by the sum of
//! those same scaled basis values at `t`:
//!
//! ```text
//! B(t) = Σ wᵢ·bᵢ(t)·Pᵢ / Σ wᵢ·bᵢ(t)
//! ```
//!
//! With every weight at 1.0 the denominator is 1 and the curve is the
//! ordinary cubic. Everything here is `f64`.

use crate::settings;
use kurbo::{CubicBez, ParamCurve, Point};

/// The four control points, in curve order (P0 start, P1/P2 control, P3 end)
pub type ControlPoints = [Point; 4];

/// Per-point weights, always inside `[weight::MIN, weight::MAX]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights([f64; 4]);

impl Weights {
    /// Build weights from raw values, clamping each into range
    pub fn new(values: [f64; 4]) -> Self {
        Self(values.map(clamp_weight))
    }

    /// Weight for control point `index`
    pub fn get(&self, index: usize) -> f64 {
        self.0[index]
    }

    /// Store a weight, clamped into range
    pub fn set(&mut self, index: usize, value: f64) {
        self.0[index] = clamp_weight(value);
    }

    pub fn as_array(&self) -> [f64; 4] {
        self.0
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self([settings::weight::DEFAULT; 4])
    }
}

fn clamp_weight(value: f64) -> f64 {
    value.clamp(settings::weight::MIN, settings::weight::MAX)
}

/// Cubic Bernstein basis `[b₀, b₁, b₂, b₃]` at `t`
pub fn bernstein(t: f64) -> [f64; 4] {
    let mt = 1.0 - t;
    [mt * mt * mt, 3.0 * mt * mt * t, 3.0 * mt * t * t, t * t * t]
}

/// Normalized blend coefficients `wᵢ·bᵢ(t) / Σ wⱼ·bⱼ(t)`.
///
/// Normalizing before blending keeps the endpoints exact: at `t = 0` the
/// coefficients are exactly `[1, 0, 0, 0]`, at `t = 1` exactly
/// `[0, 0, 0, 1]`, whatever the weights.
pub fn rational_basis(t: f64, weights: &Weights) -> [f64; 4] {
    let basis = bernstein(t);
    let mut scaled = [0.0; 4];
    for (i, slot) in scaled.iter_mut().enumerate() {
        *slot = weights.get(i) * basis[i];
    }
    let denominator: f64 = scaled.iter().sum();
    scaled.map(|value| value / denominator)
}

/// Point on the rational cubic at parameter `t`
pub fn rational_point(t: f64, points: &ControlPoints, weights: &Weights) -> Point {
    blend(&rational_basis(t, weights), points)
}

/// Rational cubic normalized by the raw weight sum `Σ wᵢ` instead of the
/// scaled basis sum.
///
/// This is the wrong formula. It only agrees with [`rational_point`] when
/// every weight is 1; otherwise the curve no longer starts at P0 or ends at
/// P3 and bends unevenly. Kept so the tests can show the difference.
pub fn raw_weight_sum_point(t: f64, points: &ControlPoints, weights: &Weights) -> Point {
    let basis = bernstein(t);
    let weight_sum: f64 = weights.as_array().iter().sum();
    let mut coefficients = [0.0; 4];
    for (i, slot) in coefficients.iter_mut().enumerate() {
        *slot = weights.get(i) * basis[i] / weight_sum;
    }
    blend(&coefficients, points)
}

/// Ordinary (unweighted) cubic at `t`
pub fn cubic_point(t: f64, points: &ControlPoints) -> Point {
    CubicBez::new(points[0], points[1], points[2], points[3]).eval(t)
}

/// Sample the rational cubic at `segments + 1` evenly spaced parameters,
/// from `t = 0` to `t = 1` inclusive.
///
/// Connecting consecutive samples with straight lines draws the curve.
pub fn sample_curve(points: &ControlPoints, weights: &Weights, segments: usize) -> Vec<Point> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let t = i as f64 / segments as f64;
            rational_point(t, points, weights)
        })
        .collect()
}

fn blend(coefficients: &[f64; 4], points: &ControlPoints) -> Point {
    let mut x = 0.0;
    let mut y = 0.0;
    for (c, p) in coefficients.iter().zip(points.iter()) {
        x += c * p.x;
        y += c * p.y;
    }
    Point::new(x, y)
}
