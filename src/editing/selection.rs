// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! What the pointer is currently manipulating.

/// Target of the active drag.
///
/// Only the `Point` and `Slider` variants carry an index (0..4, matching
/// control point and weight order), so there is no index to misread while
/// nothing, or the background, is grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// No button held
    #[default]
    None,
    /// Dragging control point `i`
    Point(usize),
    /// Dragging the handle of weight slider `i`
    Slider(usize),
    /// Dragging empty canvas to pan
    Background,
}

impl Selection {
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    /// Index of the control point being dragged, if any
    pub fn point(&self) -> Option<usize> {
        match self {
            Selection::Point(index) => Some(*index),
            _ => None,
        }
    }

    /// Index of the slider being dragged, if any
    pub fn slider(&self) -> Option<usize> {
        match self {
            Selection::Slider(index) => Some(*index),
            _ => None,
        }
    }
}
