// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! Platform-neutral pointer input.
//!
//! The windowing layer converts its own events into these before handing
//! them to the session. All positions are in display pixels relative to the
//! canvas origin.

use kurbo::{Point, Vec2};

/// One pointer or wheel event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed
    PointerDown { position: Point },
    /// Primary button released
    PointerUp { position: Point },
    /// Pointer moved by `delta` since the previous move
    PointerMove { position: Point, delta: Vec2 },
    /// Wheel turned; positive `delta` zooms in, in notches
    Wheel { position: Point, delta: f64 },
    /// The platform took the pointer away mid-drag
    Cancel,
}

impl InputEvent {
    pub fn position(&self) -> Option<Point> {
        match self {
            InputEvent::PointerDown { position }
            | InputEvent::PointerUp { position }
            | InputEvent::PointerMove { position, .. }
            | InputEvent::Wheel { position, .. } => Some(*position),
            InputEvent::Cancel => None,
        }
    }
}
