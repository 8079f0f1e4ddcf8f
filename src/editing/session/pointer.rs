// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer and wheel handling for CurveSession

use super::CurveSession;
use crate::editing::mouse::InputEvent;
use crate::editing::selection::Selection;
use kurbo::{Point, Vec2};

impl CurveSession {
    /// Apply one input event
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { position } => {
                self.pointer_down(position);
            }
            InputEvent::PointerUp { .. } | InputEvent::Cancel => self.pointer_up(),
            InputEvent::PointerMove { position, delta } => self.pointer_move(position, delta),
            InputEvent::Wheel { position, delta } => self.wheel(position, delta),
        }
    }

    /// Grab whatever is under the cursor. Never leaves the selection at
    /// `None`: empty canvas grabs the background.
    pub fn pointer_down(&mut self, screen_pos: Point) -> Selection {
        self.selection = self.target_at(screen_pos);
        tracing::debug!(
            "[CurveSession::pointer_down] at ({:.1}, {:.1}) -> {:?}",
            screen_pos.x,
            screen_pos.y,
            self.selection
        );
        self.selection
    }

    /// Release whatever was grabbed
    pub fn pointer_up(&mut self) {
        if !self.selection.is_none() {
            tracing::debug!("[CurveSession::pointer_up] releasing {:?}", self.selection);
        }
        self.selection = Selection::None;
    }

    /// Drag the current selection to `screen_pos`; `delta` is the motion
    /// since the previous move event
    pub fn pointer_move(&mut self, screen_pos: Point, delta: Vec2) {
        match self.selection {
            Selection::Point(index) => {
                self.points[index] = self.viewport.to_world(screen_pos, self.window);
            }
            Selection::Slider(index) => {
                // Sliders can only be grabbed after a render published them
                let Some(geometry) = self.slider_geometry() else {
                    tracing::warn!("slider {index} dragged without a published layout");
                    return;
                };
                let value = geometry.track.value_at(screen_pos.x);
                self.weights.set(index, value);
            }
            Selection::Background => {
                self.viewport.pan_by(delta, self.pan_mode);
            }
            Selection::None => {
                tracing::trace!("pointer moved with nothing grabbed");
            }
        }
    }

    /// Zoom by `delta` wheel notches about the cursor
    pub fn wheel(&mut self, screen_pos: Point, delta: f64) {
        self.viewport
            .zoom_at(screen_pos, delta * self.wheel_step, self.window);
        tracing::debug!(
            "Scroll zoom: delta={:.2}, log zoom={:.2}",
            delta,
            self.viewport.log_zoom
        );
    }
}
