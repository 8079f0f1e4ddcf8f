// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - all editable state for the single curve

mod hit_testing;
mod pointer;

use super::selection::Selection;
use super::slider::SliderGeometry;
use super::viewport::{PanMode, ViewPort};
use crate::config::EditorConfig;
use crate::curve::{ControlPoints, Weights};
use kurbo::{Point, Size};

/// Editing session for the curve
///
/// Holds the control points, their weights, the viewport, the current
/// drag target, and the slider layout published by the last render. One
/// session lives for the whole process; see `SharedSession` for how it is
/// shared between the event path and the resize path.
#[derive(Debug, Clone)]
pub struct CurveSession {
    /// World-space control points, P0..P3
    pub points: ControlPoints,

    /// One weight per control point
    pub weights: Weights,

    /// Pan and zoom
    pub viewport: ViewPort,

    /// What the pointer is dragging
    pub selection: Selection,

    /// Drawable size in pixels; only the resize path changes it
    window: Size,

    /// Slider layout from the most recent render, None before the first
    slider_geometry: Option<SliderGeometry>,

    /// Side of the square hit box around points and handles
    pub handle_size: f64,

    /// How background drags move the view
    pub pan_mode: PanMode,

    /// Log zoom levels per wheel notch
    pub wheel_step: f64,

    /// Straight segments per drawn curve
    pub curve_segments: usize,
}

impl CurveSession {
    /// Create a session with the default square of points for the
    /// configured window size
    pub fn new(config: &EditorConfig) -> Self {
        let window = Size::new(config.window.width, config.window.height);
        Self {
            points: default_points(window),
            weights: Weights::default(),
            viewport: ViewPort::new(),
            selection: Selection::None,
            window,
            slider_geometry: None,
            handle_size: config.handle_size,
            pan_mode: config.pan_mode,
            wheel_step: config.wheel_step,
            curve_segments: config.curve_segments,
        }
    }

    pub fn window(&self) -> Size {
        self.window
    }

    /// Record new drawable dimensions.
    ///
    /// The slider layout from the previous size is dropped; the caller
    /// re-renders right away to publish a fresh one.
    pub fn set_window(&mut self, size: Size) {
        self.window = size;
        self.slider_geometry = None;
    }

    pub fn slider_geometry(&self) -> Option<&SliderGeometry> {
        self.slider_geometry.as_ref()
    }

    /// Store the slider layout the renderer just drew
    pub fn publish_slider_geometry(&mut self, geometry: SliderGeometry) {
        self.slider_geometry = Some(geometry);
    }

    /// Display position of control point `index`
    pub fn point_display(&self, index: usize) -> Point {
        self.viewport.to_display(self.points[index], self.window)
    }

    /// All control points in display space
    pub fn display_points(&self) -> ControlPoints {
        self.points.map(|p| self.viewport.to_display(p, self.window))
    }

    /// Zero pan and zoom, leaving the curve untouched
    pub fn reset_view(&mut self) {
        self.viewport.reset();
        tracing::info!("View reset");
    }

    /// Zoom by `delta` levels about the middle of the window
    pub fn zoom_about_center(&mut self, delta: f64) {
        let center = Point::new(self.window.width / 2.0, self.window.height / 2.0);
        self.viewport.zoom_at(center, delta, self.window);
        tracing::info!("Zoom: log zoom = {:.2}", self.viewport.log_zoom);
    }
}

impl Default for CurveSession {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

/// A square of points a quarter of the window from the center, start and
/// end along the top edge
fn default_points(window: Size) -> ControlPoints {
    let dx = window.width / 4.0;
    let dy = window.height / 4.0;
    [
        Point::new(-dx, -dy),
        Point::new(-dx, dy),
        Point::new(dx, dy),
        Point::new(dx, -dy),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::InputEvent;
    use crate::editing::viewport;
    use crate::render::{DisplayList, render_frame};
    use crate::settings;
    use approx::assert_abs_diff_eq;
    use kurbo::Vec2;

    fn rendered_session() -> CurveSession {
        let mut session = CurveSession::default();
        let mut frame = DisplayList::new();
        render_frame(&mut session, &mut frame).unwrap();
        session
    }

    #[test]
    fn starts_with_defaults() {
        let session = CurveSession::default();
        assert_eq!(session.selection, Selection::None);
        assert_eq!(session.weights, Weights::default());
        assert_eq!(session.viewport, ViewPort::new());
        assert!(session.slider_geometry().is_none());
        assert_eq!(session.points[1], Point::new(-160.0, 120.0));
    }

    #[test]
    fn default_points_form_centered_square_on_screen() {
        let session = CurveSession::default();
        let display = session.display_points();
        assert_eq!(display[0], Point::new(160.0, 120.0));
        assert_eq!(display[1], Point::new(160.0, 360.0));
        assert_eq!(display[2], Point::new(480.0, 360.0));
        assert_eq!(display[3], Point::new(480.0, 120.0));
    }

    #[test]
    fn drag_point_one() {
        let mut session = rendered_session();
        let p1 = session.point_display(1);

        session.handle_event(&InputEvent::PointerDown { position: p1 });
        assert_eq!(session.selection, Selection::Point(1));

        let target = Point::new(300.0, 300.0);
        session.handle_event(&InputEvent::PointerMove {
            position: target,
            delta: target - p1,
        });
        let expected = viewport::to_world(
            target,
            session.viewport.pan,
            session.viewport.log_zoom,
            session.window(),
        );
        assert_eq!(session.points[1], expected);

        session.handle_event(&InputEvent::PointerUp { position: target });
        assert_eq!(session.selection, Selection::None);
    }

    #[test]
    fn drag_point_when_zoomed_and_panned() {
        let mut session = rendered_session();
        session.viewport.pan = Vec2::new(35.0, -12.0);
        session.viewport.log_zoom = 3.0;
        let mut frame = DisplayList::new();
        render_frame(&mut session, &mut frame).unwrap();

        let p2 = session.point_display(2);
        session.pointer_down(p2);
        assert_eq!(session.selection, Selection::Point(2));

        let target = Point::new(90.0, 75.0);
        session.pointer_move(target, target - p2);
        let back = session.point_display(2);
        assert_abs_diff_eq!(back.x, target.x, epsilon = 1e-9);
        assert_abs_diff_eq!(back.y, target.y, epsilon = 1e-9);
    }

    #[test]
    fn drag_slider_past_end_clamps_weight() {
        let mut session = rendered_session();
        let geometry = *session.slider_geometry().unwrap();
        let handle = geometry.handle_position(2, session.weights.get(2));

        session.pointer_down(handle);
        assert_eq!(session.selection, Selection::Slider(2));

        let beyond = Point::new(geometry.track.x2 + 200.0, handle.y);
        session.pointer_move(beyond, beyond - handle);
        assert_eq!(session.weights.get(2), settings::weight::MAX);

        let before = Point::new(geometry.track.x1 - 200.0, handle.y + 40.0);
        session.pointer_move(before, before - beyond);
        assert_eq!(session.weights.get(2), settings::weight::MIN);

        // Other weights untouched
        assert_eq!(session.weights.get(0), settings::weight::DEFAULT);
        assert_eq!(session.weights.get(1), settings::weight::DEFAULT);
        assert_eq!(session.weights.get(3), settings::weight::DEFAULT);
    }

    #[test]
    fn drag_slider_to_middle_of_track() {
        let mut session = rendered_session();
        let geometry = *session.slider_geometry().unwrap();
        let handle = geometry.handle_position(0, session.weights.get(0));

        session.pointer_down(handle);
        let target = Point::new(geometry.track.x_for(0.5), handle.y);
        session.pointer_move(target, target - handle);
        assert_abs_diff_eq!(session.weights.get(0), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn background_drag_pans_by_delta_at_zoom_zero() {
        let mut session = rendered_session();
        session.pointer_down(Point::new(600.0, 30.0));
        assert_eq!(session.selection, Selection::Background);

        session.pointer_move(Point::new(610.0, 25.0), Vec2::new(10.0, -5.0));
        assert_eq!(session.viewport.pan, Vec2::new(10.0, -5.0));
    }

    #[test]
    fn background_drag_is_scaled_when_zoomed() {
        let mut session = rendered_session();
        session.viewport.log_zoom = 2.0;
        session.pointer_down(Point::new(600.0, 30.0));
        session.pointer_move(Point::new(621.0, 30.0), Vec2::new(21.0, 0.0));
        assert_abs_diff_eq!(session.viewport.pan.x, 21.0 / 1.21, epsilon = 1e-9);
    }

    #[test]
    fn raw_pan_mode_uses_pixel_delta() {
        let config = EditorConfig {
            pan_mode: PanMode::Raw,
            ..EditorConfig::default()
        };
        let mut session = CurveSession::new(&config);
        session.viewport.log_zoom = 5.0;
        session.pointer_down(Point::new(600.0, 30.0));
        session.pointer_move(Point::new(610.0, 25.0), Vec2::new(10.0, -5.0));
        assert_eq!(session.viewport.pan, Vec2::new(10.0, -5.0));
    }

    #[test]
    fn points_win_over_sliders() {
        let mut session = rendered_session();
        let geometry = *session.slider_geometry().unwrap();
        let handle = geometry.handle_position(1, session.weights.get(1));

        // Park P3 on top of slider 1's handle
        session.points[3] = session.viewport.to_world(handle, session.window());
        session.pointer_down(handle);
        assert_eq!(session.selection, Selection::Point(3));
    }

    #[test]
    fn lower_point_index_wins_on_overlap() {
        let mut session = rendered_session();
        session.points[2] = session.points[1];
        let p1 = session.point_display(1);
        session.pointer_down(p1);
        assert_eq!(session.selection, Selection::Point(1));
    }

    #[test]
    fn sliders_ignored_before_first_render() {
        let mut session = CurveSession::default();
        // Where slider 0's handle will be for a 640x480 window
        session.pointer_down(Point::new(436.0, 396.0));
        assert_eq!(session.selection, Selection::Background);
    }

    #[test]
    fn pointer_down_never_leaves_none() {
        let mut session = rendered_session();
        for position in [
            Point::new(0.0, 0.0),
            Point::new(160.0, 120.0),
            Point::new(639.0, 479.0),
            Point::new(-50.0, 9000.0),
        ] {
            session.pointer_down(position);
            assert!(!session.selection.is_none());
            session.pointer_up();
            assert!(session.selection.is_none());
        }
    }

    #[test]
    fn move_without_selection_changes_nothing() {
        let mut session = rendered_session();
        let before = session.clone();
        session.pointer_move(Point::new(160.0, 360.0), Vec2::new(3.0, 3.0));
        assert_eq!(session.points, before.points);
        assert_eq!(session.weights, before.weights);
        assert_eq!(session.viewport, before.viewport);
    }

    #[test]
    fn cancel_releases_selection() {
        let mut session = rendered_session();
        session.pointer_down(Point::new(600.0, 30.0));
        session.handle_event(&InputEvent::Cancel);
        assert_eq!(session.selection, Selection::None);
    }

    #[test]
    fn wheel_keeps_cursor_anchored() {
        let mut session = rendered_session();
        let cursor = Point::new(410.0, 95.0);
        let old = session.viewport;
        let world_under_cursor = viewport::to_world(cursor, old.pan, old.log_zoom, session.window());

        session.handle_event(&InputEvent::Wheel {
            position: cursor,
            delta: 3.0,
        });
        let new = session.viewport;
        assert_eq!(new.log_zoom, 3.0);

        let after = viewport::to_display(world_under_cursor, new.pan, new.log_zoom, session.window());
        assert_abs_diff_eq!(after.x, cursor.x, epsilon = 1e-9);
        assert_abs_diff_eq!(after.y, cursor.y, epsilon = 1e-9);
    }

    #[test]
    fn wheel_step_scales_delta() {
        let config = EditorConfig {
            wheel_step: 0.5,
            ..EditorConfig::default()
        };
        let mut session = CurveSession::new(&config);
        session.wheel(Point::new(10.0, 10.0), -4.0);
        assert_eq!(session.viewport.log_zoom, -2.0);
    }

    #[test]
    fn resize_drops_stale_slider_geometry() {
        let mut session = rendered_session();
        assert!(session.slider_geometry().is_some());
        session.set_window(Size::new(1200.0, 900.0));
        assert!(session.slider_geometry().is_none());
    }

    #[test]
    fn zoom_about_center_and_reset() {
        let mut session = CurveSession::default();
        session.viewport.pan = Vec2::new(5.0, 5.0);
        session.zoom_about_center(2.0);
        assert_eq!(session.viewport.log_zoom, 2.0);
        assert_abs_diff_eq!(session.viewport.pan.x, 5.0, epsilon = 1e-9);

        session.reset_view();
        assert_eq!(session.viewport, ViewPort::new());
    }
}
