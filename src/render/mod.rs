// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! Frame rendering: session state → ordered draw primitives.
//!
//! [`render_frame`] reads the session and issues primitives to a
//! [`Canvas`]. The same sequence is produced for the same state, so tests
//! record it with a [`DisplayList`] and the canvas widget replays that list
//! into a vello scene outside the session lock.

mod layout;

pub use layout::SliderPanelLayout;

use crate::curve;
use crate::editing::{CurveSession, hit_test};
use crate::settings;
use crate::theme;
use kurbo::{Point, Rect};
use peniko::Color;
use thiserror::Error;

/// A drawing resource could not be created
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to rasterize label {label:?}: {reason}")]
    Text { label: String, reason: String },

    #[error("failed to allocate {resource}: {reason}")]
    Allocation {
        resource: &'static str,
        reason: String,
    },
}

/// Draw target for one frame.
///
/// Coordinates are display pixels. `text` places the left end of the
/// label's vertical midline at `origin`.
pub trait Canvas {
    fn clear(&mut self, color: Color) -> Result<(), RenderError>;
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError>;
    fn line(&mut self, from: Point, to: Point, width: f64, color: Color)
    -> Result<(), RenderError>;
    fn text(
        &mut self,
        text: &str,
        origin: Point,
        font_size: f32,
        color: Color,
    ) -> Result<(), RenderError>;
    /// End of frame
    fn present(&mut self) -> Result<(), RenderError>;
}

/// One recorded draw primitive
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Clear(Color),
    FillRect {
        rect: Rect,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        width: f64,
        color: Color,
    },
    Text {
        text: String,
        origin: Point,
        font_size: f32,
        color: Color,
    },
    Present,
}

/// Canvas that records primitives for later replay
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Whether the recorded frame was finished with `present`
    pub fn is_complete(&self) -> bool {
        matches!(self.commands.last(), Some(DrawCommand::Present))
    }

    /// Issue every recorded primitive to another canvas, in order
    pub fn replay(&self, canvas: &mut impl Canvas) -> Result<(), RenderError> {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => canvas.clear(*color)?,
                DrawCommand::FillRect { rect, color } => canvas.fill_rect(*rect, *color)?,
                DrawCommand::Line {
                    from,
                    to,
                    width,
                    color,
                } => canvas.line(*from, *to, *width, *color)?,
                DrawCommand::Text {
                    text,
                    origin,
                    font_size,
                    color,
                } => canvas.text(text, *origin, *font_size, *color)?,
                DrawCommand::Present => canvas.present()?,
            }
        }
        Ok(())
    }
}

impl Canvas for DisplayList {
    /// Starts a new frame: earlier commands are discarded
    fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::FillRect { rect, color });
        Ok(())
    }

    fn line(
        &mut self,
        from: Point,
        to: Point,
        width: f64,
        color: Color,
    ) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
        Ok(())
    }

    fn text(
        &mut self,
        text: &str,
        origin: Point,
        font_size: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            font_size,
            color,
        });
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Present);
        Ok(())
    }
}

/// Draw one frame of the editor and publish the slider layout it used.
///
/// Order: background, curve, control polygon, point markers, slider panel,
/// then per weight its label, track and handle. Stops at the first canvas
/// failure.
pub fn render_frame(
    session: &mut CurveSession,
    canvas: &mut impl Canvas,
) -> Result<(), RenderError> {
    canvas.clear(theme::canvas::BACKGROUND)?;

    draw_curve(session, canvas)?;
    draw_control_polygon(session, canvas)?;
    draw_points(session, canvas)?;

    let layout = SliderPanelLayout::compute(session.window());
    session.publish_slider_geometry(layout.geometry);
    draw_slider_panel(session, &layout, canvas)?;

    canvas.present()
}

/// The curve is evaluated straight from display-space control points.
/// The view transform is a uniform scale plus translation, so the weighted
/// blend commutes with it.
fn draw_curve(session: &CurveSession, canvas: &mut impl Canvas) -> Result<(), RenderError> {
    let samples = curve::sample_curve(
        &session.display_points(),
        &session.weights,
        session.curve_segments,
    );
    for pair in samples.windows(2) {
        canvas.line(
            pair[0],
            pair[1],
            theme::size::CURVE_STROKE_WIDTH,
            theme::curve::STROKE,
        )?;
    }
    Ok(())
}

fn draw_control_polygon(
    session: &CurveSession,
    canvas: &mut impl Canvas,
) -> Result<(), RenderError> {
    let points = session.display_points();
    for pair in points.windows(2) {
        canvas.line(
            pair[0],
            pair[1],
            theme::size::LINE_WIDTH,
            theme::curve::CONTROL_POLYGON,
        )?;
    }
    Ok(())
}

fn draw_points(session: &CurveSession, canvas: &mut impl Canvas) -> Result<(), RenderError> {
    let dragged = session.selection.point();
    for (index, position) in session.display_points().into_iter().enumerate() {
        let color = if dragged == Some(index) {
            theme::point::SELECTED
        } else if index == 0 || index == 3 {
            theme::point::ENDPOINT
        } else {
            theme::point::CONTROL
        };
        canvas.fill_rect(hit_test::handle_rect(position, session.handle_size), color)?;
    }
    Ok(())
}

fn draw_slider_panel(
    session: &CurveSession,
    layout: &SliderPanelLayout,
    canvas: &mut impl Canvas,
) -> Result<(), RenderError> {
    canvas.fill_rect(layout.panel, theme::slider::PANEL)?;

    let track = layout.geometry.track;
    for (row, y) in layout.geometry.rows.into_iter().enumerate() {
        let value = session.weights.get(row);

        canvas.text(
            &format_weight(value),
            Point::new(layout.label_x, y),
            settings::slider_panel::LABEL_FONT_SIZE,
            theme::slider::LABEL,
        )?;
        canvas.line(
            Point::new(track.x1, y),
            Point::new(track.x2, y),
            theme::size::LINE_WIDTH,
            theme::slider::TRACK,
        )?;
        canvas.fill_rect(
            hit_test::handle_rect(layout.geometry.handle_position(row, value), session.handle_size),
            theme::slider::HANDLE,
        )?;
    }
    Ok(())
}

/// Weight label text, always two decimals
pub fn format_weight(value: f64) -> String {
    format!("{value:.2}")
}
