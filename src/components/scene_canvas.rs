// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! Replays a recorded frame into a vello scene.
//!
//! Text is the only primitive that can fail, so labels are shaped up front
//! by [`LabelShaper`] from event and layout handlers, where a failure can be
//! reported. Painting then only places the prepared layouts.

use crate::render::{Canvas, DisplayList, DrawCommand, RenderError};
use kurbo::{Affine, Point, Rect, Size, Stroke};
use masonry::core::{BrushIndex, StyleProperty, render_text};
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::Brush;
use parley::{FontContext, FontFamily, FontStack, GenericFamily, Layout, LayoutContext};
use peniko::Color;

/// Shapes the label text of a frame
pub struct LabelShaper {
    font_cx: FontContext,
    layout_cx: LayoutContext<BrushIndex>,
    layouts: Vec<Layout<BrushIndex>>,
}

impl LabelShaper {
    pub fn new() -> Self {
        Self {
            font_cx: FontContext::default(),
            layout_cx: LayoutContext::new(),
            layouts: Vec::new(),
        }
    }

    /// Shape every text command of `frame`, in order
    pub fn prepare(&mut self, frame: &DisplayList) -> Result<(), RenderError> {
        self.layouts.clear();
        for command in frame.commands() {
            if let DrawCommand::Text {
                text, font_size, ..
            } = command
            {
                let layout = self.shape(text, *font_size)?;
                self.layouts.push(layout);
            }
        }
        Ok(())
    }

    pub fn layouts(&self) -> &[Layout<BrushIndex>] {
        &self.layouts
    }

    fn shape(&mut self, text: &str, font_size: f32) -> Result<Layout<BrushIndex>, RenderError> {
        let mut builder = self
            .layout_cx
            .ranged_builder(&mut self.font_cx, text, 1.0, false);
        builder.push_default(StyleProperty::FontSize(font_size));
        builder.push_default(StyleProperty::FontStack(FontStack::Single(
            FontFamily::Generic(GenericFamily::SansSerif),
        )));
        builder.push_default(StyleProperty::Brush(BrushIndex(0)));
        let mut layout = builder.build(text);
        layout.break_all_lines(None);

        // No usable font on the system
        if !text.is_empty() && layout.width() <= 0.0 {
            return Err(RenderError::Text {
                label: text.to_string(),
                reason: "no font produced any glyphs".to_string(),
            });
        }
        Ok(layout)
    }
}

impl Default for LabelShaper {
    fn default() -> Self {
        Self::new()
    }
}

/// Canvas drawing into a vello scene with labels from a [`LabelShaper`]
pub struct SceneCanvas<'a> {
    scene: &'a mut Scene,
    size: Size,
    labels: &'a [Layout<BrushIndex>],
    next_label: usize,
}

impl<'a> SceneCanvas<'a> {
    pub fn new(scene: &'a mut Scene, size: Size, labels: &'a [Layout<BrushIndex>]) -> Self {
        Self {
            scene,
            size,
            labels,
            next_label: 0,
        }
    }
}

impl Canvas for SceneCanvas<'_> {
    fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        self.next_label = 0;
        fill_color(self.scene, &Rect::from_origin_size(Point::ZERO, self.size), color);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        fill_color(self.scene, &rect, color);
        Ok(())
    }

    fn line(
        &mut self,
        from: Point,
        to: Point,
        width: f64,
        color: Color,
    ) -> Result<(), RenderError> {
        self.scene.stroke(
            &Stroke::new(width),
            Affine::IDENTITY,
            &Brush::Solid(color),
            None,
            &kurbo::Line::new(from, to),
        );
        Ok(())
    }

    fn text(
        &mut self,
        text: &str,
        origin: Point,
        _font_size: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        let Some(layout) = self.labels.get(self.next_label) else {
            return Err(RenderError::Text {
                label: text.to_string(),
                reason: "label was not shaped before painting".to_string(),
            });
        };
        self.next_label += 1;

        let brushes = vec![Brush::Solid(color)];
        let half_height = layout.height() as f64 / 2.0;
        render_text(
            self.scene,
            Affine::translate((origin.x, origin.y - half_height)),
            layout,
            &brushes,
            false,
        );
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}
