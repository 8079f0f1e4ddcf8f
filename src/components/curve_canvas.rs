// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve canvas widget - the editor's only view

use super::scene_canvas::{LabelShaper, SceneCanvas};
use crate::editing::{InputEvent, SharedSession};
use crate::render::{DisplayList, RenderError};
use crate::settings;
use kurbo::{Point, Size};
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButton,
    PointerButtonEvent, PointerEvent, PointerScrollEvent, PointerUpdate, PropertiesMut,
    PropertiesRef, RegisterCtx, ScrollDelta, TextEvent, Update, UpdateCtx, Widget,
};
use masonry::vello::Scene;

/// Action emitted when a frame could not be drawn. The editor cannot
/// continue after this.
#[derive(Debug, Clone)]
pub struct FrameFailed {
    pub reason: String,
}

impl From<RenderError> for FrameFailed {
    fn from(err: RenderError) -> Self {
        tracing::error!("[CurveCanvasWidget] frame failed: {err}");
        Self {
            reason: err.to_string(),
        }
    }
}

/// Draws the shared session and feeds it pointer input
pub struct CurveCanvasWidget {
    session: SharedSession,
    /// Last rendered frame, replayed on paint
    frame: DisplayList,
    labels: LabelShaper,
    size: Size,
    /// Last pointer position, for wheel events
    cursor: Point,
    /// Previous position while the primary button is held
    drag_from: Option<Point>,
}

impl CurveCanvasWidget {
    pub fn new(session: SharedSession) -> Self {
        Self {
            session,
            frame: DisplayList::new(),
            labels: LabelShaper::new(),
            size: Size::ZERO,
            cursor: Point::ZERO,
            drag_from: None,
        }
    }

    /// Re-render the session and shape its labels
    fn refresh(&mut self) -> Result<(), RenderError> {
        self.session.render(&mut self.frame)?;
        self.labels.prepare(&self.frame)
    }

    /// Hand one event to the session and redraw
    fn apply(&mut self, ctx: &mut EventCtx<'_>, event: InputEvent) {
        self.session.dispatch(&event);
        self.redraw(ctx);
    }

    fn redraw(&mut self, ctx: &mut EventCtx<'_>) {
        if let Err(err) = self.refresh() {
            ctx.submit_action::<FrameFailed>(FrameFailed::from(err));
        }
        ctx.request_render();
    }

    fn handle_scroll(&mut self, ctx: &mut EventCtx<'_>, delta: &ScrollDelta) {
        // Negative y = scroll up = zoom in
        let notches = match delta {
            ScrollDelta::LineDelta(_x, y) => -*y as f64,
            ScrollDelta::PixelDelta(pos) => -pos.y / settings::viewport::PIXELS_PER_NOTCH,
            ScrollDelta::PageDelta(_x, y) => -*y as f64 * 3.0,
        };

        if notches.abs() < 0.001 {
            return;
        }

        self.apply(
            ctx,
            InputEvent::Wheel {
                position: self.cursor,
                delta: notches,
            },
        );
    }
}

impl Widget for CurveCanvasWidget {
    type Action = FrameFailed;

    fn accepts_focus(&self) -> bool {
        true
    }

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {}

    fn update(
        &mut self,
        _ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &Update,
    ) {
    }

    fn layout(
        &mut self,
        ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        let size = bc.max();
        if size != self.size || !self.frame.is_complete() {
            self.size = size;
            let result = self
                .session
                .resize(size, &mut self.frame)
                .and_then(|()| self.labels.prepare(&self.frame));
            if let Err(err) = result {
                ctx.submit_action::<FrameFailed>(FrameFailed::from(err));
            }
        }
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        if !self.frame.is_complete() {
            return;
        }

        let mut canvas = SceneCanvas::new(scene, ctx.size(), self.labels.layouts());
        if let Err(err) = self.frame.replay(&mut canvas) {
            tracing::error!("[CurveCanvasWidget::paint] {err}");
        }
    }

    fn accessibility_role(&self) -> Role {
        Role::Canvas
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_label("Weighted Bézier curve");
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        ctx.request_focus();

        match event {
            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                ctx.capture_pointer();
                let position = ctx.local_position(state.position);
                self.cursor = position;
                self.drag_from = Some(position);
                self.apply(ctx, InputEvent::PointerDown { position });
            }

            PointerEvent::Move(PointerUpdate { current, .. }) => {
                let position = ctx.local_position(current.position);
                self.cursor = position;
                // Hover moves change nothing
                if let Some(last) = self.drag_from {
                    self.drag_from = Some(position);
                    self.apply(
                        ctx,
                        InputEvent::PointerMove {
                            position,
                            delta: position - last,
                        },
                    );
                }
            }

            PointerEvent::Up(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                let position = ctx.local_position(state.position);
                self.cursor = position;
                self.drag_from = None;
                ctx.release_pointer();
                self.apply(ctx, InputEvent::PointerUp { position });
            }

            PointerEvent::Cancel(_) => {
                if self.drag_from.take().is_some() {
                    self.apply(ctx, InputEvent::Cancel);
                }
            }

            PointerEvent::Scroll(PointerScrollEvent { delta, .. }) => {
                self.handle_scroll(ctx, delta);
            }

            _ => {}
        }
    }

    fn on_text_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &TextEvent,
    ) {
        use masonry::core::keyboard::{Key, KeyState, NamedKey};

        let TextEvent::Keyboard(key_event) = event else {
            return;
        };
        if key_event.state != KeyState::Down {
            return;
        }

        if let Key::Named(NamedKey::Escape) = key_event.key {
            if self.drag_from.take().is_some() {
                ctx.release_pointer();
                self.apply(ctx, InputEvent::Cancel);
                ctx.set_handled();
            }
            return;
        }

        let cmd = key_event.modifiers.meta() || key_event.modifiers.ctrl();
        if !cmd {
            return;
        }

        let key = &key_event.key;
        if matches!(key, Key::Character(c) if c == "=" || c == "+") {
            self.session.with(|s| s.zoom_about_center(s.wheel_step));
        } else if matches!(key, Key::Character(c) if c == "-") {
            self.session.with(|s| s.zoom_about_center(-s.wheel_step));
        } else if matches!(key, Key::Character(c) if c == "0") {
            self.session.with(|s| s.reset_view());
        } else {
            return;
        }

        tracing::debug!("[CurveCanvasWidget::on_text_event] view shortcut {:?}", key);
        self.redraw(ctx);
        ctx.set_handled();
    }
}

// --- Xilem View Wrapper ---

use std::marker::PhantomData;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Create a canvas view over `session`
///
/// `on_failure` runs when a frame cannot be drawn.
pub fn curve_canvas<State, F>(session: SharedSession, on_failure: F) -> CurveCanvasView<State, F>
where
    F: Fn(&mut State, FrameFailed),
{
    CurveCanvasView {
        session,
        on_failure,
        phantom: PhantomData,
    }
}

/// The Xilem View for CurveCanvasWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct CurveCanvasView<State, F> {
    session: SharedSession,
    on_failure: F,
    phantom: PhantomData<fn() -> State>,
}

impl<State, F> ViewMarker for CurveCanvasView<State, F> {}

impl<State: 'static, F: Fn(&mut State, FrameFailed) + 'static> View<State, (), ViewCtx>
    for CurveCanvasView<State, F>
{
    type Element = Pod<CurveCanvasWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let widget = CurveCanvasWidget::new(self.session.clone());
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        _prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        // The widget shares the session; nothing to push
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<()> {
        match message.take_message::<FrameFailed>() {
            Some(failure) => {
                (self.on_failure)(app_state, *failure);
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
