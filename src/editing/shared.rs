// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! The session behind one lock, shared by the event path and the resize
//! path.
//!
//! Every operation takes the lock for its whole critical section and
//! releases it before returning. Critical sections are short and do no
//! I/O, so the lock is never contended for long. A poisoned lock means a
//! panic happened mid-mutation; the state can no longer be trusted and the
//! process aborts.

use super::mouse::InputEvent;
use super::session::CurveSession;
use crate::render::{Canvas, RenderError, render_frame};
use kurbo::Size;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable handle to the single curve session
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<CurveSession>>,
}

impl SharedSession {
    pub fn new(session: CurveSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Acquire the session. Aborts the process if the lock is poisoned.
    pub fn lock(&self) -> MutexGuard<'_, CurveSession> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(err) => {
                tracing::error!("curve session lock poisoned: {err}");
                std::process::abort();
            }
        }
    }

    /// Apply one input event under the lock
    pub fn dispatch(&self, event: &InputEvent) {
        tracing::trace!("dispatch {:?} at {:?}", event, event.position());
        self.lock().handle_event(event);
    }

    /// Render the current state under the lock
    pub fn render(&self, canvas: &mut impl Canvas) -> Result<(), RenderError> {
        let mut session = self.lock();
        render_frame(&mut session, canvas)
    }

    /// Record new window dimensions and re-render immediately, in the same
    /// critical section, so that the next pointer event is hit-tested
    /// against slider positions for the new size.
    ///
    /// May be called from any thread.
    pub fn resize(&self, size: Size, canvas: &mut impl Canvas) -> Result<(), RenderError> {
        let mut session = self.lock();
        if session.window() != size {
            tracing::info!("Window resized to {}x{}", size.width, size.height);
        }
        session.set_window(size);
        render_frame(&mut session, canvas)
    }

    /// Run `f` with exclusive access to the session
    pub fn with<R>(&self, f: impl FnOnce(&mut CurveSession) -> R) -> R {
        f(&mut self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::Selection;
    use crate::render::{DisplayList, SliderPanelLayout};
    use kurbo::{Point, Vec2};
    use std::thread;

    #[test]
    fn dispatch_then_render() {
        let shared = SharedSession::new(CurveSession::default());
        let mut frame = DisplayList::new();
        shared.render(&mut frame).unwrap();

        let p0 = shared.with(|s| s.point_display(0));
        shared.dispatch(&InputEvent::PointerDown { position: p0 });
        assert_eq!(shared.with(|s| s.selection), Selection::Point(0));

        shared.dispatch(&InputEvent::PointerMove {
            position: Point::new(200.0, 200.0),
            delta: Vec2::new(40.0, 80.0),
        });
        shared.dispatch(&InputEvent::PointerUp {
            position: Point::new(200.0, 200.0),
        });
        assert_eq!(shared.with(|s| s.points[0]), Point::new(-120.0, -40.0));
        assert!(shared.with(|s| s.selection.is_none()));
    }

    #[test]
    fn resize_publishes_fresh_geometry() {
        let shared = SharedSession::new(CurveSession::default());
        let mut frame = DisplayList::new();
        shared.render(&mut frame).unwrap();

        let size = Size::new(1600.0, 1000.0);
        shared.resize(size, &mut frame).unwrap();
        assert!(frame.is_complete());

        let expected = SliderPanelLayout::compute(size).geometry;
        assert_eq!(shared.with(|s| s.slider_geometry().copied()), Some(expected));

        // A press on the new handle position hits the slider straight away
        let handle = expected.handle_position(3, 1.0);
        shared.dispatch(&InputEvent::PointerDown { position: handle });
        assert_eq!(shared.with(|s| s.selection), Selection::Slider(3));
    }

    #[test]
    fn resize_from_another_thread() {
        let shared = SharedSession::new(CurveSession::default());
        let sizes = [
            Size::new(800.0, 600.0),
            Size::new(1024.0, 768.0),
            Size::new(333.0, 999.0),
            Size::new(1920.0, 1080.0),
        ];

        let resizer = {
            let shared = shared.clone();
            thread::spawn(move || {
                let mut frame = DisplayList::new();
                for size in sizes {
                    shared.resize(size, &mut frame).unwrap();
                }
            })
        };

        let mut frame = DisplayList::new();
        for i in 0..200 {
            let position = Point::new(600.0 + (i % 7) as f64, 20.0);
            shared.dispatch(&InputEvent::PointerDown { position });
            shared.dispatch(&InputEvent::PointerMove {
                position,
                delta: Vec2::new(0.5, 0.0),
            });
            shared.dispatch(&InputEvent::PointerUp { position });
            shared.render(&mut frame).unwrap();
        }
        resizer.join().unwrap();

        // Whatever the interleaving, the published layout matches the
        // final window size
        shared.with(|s| {
            assert_eq!(s.window(), Size::new(1920.0, 1080.0));
            let expected = SliderPanelLayout::compute(s.window()).geometry;
            assert_eq!(s.slider_geometry(), Some(&expected));
        });
    }
}
