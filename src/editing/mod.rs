// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod mouse;
pub mod selection;
pub mod session;
pub mod shared;
pub mod slider;
pub mod viewport;

pub use mouse::InputEvent;
pub use selection::Selection;
pub use session::CurveSession;
pub use shared::SharedSession;
pub use slider::{SliderGeometry, SliderTrack};
pub use viewport::{PanMode, ViewPort};
