// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! Application state

use crate::config::EditorConfig;
use crate::editing::{CurveSession, SharedSession};
use std::sync::{Arc, OnceLock};
use xilem::WindowId;

/// Top-level state owned by Xilem
pub struct AppState {
    /// The curve being edited, shared with the canvas widget
    pub session: SharedSession,

    /// Whether the app should keep running
    pub running: bool,

    pub main_window_id: WindowId,

    pub config: EditorConfig,

    /// Set once when a frame cannot be drawn; read after the event loop exits
    pub failure: Arc<OnceLock<String>>,
}

impl AppState {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            session: SharedSession::new(CurveSession::new(&config)),
            running: true,
            main_window_id: WindowId::next(),
            config,
            failure: Arc::new(OnceLock::new()),
        }
    }

    /// Stop the app after an unrecoverable drawing error
    pub fn fail(&mut self, reason: String) {
        tracing::error!("Shutting down: {reason}");
        let _ = self.failure.set(reason);
        self.running = false;
    }
}

/// Implement the Xilem AppState trait
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_starts_at_configured_window_size() {
        let mut config = EditorConfig::default();
        config.window.width = 800.0;
        config.window.height = 600.0;
        let state = AppState::new(config);
        let window = state.session.with(|s| s.window());
        assert_eq!((window.width, window.height), (800.0, 600.0));
        assert!(state.running);
    }

    #[test]
    fn failure_stops_the_app_and_keeps_first_reason() {
        let mut state = AppState::default();
        state.fail("no font".to_string());
        state.fail("second".to_string());
        assert!(!state.running);
        assert_eq!(state.failure.get().map(String::as_str), Some("no font"));
    }
}
