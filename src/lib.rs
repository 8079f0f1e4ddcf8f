// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! Weighted Bézier: an interactive rational cubic Bézier editor built with
//! Xilem

use anyhow::{Result, anyhow};
use winit::dpi::LogicalSize;
use xilem::{EventLoopBuilder, WindowView, Xilem, window};

mod components;
pub mod config;
pub mod curve;
mod data;
pub mod editing;
pub mod render;
pub mod settings;
pub mod theme;

use components::curve_canvas;
use config::EditorConfig;
use data::AppState;

/// Entry point for the editor
pub fn run(event_loop: EventLoopBuilder) -> Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    // Filter out noisy wgpu/naga shader compilation logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("weighted_bezier=info".parse()?)
                .add_directive("wgpu=warn".parse()?)
                .add_directive("naga=warn".parse()?)
                .add_directive("wgpu_core=warn".parse()?)
                .add_directive("wgpu_hal=warn".parse()?),
        )
        .init();

    let config = EditorConfig::load_or_default(EditorConfig::path_from_env().as_deref());
    let initial_state = AppState::new(config);
    let failure = initial_state.failure.clone();

    let app = Xilem::new(initial_state, app_logic);
    app.run_in(event_loop)?;

    match failure.get() {
        Some(reason) => Err(anyhow!("editor stopped: {reason}")),
        None => Ok(()),
    }
}

/// Build the single editor window. No window once the app has stopped.
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let content = curve_canvas(state.session.clone(), |state: &mut AppState, failure| {
        state.fail(failure.reason);
    });

    let window_size = LogicalSize::new(state.config.window.width, state.config.window.height);
    let window_view = window(state.main_window_id, "Weighted Bézier", content);
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    state.running.then_some(window_with_options).into_iter()
}
