// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration loaded from an optional TOML file.
//!
//! Every field has a default taken from `settings.rs`, so an empty file (or
//! no file at all) gives the stock editor. Example:
//!
//! ```toml
//! curve_segments = 200
//! handle_size = 12.0
//! wheel_step = 0.5
//! pan_mode = "raw"
//!
//! [window]
//! width = 1024.0
//! height = 768.0
//! ```

use crate::editing::PanMode;
use crate::settings;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when no path argument is given
pub const CONFIG_ENV_VAR: &str = "WEIGHTED_BEZIER_CONFIG";

/// Initial window size
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: settings::window::WIDTH,
            height: settings::window::HEIGHT,
        }
    }
}

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    pub window: WindowConfig,
    /// Straight segments per drawn curve (at least `curve::SEGMENTS`)
    pub curve_segments: usize,
    /// Side of the square hit box around points and slider handles
    pub handle_size: f64,
    /// Log zoom levels per wheel notch
    pub wheel_step: f64,
    pub pan_mode: PanMode,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            curve_segments: settings::curve::SEGMENTS,
            handle_size: settings::handle::SIZE,
            wheel_step: settings::viewport::WHEEL_STEP,
            pan_mode: PanMode::default(),
        }
    }
}

impl EditorConfig {
    /// Parse a TOML document and bring out-of-range values back in range
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("invalid editor config")?;
        Ok(config.sanitized())
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                tracing::warn!("{err:#}; using default config");
                Self::default()
            }
        }
    }

    /// Config path from the first command-line argument, else from
    /// `WEIGHTED_BEZIER_CONFIG`
    pub fn path_from_env() -> Option<PathBuf> {
        std::env::args()
            .nth(1)
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
            .map(PathBuf::from)
    }

    fn sanitized(mut self) -> Self {
        if self.curve_segments < settings::curve::SEGMENTS {
            tracing::warn!(
                "curve_segments = {} is below the minimum, using {}",
                self.curve_segments,
                settings::curve::SEGMENTS
            );
            self.curve_segments = settings::curve::SEGMENTS;
        }
        if self.handle_size.is_nan() || self.handle_size < 1.0 {
            tracing::warn!("handle_size = {} is too small, using 1", self.handle_size);
            self.handle_size = 1.0;
        }
        if !self.wheel_step.is_finite() || self.wheel_step <= 0.0 {
            tracing::warn!(
                "wheel_step = {} is not a positive number, using {}",
                self.wheel_step,
                settings::viewport::WHEEL_STEP
            );
            self.wheel_step = settings::viewport::WHEEL_STEP;
        }
        self.window.width = self.window.width.max(1.0);
        self.window.height = self.window.height.max(1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = EditorConfig::from_toml("").unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let config = EditorConfig::from_toml(
            r#"
            curve_segments = 250
            handle_size = 14.0
            wheel_step = 0.5
            pan_mode = "raw"

            [window]
            width = 1024.0
            height = 768.0
            "#,
        )
        .unwrap();

        assert_eq!(config.curve_segments, 250);
        assert_eq!(config.handle_size, 14.0);
        assert_eq!(config.wheel_step, 0.5);
        assert_eq!(config.pan_mode, PanMode::Raw);
        assert_eq!(config.window.width, 1024.0);
        assert_eq!(config.window.height, 768.0);
    }

    #[test]
    fn out_of_range_values_are_corrected() {
        let config = EditorConfig::from_toml(
            r#"
            curve_segments = 3
            handle_size = 0.0
            wheel_step = -2.0
            "#,
        )
        .unwrap();

        assert_eq!(config.curve_segments, settings::curve::SEGMENTS);
        assert_eq!(config.handle_size, 1.0);
        assert_eq!(config.wheel_step, settings::viewport::WHEEL_STEP);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(EditorConfig::from_toml("zoom_speed = 3").is_err());
        assert!(EditorConfig::from_toml("pan_mode = \"sideways\"").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = EditorConfig::load_or_default(Some(Path::new(
            "/nonexistent/weighted-bezier/config.toml",
        )));
        assert_eq!(config, EditorConfig::default());
    }
}
