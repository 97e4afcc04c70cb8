//! Slide-over configuration
//!
//! One component covers both the simple and the refined panel behavior; the
//! differences are captured here. User overrides are read from
//! `~/.config/slideover/config.yaml`.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::geometry::BoundsRatioTable;

/// How a drag that leaves the resting bounds is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DragMode {
    /// Follow the finger past the bounds and resolve on release
    Overshoot,
    /// Snap as soon as the candidate offset leaves the bounds
    EarlySnap,
}

/// Configuration for a slide-over panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideOverConfig {
    /// Snap animation duration in seconds
    #[serde(default = "default_snap_duration_secs")]
    pub snap_duration_secs: f32,

    /// Resting offsets as fractions of the container height
    #[serde(default)]
    pub bounds: BoundsRatioTable,

    /// Whether the dimming overlay tracks drag progress
    #[serde(default = "default_true")]
    pub dimming_enabled: bool,

    /// Overlay alpha while collapsed
    #[serde(default = "default_dim_alpha")]
    pub collapsed_dim_alpha: f32,

    /// Upper clamp for the overlay alpha during a drag
    #[serde(default = "default_dim_alpha")]
    pub max_dim_alpha: f32,

    #[serde(default = "default_drag_mode")]
    pub drag_mode: DragMode,

    /// Disable front panel scrolling while it is being dragged
    #[serde(default)]
    pub couple_front_scroll: bool,
}

fn default_snap_duration_secs() -> f32 {
    0.333
}

fn default_true() -> bool {
    true
}

fn default_dim_alpha() -> f32 {
    0.5
}

fn default_drag_mode() -> DragMode {
    DragMode::EarlySnap
}

impl Default for SlideOverConfig {
    fn default() -> Self {
        Self::refined()
    }
}

impl SlideOverConfig {
    /// Plain panel: fixed 20% / 80% stops, no dimming, overshoot until release
    pub fn simple() -> Self {
        Self {
            snap_duration_secs: 0.5,
            bounds: BoundsRatioTable::simple(),
            dimming_enabled: false,
            collapsed_dim_alpha: 0.0,
            max_dim_alpha: 0.0,
            drag_mode: DragMode::Overshoot,
            couple_front_scroll: true,
        }
    }

    /// Orientation-aware stops, dimming overlay, early snap at the bounds
    pub fn refined() -> Self {
        Self {
            snap_duration_secs: default_snap_duration_secs(),
            bounds: BoundsRatioTable::refined(),
            dimming_enabled: true,
            collapsed_dim_alpha: default_dim_alpha(),
            max_dim_alpha: default_dim_alpha(),
            drag_mode: DragMode::EarlySnap,
            couple_front_scroll: false,
        }
    }

    pub fn snap_duration(&self) -> Duration {
        Duration::from_secs_f32(self.snap_duration_secs.max(0.0))
    }

    /// Overlay alpha once the panel has settled at the top
    pub fn collapsed_alpha(&self) -> f32 {
        if self.dimming_enabled {
            self.collapsed_dim_alpha
        } else {
            0.0
        }
    }

    /// Check that the configuration can drive a working panel
    pub fn validate(&self) -> Result<(), String> {
        if !self.snap_duration_secs.is_finite() || self.snap_duration_secs < 0.0 {
            return Err(format!(
                "snap_duration_secs must be a non-negative number, got {}",
                self.snap_duration_secs
            ));
        }
        self.bounds
            .validate()
            .map_err(|e| format!("invalid bounds: {}", e))?;
        for (name, alpha) in [
            ("collapsed_dim_alpha", self.collapsed_dim_alpha),
            ("max_dim_alpha", self.max_dim_alpha),
        ] {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(format!("{} must lie in [0, 1], got {}", name, alpha));
            }
        }
        Ok(())
    }

    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load and validate a config file
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))?;
        config
            .validate()
            .map_err(|e| format!("Invalid config at {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Save config to a file, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
