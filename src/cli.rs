//! Command-line argument parsing for the demo
//!
//! Supports:
//! - Picking the simple or refined panel behavior
//! - Loading a YAML config file
//! - Initial window size

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use slideover::config::SlideOverConfig;

/// Built-in behavior presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Fixed stops, no dimming, overshoot until release
    Simple,
    /// Orientation-aware stops, dimming, early snap
    Refined,
}

/// Interactive slide-over panel demo
#[derive(Parser, Debug)]
#[command(name = "slideover", version, about = "Interactive slide-over panel demo")]
pub struct CliArgs {
    /// Behavior preset (ignored when --config is given)
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// YAML config file to load instead of the user config
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 420)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 780)]
    pub height: u32,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub panel: SlideOverConfig,
    pub window_size: (u32, u32),
}

impl CliArgs {
    /// Resolve the panel configuration
    ///
    /// Precedence: `--config`, then `--variant`, then the user config file.
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let panel = match (&self.config, self.variant) {
            (Some(path), _) => SlideOverConfig::load_from(path)?,
            (None, Some(Variant::Simple)) => SlideOverConfig::simple(),
            (None, Some(Variant::Refined)) => SlideOverConfig::refined(),
            (None, None) => SlideOverConfig::load(),
        };

        if self.width == 0 || self.height == 0 {
            return Err("Window size must be non-zero".to_string());
        }

        Ok(StartupConfig {
            panel,
            window_size: (self.width, self.height),
        })
    }
}
