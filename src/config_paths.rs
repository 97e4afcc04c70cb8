//! Where the panel config and demo logs live
//!
//! `config.yaml` and `logs/` sit in one per-user `slideover` directory.

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "slideover";

/// Per-user `slideover` directory
///
/// `$XDG_CONFIG_HOME` wins over `~/.config` on Unix; Windows uses `%APPDATA%`.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

    base.map(|dir| dir.join(APP_DIR))
}

/// Panel configuration read by `SlideOverConfig::load`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory for the rolling file appender
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create logs directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
