//! Log setup and panel state diffs
//!
//! Drag, snap and layout events log under the `panel` target and dispatched
//! messages under `message`, so `RUST_LOG=panel=trace` follows a drag frame by
//! frame. A copy at debug level goes to `logs/slideover.log` in the config
//! directory, rotated daily.

use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{DragState, Position, SlideOverModel};

const LOG_FILE: &str = "slideover.log";

/// Install the console (`RUST_LOG`, default `warn`) and file subscribers
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer())
        .init();
}

/// Debug-level file output, or `None` when the logs directory is unavailable
fn file_layer<S>() -> Option<impl Layer<S>>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let logs_dir = match crate::config_paths::ensure_logs_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Warning: file logging disabled: {}", e);
            return None;
        }
    };

    let layer = fmt::layer()
        .with_writer(tracing_appender::rolling::daily(logs_dir, LOG_FILE))
        .with_ansi(false)
        .with_target(true)
        .with_filter(EnvFilter::new("debug"));
    Some(layer)
}

/// Lightweight snapshot of panel state for diffing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSnapshot {
    pub position: Position,
    pub offset: f32,
    pub dim_alpha: f32,
    pub drag_state: DragState,
    pub animating: bool,
}

impl PanelSnapshot {
    pub fn from_model(model: &SlideOverModel) -> Self {
        Self {
            position: model.panel.position,
            offset: model.panel.offset,
            dim_alpha: model.panel.dim_alpha,
            drag_state: model.tracking.state,
            animating: model.transition.is_some(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &PanelSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.position != other.position {
            changes.push(format!("position: {:?} → {:?}", self.position, other.position));
        }
        if self.offset != other.offset {
            changes.push(format!("offset: {:.1} → {:.1}", self.offset, other.offset));
        }
        if self.dim_alpha != other.dim_alpha {
            changes.push(format!("alpha: {:.3} → {:.3}", self.dim_alpha, other.dim_alpha));
        }
        if self.drag_state != other.drag_state {
            changes.push(format!("drag: {:?} → {:?}", self.drag_state, other.drag_state));
        }
        if self.animating != other.animating {
            let status = if other.animating { "started" } else { "settled" };
            changes.push(format!("snap {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
