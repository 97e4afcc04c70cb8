//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod animation;
mod gesture;
mod layout;
mod panel;
pub mod snap;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::SlideOverModel;

#[cfg(debug_assertions)]
use crate::tracing::PanelSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use animation::update_animation;
pub use gesture::update_gesture;
pub use layout::update_layout;
pub use panel::update_panel;
pub use snap::{resolve, snap_to, transition_to};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut SlideOverModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut SlideOverModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Gesture(m) => gesture::update_gesture(model, m),
        Msg::Layout(m) => layout::update_layout(model, m),
        Msg::Panel(m) => panel::update_panel(model, m),
        Msg::Animation(m) => animation::update_animation(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Logs a diff of the panel state around each message. Animation ticks are
/// too frequent to log individually.
#[cfg(debug_assertions)]
fn update_traced(model: &mut SlideOverModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::AnimationMsg;

    let is_noisy = matches!(&msg, Msg::Animation(AnimationMsg::Tick(_)));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = PanelSnapshot::from_model(model);
    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    if !is_noisy {
        if let Some(diff) = before.diff(&PanelSnapshot::from_model(model)) {
            debug!(target: "panel", %diff, "state changed");
        }
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Gesture::Drag { phase: Changed, translation_y: -50.0 }`
/// - `Layout::Resize { width: 300.0, height: 600.0 }`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Gesture(m) => format!("Gesture::{:?}", m),
        Msg::Layout(m) => format!("Layout::{:?}", m),
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::Animation(m) => format!("Animation::{:?}", m),
    }
}
