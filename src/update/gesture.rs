//! Drag state machine
//!
//! Consumes the vertical drag recognizer's phase and cumulative translation,
//! decides whether the panel is tracking the finger, and moves the live
//! offset and overlay alpha while it is.

use tracing::{debug, trace, warn};

use crate::commands::Cmd;
use crate::config::DragMode;
use crate::messages::{GestureMsg, GesturePhase};
use crate::model::{DragState, SlideOverModel};

use super::animation::interrupt;
use super::snap::snap_to_candidate;

/// Update function for gesture messages
pub fn update_gesture(model: &mut SlideOverModel, msg: GestureMsg) -> Option<Cmd> {
    let GestureMsg::Drag {
        phase,
        translation_y,
    } = msg;

    if !model.realized {
        return None;
    }
    if !translation_y.is_finite() {
        warn!("ignoring drag with non-finite translation {}", translation_y);
        return None;
    }

    // Collapsed panels only follow the finger once the front content has
    // scrolled to its edge.
    if model.tracking.state == DragState::Inactive {
        let overscrolling = model
            .front
            .get()
            .is_some_and(|front| front.is_overscrolling());
        if overscrolling {
            model.tracking.state = DragState::Active;
            debug!(target: "panel", "overscroll re-enabled drag tracking");
        }
    }

    if !model.tracking.is_active() || model.front.is_empty() {
        if is_terminal(phase) {
            model.tracking.reset_gesture();
        }
        return None;
    }

    match phase {
        GesturePhase::Began => {
            model.tracking.consumed = false;
            model.tracking.relative_alpha = model.expanded_relative_alpha();
            if interrupt(model) {
                model.relayout_panels();
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        GesturePhase::Changed => {
            if model.tracking.consumed {
                return None;
            }
            interrupt(model);
            let candidate = model.tracking.begin_offset + translation_y;
            Some(drag_to(model, candidate))
        }

        GesturePhase::Ended | GesturePhase::Cancelled => {
            let cmd = if model.tracking.consumed {
                None
            } else {
                let candidate = model.tracking.begin_offset + translation_y;
                Some(snap_to_candidate(model, candidate))
            };
            model.tracking.reset_gesture();
            cmd
        }
    }
}

fn is_terminal(phase: GesturePhase) -> bool {
    matches!(phase, GesturePhase::Ended | GesturePhase::Cancelled)
}

/// Move the live offset towards `candidate` according to the drag mode
fn drag_to(model: &mut SlideOverModel, candidate: f32) -> Cmd {
    match model.config.drag_mode {
        DragMode::EarlySnap => {
            if !model.bounds.contains(candidate) {
                // Leaving the bounds ends tracking for this gesture
                model.tracking.consumed = true;
                trace!(target: "panel", candidate, "drag left bounds, snapping early");
                return snap_to_candidate(model, candidate);
            }
            set_live_offset(model, candidate);
        }

        DragMode::Overshoot => {
            let ceiling = model.container.height.max(0.0);
            set_live_offset(model, candidate.clamp(0.0, ceiling));

            if model.config.couple_front_scroll {
                if let Some(front) = model.front.get_mut() {
                    front.set_scroll_enabled(false);
                }
            }
        }
    }

    model.relayout_panels();
    Cmd::Redraw
}

fn set_live_offset(model: &mut SlideOverModel, offset: f32) {
    model.panel.offset = offset;
    if model.config.dimming_enabled {
        model.panel.dim_alpha = model.drag_alpha(offset);
    }
    trace!(target: "panel", offset, alpha = model.panel.dim_alpha, "drag");
}
