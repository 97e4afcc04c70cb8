//! Snap resolver
//!
//! Decides which resting position a released (or out-of-bounds) drag settles
//! at, applies the position change side effects, and starts the eased
//! transition towards it.

use tracing::debug;

use crate::animation::SnapTransition;
use crate::commands::Cmd;
use crate::geometry::GeometryBounds;
use crate::model::{DragState, Position, SlideOverModel};

/// Fraction of the container height past which a release expands the panel
pub const MIDPOINT_RATIO: f32 = 0.5;

/// Resolve the resting position and offset for `offset`
///
/// Expands when the offset overshoots `max_offset` or passes the container
/// midpoint; collapses otherwise. There is no velocity component.
pub fn resolve(offset: f32, container_height: f32, bounds: &GeometryBounds) -> (Position, f32) {
    if offset > bounds.max_offset || offset > container_height * MIDPOINT_RATIO {
        (Position::Bottom, bounds.max_offset)
    } else {
        (Position::Top, bounds.min_offset)
    }
}

/// Commit a position change and notify both panels
///
/// Bottom: front is told it expanded, back becomes interactive, overlay clears.
/// Top: drag tracking is suspended until the front content overscrolls, front
/// is told it collapsed, back stops receiving input, overlay dims.
pub fn transition_to(model: &mut SlideOverModel, position: Position) {
    model.panel.position = position;

    match position {
        Position::Bottom => {
            if let Some(front) = model.front.get_mut() {
                front.on_snapped_to_bottom();
            }
            if let Some(back) = model.back.get_mut() {
                back.set_user_interaction_enabled(true);
            }
            model.panel.dim_alpha = 0.0;
        }
        Position::Top => {
            model.tracking.state = DragState::Inactive;

            if let Some(front) = model.front.get_mut() {
                front.on_snapped_to_top();
            }
            if let Some(back) = model.back.get_mut() {
                back.set_user_interaction_enabled(false);
            }
            model.panel.dim_alpha = model.config.collapsed_alpha();
        }
    }

    debug!(target: "panel", ?position, alpha = model.panel.dim_alpha, "transitioned");
}

/// Snap to whichever position `candidate` resolves to
pub fn snap_to_candidate(model: &mut SlideOverModel, candidate: f32) -> Cmd {
    let (position, _) = resolve(candidate, model.container.height, &model.bounds);
    snap_to(model, position)
}

/// Start an animated snap to `position`
///
/// Committed state (position, offset, gesture baseline) is updated before
/// this returns; only the presented values lag behind. Any in-flight snap is
/// superseded and its completion token becomes stale.
pub fn snap_to(model: &mut SlideOverModel, position: Position) -> Cmd {
    let from_offset = model.presented_offset();
    let from_alpha = model.presented_dim_alpha();

    transition_to(model, position);

    let target = model.bounds.offset_for(position);
    model.panel.offset = target;
    model.tracking.begin_offset = target;

    let token = model.allocate_token();
    let duration = model.config.snap_duration();
    let transition = SnapTransition::new(token, from_offset, from_alpha, duration);

    if let Some(previous) = model.transition.replace(transition) {
        debug!(target: "panel", superseded = previous.token.0, by = token.0, "snap superseded");
    }
    debug!(target: "panel", token = token.0, from = from_offset, to = target, "snap started");

    if duration.is_zero() {
        super::animation::settle(model);
        return Cmd::Redraw;
    }

    model.relayout_panels();
    Cmd::AnimateSnap { token, duration }
}
