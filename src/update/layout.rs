//! Layout update handlers
//!
//! Handles realization of the host view and container resizes.

use tracing::debug;

use crate::commands::Cmd;
use crate::geometry::{compute_bounds, Size};
use crate::messages::LayoutMsg;
use crate::model::{DragState, GestureTrackingState, PanelState, Position, SlideOverModel};

use super::animation::settle;

/// Update function for layout messages
pub fn update_layout(model: &mut SlideOverModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::Realize { width, height } => {
            if model.realized {
                return Some(resize(model, Size::new(width, height)));
            }
            Some(realize(model, Size::new(width, height)))
        }

        LayoutMsg::Resize { width, height } => {
            let size = Size::new(width, height);
            if !model.realized {
                // Remember the size; bounds are announced on realization
                model.container = size;
                model.bounds = compute_bounds(size, &model.config.bounds);
                return None;
            }
            Some(resize(model, size))
        }
    }
}

/// First layout: place the panel expanded and mount queued content
fn realize(model: &mut SlideOverModel, size: Size) -> Cmd {
    model.realized = true;
    model.container = size;
    model.bounds = compute_bounds(size, &model.config.bounds);
    model.transition = None;

    let expanded = model.bounds.max_offset;
    model.panel = PanelState {
        position: Position::Bottom,
        offset: expanded,
        dim_alpha: 0.0,
    };
    model.tracking = GestureTrackingState {
        state: DragState::Active,
        begin_offset: expanded,
        relative_alpha: model.expanded_relative_alpha(),
        consumed: false,
    };

    let back_region = model.back_rect();
    let front_region = model.front_rect();
    model.back.mount(back_region);
    model.front.mount(front_region);

    if let Some(back) = model.back.get_mut() {
        back.set_user_interaction_enabled(true);
        back.on_bottom_offset_changed(model.bounds.min_offset);
    }

    debug!(
        target: "panel",
        width = size.width,
        height = size.height,
        min = model.bounds.min_offset,
        max = model.bounds.max_offset,
        "realized"
    );
    Cmd::Redraw
}

/// Recompute bounds and re-snap to the current position without animating
fn resize(model: &mut SlideOverModel, size: Size) -> Cmd {
    model.container = size;
    model.bounds = compute_bounds(size, &model.config.bounds);

    if let Some(back) = model.back.get_mut() {
        back.on_bottom_offset_changed(model.bounds.min_offset);
    }

    // An interrupted snap still has to release the front scroll coupling
    if model.transition.is_some() {
        settle(model);
    }
    let position = model.panel.position;
    let target = model.bounds.offset_for(position);
    model.panel.offset = target;
    model.panel.dim_alpha = match position {
        Position::Top => model.config.collapsed_alpha(),
        Position::Bottom => 0.0,
    };
    model.tracking.begin_offset = target;
    model.tracking.relative_alpha = model.expanded_relative_alpha();

    model.relayout_panels();

    debug!(
        target: "panel",
        width = size.width,
        height = size.height,
        ?position,
        offset = target,
        "resized"
    );
    Cmd::Redraw
}
