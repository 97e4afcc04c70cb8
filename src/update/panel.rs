//! Programmatic panel control

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::{DragState, SlideOverModel};

use super::snap::snap_to;

/// Update function for panel messages
pub fn update_panel(model: &mut SlideOverModel, msg: PanelMsg) -> Option<Cmd> {
    if !model.realized {
        return None;
    }

    let position = match msg {
        PanelMsg::SnapTo(position) => position,
        PanelMsg::Toggle => model.panel.position.opposite(),
    };

    // An explicit request leaves the collapsed state without waiting for
    // an overscroll; snapping to Top suspends tracking again.
    model.tracking.state = DragState::Active;
    model.tracking.reset_gesture();
    Some(snap_to(model, position))
}
