//! Snap animation handlers

use tracing::trace;

use crate::commands::Cmd;
use crate::messages::AnimationMsg;
use crate::model::SlideOverModel;

/// Update function for animation messages
pub fn update_animation(model: &mut SlideOverModel, msg: AnimationMsg) -> Option<Cmd> {
    match msg {
        AnimationMsg::Tick(dt) => {
            let transition = model.transition.as_mut()?;
            transition.advance(dt);

            if transition.is_finished() {
                settle(model);
            } else {
                model.relayout_panels();
            }
            Some(Cmd::Redraw)
        }

        AnimationMsg::Completed(token) => {
            let current = model.transition.as_ref().map(|t| t.token);
            if current == Some(token) {
                settle(model);
                Some(Cmd::Redraw)
            } else {
                trace!(target: "panel", token = token.0, "ignoring stale snap completion");
                None
            }
        }
    }
}

/// Finish the in-flight snap: presented values catch up with committed ones
pub(crate) fn settle(model: &mut SlideOverModel) {
    if let Some(transition) = model.transition.take() {
        trace!(target: "panel", token = transition.token.0, offset = model.panel.offset, "snap settled");
    }

    if model.config.couple_front_scroll {
        if let Some(front) = model.front.get_mut() {
            front.set_scroll_enabled(true);
        }
    }

    model.relayout_panels();
}

/// Abandon the in-flight snap where it currently is
///
/// Returns true if a transition was interrupted.
pub(crate) fn interrupt(model: &mut SlideOverModel) -> bool {
    let Some(transition) = model.transition.take() else {
        return false;
    };

    model.panel.offset = transition.offset(model.panel.offset);
    model.panel.dim_alpha = transition.alpha(model.panel.dim_alpha);
    trace!(
        target: "panel",
        token = transition.token.0,
        offset = model.panel.offset,
        "snap interrupted by drag"
    );
    true
}
