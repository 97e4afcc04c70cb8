//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::time::Duration;

use crate::animation::TransitionToken;

/// Side effects requested by `update`
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the panel
    Redraw,
    /// A snap started; the host should deliver `AnimationMsg::Tick` every
    /// frame (or `AnimationMsg::Completed` after `duration`) until it settles
    AnimateSnap {
        token: TransitionToken,
        duration: Duration,
    },
}

impl Cmd {
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::AnimateSnap { .. } => true,
        }
    }

    /// Token of the snap this command starts, if any
    pub fn snap_token(&self) -> Option<TransitionToken> {
        match self {
            Cmd::AnimateSnap { token, .. } => Some(*token),
            _ => None,
        }
    }
}
