//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::time::Duration;

use crate::animation::TransitionToken;
use crate::model::Position;

/// Phase of the vertical drag recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// Drag input from the recognizer attached to the front panel region
#[derive(Debug, Clone, PartialEq)]
pub enum GestureMsg {
    /// `translation_y` is cumulative since the gesture began (positive = down)
    Drag {
        phase: GesturePhase,
        translation_y: f32,
    },
}

/// Container lifecycle and geometry messages
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    /// Host view is loaded and laid out for the first time
    Realize { width: f32, height: f32 },
    /// Container bounds changed (window resize, rotation)
    Resize { width: f32, height: f32 },
}

/// Programmatic panel control
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMsg {
    /// Animate to a resting position
    SnapTo(Position),
    /// Animate to the opposite resting position
    Toggle,
}

/// Snap animation driving
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationMsg {
    /// A frame elapsed
    Tick(Duration),
    /// Host-driven animation for a transition finished
    Completed(TransitionToken),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Gesture(GestureMsg),
    Layout(LayoutMsg),
    Panel(PanelMsg),
    Animation(AnimationMsg),
}

impl Msg {
    /// Shorthand for a drag event
    pub fn drag(phase: GesturePhase, translation_y: f32) -> Self {
        Msg::Gesture(GestureMsg::Drag {
            phase,
            translation_y,
        })
    }
}
