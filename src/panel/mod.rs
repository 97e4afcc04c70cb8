//! Panel slots - the front (slideable) and back content holders
//!
//! The controller never knows the concrete content type. It talks to attached
//! content through two capability traits:
//!
//! - `FrontPanelContent`: the draggable panel. Reports whether its own
//!   scrollable region is overscrolling and is told when it settles.
//! - `BackPanelContent`: the panel underneath. Its interactivity is toggled
//!   as the front panel collapses and expands.
//!
//! Both share the `PanelContent` lifecycle hooks driven by `PanelSlot`.

mod slot;

pub use slot::PanelSlot;

use crate::geometry::Rect;

/// Lifecycle hooks shared by all attached content
pub trait PanelContent {
    /// Ownership moved into a slot
    fn attached(&mut self) {}

    /// Ownership is about to be released by the slot
    fn detached(&mut self) {}

    /// Content was placed (edge-pinned) into its slot region
    fn layout(&mut self, _region: Rect) {}
}

/// Content shown in the draggable front panel
pub trait FrontPanelContent: PanelContent {
    /// The content's own scroll view has hit its edge and wants the drag
    fn is_overscrolling(&self) -> bool;

    fn on_snapped_to_bottom(&mut self);

    fn on_snapped_to_top(&mut self);

    /// Toggle the content's own scrolling while the panel is dragged
    fn set_scroll_enabled(&mut self, _enabled: bool) {}
}

/// Content shown behind the front panel
pub trait BackPanelContent: PanelContent {
    fn user_interaction_enabled(&self) -> bool;

    fn set_user_interaction_enabled(&mut self, enabled: bool);

    /// Collapsed offset changed (e.g. after a resize); content may use it to
    /// keep its interesting region above the panel
    fn on_bottom_offset_changed(&mut self, _offset: f32) {}
}
