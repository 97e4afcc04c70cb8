//! Model types for the slide-over controller
//!
//! `SlideOverModel` is the single source of truth: geometry, committed panel
//! state, gesture tracking, the in-flight snap transition and both content
//! slots. All mutation goes through `update::update` except content
//! attachment, which moves owned trait objects into the slots directly.

mod state;

pub use state::{DragState, GestureTrackingState, PanelState, Position};

use crate::animation::{SnapTransition, TransitionToken};
use crate::config::SlideOverConfig;
use crate::geometry::{self, GeometryBounds, Rect, Size};
use crate::panel::{BackPanelContent, FrontPanelContent, PanelSlot};

/// Complete slide-over state
#[derive(Debug)]
pub struct SlideOverModel {
    pub config: SlideOverConfig,
    /// Last container size supplied by the host
    pub container: Size,
    /// Resting offsets for `container`
    pub bounds: GeometryBounds,
    pub panel: PanelState,
    pub tracking: GestureTrackingState,
    /// At most one snap animation at a time
    pub transition: Option<SnapTransition>,
    pub front: PanelSlot<dyn FrontPanelContent>,
    pub back: PanelSlot<dyn BackPanelContent>,
    /// Host view exists and has been laid out once
    pub realized: bool,
    next_token: u64,
}

impl SlideOverModel {
    /// Create an unrealized model
    ///
    /// An invalid configuration cannot drive a working panel and is rejected
    /// here rather than degrading at runtime.
    pub fn new(config: SlideOverConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self {
            config,
            container: Size::default(),
            bounds: GeometryBounds::ZERO,
            panel: PanelState::default(),
            tracking: GestureTrackingState::default(),
            transition: None,
            front: PanelSlot::new(),
            back: PanelSlot::new(),
            realized: false,
            next_token: 0,
        })
    }

    // === Content attachment ===

    /// Replace the front panel content
    ///
    /// Before realization the content is queued and mounted on realize.
    pub fn set_front_panel(&mut self, content: Box<dyn FrontPanelContent>) {
        let region = self.realized.then(|| self.front_rect());
        self.front.attach(content, region);
        tracing::debug!(mounted = self.front.is_mounted(), "front panel attached");
    }

    /// Replace the back panel content
    pub fn set_back_panel(&mut self, content: Box<dyn BackPanelContent>) {
        let region = self.realized.then(|| self.back_rect());
        self.back.attach(content, region);
        tracing::debug!(mounted = self.back.is_mounted(), "back panel attached");
    }

    /// Detach and return the front panel content
    pub fn take_front_panel(&mut self) -> Option<Box<dyn FrontPanelContent>> {
        self.front.take()
    }

    /// Detach and return the back panel content
    pub fn take_back_panel(&mut self) -> Option<Box<dyn BackPanelContent>> {
        self.back.take()
    }

    // === Presentation ===

    /// Offset currently on screen, accounting for an in-flight snap
    pub fn presented_offset(&self) -> f32 {
        match &self.transition {
            Some(transition) => transition.offset(self.panel.offset),
            None => self.panel.offset,
        }
    }

    /// Overlay alpha currently on screen
    pub fn presented_dim_alpha(&self) -> f32 {
        match &self.transition {
            Some(transition) => transition.alpha(self.panel.dim_alpha),
            None => self.panel.dim_alpha,
        }
    }

    pub fn front_rect(&self) -> Rect {
        geometry::front_rect(self.container, self.presented_offset())
    }

    pub fn back_rect(&self) -> Rect {
        geometry::back_rect(self.container)
    }

    /// Lay out mounted content at the presented geometry
    pub fn relayout_panels(&mut self) {
        let front = self.front_rect();
        let back = self.back_rect();
        self.front.relayout(front);
        self.back.relayout(back);
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    // === Internal helpers for update ===

    pub(crate) fn allocate_token(&mut self) -> TransitionToken {
        self.next_token += 1;
        TransitionToken(self.next_token)
    }

    /// Alpha baseline that makes the overlay clear at the expanded offset
    pub(crate) fn expanded_relative_alpha(&self) -> f32 {
        if self.container.is_valid() {
            1.0 - self.bounds.max_offset / self.container.height
        } else {
            0.0
        }
    }

    /// Overlay alpha for a live drag offset
    pub(crate) fn drag_alpha(&self, offset: f32) -> f32 {
        if !self.config.dimming_enabled || !self.container.is_valid() {
            return 0.0;
        }
        let computed = 1.0 - offset / self.container.height - self.tracking.relative_alpha;
        computed.clamp(0.0, self.config.max_dim_alpha)
    }
}
