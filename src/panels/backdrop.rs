//! Static backdrop used as the demo's back panel

use std::cell::RefCell;
use std::rc::Rc;

use slideover::geometry::Rect;
use slideover::panel::{BackPanelContent, PanelContent};

/// Shared backdrop state, read by the renderer
#[derive(Debug, Clone, Default)]
pub struct BackdropState {
    pub region: Rect,
    pub interactive: bool,
    /// Collapsed panel offset; content above it stays visible
    pub visible_bottom: f32,
}

/// Back panel content backed by a shared `BackdropState`
pub struct Backdrop {
    state: Rc<RefCell<BackdropState>>,
}

impl Backdrop {
    pub fn new(state: Rc<RefCell<BackdropState>>) -> Self {
        Self { state }
    }
}

impl PanelContent for Backdrop {
    fn layout(&mut self, region: Rect) {
        self.state.borrow_mut().region = region;
    }
}

impl BackPanelContent for Backdrop {
    fn user_interaction_enabled(&self) -> bool {
        self.state.borrow().interactive
    }

    fn set_user_interaction_enabled(&mut self, enabled: bool) {
        self.state.borrow_mut().interactive = enabled;
    }

    fn on_bottom_offset_changed(&mut self, offset: f32) {
        self.state.borrow_mut().visible_bottom = offset;
    }
}
