//! Scrollable list used as the demo's front panel
//!
//! The list scrolls on its own (mouse wheel, or drags while the panel is
//! collapsed). Pulling down while already scrolled to the top is the
//! overscroll that hands the drag back to the slide-over.

use std::cell::RefCell;
use std::rc::Rc;

use slideover::geometry::Rect;
use slideover::panel::{FrontPanelContent, PanelContent};

/// Shared list state, read by the renderer
#[derive(Debug, Clone)]
pub struct ListState {
    pub rows: usize,
    pub row_height: f32,
    /// Distance scrolled from the top of the list
    pub scroll_offset: f32,
    pub viewport: Rect,
    pub scroll_enabled: bool,
    pub overscrolling: bool,
    pub expanded: bool,
}

impl ListState {
    pub fn new(rows: usize, row_height: f32) -> Self {
        Self {
            rows,
            row_height,
            scroll_offset: 0.0,
            viewport: Rect::default(),
            scroll_enabled: true,
            overscrolling: false,
            expanded: true,
        }
    }

    pub fn content_height(&self) -> f32 {
        self.rows as f32 * self.row_height
    }

    pub fn max_scroll(&self) -> f32 {
        (self.content_height() - self.viewport.height).max(0.0)
    }

    /// Scroll by `delta` (positive = reveal rows further down)
    ///
    /// A negative delta at the very top marks the list as overscrolling.
    pub fn scroll_by(&mut self, delta: f32) {
        if !self.scroll_enabled {
            return;
        }
        let wanted = self.scroll_offset + delta;
        self.overscrolling = wanted < 0.0;
        self.scroll_offset = wanted.clamp(0.0, self.max_scroll());
    }

    /// First visible row and its vertical offset inside the viewport
    pub fn first_visible_row(&self) -> (usize, f32) {
        if self.row_height <= 0.0 {
            return (0, 0.0);
        }
        let row = (self.scroll_offset / self.row_height).floor();
        (row as usize, row * self.row_height - self.scroll_offset)
    }
}

/// Front panel content backed by a shared `ListState`
pub struct ListPanel {
    state: Rc<RefCell<ListState>>,
}

impl ListPanel {
    pub fn new(state: Rc<RefCell<ListState>>) -> Self {
        Self { state }
    }
}

impl PanelContent for ListPanel {
    fn layout(&mut self, region: Rect) {
        let mut state = self.state.borrow_mut();
        state.viewport = region;
        state.scroll_offset = state.scroll_offset.min(state.max_scroll());
    }
}

impl FrontPanelContent for ListPanel {
    fn is_overscrolling(&self) -> bool {
        self.state.borrow().overscrolling
    }

    fn on_snapped_to_bottom(&mut self) {
        self.state.borrow_mut().expanded = true;
    }

    fn on_snapped_to_top(&mut self) {
        let mut state = self.state.borrow_mut();
        state.expanded = false;
        state.overscrolling = false;
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.state.borrow_mut().scroll_enabled = enabled;
    }
}
