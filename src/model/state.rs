//! Panel and gesture state

/// Resting position of the front panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Collapsed: panel pulled up to `min_offset`, back panel dimmed
    Top,
    /// Expanded: panel pushed down to `max_offset`, back panel interactive
    Bottom,
}

impl Position {
    pub fn opposite(self) -> Position {
        match self {
            Position::Top => Position::Bottom,
            Position::Bottom => Position::Top,
        }
    }
}

/// Committed panel state
///
/// `offset` and `dim_alpha` hold the values the panel is at (while dragging)
/// or is heading to (while a snap animates). The presented values come from
/// `SlideOverModel::presented_offset` and `presented_dim_alpha`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelState {
    pub position: Position,
    pub offset: f32,
    /// Dimming overlay opacity in [0, 1]
    pub dim_alpha: f32,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            position: Position::Bottom,
            offset: 0.0,
            dim_alpha: 0.0,
        }
    }
}

/// Whether drag input moves the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Drag updates are ignored until the front content overscrolls
    Inactive,
    #[default]
    Active,
}

/// Per-gesture tracking data
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureTrackingState {
    pub state: DragState,
    /// Offset the current gesture's translation is applied to
    pub begin_offset: f32,
    /// Alpha baseline so the overlay is clear at the expanded offset
    pub relative_alpha: f32,
    /// The current gesture already snapped; ignore it until it ends
    pub consumed: bool,
}

impl GestureTrackingState {
    pub fn is_active(&self) -> bool {
        self.state == DragState::Active
    }

    /// Clear per-gesture flags after a drag ends
    pub fn reset_gesture(&mut self) {
        self.consumed = false;
    }
}
