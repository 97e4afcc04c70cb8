//! Container geometry and snap bounds
//!
//! The front panel's top edge is expressed as a vertical offset from the top of
//! the container. Two offsets are resting positions: `min_offset` (collapsed,
//! panel pulled up) and `max_offset` (expanded, panel pushed down to reveal the
//! back panel). Both are derived from the container size and orientation.

use serde::{Deserialize, Serialize};

use crate::model::Position;

/// Container size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are finite and strictly positive
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn orientation(&self) -> Orientation {
        if self.height > self.width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

/// Container orientation, portrait iff height exceeds width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Axis-aligned rectangle in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Resting offsets as fractions of the container height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsRatios {
    pub min: f32,
    pub max: f32,
}

impl BoundsRatios {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(format!(
                "bounds ratios must be finite (min={}, max={})",
                self.min, self.max
            ));
        }
        if !(0.0..=1.0).contains(&self.min) || !(0.0..=1.0).contains(&self.max) {
            return Err(format!(
                "bounds ratios must lie in [0, 1] (min={}, max={})",
                self.min, self.max
            ));
        }
        if self.min > self.max {
            return Err(format!(
                "min ratio {} exceeds max ratio {}",
                self.min, self.max
            ));
        }
        Ok(())
    }
}

/// Per-orientation bounds ratios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsRatioTable {
    pub portrait: BoundsRatios,
    pub landscape: BoundsRatios,
}

impl BoundsRatioTable {
    /// Orientation-independent 20% / 80% split
    pub const fn simple() -> Self {
        Self {
            portrait: BoundsRatios::new(0.2, 0.8),
            landscape: BoundsRatios::new(0.2, 0.8),
        }
    }

    /// 20% / 60% in portrait, 10% / 55% in landscape
    pub const fn refined() -> Self {
        Self {
            portrait: BoundsRatios::new(0.2, 0.6),
            landscape: BoundsRatios::new(0.1, 0.55),
        }
    }

    pub fn for_orientation(&self, orientation: Orientation) -> BoundsRatios {
        match orientation {
            Orientation::Portrait => self.portrait,
            Orientation::Landscape => self.landscape,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.portrait
            .validate()
            .map_err(|e| format!("portrait: {}", e))?;
        self.landscape
            .validate()
            .map_err(|e| format!("landscape: {}", e))
    }
}

impl Default for BoundsRatioTable {
    fn default() -> Self {
        Self::refined()
    }
}

/// The two resting offsets for the current container
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryBounds {
    pub min_offset: f32,
    pub max_offset: f32,
}

impl GeometryBounds {
    pub const ZERO: GeometryBounds = GeometryBounds {
        min_offset: 0.0,
        max_offset: 0.0,
    };

    /// Resting offset for a position
    pub fn offset_for(&self, position: Position) -> f32 {
        match position {
            Position::Top => self.min_offset,
            Position::Bottom => self.max_offset,
        }
    }

    pub fn contains(&self, offset: f32) -> bool {
        offset >= self.min_offset && offset <= self.max_offset
    }
}

/// Compute the resting offsets for a container
///
/// Offsets are aligned to whole points. Degenerate sizes (zero, negative,
/// NaN) produce `GeometryBounds::ZERO`.
pub fn compute_bounds(size: Size, table: &BoundsRatioTable) -> GeometryBounds {
    if !size.is_valid() {
        return GeometryBounds::ZERO;
    }

    let ratios = table.for_orientation(size.orientation());
    let align = |ratio: f32| (size.height * ratio).round().min(size.height);
    GeometryBounds {
        min_offset: align(ratios.min),
        max_offset: align(ratios.max),
    }
}

/// The back panel always fills the container
pub fn back_rect(size: Size) -> Rect {
    if !size.is_valid() {
        return Rect::default();
    }
    Rect::new(0.0, 0.0, size.width, size.height)
}

/// The front panel spans from `offset` down to the container bottom
///
/// The offset is clamped into the container so the panel never inverts.
pub fn front_rect(size: Size, offset: f32) -> Rect {
    if !size.is_valid() {
        return Rect::default();
    }
    let top = if offset.is_finite() {
        offset.clamp(0.0, size.height)
    } else {
        0.0
    };
    Rect::new(0.0, top, size.width, size.height - top)
}
