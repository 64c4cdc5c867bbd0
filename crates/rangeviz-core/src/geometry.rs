// File: crates/rangeviz-core/src/geometry.rs
// Summary: World-space rectangles and the horizontal band the bar is drawn in.

/// Axis-aligned rectangle in chart (world) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub const fn from_ltrb(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }
    pub fn width(&self) -> f64 { self.x1 - self.x0 }
    pub fn height(&self) -> f64 { self.y1 - self.y0 }
}

/// Vertical extent of the track and bar.
/// Contract: `top >= bottom` for a visible band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub bottom: f64,
    pub top: f64,
}

impl Band {
    pub const fn new(bottom: f64, top: f64) -> Self {
        Self { bottom, top }
    }
    pub fn center(&self) -> f64 { (self.bottom + self.top) * 0.5 }
    pub fn half_height(&self) -> f64 { (self.top - self.bottom) * 0.5 }

    /// Rectangle spanning `[x0, x1]` over this band.
    pub fn span(&self, x0: f64, x1: f64) -> Rect {
        Rect::from_ltrb(x0, self.bottom, x1, self.top)
    }
}

impl Default for Band {
    fn default() -> Self {
        Self::new(-0.5, 0.5)
    }
}
