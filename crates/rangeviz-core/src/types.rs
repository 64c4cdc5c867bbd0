// File: crates/rangeviz-core/src/types.rs
// Summary: Shared types and constants (surface sizes, paddings, world y extent).

/// Default surface width in pixels.
pub const WIDTH: i32 = 900;
/// Default surface height in pixels; one dashboard row.
pub const HEIGHT: i32 = 70;

/// Vertical world range shown by every range chart.
pub const Y_DISPLAY_RANGE: (f64, f64) = (-1.0, 1.0);

/// Pixel margins between the surface edge and the plotted track.
/// Labels for the range ends are drawn inside the left and right margins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Room for end labels at the sides and marker heads above the track.
    fn default() -> Self {
        Self::new(30, 30, 25, 0)
    }
}
