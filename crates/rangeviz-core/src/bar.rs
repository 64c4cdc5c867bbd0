// File: crates/rangeviz-core/src/bar.rs
// Summary: Rounded gradient bar as a sampled 2D field with elliptical corner masking.
// Notes:
// - Cells carry their column's x value; color is resolved later against the chart range,
//   so the bar's hue reflects its place on the global scale.
// - Corner ellipses use an x radius scaled from the range span (aspect correction) and a
//   y radius of half the band height, which keeps the ends round on a wide, short plot.

use tracing::trace;

use crate::color::{color_of, Rgb};
use crate::error::{ensure_finite, ChartError, Result};
use crate::geometry::{Band, Rect};
use crate::grid::linspace;

/// Default number of sampled columns along the bar.
pub const DEFAULT_X_RESOLUTION: usize = 200;
/// Default number of sampled rows across the band.
pub const DEFAULT_Y_RESOLUTION: usize = 20;
/// Default x-units-per-range ratio for the corner radius. Tuned for a ~70px tall, full-width plot.
pub const DEFAULT_ASPECT_CORRECTION: f64 = 0.015;

/// Sampled bar field. Rows follow `ys` (bottom to top), columns follow `xs`.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    /// Row-major; `None` marks a cell cut away by a rounded end.
    cells: Vec<Option<f64>>,
    pub x_radius: f64,
    pub y_radius: f64,
    pub left_center: f64,
    pub right_center: f64,
    pub y_center: f64,
}

impl BarGeometry {
    pub fn rows(&self) -> usize { self.ys.len() }
    pub fn cols(&self) -> usize { self.xs.len() }

    pub fn cells(&self) -> &[Option<f64>] { &self.cells }

    pub fn row(&self, row: usize) -> &[Option<f64>] {
        let c = self.cols();
        &self.cells[row * c..(row + 1) * c]
    }

    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows() || col >= self.cols() { return None; }
        self.cells[row * self.cols() + col]
    }

    pub fn is_masked(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row * self.cols() + col].is_none()
    }

    pub fn masked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Whether rounded ends were applied.
    pub fn is_rounded(&self) -> bool { self.x_radius > 0.0 && self.y_radius > 0.0 }

    /// Horizontal extent covered by the samples.
    pub fn width(&self) -> f64 {
        match (self.xs.first(), self.xs.last()) {
            (Some(a), Some(b)) => b - a,
            _ => 0.0,
        }
    }

    /// Bounding box of the sampled field.
    pub fn bounds(&self) -> Rect {
        let x0 = self.xs.first().copied().unwrap_or(0.0);
        let x1 = self.xs.last().copied().unwrap_or(x0);
        let y0 = self.ys.first().copied().unwrap_or(0.0);
        let y1 = self.ys.last().copied().unwrap_or(y0);
        Rect::from_ltrb(x0, y0, x1, y1)
    }

    /// Resolve every cell through the color scale over `[range_min, range_max]`.
    pub fn colors(&self, range_min: f64, range_max: f64) -> Vec<Option<Rgb>> {
        self.cells
            .iter()
            .map(|c| c.map(|x| color_of(x, range_min, range_max)))
            .collect()
    }
}

/// Parameters for sampling and rounding the bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometryBuilder {
    pub band: Band,
    pub x_resolution: usize,
    pub y_resolution: usize,
    pub aspect_correction: f64,
}

impl Default for BarGeometryBuilder {
    fn default() -> Self {
        Self {
            band: Band::default(),
            x_resolution: DEFAULT_X_RESOLUTION,
            y_resolution: DEFAULT_Y_RESOLUTION,
            aspect_correction: DEFAULT_ASPECT_CORRECTION,
        }
    }
}

impl BarGeometryBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn with_band(mut self, band: Band) -> Self {
        self.band = band;
        self
    }

    pub fn with_resolution(mut self, x_resolution: usize, y_resolution: usize) -> Self {
        self.x_resolution = x_resolution;
        self.y_resolution = y_resolution;
        self
    }

    pub fn with_aspect_correction(mut self, aspect_correction: f64) -> Self {
        self.aspect_correction = aspect_correction;
        self
    }

    /// Corner radius in x units, capped at half the bar length.
    pub fn corner_radius(&self, bar_start: f64, bar_end: f64, range_min: f64, range_max: f64) -> f64 {
        let r = (range_max - range_min) * self.aspect_correction;
        r.min((bar_end - bar_start) / 2.0)
    }

    /// Sample the bar `[bar_start, bar_end]` drawn against `[range_min, range_max]`.
    ///
    /// A zero-length bar yields a single unmasked column. Descending endpoints are a
    /// caller error and return [`ChartError::InvertedBar`].
    pub fn build(&self, bar_start: f64, bar_end: f64, range_min: f64, range_max: f64) -> Result<BarGeometry> {
        ensure_finite("bar_start", bar_start)?;
        ensure_finite("bar_end", bar_end)?;
        ensure_finite("range_min", range_min)?;
        ensure_finite("range_max", range_max)?;
        ensure_finite("aspect_correction", self.aspect_correction)?;
        ensure_finite("band_bottom", self.band.bottom)?;
        ensure_finite("band_top", self.band.top)?;
        if bar_start > bar_end {
            return Err(ChartError::InvertedBar { start: bar_start, end: bar_end });
        }
        if self.x_resolution == 0 || self.y_resolution == 0 {
            return Err(ChartError::EmptyGrid { rows: self.y_resolution, cols: self.x_resolution });
        }

        let cols = if bar_start == bar_end { 1 } else { self.x_resolution };
        let xs = linspace(bar_start, bar_end, cols);
        let ys = linspace(self.band.bottom, self.band.top, self.y_resolution);

        let x_radius = self.corner_radius(bar_start, bar_end, range_min, range_max);
        let y_radius = self.band.half_height();
        let y_center = self.band.center();
        let left_center = bar_start + x_radius;
        // one-ulp rounding must not let the centers cross
        let right_center = (bar_end - x_radius).max(left_center);
        let rounded = x_radius > 0.0 && y_radius > 0.0;

        let outside = |dx: f64, dy: f64| (dx / x_radius).powi(2) + (dy / y_radius).powi(2) > 1.0;

        let mut cells = Vec::with_capacity(xs.len() * ys.len());
        for &y in &ys {
            let dy = y - y_center;
            for &x in &xs {
                let cut = rounded
                    && ((x < left_center && outside(x - left_center, dy))
                        || (x > right_center && outside(x - right_center, dy)));
                cells.push(if cut { None } else { Some(x) });
            }
        }

        trace!(rows = ys.len(), cols = xs.len(), x_radius, y_radius, "built bar geometry");
        Ok(BarGeometry { xs, ys, cells, x_radius, y_radius, left_center, right_center, y_center })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_scales_with_range() {
        let b = BarGeometryBuilder::new();
        assert!((b.corner_radius(40.0, 80.0, 0.0, 100.0) - 1.5).abs() < 1e-12);
        assert!((b.corner_radius(40.0, 41.0, 0.0, 100.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn row_slices_match_value_lookup() {
        let g = BarGeometryBuilder::new().with_resolution(8, 3).build(0.0, 10.0, 0.0, 100.0).unwrap();
        for r in 0..g.rows() {
            for (c, v) in g.row(r).iter().enumerate() {
                assert_eq!(*v, g.value(r, c));
            }
        }
        assert_eq!(g.value(3, 0), None);
        assert!(!g.is_masked(3, 0));
    }
}
