// File: crates/rangeviz-core/src/axis.rs
// Summary: Padded axis display range with formatted ticks.

use crate::grid::linspace;
use crate::precision::format_value;

/// Fraction of the range span added on each side of the axis.
pub const DEFAULT_PADDING_RATIO: f64 = 0.12;
/// Padding used when the range span is zero.
pub const FALLBACK_PADDING: f64 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisRange {
    /// Displayed bounds, padding included.
    pub min: f64,
    pub max: f64,
    /// Decimal places used by tick labels.
    pub precision: usize,
    pub ticks: Vec<Tick>,
}

impl AxisRange {
    /// Axis around `[range_min, range_max]` padded by `ratio` of the span on both sides,
    /// or by `fallback` when the span is zero.
    pub fn padded(range_min: f64, range_max: f64, ratio: f64, fallback: f64, precision: usize) -> Self {
        let padding = if range_max != range_min { (range_max - range_min) * ratio } else { fallback };
        Self { min: range_min - padding, max: range_max + padding, precision, ticks: Vec::new() }
    }

    /// Fill `count` evenly spaced ticks across `[range_min, range_max]`.
    /// A degenerate range collapses to a single tick.
    pub fn with_ticks(mut self, range_min: f64, range_max: f64, count: usize, suffix: &str) -> Self {
        let count = if range_max == range_min { count.min(1) } else { count };
        self.ticks = linspace(range_min, range_max, count)
            .into_iter()
            .map(|value| Tick { value, label: format_value(value, self.precision, suffix) })
            .collect();
        self
    }
}
