// File: crates/rangeviz-core/src/metric.rs
// Summary: Metric input model: outer range, historical bar, prior and current values.
// Notes:
// - `Metric::new` accepts anything so the engine can render degraded inputs;
//   `Metric::try_new` enforces the ordering and finiteness invariants up front.

use crate::error::{ensure_finite, ChartError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    pub title: String,
    pub range_min: f64,
    pub range_max: f64,
    pub bar_start: f64,
    pub bar_end: f64,
    pub start_value: f64,
    pub current_value: f64,
    /// Display-only unit suffix.
    pub suffix: String,
}

impl Metric {
    pub fn new(
        title: impl Into<String>,
        range: (f64, f64),
        bar: (f64, f64),
        start_value: f64,
        current_value: f64,
    ) -> Self {
        Self {
            title: title.into(),
            range_min: range.0,
            range_max: range.1,
            bar_start: bar.0,
            bar_end: bar.1,
            start_value,
            current_value,
            suffix: String::new(),
        }
    }

    /// Construct a metric enforcing: all numbers finite, `range_min <= range_max`,
    /// `bar_start <= bar_end`.
    pub fn try_new(
        title: impl Into<String>,
        range: (f64, f64),
        bar: (f64, f64),
        start_value: f64,
        current_value: f64,
    ) -> Result<Self> {
        let m = Self::new(title, range, bar, start_value, current_value);
        m.validate()?;
        Ok(m)
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite("range_min", self.range_min)?;
        ensure_finite("range_max", self.range_max)?;
        ensure_finite("bar_start", self.bar_start)?;
        ensure_finite("bar_end", self.bar_end)?;
        ensure_finite("start_value", self.start_value)?;
        ensure_finite("current_value", self.current_value)?;
        if self.range_max < self.range_min {
            return Err(ChartError::InvalidRange { min: self.range_min, max: self.range_max });
        }
        if self.bar_start > self.bar_end {
            return Err(ChartError::InvertedBar { start: self.bar_start, end: self.bar_end });
        }
        Ok(())
    }

    /// Outer range has zero span.
    pub fn is_degenerate(&self) -> bool { self.range_max == self.range_min }

    pub fn bar_within_range(&self) -> bool {
        self.bar_start >= self.range_min && self.bar_end <= self.range_max
    }
}
