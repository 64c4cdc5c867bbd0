// File: crates/rangeviz-core/src/error.rs
// Summary: Error type shared by the geometry engine, composer and metric sources.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// Bar endpoints arrive in descending order. Callers own the ordering.
    #[error("bar start {start} is greater than bar end {end}")]
    InvertedBar { start: f64, end: f64 },

    #[error("range max {max} is below range min {min}")]
    InvalidRange { min: f64, max: f64 },

    #[error("grid needs at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },

    #[error("metric source failed: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;

/// Reject NaN/inf for a named input.
pub(crate) fn ensure_finite(field: &'static str, v: f64) -> Result<()> {
    if v.is_finite() { Ok(()) } else { Err(ChartError::NonFinite { field }) }
}
