// File: crates/rangeviz-core/src/precision.rs
// Summary: Decimal precision derived from range magnitude, plus fixed-point label formatting.

/// Fallback precision for degenerate ranges.
pub const DEFAULT_PRECISION: usize = 2;
/// Upper bound on resolved precision.
pub const MAX_PRECISION: usize = 10;

/// Number of decimal places to show for values tied to `[range_min, range_max]`.
///
/// Roughly two significant digits relative to the span: `2 - floor(log10(span))`,
/// clamped to `[0, MAX_PRECISION]`.
pub fn precision_of(range_min: f64, range_max: f64) -> usize {
    if range_max == range_min {
        return DEFAULT_PRECISION;
    }
    let diff = (range_max - range_min).abs();
    if !diff.is_finite() || diff <= 0.0 {
        return DEFAULT_PRECISION;
    }
    let p = 2.0 - diff.log10().floor();
    p.clamp(0.0, MAX_PRECISION as f64) as usize
}

/// Fixed-point text with `precision` decimals followed by `suffix`.
pub fn format_value(value: f64, precision: usize, suffix: &str) -> String {
    let mut s = format!("{:.*}", precision, value);
    // "-0" reads as noise on an axis label
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s.remove(0);
    }
    s.push_str(suffix);
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_map_to_digits() {
        assert_eq!(precision_of(0.0, 1000.0), 0);
        assert_eq!(precision_of(0.0, 10.0), 1);
        assert_eq!(precision_of(0.0, 0.006), 5);
        assert_eq!(precision_of(0.0, 1e-12), MAX_PRECISION);
    }

    #[test]
    fn reversed_bounds_use_magnitude() {
        assert_eq!(precision_of(100.0, 0.0), 0);
    }

    #[test]
    fn format_applies_digits_and_suffix() {
        assert_eq!(format_value(12.345, 1, "%"), "12.3%");
        assert_eq!(format_value(55.0, 0, ""), "55");
        assert_eq!(format_value(-0.001, 1, ""), "0.0");
    }
}
