// File: crates/rangeviz-core/src/grid.rs
// Summary: Evenly spaced sample helpers for bar columns, band rows and axis ticks.

/// `steps` evenly spaced samples over `[start, end]`, endpoints included.
/// One step yields `[start]`; zero steps yield nothing.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            // pin the last sample so rounding never overshoots `end`
            (0..steps)
                .map(|i| if i + 1 == steps { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::linspace;

    #[test]
    fn includes_both_endpoints() {
        let v = linspace(40.0, 80.0, 5);
        assert_eq!(v, vec![40.0, 50.0, 60.0, 70.0, 80.0]);
    }

    #[test]
    fn degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }
}
