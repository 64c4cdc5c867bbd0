// File: crates/rangeviz-core/tests/color.rs
// Purpose: Validate stop colors, extrapolation clamping and channel monotonicity of the value scale.

use rangeviz_core::color::{GREEN, RED, YELLOW};
use rangeviz_core::{color_of, Rgb};

#[test]
fn stops_are_hit_exactly() {
    for &(lo, hi) in &[(0.0, 100.0), (-3.1, 3.1), (10.0, 55.0)] {
        assert_eq!(color_of(lo, lo, hi), GREEN);
        assert_eq!(color_of((lo + hi) / 2.0, lo, hi), YELLOW);
        assert_eq!(color_of(hi, lo, hi), RED);
    }
}

#[test]
fn degenerate_range_is_green() {
    assert_eq!(color_of(5.0, 5.0, 5.0), GREEN);
    assert_eq!(color_of(-40.0, 5.0, 5.0), GREEN);
}

#[test]
fn out_of_range_values_clamp_channels() {
    // t = -0.5 pushes green -> yellow backwards: r and g go negative / below 128
    assert_eq!(color_of(-50.0, 0.0, 100.0), Rgb::new(0, 1, 0));
    // t = 1.5 pushes past red: r stays 255, g clamps to 0
    assert_eq!(color_of(150.0, 0.0, 100.0), RED);
}

#[test]
fn channels_follow_segment_trends() {
    let samples: Vec<Rgb> = (0..=100).map(|i| color_of(i as f64, 0.0, 100.0)).collect();
    for w in samples.windows(2) {
        let (a, b) = (w[0], w[1]);
        assert_eq!(a.b, 0);
        assert!(b.r >= a.r, "red never decreases: {a} -> {b}");
    }
    // green rises through the first half, falls through the second
    for w in samples[..=50].windows(2) {
        assert!(w[1].g >= w[0].g);
    }
    for w in samples[50..].windows(2) {
        assert!(w[1].g <= w[0].g);
        assert_eq!(w[1].r, 255);
    }
}
