// File: crates/rangeviz-core/src/color.rs
// Summary: RGB color type and the three-stop green/yellow/red value scale.

use std::fmt;

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]` floats for interpolation.
    fn channels(self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }
}

impl fmt::Display for Rgb {
    /// CSS form: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Anchor color at a normalized position of the scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub position: f64,
    pub color: Rgb,
}

pub const GREEN: Rgb = Rgb::new(0, 128, 0);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const RED: Rgb = Rgb::new(255, 0, 0);

/// Low, mid and high stops of the scale.
pub const STOPS: [ColorStop; 3] = [
    ColorStop { position: 0.0, color: GREEN },
    ColorStop { position: 0.5, color: YELLOW },
    ColorStop { position: 1.0, color: RED },
];

/// Map `value` onto the green -> yellow -> red scale spanning `[range_min, range_max]`.
///
/// The normalized position is not clamped: values outside the range extrapolate
/// the nearest segment and the resulting channels are rounded and clamped to `[0, 255]`.
/// A degenerate range (or a non-finite position) yields the low stop.
pub fn color_of(value: f64, range_min: f64, range_max: f64) -> Rgb {
    let [low, mid, high] = STOPS;
    if range_max == range_min {
        return low.color;
    }
    let t = (value - range_min) / (range_max - range_min);
    if !t.is_finite() {
        return low.color;
    }
    // t == 0.5 belongs to the first segment
    if t <= mid.position {
        lerp(low.color, mid.color, t * 2.0)
    } else {
        lerp(mid.color, high.color, (t - mid.position) * 2.0)
    }
}

fn lerp(a: Rgb, b: Rgb, f: f64) -> Rgb {
    let a = a.channels();
    let b = b.channels();
    let ch = |i: usize| -> u8 {
        let v = a[i] * (1.0 - f) + b[i] * f;
        v.round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(ch(0), ch(1), ch(2))
}
