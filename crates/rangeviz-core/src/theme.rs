// File: crates/rangeviz-core/src/theme.rs
// Summary: Presentation presets for range charts (colors, marker glyphs, margins, label sizes).

use crate::chart::MarkerShape;
use crate::color::Rgb;
use crate::types::{Insets, HEIGHT};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    pub track_fill: Rgb,
    pub label: Rgb,
    pub marker_stroke: Rgb,
    pub marker_stroke_width: f32,
    pub prior_shape: MarkerShape,
    /// Glyph sizes in pixels; the prior marker is drawn smaller than the current one.
    pub prior_size: f32,
    pub current_size: f32,
    pub label_font_size: f32,
    /// Gap between a range end and its label, in pixels.
    pub label_offset: f32,
    pub insets: Insets,
    pub height: i32,
}

impl Theme {
    pub fn standard() -> Self {
        Self {
            name: "standard",
            background: Rgb::new(255, 255, 255),
            track_fill: Rgb::new(0xE8, 0xE8, 0xE8),
            label: Rgb::new(0x33, 0x33, 0x33),
            marker_stroke: Rgb::new(47, 79, 79), // DarkSlateGrey
            marker_stroke_width: 1.0,
            prior_shape: MarkerShape::TriangleUp,
            prior_size: 22.0,
            current_size: 28.0,
            label_font_size: 14.0,
            label_offset: 5.0,
            insets: Insets::default(),
            height: HEIGHT,
        }
    }

    pub fn compact() -> Self {
        Self {
            name: "compact",
            prior_shape: MarkerShape::Diamond,
            prior_size: 14.0,
            current_size: 20.0,
            label_font_size: 12.0,
            label_offset: 4.0,
            insets: Insets::new(24, 24, 12, 0),
            height: 50,
            ..Self::standard()
        }
    }

    pub fn wide() -> Self {
        Self {
            name: "wide",
            prior_size: 26.0,
            current_size: 32.0,
            label_font_size: 16.0,
            label_offset: 8.0,
            insets: Insets::new(48, 48, 25, 0),
            height: 90,
            ..Self::standard()
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgb::new(18, 18, 20),
            track_fill: Rgb::new(40, 40, 45),
            label: Rgb::new(235, 235, 245),
            marker_stroke: Rgb::new(180, 180, 190),
            ..Self::standard()
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::standard() }
}

/// Every built-in preset, `standard` first.
pub fn presets() -> Vec<Theme> {
    vec![Theme::standard(), Theme::compact(), Theme::wide(), Theme::dark()]
}

/// Preset whose name matches `name` case-insensitively; unknown names get `standard`.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::standard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prior_marker_is_smaller_in_every_preset() {
        for t in presets() {
            assert!(t.prior_size < t.current_size, "{}", t.name);
            assert_ne!(t.prior_shape, MarkerShape::Circle, "{}", t.name);
        }
    }

    #[test]
    fn lookup_is_case_insensitive_with_fallback() {
        assert_eq!(find("COMPACT").name, "compact");
        assert_eq!(find("nope").name, "standard");
    }
}
