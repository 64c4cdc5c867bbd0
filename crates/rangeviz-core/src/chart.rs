// File: crates/rangeviz-core/src/chart.rs
// Summary: Composes color scale, bar geometry and precision into a renderer-agnostic chart descriptor.

use tracing::debug;

use crate::axis::{AxisRange, DEFAULT_PADDING_RATIO, FALLBACK_PADDING};
use crate::bar::{BarGeometry, BarGeometryBuilder};
use crate::color::{color_of, Rgb};
use crate::error::{ChartError, Result};
use crate::geometry::Rect;
use crate::metric::Metric;
use crate::precision::precision_of;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    Circle,
    TriangleUp,
    Diamond,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerRole {
    /// Value at the start of the observed period.
    Prior,
    Current,
}

/// Point glyph placed on the band's midline.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub role: MarkerRole,
    pub x: f64,
    pub y: f64,
    pub shape: MarkerShape,
    /// Glyph size in pixels.
    pub size: f32,
    pub fill: Rgb,
    pub stroke: Rgb,
    pub stroke_width: f32,
}

/// Background track drawn beneath the bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub rect: Rect,
    pub fill: Rgb,
}

/// Everything a backend needs to draw one range chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartDescriptor {
    pub title: String,
    pub suffix: String,
    pub track: Track,
    pub bar: BarGeometry,
    /// Domain the bar cells are colored against (the metric's outer range).
    pub color_domain: (f64, f64),
    pub markers: Vec<Marker>,
    pub axis: AxisRange,
    pub theme: Theme,
}

impl ChartDescriptor {
    pub fn marker(&self, role: MarkerRole) -> Option<&Marker> {
        self.markers.iter().find(|m| m.role == role)
    }

    /// Tick-format precision (decimal places).
    pub fn precision(&self) -> usize { self.axis.precision }

    /// RGB for every bar cell; `None` where a rounded end masks the cell.
    pub fn bar_colors(&self) -> Vec<Option<Rgb>> {
        self.bar.colors(self.color_domain.0, self.color_domain.1)
    }
}

/// Axis layout knobs for the composer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComposerOptions {
    pub padding_ratio: f64,
    pub fallback_padding: f64,
    /// Evenly spaced ticks across the range; 2 labels just the ends.
    pub tick_count: usize,
}

impl Default for ComposerOptions {
    fn default() -> Self {
        Self { padding_ratio: DEFAULT_PADDING_RATIO, fallback_padding: FALLBACK_PADDING, tick_count: 2 }
    }
}

/// Builds [`ChartDescriptor`]s. Holds configuration only; `compose` keeps no state between calls.
#[derive(Clone, Debug, Default)]
pub struct RangeChartComposer {
    pub bar: BarGeometryBuilder,
    pub theme: Theme,
    pub options: ComposerOptions,
}

impl RangeChartComposer {
    pub fn new() -> Self { Self::default() }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_bar_builder(mut self, bar: BarGeometryBuilder) -> Self {
        self.bar = bar;
        self
    }

    pub fn with_options(mut self, options: ComposerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn compose(&self, metric: &Metric) -> Result<ChartDescriptor> {
        let (min, max) = (metric.range_min, metric.range_max);
        if max < min {
            return Err(ChartError::InvalidRange { min, max });
        }

        let precision = precision_of(min, max);
        let band = self.bar.band;
        let track = Track { rect: band.span(min, max), fill: self.theme.track_fill };
        let bar = self.bar.build(metric.bar_start, metric.bar_end, min, max)?;
        if !metric.bar_within_range() {
            debug!(title = %metric.title, "bar extends past the outer range");
        }

        let marker = |role: MarkerRole, x: f64, shape: MarkerShape, size: f32| Marker {
            role,
            x,
            y: band.center(),
            shape,
            size,
            fill: color_of(x, min, max),
            stroke: self.theme.marker_stroke,
            stroke_width: self.theme.marker_stroke_width,
        };
        let markers = vec![
            marker(MarkerRole::Prior, metric.start_value, self.theme.prior_shape, self.theme.prior_size),
            marker(MarkerRole::Current, metric.current_value, MarkerShape::Circle, self.theme.current_size),
        ];

        let axis = AxisRange::padded(min, max, self.options.padding_ratio, self.options.fallback_padding, precision)
            .with_ticks(min, max, self.options.tick_count, &metric.suffix);

        debug!(
            title = %metric.title,
            precision,
            axis_min = axis.min,
            axis_max = axis.max,
            masked = bar.masked_count(),
            "composed range chart"
        );

        Ok(ChartDescriptor {
            title: metric.title.clone(),
            suffix: metric.suffix.clone(),
            track,
            bar,
            color_domain: (min, max),
            markers,
            axis,
            theme: self.theme,
        })
    }
}

/// Backend that turns a descriptor into pixels, vectors or markup.
pub trait Renderer {
    type Output;
    type Error;
    fn render(&self, chart: &ChartDescriptor) -> std::result::Result<Self::Output, Self::Error>;
}
