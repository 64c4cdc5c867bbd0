// File: crates/rangeviz-core/src/lib.rs
// Summary: Core library entry point; exports the range bar color, precision, geometry and chart API.

pub mod axis;
pub mod bar;
pub mod cache;
pub mod chart;
pub mod color;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod metric;
pub mod precision;
pub mod source;
pub mod theme;
pub mod types;

pub use axis::{AxisRange, Tick};
pub use bar::{BarGeometry, BarGeometryBuilder};
pub use cache::{Clock, ManualClock, SystemClock, TtlCache};
pub use chart::{ChartDescriptor, ComposerOptions, Marker, MarkerRole, MarkerShape, RangeChartComposer, Renderer, Track};
pub use color::{color_of, Rgb};
pub use error::{ChartError, Result};
pub use geometry::{Band, Rect};
pub use metric::Metric;
pub use precision::{format_value, precision_of};
pub use source::{CachedSource, MetricSource, StaticSource};
pub use theme::Theme;
