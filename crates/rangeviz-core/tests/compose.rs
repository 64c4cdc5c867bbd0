// File: crates/rangeviz-core/tests/compose.rs
// Purpose: End-to-end checks of chart composition: axis padding, precision, markers, ticks and purity.

use rangeviz_core::color::{GREEN, YELLOW};
use rangeviz_core::theme;
use rangeviz_core::{
    ChartError, ComposerOptions, MarkerRole, MarkerShape, Metric, RangeChartComposer, Rgb,
};

fn server_load() -> Metric {
    Metric::new("Server Load (%)", (0.0, 100.0), (40.0, 80.0), 50.0, 70.0)
}

#[test]
fn server_load_descriptor() {
    let chart = RangeChartComposer::new().compose(&server_load()).expect("compose");

    assert_eq!((chart.axis.min, chart.axis.max), (-12.0, 112.0));
    assert_eq!(chart.precision(), 0);
    assert_eq!(chart.color_domain, (0.0, 100.0));

    let prior = chart.marker(MarkerRole::Prior).expect("prior marker");
    let current = chart.marker(MarkerRole::Current).expect("current marker");
    assert_eq!(prior.fill, YELLOW);
    assert_eq!(current.fill, Rgb::new(255, 153, 0));
    // prior sits lower on the scale, so it carries more green and no more red
    assert!(prior.fill.g > current.fill.g);
    assert!(prior.fill.r <= current.fill.r);
}

#[test]
fn track_spans_full_range_on_the_band() {
    let chart = RangeChartComposer::new().compose(&server_load()).unwrap();
    let r = chart.track.rect;
    assert_eq!((r.x0, r.x1, r.y0, r.y1), (0.0, 100.0, -0.5, 0.5));
    assert_eq!(chart.track.fill, Rgb::new(0xE8, 0xE8, 0xE8));
}

#[test]
fn markers_sit_on_the_midline_with_shared_stroke() {
    let chart = RangeChartComposer::new().compose(&server_load()).unwrap();
    let prior = chart.marker(MarkerRole::Prior).unwrap();
    let current = chart.marker(MarkerRole::Current).unwrap();
    assert_eq!((prior.x, prior.y), (50.0, 0.0));
    assert_eq!((current.x, current.y), (70.0, 0.0));
    assert_eq!(current.shape, MarkerShape::Circle);
    assert_ne!(prior.shape, MarkerShape::Circle);
    assert!(prior.size < current.size);
    assert_eq!(prior.stroke, current.stroke);
    assert_eq!(prior.stroke, Rgb::new(47, 79, 79));
}

#[test]
fn theme_carries_marker_glyphs() {
    let chart = RangeChartComposer::new()
        .with_theme(theme::find("compact"))
        .compose(&server_load())
        .unwrap();
    assert_eq!(chart.marker(MarkerRole::Prior).unwrap().shape, MarkerShape::Diamond);
    assert_eq!(chart.theme.name, "compact");
}

#[test]
fn ticks_label_range_ends_with_suffix() {
    let chart = RangeChartComposer::new().compose(&server_load().with_suffix("%")).unwrap();
    let labels: Vec<_> = chart.axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["0%", "100%"]);

    let three = RangeChartComposer::new()
        .with_options(ComposerOptions { tick_count: 3, ..ComposerOptions::default() })
        .compose(&Metric::new("Vacation Days", (0.0, 55.0), (15.0, 37.0), 15.0, 28.0))
        .unwrap();
    let labels: Vec<_> = three.axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["0.0", "27.5", "55.0"]);
}

#[test]
fn degenerate_range_falls_back() {
    let chart = RangeChartComposer::new()
        .compose(&Metric::new("Flat", (5.0, 5.0), (5.0, 5.0), 5.0, 5.0))
        .unwrap();
    assert_eq!((chart.axis.min, chart.axis.max), (4.0, 6.0));
    assert_eq!(chart.precision(), 2);
    assert_eq!(chart.bar.cols(), 1);
    assert!(chart.markers.iter().all(|m| m.fill == GREEN));
}

#[test]
fn compose_is_pure() {
    let composer = RangeChartComposer::new();
    let m = server_load();
    let a = composer.compose(&m).unwrap();
    let b = composer.compose(&m).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.bar_colors(), b.bar_colors());
}

#[test]
fn invalid_inputs_surface_errors() {
    let composer = RangeChartComposer::new();
    let inverted = Metric::new("Inverted", (0.0, 100.0), (80.0, 40.0), 50.0, 70.0);
    assert!(matches!(composer.compose(&inverted), Err(ChartError::InvertedBar { .. })));

    let reversed = Metric::new("Reversed", (100.0, 0.0), (40.0, 80.0), 50.0, 70.0);
    assert_eq!(
        composer.compose(&reversed).unwrap_err(),
        ChartError::InvalidRange { min: 100.0, max: 0.0 }
    );
}

#[test]
fn markers_outside_the_bar_are_allowed() {
    let m = Metric::new("Spiky", (0.0, 100.0), (40.0, 60.0), 5.0, 99.0);
    let chart = RangeChartComposer::new().compose(&m).unwrap();
    assert_eq!(chart.marker(MarkerRole::Prior).unwrap().x, 5.0);
    assert_eq!(chart.marker(MarkerRole::Current).unwrap().x, 99.0);
}
