// File: crates/rangeviz-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels (background, track, gradient bar).

use rangeviz_core::{color_of, Metric, RangeChartComposer};
use rangeviz_render_skia::{RenderOptions, SkiaRenderer};

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let chart = RangeChartComposer::new()
        .compose(&Metric::new("Server Load (%)", (0.0, 100.0), (40.0, 80.0), 50.0, 70.0))
        .expect("compose");

    let mut opts = RenderOptions::default();
    opts.width = 800;
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = SkiaRenderer::new(opts).render_to_rgba8(&chart).expect("rgba render");
    assert_eq!((w, h), (800, 70));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Plot spans x 30..770 over world -12..112 and y 25..70 over world -1..1.
    let sx = |x: f64| (30.0 + (x + 12.0) / 124.0 * 740.0) as usize;
    let mid_row = 47;

    assert_eq!(pixel(&px, stride, 0, 0), [255, 255, 255, 255], "white background");
    assert_eq!(pixel(&px, stride, sx(10.0), mid_row), [232, 232, 232, 255], "track fill");

    let want = color_of(60.0, 0.0, 100.0);
    let got = pixel(&px, stride, sx(60.0), mid_row);
    assert_eq!(got[0], want.r);
    assert!((got[1] as i32 - want.g as i32).abs() <= 4, "green {} vs {}", got[1], want.g);
    assert_eq!(got[2], want.b);
}

#[test]
fn range_labels_reach_the_surface() {
    if rangeviz_render_skia::label_typeface().is_none() {
        eprintln!("[rgba] no system typeface available; label check skipped");
        return;
    }
    let chart = RangeChartComposer::new()
        .compose(&Metric::new("Vacation Days", (0.0, 55.0), (15.0, 37.0), 15.0, 28.0))
        .expect("compose");

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (bare, _, _, _) = SkiaRenderer::new(opts).render_to_rgba8(&chart).expect("render without labels");
    opts.draw_labels = true;
    let (labelled, _, _, _) = SkiaRenderer::new(opts).render_to_rgba8(&chart).expect("render with labels");

    assert_eq!(bare.len(), labelled.len());
    let changed = bare.chunks_exact(4).zip(labelled.chunks_exact(4)).filter(|(a, b)| a != b).count();
    assert!(changed > 20, "labels changed only {changed} pixels");
}
