// File: crates/rangeviz-render-skia/src/lib.rs
// Summary: Skia CPU raster renderer for range chart descriptors (PNG files, PNG bytes, RGBA8 buffers).

use anyhow::{bail, Result};
use skia_safe as skia;
use tracing::{debug, warn};

use rangeviz_core::types::{Insets, HEIGHT, WIDTH, Y_DISPLAY_RANGE};
use rangeviz_core::{ChartDescriptor, Marker, MarkerShape, Renderer, Rgb, Theme};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, insets: Insets::default(), draw_labels: true }
    }
}

impl RenderOptions {
    /// Surface size and margins taken from a theme preset.
    pub fn for_theme(theme: &Theme) -> Self {
        Self { height: theme.height, insets: theme.insets, ..Self::default() }
    }
}

/// Maps chart (world) coordinates to surface pixels.
#[derive(Clone, Copy, Debug)]
struct PlotArea {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl PlotArea {
    fn new(opts: &RenderOptions, chart: &ChartDescriptor) -> Self {
        let l = opts.insets.left as f32;
        let t = opts.insets.top as f32;
        let r = (opts.width - opts.insets.right as i32) as f32;
        let b = (opts.height - opts.insets.bottom as i32) as f32;
        Self {
            l,
            t,
            r: r.max(l + 1.0),
            b: b.max(t + 1.0),
            x_min: chart.axis.min,
            x_max: chart.axis.max,
            y_min: Y_DISPLAY_RANGE.0,
            y_max: Y_DISPLAY_RANGE.1,
        }
    }

    #[inline]
    fn sx(&self, x: f64) -> f32 {
        let span = (self.x_max - self.x_min).max(1e-9);
        self.l + ((x - self.x_min) / span) as f32 * (self.r - self.l)
    }

    #[inline]
    fn sy(&self, y: f64) -> f32 {
        let span = (self.y_max - self.y_min).max(1e-9);
        self.b - ((y - self.y_min) / span) as f32 * (self.b - self.t)
    }

    /// Pixel rect for a world rect given as x0..x1, y0..y1 (y up).
    fn rect(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> skia::Rect {
        skia::Rect::from_ltrb(self.sx(x0), self.sy(y1), self.sx(x1), self.sy(y0))
    }
}

pub struct SkiaRenderer {
    pub opts: RenderOptions,
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self { Self { opts } }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, chart: &ChartDescriptor, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(chart)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, chart: &ChartDescriptor) -> Result<Vec<u8>> {
        let mut surface = self.paint(chart)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render into an unpremultiplied RGBA8 buffer; returns (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, chart: &ChartDescriptor) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.paint(chart)?;
        let (w, h) = (self.opts.width, self.opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            bail!("failed to read back {w}x{h} surface");
        }
        Ok((px, w as u32, h as u32, stride))
    }

    fn paint(&self, chart: &ChartDescriptor) -> Result<skia::Surface> {
        let opts = &self.opts;
        if opts.width <= 0 || opts.height <= 0 {
            bail!("surface size must be positive (got {}x{})", opts.width, opts.height);
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        let plot = PlotArea::new(opts, chart);

        canvas.clear(sk(chart.theme.background));
        draw_track(canvas, &plot, chart);
        draw_bar(canvas, &plot, chart);
        for m in &chart.markers {
            draw_marker(canvas, &plot, m);
        }
        if opts.draw_labels {
            match label_typeface() {
                Some(typeface) => draw_range_labels(canvas, &plot, chart, typeface),
                None => warn!(title = %chart.title, "no system typeface; range labels skipped"),
            }
        }

        debug!(title = %chart.title, width = opts.width, height = opts.height, "painted range chart");
        Ok(surface)
    }
}

impl Renderer for SkiaRenderer {
    type Output = Vec<u8>;
    type Error = anyhow::Error;

    fn render(&self, chart: &ChartDescriptor) -> Result<Vec<u8>> {
        self.render_to_png_bytes(chart)
    }
}

// ---- helpers ----------------------------------------------------------------

fn sk(c: Rgb) -> skia::Color {
    skia::Color::from_argb(255, c.r, c.g, c.b)
}

fn draw_track(canvas: &skia::Canvas, plot: &PlotArea, chart: &ChartDescriptor) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(sk(chart.track.fill));
    let r = chart.track.rect;
    canvas.draw_rect(plot.rect(r.x0, r.y0, r.x1, r.y1), &paint);
}

fn draw_bar(canvas: &skia::Canvas, plot: &PlotArea, chart: &ChartDescriptor) {
    let bar = &chart.bar;
    let (rows, cols) = (bar.rows(), bar.cols());
    if rows == 0 || cols == 0 {
        return;
    }
    // each sample owns half a step on either side, like a heatmap cell
    let half_x = if cols > 1 { bar.width() / (cols - 1) as f64 * 0.5 } else { 0.0 };
    let bounds = bar.bounds();
    let half_y = if rows > 1 { bounds.height() / (rows - 1) as f64 * 0.5 } else { 0.0 };

    // no AA so adjacent cells do not leave seams
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(false);
    paint.set_style(skia::paint::Style::Fill);

    let colors = chart.bar_colors();
    for (row, &y) in bar.ys.iter().enumerate() {
        for (col, &x) in bar.xs.iter().enumerate() {
            let Some(color) = colors[row * cols + col] else { continue };
            paint.set_color(sk(color));
            let mut rect = plot.rect(x - half_x, y - half_y, x + half_x, y + half_y);
            if rect.width() < 1.0 {
                rect.right = rect.left + 1.0;
            }
            if rect.height() < 1.0 {
                rect.bottom = rect.top + 1.0;
            }
            canvas.draw_rect(rect, &paint);
        }
    }
}

fn draw_marker(canvas: &skia::Canvas, plot: &PlotArea, m: &Marker) {
    let (cx, cy) = (plot.sx(m.x), plot.sy(m.y));
    let r = m.size * 0.5;

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(sk(m.fill));

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(m.stroke_width);
    stroke.set_color(sk(m.stroke));

    match m.shape {
        MarkerShape::Circle => {
            canvas.draw_circle((cx, cy), r, &fill);
            canvas.draw_circle((cx, cy), r, &stroke);
        }
        MarkerShape::TriangleUp | MarkerShape::Diamond => {
            let mut path = skia::Path::new();
            if m.shape == MarkerShape::TriangleUp {
                path.move_to((cx, cy - r));
                path.line_to((cx + r, cy + r * 0.75));
                path.line_to((cx - r, cy + r * 0.75));
            } else {
                path.move_to((cx, cy - r));
                path.line_to((cx + r, cy));
                path.line_to((cx, cy + r));
                path.line_to((cx - r, cy));
            }
            path.close();
            canvas.draw_path(&path, &fill);
            canvas.draw_path(&path, &stroke);
        }
    }
}

/// Default system typeface for labels. A bare `Font::default()` carries an empty
/// typeface and draws no glyphs.
pub fn label_typeface() -> Option<skia::Typeface> {
    skia::FontMgr::default().legacy_make_typeface(None::<&str>, skia::FontStyle::normal())
}

fn draw_range_labels(canvas: &skia::Canvas, plot: &PlotArea, chart: &ChartDescriptor, typeface: skia::Typeface) {
    let theme = &chart.theme;
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(sk(theme.label));
    let font = skia::Font::new(typeface, theme.label_font_size);

    let ticks = &chart.axis.ticks;
    let baseline = plot.sy(chart.track.rect.y0 + chart.track.rect.height() * 0.5) + theme.label_font_size * 0.35;
    let below = plot.sy(chart.track.rect.y0) + theme.label_font_size;
    let last = ticks.len().saturating_sub(1);
    for (i, tick) in ticks.iter().enumerate() {
        let (w, _) = font.measure_str(&tick.label, Some(&paint));
        let x = plot.sx(tick.value);
        // range ends sit beside the track; inner ticks sit centered beneath it
        let (tx, ty) = if i == 0 {
            (x - theme.label_offset - w, baseline)
        } else if i == last {
            (x + theme.label_offset, baseline)
        } else {
            (x - w * 0.5, below)
        };
        canvas.draw_str(&tick.label, (tx, ty), &font, &paint);
    }
}
