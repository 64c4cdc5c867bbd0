// File: crates/rangeviz-dashboard/src/main.rs
// Summary: Dashboard CLI; loads metrics (CSV or built-in sample), renders one range chart PNG per metric in parallel.

mod csv_source;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use rayon::prelude::*;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use rangeviz_core::bar::{DEFAULT_ASPECT_CORRECTION, DEFAULT_X_RESOLUTION, DEFAULT_Y_RESOLUTION};
use rangeviz_core::types::WIDTH;
use rangeviz_core::{
    theme, BarGeometryBuilder, CachedSource, ChartDescriptor, ComposerOptions, MetricSource,
    RangeChartComposer, StaticSource,
};
use rangeviz_render_skia::{RenderOptions, SkiaRenderer};

use crate::csv_source::CsvSource;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render range bar charts for a set of metrics", long_about = None)]
struct Cli {
    /// Metrics CSV; the built-in sample metrics are used when omitted.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    #[arg(short, long, default_value = "target/out", value_hint = ValueHint::DirPath)]
    out_dir: PathBuf,

    /// Theme preset: standard, compact, wide or dark.
    #[arg(long, default_value = "standard")]
    style: String,

    #[arg(long, default_value_t = WIDTH)]
    width: i32,

    /// Surface height in pixels; defaults to the theme's row height.
    #[arg(long)]
    height: Option<i32>,

    /// Corner radius per unit of range span, in x units.
    #[arg(long, default_value_t = DEFAULT_ASPECT_CORRECTION)]
    aspect_correction: f64,

    #[arg(long, default_value_t = DEFAULT_X_RESOLUTION)]
    x_resolution: usize,

    #[arg(long, default_value_t = DEFAULT_Y_RESOLUTION)]
    y_resolution: usize,

    /// Evenly spaced axis ticks across each range (2 = ends only).
    #[arg(long, default_value_t = 2)]
    ticks: usize,

    /// How long fetched metrics stay fresh between refresh rounds.
    #[arg(long, default_value_t = 300)]
    cache_ttl_secs: i64,

    /// Number of render rounds; each round refetches metrics through the cache.
    #[arg(long, default_value_t = 1)]
    rounds: u32,

    #[arg(long, default_value_t = 60)]
    interval_secs: u64,

    #[arg(long, action = ArgAction::SetTrue)]
    no_labels: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let theme = theme::find(&cli.style);
    if !theme.name.eq_ignore_ascii_case(&cli.style) {
        warn!("unknown style '{}'; using '{}'", cli.style, theme.name);
    }

    let composer = RangeChartComposer::new()
        .with_theme(theme)
        .with_bar_builder(
            BarGeometryBuilder::new()
                .with_resolution(cli.x_resolution, cli.y_resolution)
                .with_aspect_correction(cli.aspect_correction),
        )
        .with_options(ComposerOptions { tick_count: cli.ticks, ..ComposerOptions::default() });

    let mut opts = RenderOptions::for_theme(&theme);
    opts.width = cli.width;
    if let Some(h) = cli.height {
        opts.height = h;
    }
    opts.draw_labels = !cli.no_labels;
    let renderer = SkiaRenderer::new(opts);

    let inner: Box<dyn MetricSource> = match &cli.input {
        Some(path) => {
            info!("Using input file: {}", path.display());
            Box::new(CsvSource::new(path))
        }
        None => {
            info!("No input given; rendering the built-in sample metrics");
            Box::new(StaticSource::sample())
        }
    };
    let source = CachedSource::new(inner, cache_ttl(cli.cache_ttl_secs)?);

    for round in 0..cli.rounds.max(1) {
        if round > 0 {
            std::thread::sleep(std::time::Duration::from_secs(cli.interval_secs));
        }
        render_round(&source, &composer, &renderer, &cli.out_dir)
            .with_context(|| format!("render round {}", round + 1))?;
    }
    Ok(())
}

fn cache_ttl(secs: i64) -> Result<chrono::Duration> {
    if secs < 0 {
        bail!("--cache-ttl-secs must not be negative (got {secs})");
    }
    match chrono::Duration::try_seconds(secs) {
        Some(ttl) => Ok(ttl),
        None => bail!("--cache-ttl-secs {secs} is out of range"),
    }
}

/// Fetch metrics and render each one to `out_dir` in parallel.
fn render_round(
    source: &dyn MetricSource,
    composer: &RangeChartComposer,
    renderer: &SkiaRenderer,
    out_dir: &Path,
) -> Result<()> {
    let metrics = source.fetch_metrics().context("fetching metrics")?;
    if metrics.is_empty() {
        bail!("no metrics loaded; check headers/delimiter.");
    }
    info!("Loaded {} metrics", metrics.len());
    std::fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let results: Vec<(String, Result<(ChartDescriptor, PathBuf)>)> = metrics
        .par_iter()
        .enumerate()
        .map(|(i, m)| {
            let rendered = (|| -> Result<(ChartDescriptor, PathBuf)> {
                let chart = composer.compose(m).with_context(|| format!("composing '{}'", m.title))?;
                let out = out_name_for(out_dir, i, &m.title);
                renderer
                    .render_to_png(&chart, &out)
                    .with_context(|| format!("rendering '{}'", m.title))?;
                Ok((chart, out))
            })();
            (m.title.clone(), rendered)
        })
        .collect();

    for (title, res) in &results {
        if let Ok((chart, out)) = res {
            debug!(title = %title, masked = chart.bar.masked_count(), "bar cells masked");
            println!(
                "{:<28} precision {}  axis [{}, {}]  -> {}",
                title,
                chart.precision(),
                chart.axis.min,
                chart.axis.max,
                out.display()
            );
        }
    }
    let written = tally(&results)?;
    info!("Wrote {} of {} charts to {}", written, results.len(), out_dir.display());
    Ok(())
}

/// Log each failed metric and count the rest. Errors only when nothing succeeded.
fn tally<T>(results: &[(String, Result<T>)]) -> Result<usize> {
    let mut ok = 0usize;
    for (title, res) in results {
        match res {
            Ok(_) => ok += 1,
            Err(err) => warn!(title = %title, "{err:#}"),
        }
    }
    if ok == 0 {
        bail!("every metric failed to render");
    }
    Ok(ok)
}

/// Output file name like <out_dir>/range_<index>_<slug>.png; the index keeps
/// titles that slug alike from sharing a file.
fn out_name_for(out_dir: &Path, index: usize, title: &str) -> PathBuf {
    let mut slug = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        out_dir.join(format!("range_{index:02}.png"))
    } else {
        out_dir.join(format!("range_{index:02}_{slug}.png"))
    }
}
