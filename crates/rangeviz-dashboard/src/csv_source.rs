// File: crates/rangeviz-dashboard/src/csv_source.rs
// Summary: Metric source backed by a CSV file with named columns.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rangeviz_core::{ChartError, Metric, MetricSource};
use tracing::{debug, warn};

pub struct CsvSource {
    path: PathBuf,
    id: String,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = format!("csv:{}", path.display());
        Self { path, id }
    }
}

impl MetricSource for CsvSource {
    fn id(&self) -> &str { &self.id }

    fn fetch_metrics(&self) -> rangeviz_core::Result<Vec<Metric>> {
        load_metrics_csv(&self.path).map_err(|e| ChartError::Source(format!("{e:#}")))
    }
}

/// Load metrics from a CSV with a header row.
/// Required columns: title, range_min, range_max, bar_start, bar_end, start_value, current_value.
/// Optional: suffix. Rows that fail to parse or validate are skipped with a warning.
pub fn load_metrics_csv(path: &Path) -> Result<Vec<Metric>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    debug!(?headers, "metric csv headers");

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.iter().any(|want| h == want))
    };
    let col = |names: &[&str]| -> Result<usize> {
        idx(names).with_context(|| format!("{}: missing column '{}'", path.display(), names[0]))
    };

    let i_title = col(&["title", "name"])?;
    let i_min = col(&["range_min", "min"])?;
    let i_max = col(&["range_max", "max"])?;
    let i_bar_start = col(&["bar_start", "low"])?;
    let i_bar_end = col(&["bar_end", "high"])?;
    let i_start = col(&["start_value", "start", "prior"])?;
    let i_current = col(&["current_value", "current"])?;
    let i_suffix = idx(&["suffix", "unit"]);

    let mut out = Vec::new();
    for (n, rec) in rdr.records().enumerate() {
        let line = n + 2; // 1-based, after the header
        let rec = rec.with_context(|| format!("reading line {line}"))?;
        let num = |i: usize, name: &str| -> Result<f64> {
            let raw = rec.get(i).unwrap_or("");
            raw.parse::<f64>().with_context(|| format!("line {line}: {name} '{raw}' is not a number"))
        };
        let parsed = (|| -> Result<Metric> {
            let title = rec.get(i_title).unwrap_or("").to_string();
            let metric = Metric::try_new(
                title,
                (num(i_min, "range_min")?, num(i_max, "range_max")?),
                (num(i_bar_start, "bar_start")?, num(i_bar_end, "bar_end")?),
                num(i_start, "start_value")?,
                num(i_current, "current_value")?,
            )
            .with_context(|| format!("line {line}"))?;
            let suffix = i_suffix.and_then(|i| rec.get(i)).unwrap_or("");
            Ok(metric.with_suffix(suffix))
        })();
        match parsed {
            Ok(m) => out.push(m),
            Err(err) => warn!("skipping metric row: {err:#}"),
        }
    }
    Ok(out)
}
