// File: crates/rangeviz-core/src/source.rs
// Summary: Metric source trait, the built-in sample set, and a TTL-cached source wrapper.

use chrono::Duration;
use tracing::{trace, warn};

use crate::cache::{Clock, SystemClock, TtlCache};
use crate::error::Result;
use crate::metric::Metric;

/// Supplies metrics with ranges, bars and values already computed.
pub trait MetricSource: Send + Sync {
    /// Stable identifier; doubles as the cache key.
    fn id(&self) -> &str;
    fn fetch_metrics(&self) -> Result<Vec<Metric>>;
}

impl<S: MetricSource + ?Sized> MetricSource for Box<S> {
    fn id(&self) -> &str { (**self).id() }
    fn fetch_metrics(&self) -> Result<Vec<Metric>> { (**self).fetch_metrics() }
}

/// Fixed in-memory metric list.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    metrics: Vec<Metric>,
}

impl StaticSource {
    pub fn new(metrics: Vec<Metric>) -> Self { Self { metrics } }

    /// Demo data set for the dashboard.
    pub fn sample() -> Self {
        Self::new(vec![
            Metric::new("Vacation Days", (0.0, 55.0), (15.0, 37.0), 15.0, 28.0),
            Metric::new("Customer Satisfaction", (0.0, 100.0), (12.0, 25.0), 20.0, 25.0),
            Metric::new("Server Load (%)", (0.0, 100.0), (40.0, 80.0), 50.0, 70.0).with_suffix("%"),
            Metric::new("Sprint Progress (Tasks)", (0.0, 40.0), (10.0, 25.0), 10.0, 18.0),
            Metric::new("Monthly Sales (k$)", (0.0, 200.0), (80.0, 150.0), 80.0, 120.0),
            Metric::new("Daily Signups", (0.0, 150.0), (50.0, 110.0), 50.0, 90.0),
        ])
    }
}

impl MetricSource for StaticSource {
    fn id(&self) -> &str { "static" }

    fn fetch_metrics(&self) -> Result<Vec<Metric>> { Ok(self.metrics.clone()) }
}

/// Wraps a source with a [`TtlCache`]. A fresh entry is served directly; a stale or
/// missing one triggers a refetch, and a failed refetch falls back to the stale value.
pub struct CachedSource<S, C = SystemClock> {
    inner: S,
    cache: TtlCache<String, Vec<Metric>, C>,
}

impl<S: MetricSource> CachedSource<S, SystemClock> {
    pub fn new(inner: S, ttl: Duration) -> Self { Self::with_clock(inner, ttl, SystemClock) }
}

impl<S: MetricSource, C: Clock> CachedSource<S, C> {
    pub fn with_clock(inner: S, ttl: Duration, clock: C) -> Self {
        Self { inner, cache: TtlCache::new(ttl, clock) }
    }

    pub fn inner(&self) -> &S { &self.inner }

    /// Forget the cached value so the next fetch goes to the inner source.
    pub fn invalidate(&self) -> bool { self.cache.invalidate(&self.inner.id().to_string()) }
}

impl<S: MetricSource, C: Clock> MetricSource for CachedSource<S, C> {
    fn id(&self) -> &str { self.inner.id() }

    fn fetch_metrics(&self) -> Result<Vec<Metric>> {
        let key = self.inner.id().to_string();
        let cached = self.cache.get(&key);
        if let Some((metrics, true)) = cached {
            trace!(source = %key, "metric cache hit");
            return Ok(metrics);
        }
        match self.inner.fetch_metrics() {
            Ok(metrics) => {
                self.cache.insert(key, metrics.clone());
                Ok(metrics)
            }
            Err(err) => match cached {
                Some((stale, _)) => {
                    warn!(source = %key, error = %err, "refetch failed; serving stale metrics");
                    Ok(stale)
                }
                None => Err(err),
            },
        }
    }
}
