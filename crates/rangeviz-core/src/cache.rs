// File: crates/rangeviz-core/src/cache.rs
// Summary: Time-to-live cache with an injected clock; entries report freshness instead of vanishing.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

/// Source of "now" for expiry decisions.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> { Utc::now() }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self { Self { now: Mutex::new(start) } }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> { *self.now.lock().unwrap_or_else(|e| e.into_inner()) }
}

// Allow sharing one clock between a cache and its driver
impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> { (**self).now() }
}

struct Entry<V> {
    value: V,
    stored_at: DateTime<Utc>,
}

/// Key/value cache where entries older than `ttl` are reported stale but still returned.
pub struct TtlCache<K, V, C = SystemClock> {
    ttl: Duration,
    clock: C,
    entries: Mutex<HashMap<K, Entry<V>>>,
}

impl<K: Eq + Hash, V: Clone, C: Clock> TtlCache<K, V, C> {
    pub fn new(ttl: Duration, clock: C) -> Self {
        Self { ttl, clock, entries: Mutex::new(HashMap::new()) }
    }

    pub fn ttl(&self) -> Duration { self.ttl }

    /// Cached value and whether it is younger than the TTL.
    pub fn get(&self, key: &K) -> Option<(V, bool)> {
        let now = self.clock.now();
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).map(|e| (e.value.clone(), now - e.stored_at < self.ttl))
    }

    pub fn insert(&self, key: K, value: V) {
        let stored_at = self.clock.now();
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key, Entry { value, stored_at });
    }

    /// Drop one entry; returns whether it existed.
    pub fn invalidate(&self, key: &K) -> bool {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).remove(key).is_some()
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}
