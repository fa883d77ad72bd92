//! Locale metrics and observability module.
//!
//! Counts translation lookups, fallbacks to the default locale, keys missing
//! from every table, and locale change requests (accepted and rejected).

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Locale counters. Use [`LocaleMetrics::global`] outside of tests.
#[derive(Debug, Default)]
pub struct LocaleMetrics {
    /// Lookups answered by the requested locale's own table
    lookups_hit: AtomicUsize,

    /// Lookups answered by the default locale's table
    fallbacks: AtomicUsize,

    /// Lookups no table could answer (the key itself was returned)
    missing_keys: AtomicUsize,

    /// Locale changes that were applied
    changes_accepted: AtomicUsize,

    /// Locale changes rejected because the code was unsupported
    changes_rejected: AtomicUsize,
}

static METRICS: OnceLock<LocaleMetrics> = OnceLock::new();

impl LocaleMetrics {
    /// Create a fresh set of counters, all zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global metrics instance.
    pub fn global() -> &'static LocaleMetrics {
        METRICS.get_or_init(LocaleMetrics::new)
    }

    /// Record a lookup answered by the requested locale.
    pub fn record_hit(&self) {
        self.lookups_hit.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup answered by the default locale instead.
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that returned the key itself.
    pub fn record_missing_key(&self) {
        self.missing_keys.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an applied locale change.
    pub fn record_change_accepted(&self) {
        self.changes_accepted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a locale change refused for an unsupported code.
    pub fn record_change_rejected(&self) {
        self.changes_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of lookups answered by the requested locale.
    pub fn lookups_hit(&self) -> usize {
        self.lookups_hit.load(Ordering::Relaxed)
    }

    /// Number of lookups answered by the default locale.
    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Number of lookups no table could answer.
    pub fn missing_keys(&self) -> usize {
        self.missing_keys.load(Ordering::Relaxed)
    }

    /// Number of applied locale changes.
    pub fn changes_accepted(&self) -> usize {
        self.changes_accepted.load(Ordering::Relaxed)
    }

    /// Number of rejected locale changes.
    pub fn changes_rejected(&self) -> usize {
        self.changes_rejected.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.lookups_hit();
        let fallbacks = self.fallbacks();
        let missing = self.missing_keys();
        let total_lookups = hits + fallbacks + missing;
        let hit_rate = if total_lookups > 0 {
            (hits as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups: total_lookups,
            lookups_hit: hits,
            fallbacks,
            missing_keys: missing,
            hit_rate,
            changes_accepted: self.changes_accepted(),
            changes_rejected: self.changes_rejected(),
        }
    }
}

/// Snapshot of the locale counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total translation lookups
    pub lookups: usize,

    /// Lookups answered by the requested locale
    pub lookups_hit: usize,

    /// Lookups answered by the default locale
    pub fallbacks: usize,

    /// Lookups that fell through to the raw key
    pub missing_keys: usize,

    /// Share of lookups answered by the requested locale, as a percentage (0-100)
    pub hit_rate: f64,

    /// Locale changes applied
    pub changes_accepted: usize,

    /// Locale changes rejected
    pub changes_rejected: usize,
}
