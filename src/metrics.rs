//! Registry counters
//!
//! Lock-free counters for Prometheus-style exposition. Updated on every
//! registry call; reading them never blocks a mutation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::errors::ErrorKind;

/// Operation counters for a `MatchRegistry`
#[derive(Debug, Default)]
pub struct RegistryMetrics {
    pub matches_started: AtomicU64,
    pub scores_updated: AtomicU64,
    pub matches_finished: AtomicU64,
    pub summaries_built: AtomicU64,

    // Rejections by kind
    pub rejected_invalid_argument: AtomicU64,
    pub rejected_conflict: AtomicU64,
    pub rejected_not_found: AtomicU64,
}

impl RegistryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_started(&self) {
        self.matches_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_updated(&self) {
        self.scores_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_finished(&self) {
        self.matches_finished.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_summary(&self) {
        self.summaries_built.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected call.
    pub fn record_rejected(&self, kind: ErrorKind) {
        let counter = match kind {
            ErrorKind::InvalidArgument => &self.rejected_invalid_argument,
            ErrorKind::Conflict => &self.rejected_conflict,
            ErrorKind::NotFound => &self.rejected_not_found,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Total rejected calls across all kinds.
    pub fn rejected_total(&self) -> u64 {
        self.rejected_invalid_argument.load(Ordering::Relaxed)
            + self.rejected_conflict.load(Ordering::Relaxed)
            + self.rejected_not_found.load(Ordering::Relaxed)
    }

    /// Export metrics as a BTreeMap for Prometheus-style exposition.
    pub fn export(&self) -> BTreeMap<String, u64> {
        let mut m = BTreeMap::new();
        m.insert("matches_started".to_string(), self.matches_started.load(Ordering::Relaxed));
        m.insert("scores_updated".to_string(), self.scores_updated.load(Ordering::Relaxed));
        m.insert("matches_finished".to_string(), self.matches_finished.load(Ordering::Relaxed));
        m.insert("summaries_built".to_string(), self.summaries_built.load(Ordering::Relaxed));
        m.insert(
            "rejected_invalid_argument".to_string(),
            self.rejected_invalid_argument.load(Ordering::Relaxed),
        );
        m.insert("rejected_conflict".to_string(), self.rejected_conflict.load(Ordering::Relaxed));
        m.insert("rejected_not_found".to_string(), self.rejected_not_found.load(Ordering::Relaxed));
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = RegistryMetrics::new();
        assert!(metrics.export().values().all(|v| *v == 0));
        assert_eq!(metrics.rejected_total(), 0);
    }

    #[test]
    fn test_record_and_export() {
        let metrics = RegistryMetrics::new();
        metrics.record_started();
        metrics.record_started();
        metrics.record_updated();
        metrics.record_finished();
        metrics.record_rejected(ErrorKind::Conflict);
        metrics.record_rejected(ErrorKind::NotFound);
        metrics.record_rejected(ErrorKind::NotFound);

        let exported = metrics.export();
        assert_eq!(exported["matches_started"], 2);
        assert_eq!(exported["scores_updated"], 1);
        assert_eq!(exported["matches_finished"], 1);
        assert_eq!(exported["rejected_conflict"], 1);
        assert_eq!(exported["rejected_not_found"], 2);
        assert_eq!(exported["rejected_invalid_argument"], 0);
        assert_eq!(metrics.rejected_total(), 3);
    }
}
