//! Match registry
//!
//! Owns every active match in a sharded concurrent map. Each key's shard is
//! write-locked for the whole check-then-mutate step of `start` and `update`,
//! so two racing calls on the same pair can never both succeed a uniqueness
//! check or interleave a score write. Calls on keys in different shards
//! never contend.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::{Result, ScoreboardError};
use crate::key::{display_team, same_team, MatchKey};
use crate::live_match::Match;
use crate::metrics::RegistryMetrics;
use crate::summary::{MatchSnapshot, Summary};

/// Operations a scoreboard offers to its callers
pub trait Scoreboard: Send + Sync {
    /// Start a new match at 0 - 0.
    fn start(&self, home: &str, away: &str) -> Result<()>;

    /// Replace the scores of an active match.
    fn update(&self, home: &str, home_score: i64, away: &str, away_score: i64) -> Result<()>;

    /// Remove an active match.
    fn finish(&self, home: &str, away: &str) -> Result<()>;

    /// Ordered copy of all active matches.
    fn summary(&self) -> Summary;
}

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Number of map shards; rounded up to a power of two, minimum 2
    pub shard_amount: usize,
    /// Expected number of concurrently active matches
    pub initial_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            shard_amount: 16,
            initial_capacity: 64,
        }
    }
}

impl RegistryConfig {
    fn effective_shard_amount(&self) -> usize {
        self.shard_amount.max(2).next_power_of_two()
    }
}

/// In-memory, thread-safe registry of live matches
#[derive(Debug)]
pub struct MatchRegistry {
    matches: DashMap<MatchKey, Match>,
    next_sequence: AtomicU64,
    metrics: RegistryMetrics,
}

impl MatchRegistry {
    /// Create an empty registry with default configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with custom configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        let shard_amount = config.effective_shard_amount();
        info!(
            shard_amount,
            initial_capacity = config.initial_capacity,
            "MatchRegistry initialized"
        );

        Self {
            matches: DashMap::with_capacity_and_shard_amount(
                config.initial_capacity,
                shard_amount,
            ),
            next_sequence: AtomicU64::new(1),
            metrics: RegistryMetrics::new(),
        }
    }

    /// Start a match between `home` and `away` at 0 - 0.
    ///
    /// Rejected with `Conflict` if the pair is already active in either
    /// orientation.
    pub fn start(&self, home: &str, away: &str) -> Result<()> {
        self.try_start(home, away)
            .map_err(|err| self.rejected("start", err))
    }

    /// Replace the scores of the active match between `home` and `away`.
    ///
    /// Each score is applied to the team it was given with, even if the
    /// caller names the teams in the opposite order to `start`. Concurrent
    /// updates of one match are last-write-wins; the stored scores are always
    /// exactly one caller's pair.
    pub fn update(&self, home: &str, home_score: i64, away: &str, away_score: i64) -> Result<()> {
        self.try_update(home, home_score, away, away_score)
            .map_err(|err| self.rejected("update", err))
    }

    /// End the active match between `home` and `away`.
    pub fn finish(&self, home: &str, away: &str) -> Result<()> {
        self.try_finish(home, away)
            .map_err(|err| self.rejected("finish", err))
    }

    /// Ordered snapshot of all active matches.
    ///
    /// Sorted by total score descending, then start time descending. Never
    /// fails; an empty registry yields an empty summary.
    pub fn summary(&self) -> Summary {
        // Each entry is cloned under its shard's read lock
        let mut live: Vec<Match> = self
            .matches
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        live.sort_by(Match::summary_order);

        self.metrics.record_summary();
        Summary::from_ordered(live.iter().map(Match::snapshot).collect())
    }

    /// Snapshot of one active match
    pub fn get(&self, home: &str, away: &str) -> Result<MatchSnapshot> {
        let key = MatchKey::new(home, away)?;
        self.matches
            .get(&key)
            .map(|entry| entry.value().snapshot())
            .ok_or_else(|| ScoreboardError::not_found(home.trim(), away.trim()))
    }

    /// Number of active matches
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether no match is active
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Operation counters of this registry
    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }

    fn try_start(&self, home: &str, away: &str) -> Result<()> {
        let key = MatchKey::new(home, away)?;
        let (home, away) = (display_team(home)?, display_team(away)?);

        match self.matches.entry(key) {
            Entry::Occupied(existing) => {
                let current = existing.get();
                Err(ScoreboardError::conflict(current.home_team(), current.away_team()))
            }
            Entry::Vacant(slot) => {
                let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);
                slot.insert(Match::new(home, away, Instant::now(), sequence));

                self.metrics.record_started();
                debug!(home, away, sequence, "Match started");
                Ok(())
            }
        }
    }

    fn try_update(&self, home: &str, home_score: i64, away: &str, away_score: i64) -> Result<()> {
        let key = MatchKey::new(home, away)?;
        let home_score = validate_score(home_score)?;
        let away_score = validate_score(away_score)?;

        // shard stays write-locked only while the value is swapped
        let (stored_home, stored_away, updated) = {
            let mut entry = self
                .matches
                .get_mut(&key)
                .ok_or_else(|| ScoreboardError::not_found(home.trim(), away.trim()))?;

            let (stored_home, stored_away) = if same_team(entry.home_team(), home) {
                (home_score, away_score)
            } else {
                (away_score, home_score)
            };
            let updated = entry.with_scores(stored_home, stored_away);
            *entry = updated.clone();
            (stored_home, stored_away, updated)
        };

        self.metrics.record_updated();
        debug!(
            home = updated.home_team(),
            away = updated.away_team(),
            home_score = stored_home,
            away_score = stored_away,
            "Score updated"
        );
        Ok(())
    }

    fn try_finish(&self, home: &str, away: &str) -> Result<()> {
        let key = MatchKey::new(home, away)?;

        let (_, finished) = self
            .matches
            .remove(&key)
            .ok_or_else(|| ScoreboardError::not_found(home.trim(), away.trim()))?;

        self.metrics.record_finished();
        debug!(
            home = finished.home_team(),
            away = finished.away_team(),
            home_score = finished.home_score(),
            away_score = finished.away_score(),
            "Match finished"
        );
        Ok(())
    }

    fn rejected(&self, operation: &'static str, err: ScoreboardError) -> ScoreboardError {
        let kind = err.kind();
        self.metrics.record_rejected(kind);
        warn!(operation, kind = kind.as_str(), reason = %err, "Registry call rejected");
        err
    }
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard for MatchRegistry {
    fn start(&self, home: &str, away: &str) -> Result<()> {
        MatchRegistry::start(self, home, away)
    }

    fn update(&self, home: &str, home_score: i64, away: &str, away_score: i64) -> Result<()> {
        MatchRegistry::update(self, home, home_score, away, away_score)
    }

    fn finish(&self, home: &str, away: &str) -> Result<()> {
        MatchRegistry::finish(self, home, away)
    }

    fn summary(&self) -> Summary {
        MatchRegistry::summary(self)
    }
}

fn validate_score(score: i64) -> Result<u32> {
    if score < 0 {
        return Err(ScoreboardError::invalid("Scores cannot be negative"));
    }
    u32::try_from(score)
        .map_err(|_| ScoreboardError::invalid(format!("Score {} exceeds maximum {}", score, u32::MAX)))
}
