//! In-progress match state
//!
//! A `Match` is an immutable value. Score changes produce a new value that
//! replaces the stored one, so a reader never sees a half-applied update.

use std::cmp::Ordering;
use std::time::Instant;

use crate::summary::MatchSnapshot;

/// One active contest between two named teams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    home_team: String,
    away_team: String,
    home_score: u32,
    away_score: u32,
    /// Recorded at creation, used only for ordering
    started_at: Instant,
    /// Registry-wide start counter, last-resort tie-break
    sequence: u64,
}

impl Match {
    /// New match at 0 - 0
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        started_at: Instant,
        sequence: u64,
    ) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_score: 0,
            away_score: 0,
            started_at,
            sequence,
        }
    }

    /// Copy of this match carrying new scores; identity and start stamp are kept
    pub fn with_scores(&self, home_score: u32, away_score: u32) -> Self {
        Self {
            home_score,
            away_score,
            ..self.clone()
        }
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Combined score of both teams
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    /// Summary ordering: higher total first, then most recently started
    pub fn summary_order(&self, other: &Self) -> Ordering {
        other
            .total_score()
            .cmp(&self.total_score())
            .then_with(|| other.started_at.cmp(&self.started_at))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }

    /// Owned copy for callers
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            home_team: self.home_team.clone(),
            home_score: self.home_score,
            away_team: self.away_team.clone(),
            away_score: self.away_score,
        }
    }
}
