//! Ordered, read-only view of active matches
//!
//! Entries are owned copies; later mutations of the registry never reach a
//! `Summary` that was already handed out.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Point-in-time copy of one match
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub home_team: String,
    pub home_score: u32,
    pub away_team: String,
    pub away_score: u32,
}

impl MatchSnapshot {
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }
}

impl fmt::Display for MatchSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}

/// Active matches sorted by total score, then most recent start
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Summary {
    matches: Vec<MatchSnapshot>,
}

impl Summary {
    /// Wrap entries that are already in summary order
    pub(crate) fn from_ordered(matches: Vec<MatchSnapshot>) -> Self {
        Self { matches }
    }

    pub fn matches(&self) -> &[MatchSnapshot] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchSnapshot> {
        self.matches.iter()
    }
}

impl IntoIterator for Summary {
    type Item = MatchSnapshot;
    type IntoIter = std::vec::IntoIter<MatchSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

impl<'a> IntoIterator for &'a Summary {
    type Item = &'a MatchSnapshot;
    type IntoIter = std::slice::Iter<'a, MatchSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// One line per match, each newline-terminated
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.matches {
            writeln!(f, "{}", m)?;
        }
        Ok(())
    }
}
