//! Match identity
//!
//! A match is identified by the unordered pair of its team names, compared
//! case-insensitively. `("Spain", "Brazil")` and `("brazil", "SPAIN")` map to
//! the same key, so swapped home/away roles can never be registered twice.

use std::fmt;

use crate::errors::{Result, ScoreboardError};

/// Canonical, order-insensitive identity of a match
///
/// Both names are trimmed and lower-cased, then stored in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchKey {
    first: String,
    second: String,
}

impl MatchKey {
    /// Build the key for a pair of team names
    ///
    /// Fails with `InvalidArgument` if either name is blank or both names
    /// denote the same team.
    pub fn new(home: &str, away: &str) -> Result<Self> {
        let home = canonical_team(home)?;
        let away = canonical_team(away)?;

        if home == away {
            return Err(ScoreboardError::invalid(
                "Home and away teams must be different",
            ));
        }

        let (first, second) = if home <= away { (home, away) } else { (away, home) };
        Ok(Self { first, second })
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.first, self.second)
    }
}

/// Trimmed display form of a team name, rejecting blank input
pub(crate) fn display_team(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ScoreboardError::invalid("Team names cannot be null or empty"));
    }
    Ok(trimmed)
}

/// Whether two team names refer to the same team
pub(crate) fn same_team(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn canonical_team(name: &str) -> Result<String> {
    display_team(name).map(str::to_lowercase)
}
