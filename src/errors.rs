//! Error types for the scoreboard
//!
//! Every failure is a rejected individual call: the registry is left
//! unchanged and stays usable afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ScoreboardError>;

/// Registry error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreboardError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Match already started: {home} vs {away}")]
    Conflict { home: String, away: String },

    #[error("Match not found: {home} vs {away}")]
    NotFound { home: String, away: String },
}

/// Coarse error category, for callers mapping failures to exit codes or statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    InvalidArgument,
    Conflict,
    NotFound,
}

impl ScoreboardError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn conflict(home: &str, away: &str) -> Self {
        Self::Conflict {
            home: home.to_string(),
            away: away.to_string(),
        }
    }

    pub(crate) fn not_found(home: &str, away: &str) -> Self {
        Self::NotFound {
            home: home.to_string(),
            away: away.to_string(),
        }
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::NotFound { .. } => ErrorKind::NotFound,
        }
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::Conflict => "CONFLICT",
            Self::NotFound => "NOT_FOUND",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
