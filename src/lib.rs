//! Live scoreboard
//!
//! Concurrent in-memory registry of in-progress matches. Callers start a
//! match, update its score, finish it, and read an ordered summary of every
//! active match.
//!
//! **Key Invariants:**
//! - At most one active match per unordered, case-insensitive team pair
//! - Scores are never negative
//! - Start time is fixed at creation; updates replace the whole match value
//! - Summary order: total score descending, then most recently started
//!
//! The registry is `Send + Sync`; share it across threads with `Arc`.
//!
//! ```
//! use scoreboard::MatchRegistry;
//!
//! let registry = MatchRegistry::new();
//! registry.start("Mexico", "Canada").unwrap();
//! registry.update("Mexico", 0, "Canada", 5).unwrap();
//! assert_eq!(registry.summary().to_string(), "Mexico 0 - Canada 5\n");
//! ```

pub mod errors;
pub mod key;
pub mod live_match;
pub mod metrics;
pub mod registry;
pub mod summary;

pub use errors::{ErrorKind, Result, ScoreboardError};
pub use registry::{MatchRegistry, RegistryConfig, Scoreboard};
pub use summary::{MatchSnapshot, Summary};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::key::*;
    pub use crate::live_match::*;
    pub use crate::metrics::*;
    pub use crate::registry::*;
    pub use crate::summary::*;
}
