//! Meeting suggestion output record.
//!
//! # Responsibility
//! - Package one suggested collaboration window for one assignment.
//!
//! # Invariants
//! - Suggestions are ephemeral: recomputed per request, never persisted.
//! - Boundaries serialize as RFC 3339 with the offsets the winning window
//!   carried.

use crate::model::time_block::{rfc3339, Instant};
use serde::{Deserialize, Serialize};

/// Suggested time window for a cohort to work on one assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Title of the shared assignment.
    pub assignment: String,
    #[serde(with = "rfc3339")]
    pub due: Instant,
    #[serde(with = "rfc3339")]
    pub start: Instant,
    #[serde(with = "rfc3339")]
    pub end: Instant,
}
