//! Raw busy event as delivered by the calendar provider.
//!
//! # Responsibility
//! - Carry the flattened provider shape (`summary`, `description`,
//!   `start`, `end`) with untrusted timestamp strings.
//! - Convert to a validated [`TimeBlock`] on demand.
//!
//! # Invariants
//! - No field is trusted; conversion is the only path into the engine and
//!   it rejects unparsable or inverted ranges.

use crate::model::time_block::{TimeBlock, TimeBlockError};
use serde::{Deserialize, Serialize};

/// One calendar event during which the owner is occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyEvent {
    pub summary: String,
    pub description: Option<String>,
    pub start: String,
    pub end: String,
}

impl BusyEvent {
    /// Parses the event boundaries into a validated busy block.
    ///
    /// # Errors
    /// Returns [`TimeBlockError`] when a boundary is unparsable or the
    /// range is empty/inverted. Callers on the ingest path drop such
    /// events instead of failing the whole computation.
    pub fn to_block(&self) -> Result<TimeBlock, TimeBlockError> {
        TimeBlock::parse(&self.start, &self.end)
    }
}
