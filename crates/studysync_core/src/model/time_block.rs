//! Time block record.
//!
//! # Responsibility
//! - Represent one half-open `[start, end)` time range.
//! - Own parsing and validation of RFC 3339 boundaries.
//!
//! # Invariants
//! - `start < end` for every constructed block.
//! - Offsets are preserved exactly as provided by the source instant.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Timezone-offset-carrying instant used throughout the core.
pub type Instant = DateTime<FixedOffset>;

/// Validation and parse errors for time block boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeBlockError {
    /// `end` is not strictly after `start`.
    EmptyOrInverted { start: String, end: String },
    /// A boundary string is not valid RFC 3339.
    Unparsable(String),
}

impl Display for TimeBlockError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyOrInverted { start, end } => {
                write!(f, "time block end `{end}` is not after start `{start}`")
            }
            Self::Unparsable(value) => write!(f, "unparsable timestamp `{value}`"),
        }
    }
}

impl Error for TimeBlockError {}

/// One half-open free or busy time range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    #[serde(with = "rfc3339")]
    pub start: Instant,
    #[serde(with = "rfc3339")]
    pub end: Instant,
}

impl TimeBlock {
    /// Creates a block after checking `start < end`.
    pub fn new(start: Instant, end: Instant) -> Result<Self, TimeBlockError> {
        if start >= end {
            return Err(TimeBlockError::EmptyOrInverted {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parses both boundaries from RFC 3339 strings and validates ordering.
    pub fn parse(start: &str, end: &str) -> Result<Self, TimeBlockError> {
        Self::new(parse_instant(start)?, parse_instant(end)?)
    }

    /// Block length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether two blocks share any instant. Touching blocks do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Parses one RFC 3339 instant, keeping its offset.
pub fn parse_instant(value: &str) -> Result<Instant, TimeBlockError> {
    DateTime::parse_from_rfc3339(value).map_err(|_| TimeBlockError::Unparsable(value.to_string()))
}

/// Serde adapter writing instants through `to_rfc3339`.
///
/// chrono's derived serialization shortens a zero offset to `Z`;
/// `to_rfc3339` always spells it out, so the literal offset survives the
/// wire.
pub(crate) mod rfc3339 {
    use super::{parse_instant, Instant};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Instant, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Instant, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_instant(&text).map_err(de::Error::custom)
    }
}
