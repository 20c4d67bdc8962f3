//! Person record.
//!
//! # Responsibility
//! - Represent one person as stored: identity, assignments and derived
//!   free-time blocks.
//!
//! # Invariants
//! - `email` is the stable key used everywhere a person is referenced.
//! - `assignments` and `free_time` keep store order (due/start ascending
//!   when loaded through the repository).

use crate::model::assignment::Assignment;
use crate::model::time_block::TimeBlock;
use serde::{Deserialize, Serialize};

/// One person sharing availability with their cohorts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub email: String,
    pub assignments: Vec<Assignment>,
    pub free_time: Vec<TimeBlock>,
}

impl Person {
    /// Creates a person with no assignments or free time yet.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            assignments: Vec::new(),
            free_time: Vec::new(),
        }
    }
}
