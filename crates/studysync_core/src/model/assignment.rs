//! Assignment record and cohort identity.
//!
//! # Responsibility
//! - Represent one assignment held by a person.
//! - Derive the identity string that groups people into a cohort.
//!
//! # Invariants
//! - Two assignments with cosmetically different titles (casing,
//!   whitespace, punctuation) but the same due instant map to the same
//!   identity.
//! - The due instant keeps its provided offset; identity uses its RFC 3339
//!   form verbatim.

use crate::model::time_block::{rfc3339, Instant};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static NON_ALNUM_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

/// One assignment a person is working toward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub title: String,
    #[serde(with = "rfc3339")]
    pub due: Instant,
    pub description: Option<String>,
}

impl Assignment {
    pub fn new(title: impl Into<String>, due: Instant) -> Self {
        Self {
            title: title.into(),
            due,
            description: None,
        }
    }

    /// Grouping identity: `slug(title) + "_" + due` in RFC 3339 form.
    ///
    /// This is the key of the store's assignment→members index; everyone
    /// whose assignment resolves to the same identity forms one cohort.
    pub fn identity(&self) -> String {
        assignment_identity(&self.title, &self.due)
    }
}

/// Builds the cohort identity for a title and due instant.
///
/// Only the title is slugified; the due instant is embedded in its RFC
/// 3339 form verbatim, `:` and `+` included. The offset spelling is part
/// of the key, so equal instants written with different offsets resolve
/// to different cohorts.
pub fn assignment_identity(title: &str, due: &Instant) -> String {
    format!("{}_{}", slugify(title), due.to_rfc3339())
}

/// Lowercases and collapses every non-alphanumeric run to a single `-`.
fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let slug = NON_ALNUM_RUN_RE.replace_all(&lowered, "-");
    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::{assignment_identity, slugify, Assignment};
    use crate::model::time_block::parse_instant;

    #[test]
    fn slugify_collapses_non_alphanumeric_runs() {
        assert_eq!(slugify("CS225 Assignment 2"), "cs225-assignment-2");
        assert_eq!(slugify("  MATH-241:  Quiz!! "), "math-241-quiz");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn cosmetic_title_differences_share_one_identity() {
        let due = parse_instant("2026-04-07T23:59:00+00:00").unwrap();
        let a = Assignment::new("CS225 Assignment 2", due);
        let b = Assignment::new("cs225  assignment 2", due);
        assert_eq!(a.identity(), b.identity());
        assert_eq!(
            a.identity(),
            "cs225-assignment-2_2026-04-07T23:59:00+00:00"
        );
    }

    #[test]
    fn offset_spelling_is_part_of_the_identity() {
        let utc = parse_instant("2026-04-08T23:59:00+00:00").unwrap();
        let shifted = parse_instant("2026-04-09T04:59:00+05:00").unwrap();
        assert_eq!(utc, shifted);
        assert_ne!(
            assignment_identity("CS225 Assignment 2", &utc),
            assignment_identity("CS225 Assignment 2", &shifted)
        );
    }

    #[test]
    fn different_due_instants_split_the_cohort() {
        let due_a = parse_instant("2026-04-07T23:59:00+00:00").unwrap();
        let due_b = parse_instant("2026-04-08T23:59:00+00:00").unwrap();
        assert_ne!(
            assignment_identity("CS225 Assignment 2", &due_a),
            assignment_identity("CS225 Assignment 2", &due_b)
        );
    }
}
