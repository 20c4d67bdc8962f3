//! Meeting-suggestion service.
//!
//! # Responsibility
//! - Drive cohort resolution, free-time aggregation and the overlap sweep
//!   for every assignment a requesting person holds.
//!
//! # Invariants
//! - A missing cohort or absent overlap window yields no suggestion for
//!   that assignment; it is never an error.
//! - Store transport failures abort the whole request; per-record problems
//!   never do.

use crate::model::suggestion::Suggestion;
use crate::model::time_block::{Instant, TimeBlock};
use crate::repo::person_repo::{PersonRepository, RepoError, RepoResult};
use crate::schedule::find_common_block;
use log::{info, warn};
use std::collections::HashSet;

/// Read-path service assembling collaboration suggestions.
pub struct SuggestionService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> SuggestionService<R> {
    /// Creates a service using the provided store implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Computes suggestions for every assignment the person holds.
    ///
    /// # Contract
    /// - The requesting person must exist; otherwise `RepoError::NotFound`.
    /// - Per assignment: resolve the cohort excluding the requester, skip
    ///   when empty, aggregate free time with cutoff = due, then search
    ///   for a window covering the full group (degrading group size
    ///   internally).
    /// - Assignments without a window contribute nothing; other
    ///   assignments still produce their suggestions.
    pub fn suggestions_for(&self, email: &str) -> RepoResult<Vec<Suggestion>> {
        let person = self
            .repo
            .get_person(email)?
            .ok_or_else(|| RepoError::NotFound(email.to_string()))?;

        let mut suggestions = Vec::new();
        for assignment in &person.assignments {
            let identity = assignment.identity();
            let cohort = self.resolve_cohort(&identity, &person.email)?;
            if cohort.is_empty() {
                info!(
                    "event=no_cohort module=suggestion email={email} assignment={identity}"
                );
                continue;
            }

            let mut group: Vec<String> = Vec::with_capacity(cohort.len() + 1);
            group.push(person.email.clone());
            group.extend(cohort);

            let blocks = self.collect_free_time(&group, assignment.due)?;
            let Some(window) = find_common_block(&blocks, group.len()) else {
                info!(
                    "event=no_window module=suggestion email={email} assignment={identity} group_size={}",
                    group.len()
                );
                continue;
            };

            suggestions.push(Suggestion {
                assignment: assignment.title.clone(),
                due: assignment.due,
                start: window.start,
                end: window.end,
            });
        }

        info!(
            "event=suggestions_computed module=suggestion status=ok email={email} count={}",
            suggestions.len()
        );
        Ok(suggestions)
    }

    /// Resolves the cohort for an assignment identity, excluding `self_email`.
    ///
    /// Unknown identities yield an empty set: a person with a novel
    /// assignment simply has no cohort yet.
    fn resolve_cohort(&self, identity: &str, self_email: &str) -> RepoResult<HashSet<String>> {
        let mut members = self.repo.get_cohort_members(identity)?;
        members.remove(self_email);
        Ok(members)
    }

    /// Collects every member's stored free blocks ending at or before the
    /// cutoff, tagged with the owning person.
    ///
    /// Members whose record has disappeared are skipped; counting distinct
    /// contributors is the scheduler's job, so the owner tag is preserved
    /// on every block.
    fn collect_free_time(
        &self,
        emails: &[String],
        cutoff: Instant,
    ) -> RepoResult<Vec<(String, TimeBlock)>> {
        let mut tagged = Vec::new();
        for email in emails {
            let Some(person) = self.repo.get_person(email)? else {
                warn!("event=member_missing module=suggestion email={email}");
                continue;
            };

            for block in person.free_time {
                if block.end <= cutoff {
                    tagged.push((email.clone(), block));
                }
            }
        }
        Ok(tagged)
    }
}
