//! Calendar ingest service.
//!
//! # Responsibility
//! - Turn raw busy events into stored free-time blocks: parse, merge,
//!   derive availability over a horizon, persist.
//! - Write back observed people and deadline-bearing events through the
//!   store's merge-or-create operations.
//!
//! # Invariants
//! - A malformed busy event is dropped with a warning; it never fails the
//!   whole ingest.
//! - Persisted free blocks are derived from merged busy input, so the
//!   stored list per sync is disjoint and sorted.

use crate::model::busy_event::BusyEvent;
use crate::model::person::Person;
use crate::model::time_block::{parse_instant, Instant};
use crate::repo::person_repo::{PersonRepository, RepoResult};
use crate::schedule::{derive_free_blocks, merge_blocks};
use log::{info, warn};

/// Ingest-path service: availability derivation and write-back.
pub struct AvailabilityService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> AvailabilityService<R> {
    /// Creates a service using the provided store implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates or merges the person record in the store.
    pub fn register_person(&self, person: &Person) -> RepoResult<()> {
        self.repo.upsert_person(person)
    }

    /// Derives and stores free time for one person's busy events.
    ///
    /// # Contract
    /// - Unparsable or inverted events are skipped, not fatal.
    /// - Free blocks are clipped to `[time_min, time_max)` and to the
    ///   daily active window.
    /// - Returns the number of free blocks stored.
    pub fn sync_free_time(
        &self,
        email: &str,
        events: &[BusyEvent],
        time_min: Instant,
        time_max: Instant,
    ) -> RepoResult<usize> {
        let mut busy = Vec::with_capacity(events.len());
        for event in events {
            match event.to_block() {
                Ok(block) => busy.push(block),
                Err(err) => {
                    warn!(
                        "event=busy_event_skipped module=availability email={email} summary={} error={err}",
                        event.summary
                    );
                }
            }
        }

        let merged = merge_blocks(busy);
        let free = derive_free_blocks(&merged, time_min, time_max);
        for block in &free {
            self.repo.add_free_time_block(email, block)?;
        }

        info!(
            "event=free_time_synced module=availability status=ok email={email} events={} free_blocks={}",
            events.len(),
            free.len()
        );
        Ok(free.len())
    }

    /// Registers deadline-bearing calendar events as assignments.
    ///
    /// The provider delivers assignments in busy-event shape: `summary`
    /// doubles as the title and `end` as the due instant. Events whose due
    /// timestamp cannot be parsed are skipped. Returns the number of
    /// assignments registered.
    pub fn register_deadline_events(&self, email: &str, events: &[BusyEvent]) -> RepoResult<usize> {
        let mut registered = 0;
        for event in events {
            let due = match parse_instant(&event.end) {
                Ok(due) => due,
                Err(err) => {
                    warn!(
                        "event=deadline_skipped module=availability email={email} summary={} error={err}",
                        event.summary
                    );
                    continue;
                }
            };

            self.repo
                .add_assignment(email, &event.summary, &due, event.description.as_deref())?;
            registered += 1;
        }

        info!(
            "event=deadlines_registered module=availability status=ok email={email} registered={registered}"
        );
        Ok(registered)
    }
}
