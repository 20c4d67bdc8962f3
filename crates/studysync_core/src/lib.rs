//! Core domain logic for StudySync.
//! This crate is the single source of truth for availability derivation
//! and group-overlap scheduling.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod schedule;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::assignment::{assignment_identity, Assignment};
pub use model::busy_event::BusyEvent;
pub use model::person::Person;
pub use model::suggestion::Suggestion;
pub use model::time_block::{parse_instant, Instant, TimeBlock, TimeBlockError};
pub use repo::person_repo::{
    PersonRepository, RepoError, RepoResult, SqlitePersonRepository,
};
pub use schedule::{derive_free_blocks, find_common_block, merge_blocks};
pub use service::availability_service::AvailabilityService;
pub use service::suggestion_service::SuggestionService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
