//! Record-store abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the person/cohort store contract the core calls.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Membership writes are idempotent add-if-absent operations.
//! - Read paths drop malformed stored records instead of failing the
//!   request; transport failures surface unchanged.

pub mod person_repo;
