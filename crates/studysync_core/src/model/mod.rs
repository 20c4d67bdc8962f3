//! Domain model for people, assignments and time blocks.
//!
//! # Responsibility
//! - Define the canonical records shared by the store and the scheduling
//!   engine.
//! - Keep timestamp validation in one place.
//!
//! # Invariants
//! - Every person is identified by a stable `email` key.
//! - Instants carry their timezone offset through unchanged; the core never
//!   normalizes to UTC.

pub mod assignment;
pub mod busy_event;
pub mod person;
pub mod suggestion;
pub mod time_block;
