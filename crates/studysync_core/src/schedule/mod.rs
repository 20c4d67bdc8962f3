//! Availability and group-overlap scheduling engine.
//!
//! # Responsibility
//! - Collapse busy calendar intervals into disjoint blocks.
//! - Derive free-time blocks inside the daily active window.
//! - Find the longest window where a target number of distinct people are
//!   simultaneously free.
//!
//! # Invariants
//! - All functions are pure over their inputs; no store access happens in
//!   this module tree.
//! - Blocks are half-open `[start, end)`; touching blocks never count as
//!   overlapping.

pub mod availability;
pub mod merge;
pub mod overlap;

pub use availability::{derive_free_blocks, ACTIVE_WINDOW_END, ACTIVE_WINDOW_START};
pub use merge::merge_blocks;
pub use overlap::find_common_block;
