//! Busy-interval merging.
//!
//! # Responsibility
//! - Collapse an unordered, possibly overlapping interval list into a
//!   sorted, pairwise-disjoint one.
//!
//! # Invariants
//! - Output is sorted by `start` with strictly increasing `end` values.
//! - Touching intervals (`next.start == last.end`) merge into one block.
//! - The union of covered time is preserved exactly.

use crate::model::time_block::TimeBlock;

/// Merges busy blocks into a sorted, disjoint list.
///
/// Sorts by `start`, then scans once: a block whose start lies at or
/// before the end of the last accepted block extends it; anything else is
/// appended. Empty input yields empty output. O(n log n).
pub fn merge_blocks(mut blocks: Vec<TimeBlock>) -> Vec<TimeBlock> {
    blocks.sort_by_key(|block| block.start);

    let mut merged: Vec<TimeBlock> = Vec::with_capacity(blocks.len());
    for block in blocks {
        match merged.last_mut() {
            Some(last) if block.start <= last.end => {
                if block.end > last.end {
                    last.end = block.end;
                }
            }
            _ => merged.push(block),
        }
    }
    merged
}
