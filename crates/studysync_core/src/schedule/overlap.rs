//! Group-overlap sweep: the collaboration-window search.
//!
//! # Responsibility
//! - Find the longest window during which at least a target number of
//!   distinct people are simultaneously free.
//! - Degrade the target group size by one when no window exists, down to a
//!   floor of two people.
//!
//! # Invariants
//! - At an equal instant, every end event is processed before any start
//!   event, so touching blocks never count as overlapping.
//! - Contributors are counted per distinct person: two open blocks from
//!   one person count once.
//! - Ties on duration keep the earliest window found.

use crate::model::time_block::{Instant, TimeBlock};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    // Ends sort before starts at the same instant.
    End,
    Start,
}

/// Finds the longest window where `group_size` distinct owners are free.
///
/// `blocks` pairs each free block with its owning person identifier. When
/// no window with the full group exists, the search retries with a group
/// one smaller, stopping at two: a collaboration window needs at least two
/// distinct people, so `group_size < 2` (and any degraded search reaching
/// it) returns `None`.
pub fn find_common_block(blocks: &[(String, TimeBlock)], group_size: usize) -> Option<TimeBlock> {
    let mut target = group_size;
    while target >= 2 {
        if let Some(found) = sweep(blocks, target) {
            return Some(found);
        }
        target -= 1;
    }
    None
}

/// One left-to-right sweep for an exact distinct-owner target.
fn sweep(blocks: &[(String, TimeBlock)], target: usize) -> Option<TimeBlock> {
    let mut events: Vec<(Instant, EventKind, &str)> = Vec::with_capacity(blocks.len() * 2);
    for (owner, block) in blocks {
        events.push((block.start, EventKind::Start, owner.as_str()));
        events.push((block.end, EventKind::End, owner.as_str()));
    }
    events.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

    // Open-block reference count per person; its key count is the number
    // of distinct contributors currently free.
    let mut open: HashMap<&str, usize> = HashMap::new();
    let mut active_start: Option<Instant> = None;
    let mut best: Option<TimeBlock> = None;

    for (at, kind, owner) in events {
        match kind {
            EventKind::Start => {
                *open.entry(owner).or_insert(0) += 1;
                if open.len() == target && active_start.is_none() {
                    active_start = Some(at);
                }
            }
            EventKind::End => {
                let leaving = open.get(owner).copied() == Some(1);
                if leaving && open.len() == target {
                    if let Some(start) = active_start.take() {
                        if at > start && is_longer(start, at, best.as_ref()) {
                            best = Some(TimeBlock { start, end: at });
                        }
                    }
                }
                match open.get_mut(owner) {
                    Some(count) if *count > 1 => *count -= 1,
                    _ => {
                        open.remove(owner);
                    }
                }
            }
        }
    }

    best
}

/// Strictly-longer comparison: equal durations keep the earlier window.
fn is_longer(start: Instant, end: Instant, best: Option<&TimeBlock>) -> bool {
    match best {
        Some(current) => end - start > current.end - current.start,
        None => true,
    }
}
