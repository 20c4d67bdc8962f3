//! Free-time derivation inside the daily active window.
//!
//! # Responsibility
//! - Compute the free-time complement of merged busy blocks over a bounded
//!   horizon, one day at a time.
//!
//! # Invariants
//! - Input busy blocks must already be merged (sorted, disjoint); output
//!   is then disjoint and sorted without further work.
//! - Free time is only offered inside `[08:00, 23:59)` of each day; busy
//!   blocks entirely outside that window are ignored for the day.
//! - The cursor never moves backward.

use crate::model::time_block::{Instant, TimeBlock};
use chrono::{Duration, NaiveDate};

/// Daily active window opens at 08:00 local to the carried offset.
pub const ACTIVE_WINDOW_START: (u32, u32) = (8, 0);
/// Daily active window closes at 23:59 (exclusive).
pub const ACTIVE_WINDOW_END: (u32, u32) = (23, 59);

/// Derives free blocks from merged busy blocks over `[time_min, time_max)`.
///
/// Walks every calendar day touching the horizon. Per day, a cursor starts
/// at the active-window open (clipped to the horizon); each busy block
/// overlapping the window emits the free gap before it and advances the
/// cursor to `max(cursor, busy.end)`. A final block closes the day when
/// the cursor stops short of the window end. A day with no busy overlap
/// yields exactly one block spanning the whole active window.
///
/// Days reuse the offset carried by `time_min`; no timezone conversion is
/// performed.
pub fn derive_free_blocks(
    busy: &[TimeBlock],
    time_min: Instant,
    time_max: Instant,
) -> Vec<TimeBlock> {
    let mut free = Vec::new();
    if time_min >= time_max {
        return free;
    }

    let offset = *time_min.offset();
    let mut day = time_min.date_naive();
    let last_day = time_max.date_naive();

    while day <= last_day {
        let (Some(open), Some(close)) = (
            instant_at(day, ACTIVE_WINDOW_START, &offset),
            instant_at(day, ACTIVE_WINDOW_END, &offset),
        ) else {
            day += Duration::days(1);
            continue;
        };

        // Clip the day's window to the horizon.
        let window_start = open.max(time_min);
        let window_end = close.min(time_max);
        if window_start >= window_end {
            day += Duration::days(1);
            continue;
        }

        let mut cursor = window_start;
        for block in busy {
            if block.end <= window_start || block.start >= window_end {
                continue;
            }
            if block.start > cursor {
                free.push(TimeBlock {
                    start: cursor,
                    end: block.start,
                });
            }
            cursor = cursor.max(block.end).min(window_end);
        }

        if cursor < window_end {
            free.push(TimeBlock {
                start: cursor,
                end: window_end,
            });
        }

        day += Duration::days(1);
    }

    free
}

fn instant_at(day: NaiveDate, (hour, minute): (u32, u32), offset: &chrono::FixedOffset) -> Option<Instant> {
    day.and_hms_opt(hour, minute, 0)?
        .and_local_timezone(*offset)
        .single()
}
