use studysync_core::{merge_blocks, TimeBlock};

fn block(start: &str, end: &str) -> TimeBlock {
    TimeBlock::parse(start, end).unwrap()
}

fn covered_minutes(blocks: &[TimeBlock]) -> i64 {
    blocks.iter().map(TimeBlock::duration_minutes).sum()
}

#[test]
fn merging_is_idempotent() {
    let once = merge_blocks(vec![
        block("2026-04-07T09:00:00+00:00", "2026-04-07T10:30:00+00:00"),
        block("2026-04-07T10:00:00+00:00", "2026-04-07T11:00:00+00:00"),
        block("2026-04-07T13:00:00+00:00", "2026-04-07T14:00:00+00:00"),
    ]);

    let twice = merge_blocks(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn merging_is_order_independent() {
    let forward = vec![
        block("2026-04-07T09:00:00+00:00", "2026-04-07T10:30:00+00:00"),
        block("2026-04-07T10:00:00+00:00", "2026-04-07T11:00:00+00:00"),
        block("2026-04-07T13:00:00+00:00", "2026-04-07T14:00:00+00:00"),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    assert_eq!(merge_blocks(forward), merge_blocks(reversed));
}

#[test]
fn output_is_sorted_disjoint_and_preserves_covered_time() {
    let input = vec![
        block("2026-04-07T15:00:00+00:00", "2026-04-07T16:00:00+00:00"),
        block("2026-04-07T09:00:00+00:00", "2026-04-07T11:00:00+00:00"),
        block("2026-04-07T10:00:00+00:00", "2026-04-07T12:00:00+00:00"),
        block("2026-04-07T12:00:00+00:00", "2026-04-07T12:30:00+00:00"),
    ];
    let merged = merge_blocks(input);

    for pair in merged.windows(2) {
        assert!(pair[0].end < pair[1].start, "blocks must be disjoint and sorted");
    }
    // 09:00-12:30 plus 15:00-16:00, with the inner overlaps deduplicated.
    assert_eq!(covered_minutes(&merged), 210 + 60);
    assert_eq!(merged.len(), 2);
}

#[test]
fn touching_intervals_merge_into_one() {
    let merged = merge_blocks(vec![
        block("2026-04-07T09:00:00+00:00", "2026-04-07T10:00:00+00:00"),
        block("2026-04-07T10:00:00+00:00", "2026-04-07T11:00:00+00:00"),
    ]);

    assert_eq!(
        merged,
        vec![block("2026-04-07T09:00:00+00:00", "2026-04-07T11:00:00+00:00")]
    );
}
