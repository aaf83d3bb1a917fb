use crate::blocks::{AtomicBlock, MergedBlock};
use crate::classify::group_by_row;

/// Merge each row's blocks into maximal runs of consecutive `x`.
///
/// Every input block lands in exactly one range. Range height is always 1:
/// an active range describes walkable width at a row, not vertical clearance.
pub fn merge_active_ranges(blocks: &[AtomicBlock]) -> Vec<MergedBlock> {
    let groups = group_by_row(blocks);
    let mut out = Vec::new();
    for row in groups.values() {
        out.extend(active_ranges_in_row(row));
    }

    tracing::debug!(
        "Active ranges: {} blocks in {} rows -> {} ranges",
        blocks.len(),
        groups.len(),
        out.len()
    );
    out
}

/// Split one row group into maximal x-contiguous ranges.
///
/// The group is expected in ascending `x` order, which is how the scanner
/// emits it; no sorting is done here.
pub fn active_ranges_in_row(row: &[AtomicBlock]) -> Vec<MergedBlock> {
    row.chunk_by(|prev, next| i64::from(next.x) - i64::from(prev.x) == 1)
        .map(|run| {
            let start = &run[0];
            let last = &run[run.len() - 1];
            MergedBlock::new(
                start.x,
                start.y,
                (last.x - start.x + 1) as u32,
                1,
                run.iter().map(|b| b.id).collect(),
            )
        })
        .collect()
}
