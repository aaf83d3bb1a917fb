use crate::blocks::{AtomicBlock, MergedBlock};
use crate::classify::group_by_row;
use crate::error::{GapError, Result};

/// Smallest window the fixed-width merger accepts.
pub const MIN_FIXED_WIDTH: usize = 2;

/// Merge each row's blocks into non-overlapping windows of exactly `width`
/// x-contiguous blocks.
///
/// Windows are placed greedily from the left: a contiguous window is taken
/// and the cursor jumps past it; otherwise the cursor advances by one.
/// Alignments skipped by an earlier match are never revisited.
///
/// Returns `InvalidArgument` when `width < 2`.
pub fn merge_fixed_width(blocks: &[AtomicBlock], width: usize) -> Result<Vec<MergedBlock>> {
    validate_fixed_width(width)?;

    let groups = group_by_row(blocks);
    let mut out = Vec::new();
    for row in groups.values() {
        out.extend(fixed_windows_in_row(row, width));
    }

    tracing::debug!(
        "Fixed-width merge (width {}): {} blocks in {} rows -> {} windows",
        width,
        blocks.len(),
        groups.len(),
        out.len()
    );
    Ok(out)
}

/// Reject window widths below [`MIN_FIXED_WIDTH`].
pub fn validate_fixed_width(width: usize) -> Result<()> {
    if width < MIN_FIXED_WIDTH {
        return Err(GapError::invalid_argument(
            "width",
            format!("fixed-width merge needs at least {MIN_FIXED_WIDTH} blocks, got {width}"),
        ));
    }
    Ok(())
}

/// Greedy window placement over a single row group.
///
/// A group shorter than `width` yields nothing; a group of exactly `width`
/// yields at most one window.
pub fn fixed_windows_in_row(row: &[AtomicBlock], width: usize) -> Vec<MergedBlock> {
    let mut out = Vec::new();
    if width < MIN_FIXED_WIDTH || row.len() < width {
        return out;
    }

    let mut pos = 0;
    while pos + width <= row.len() {
        match contiguous_window(&row[pos..pos + width]) {
            Some(block) => {
                out.push(block);
                pos += width;
            }
            None => pos += 1,
        }
    }
    out
}

/// Merge `window` if its blocks sit at consecutive `x` starting from the
/// first one (`window[i].x - window[0].x == i`).
///
/// The merged height is the shortest constituent. Windows of fewer than two
/// blocks are never contiguous.
pub fn contiguous_window(window: &[AtomicBlock]) -> Option<MergedBlock> {
    let (first, rest) = window.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let mut min_height = first.height;
    for (i, block) in window.iter().enumerate().skip(1) {
        if i64::from(block.x) - i64::from(first.x) != i as i64 {
            return None;
        }
        min_height = min_height.min(block.height);
    }

    Some(MergedBlock::new(
        first.x,
        first.y,
        window.len() as u32,
        min_height,
        window.iter().map(|b| b.id).collect(),
    ))
}
