//! Column scanner: turns a grid into atomic blocks.
//!
//! Each column is walked bottom-up. Nothing is emitted until the column is
//! "grounded" (an obstacle has been seen at or below the scan position);
//! after that, every maximal run of empty cells becomes one block.

use crate::blocks::{AtomicBlock, AtomicId};
use crate::grid::Grid;

/// Scan every column of `grid` and return all atomic blocks with ids
/// `0..n` assigned in discovery order (column-ascending, then bottom-up).
///
/// A degenerate grid (`width <= 0` or `height <= 0`) yields no blocks.
pub fn scan_blocks<G: Grid + ?Sized>(grid: &G) -> Vec<AtomicBlock> {
    if grid.is_degenerate() {
        return Vec::new();
    }

    let mut blocks = Vec::new();
    for x in 0..grid.width() {
        scan_column(grid, x, &mut blocks);
    }

    for (i, block) in blocks.iter_mut().enumerate() {
        block.id = AtomicId::new(i);
    }

    tracing::debug!(
        "Scanned {}x{} grid: {} atomic blocks",
        grid.width(),
        grid.height(),
        blocks.len()
    );
    blocks
}

/// Append the blocks of column `x` to `out`, with unassigned ids.
pub fn scan_column<G: Grid + ?Sized>(grid: &G, x: i32, out: &mut Vec<AtomicBlock>) {
    let height = grid.height();
    let mut grounded = false;
    let mut y = 0;

    while y < height {
        if !grounded {
            grounded = grid.is_obstacle(x, y);
        } else if grid.is_empty(x, y) {
            let run = run_height(grid, x, y);
            out.push(AtomicBlock::new(AtomicId::UNASSIGNED, x, y, run));
            // The cell at `y + run` is an obstacle or past the top, so the
            // column stays grounded.
            y += run as i32;
            continue;
        }
        y += 1;
    }
}

/// Length of the empty run starting at `(x, y)`, which must itself be empty.
fn run_height<G: Grid + ?Sized>(grid: &G, x: i32, y: i32) -> u32 {
    let mut run = 1;
    let mut next = y + 1;
    while next < grid.height() && grid.is_empty(x, next) {
        run += 1;
        next += 1;
    }
    run
}
