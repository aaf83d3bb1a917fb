//! Scanner, classifier and merger behaviour on small hand-drawn maps.
//!
//! Maps are written top row first; the last line is `y = 0`.

use gapscan_engine::blocks::{AtomicBlock, AtomicId, MergedBlock};
use gapscan_engine::classify::group_by_row;
use gapscan_engine::error::GapError;
use gapscan_engine::grid::{Grid, TileGrid};
use gapscan_engine::merge::{
    active_ranges_in_row, contiguous_window, fixed_windows_in_row, merge_active_ranges,
    merge_fixed_width,
};
use gapscan_engine::scan::scan_blocks;
use gapscan_engine::Analysis;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn map(text: &str) -> TileGrid {
    TileGrid::from_ascii(text).unwrap()
}

/// `(id, x, y, height)` tuples, so assertions compare geometry too.
fn geometry(blocks: &[AtomicBlock]) -> Vec<(usize, i32, i32, u32)> {
    blocks.iter().map(|b| (b.id.0, b.x, b.y, b.height)).collect()
}

fn ids(raw: &[usize]) -> Vec<AtomicId> {
    raw.iter().copied().map(AtomicId::new).collect()
}

/// One row of blocks at `y = 1` with the given `(x, height)` pairs.
fn row(cells: &[(i32, u32)]) -> Vec<AtomicBlock> {
    cells
        .iter()
        .enumerate()
        .map(|(i, &(x, h))| AtomicBlock::new(AtomicId::new(i), x, 1, h))
        .collect()
}

// ---------------------------------------------------------------------------
// Column scanner
// ---------------------------------------------------------------------------

#[test]
fn single_grounded_column() {
    let grid = map(
        ".....
.....
.....
#....",
    );
    assert_eq!(geometry(&scan_blocks(&grid)), vec![(0, 0, 1, 3)]);
}

#[test]
fn adjacent_columns_scan_in_column_order() {
    let grid = map(
        "###..
##...
.....
###..",
    );
    let blocks = scan_blocks(&grid);
    assert_eq!(
        geometry(&blocks),
        vec![(0, 0, 1, 1), (1, 1, 1, 1), (2, 2, 1, 2)]
    );
}

#[test]
fn column_yields_stacked_blocks() {
    let grid = map(
        ".
.
#
.
#",
    );
    let blocks = scan_blocks(&grid);
    assert_eq!(geometry(&blocks), vec![(0, 0, 1, 1), (1, 0, 3, 2)]);
}

#[test]
fn ungrounded_column_yields_nothing() {
    let grid = map(
        "....
....
....",
    );
    assert!(scan_blocks(&grid).is_empty());
}

#[test]
fn solid_column_yields_nothing() {
    let grid = map(
        "#
#
#",
    );
    assert!(scan_blocks(&grid).is_empty());
}

#[test]
fn obstacle_at_top_row_only() {
    // Grounded only at the very top: nothing above it to emit.
    let grid = map(
        "#
.
.",
    );
    assert!(scan_blocks(&grid).is_empty());
}

#[test]
fn run_reaching_top_boundary() {
    let grid = map(
        ".
.
#
#",
    );
    assert_eq!(geometry(&scan_blocks(&grid)), vec![(0, 0, 2, 2)]);
}

#[test]
fn degenerate_grids_scan_empty() {
    assert!(scan_blocks(&TileGrid::new(0, 5)).is_empty());
    assert!(scan_blocks(&TileGrid::new(5, 0)).is_empty());
    assert!(scan_blocks(&TileGrid::new(-3, -3)).is_empty());
}

#[test]
fn ids_are_column_major() {
    let grid = map(
        ".#.
#..
.#.
#.#",
    );
    let blocks = scan_blocks(&grid);
    assert_eq!(
        geometry(&blocks),
        vec![(0, 0, 1, 1), (1, 0, 3, 1), (2, 1, 2, 1), (3, 2, 1, 3)]
    );
}

// ---------------------------------------------------------------------------
// Row grouping
// ---------------------------------------------------------------------------

#[test]
fn groups_by_row_not_height() {
    let blocks = vec![
        AtomicBlock::new(AtomicId::new(0), 0, 1, 3),
        AtomicBlock::new(AtomicId::new(1), 0, 5, 1),
        AtomicBlock::new(AtomicId::new(2), 1, 1, 1),
        AtomicBlock::new(AtomicId::new(3), 2, 5, 3),
    ];
    let groups = group_by_row(&blocks);
    assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1, 5]);
    assert_eq!(geometry(&groups[&1]), vec![(0, 0, 1, 3), (2, 1, 1, 1)]);
    assert_eq!(geometry(&groups[&5]), vec![(1, 0, 5, 1), (3, 2, 5, 3)]);
}

#[test]
fn grouping_empty_input() {
    assert!(group_by_row(&[]).is_empty());
}

// ---------------------------------------------------------------------------
// Active ranges
// ---------------------------------------------------------------------------

#[test]
fn active_range_spans_contiguous_row() {
    let grid = map(
        "###..
##...
.....
###..",
    );
    let ranges = merge_active_ranges(&scan_blocks(&grid));
    assert_eq!(ranges, vec![MergedBlock::new(0, 1, 3, 1, ids(&[0, 1, 2]))]);
}

#[test]
fn active_ranges_tolerate_extreme_x() {
    let ranges = active_ranges_in_row(&row(&[(i32::MIN, 1), (i32::MAX, 1)]));
    assert_eq!(
        ranges,
        vec![
            MergedBlock::new(i32::MIN, 1, 1, 1, ids(&[0])),
            MergedBlock::new(i32::MAX, 1, 1, 1, ids(&[1])),
        ]
    );
}

#[test]
fn active_range_single_block() {
    let ranges = active_ranges_in_row(&row(&[(4, 7)]));
    assert_eq!(ranges, vec![MergedBlock::new(4, 1, 1, 1, ids(&[0]))]);
}

#[test]
fn active_ranges_break_on_gap() {
    let ranges = active_ranges_in_row(&row(&[(0, 2), (1, 5), (3, 1), (5, 1), (6, 1)]));
    assert_eq!(
        ranges,
        vec![
            MergedBlock::new(0, 1, 2, 1, ids(&[0, 1])),
            MergedBlock::new(3, 1, 1, 1, ids(&[2])),
            MergedBlock::new(5, 1, 2, 1, ids(&[3, 4])),
        ]
    );
}

#[test]
fn active_ranges_follow_group_order() {
    // Column 0 has blocks at rows 1 and 3; column 1 only at row 1.
    let grid = map(
        "..
#.
..
##",
    );
    let ranges = merge_active_ranges(&scan_blocks(&grid));
    assert_eq!(
        ranges,
        vec![
            MergedBlock::new(0, 1, 2, 1, ids(&[0, 2])),
            MergedBlock::new(0, 3, 1, 1, ids(&[1])),
        ]
    );
}

// ---------------------------------------------------------------------------
// Fixed-width merge
// ---------------------------------------------------------------------------

#[test]
fn fixed_width_takes_min_height() {
    let grid = map(
        "###.
.##.
.#..
....
####",
    );
    let blocks = scan_blocks(&grid);
    assert_eq!(
        geometry(&blocks),
        vec![(0, 0, 1, 3), (1, 1, 1, 1), (2, 2, 1, 2), (3, 3, 1, 4)]
    );
    let merged = merge_fixed_width(&blocks, 2).unwrap();
    assert_eq!(
        merged,
        vec![
            MergedBlock::new(0, 1, 2, 1, ids(&[0, 1])),
            MergedBlock::new(2, 1, 2, 2, ids(&[2, 3])),
        ]
    );
}

#[test]
fn fixed_width_larger_than_group() {
    assert!(fixed_windows_in_row(&row(&[(0, 1), (1, 1)]), 3).is_empty());
    assert!(merge_fixed_width(&row(&[(0, 1), (1, 1)]), 3).unwrap().is_empty());
}

#[test]
fn fixed_width_equal_to_group() {
    let merged = fixed_windows_in_row(&row(&[(2, 4), (3, 2), (4, 3)]), 3);
    assert_eq!(merged, vec![MergedBlock::new(2, 1, 3, 2, ids(&[0, 1, 2]))]);

    let broken = fixed_windows_in_row(&row(&[(2, 4), (3, 2), (5, 3)]), 3);
    assert!(broken.is_empty());
}

#[test]
fn fixed_width_slides_past_gaps() {
    let merged = fixed_windows_in_row(&row(&[(0, 1), (2, 1), (3, 2), (4, 3), (5, 4)]), 2);
    assert_eq!(
        merged,
        vec![
            MergedBlock::new(2, 1, 2, 1, ids(&[1, 2])),
            MergedBlock::new(4, 1, 2, 3, ids(&[3, 4])),
        ]
    );
}

#[test]
fn fixed_width_greedy_leaves_remainder() {
    // [0,1] is taken; [1,2] is never considered.
    let merged = fixed_windows_in_row(&row(&[(0, 1), (1, 1), (2, 1)]), 2);
    assert_eq!(merged, vec![MergedBlock::new(0, 1, 2, 1, ids(&[0, 1]))]);
}

#[test]
fn fixed_width_no_window_fits() {
    assert!(fixed_windows_in_row(&row(&[(0, 1), (1, 1), (3, 1), (4, 1)]), 3).is_empty());
}

#[test]
fn fixed_width_rejects_small_widths() {
    let blocks = row(&[(0, 1), (1, 1)]);
    for width in [0, 1] {
        match merge_fixed_width(&blocks, width) {
            Err(GapError::InvalidArgument { name, .. }) => assert_eq!(name, "width"),
            other => panic!("expected InvalidArgument for width {width}, got {other:?}"),
        }
    }
    assert!(fixed_windows_in_row(&blocks, 1).is_empty());
}

// ---------------------------------------------------------------------------
// Continuity primitive
// ---------------------------------------------------------------------------

#[test]
fn contiguous_window_rejects_short_windows() {
    assert!(contiguous_window(&[]).is_none());
    assert!(contiguous_window(&row(&[(3, 2)])).is_none());
}

#[test]
fn contiguous_window_rejects_duplicates_and_gaps() {
    assert!(contiguous_window(&row(&[(0, 1), (0, 1)])).is_none());
    assert!(contiguous_window(&row(&[(0, 1), (2, 1)])).is_none());
    assert!(contiguous_window(&row(&[(1, 1), (0, 1)])).is_none());
}

#[test]
fn contiguous_window_merges() {
    let merged = contiguous_window(&row(&[(7, 5), (8, 2), (9, 9)])).unwrap();
    assert_eq!(merged, MergedBlock::new(7, 1, 3, 2, ids(&[0, 1, 2])));
    assert_eq!(merged.right(), 10);
    assert_eq!(merged.top(), 3);
}

// ---------------------------------------------------------------------------
// Block identity
// ---------------------------------------------------------------------------

#[test]
fn atomic_equality_is_by_id() {
    let a = AtomicBlock::new(AtomicId::new(4), 0, 1, 1);
    let b = AtomicBlock::new(AtomicId::new(4), 9, 9, 9);
    let c = AtomicBlock::new(AtomicId::new(5), 0, 1, 1);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.cmp_x(&c), std::cmp::Ordering::Equal);
    assert_eq!(a.cmp_x(&b), std::cmp::Ordering::Less);
}

#[test]
fn atomic_block_extent() {
    let block = AtomicBlock::new(AtomicId::new(0), 2, 3, 4);
    assert_eq!(block.top(), 7);
    assert!(block.contains(2, 3));
    assert!(block.contains(2, 6));
    assert!(!block.contains(2, 7));
    assert!(!block.contains(3, 3));
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

#[test]
fn no_obstacles_no_output() {
    let grid = TileGrid::new(5, 4);
    let analysis = Analysis::run(&grid, Some(2)).unwrap();
    assert!(analysis.blocks().is_empty());
    assert!(analysis.active_ranges().is_empty());
    assert!(analysis.fixed_blocks().is_empty());
    assert_eq!(analysis.stats().atomic_blocks, 0);
}

#[test]
fn analysis_remerges_without_rescan() {
    let grid = map(
        "......
......
######",
    );
    let mut analysis = Analysis::run(&grid, None).unwrap();
    assert_eq!(analysis.fixed_width(), None);
    assert_eq!(analysis.active_ranges().len(), 1);
    assert_eq!(analysis.active_ranges()[0].width, 6);

    assert_eq!(analysis.remerge(2).unwrap().len(), 3);
    assert_eq!(analysis.remerge(4).unwrap().len(), 1);
    assert_eq!(analysis.fixed_width(), Some(4));

    // A bad width keeps the previous result.
    assert!(analysis.remerge(1).is_err());
    assert_eq!(analysis.fixed_width(), Some(4));
    assert_eq!(analysis.fixed_blocks().len(), 1);

    analysis.clear_fixed();
    assert!(analysis.fixed_blocks().is_empty());

    let stats = analysis.stats();
    assert_eq!(stats.atomic_blocks, 6);
    assert_eq!(stats.rows, 1);
    assert_eq!(stats.active_ranges, 1);
    assert_eq!(stats.fixed_blocks, 0);
}

#[test]
fn analysis_rejects_small_width() {
    let grid = map("#");
    assert!(matches!(
        Analysis::run(&grid, Some(1)),
        Err(GapError::InvalidArgument { .. })
    ));
}

#[test]
fn analysis_block_lookup() {
    let grid = map(
        "..
##",
    );
    let analysis = Analysis::run(&grid, None).unwrap();
    let block = analysis.block(AtomicId::new(1)).unwrap();
    assert_eq!((block.x, block.y, block.height), (1, 1, 1));
    assert!(analysis.block(AtomicId::new(2)).is_none());
    assert_eq!(grid.width(), 2);
}
