//! Gap scanning over 2D tile grids.
//!
//! The pipeline is a pure function of grid state:
//!
//! ```text
//! Grid -> scan -> [AtomicBlock] -> classify (by row) -> merge -> [MergedBlock]
//! ```
//!
//! Two mergers consume the same row groups independently: active ranges
//! (maximal contiguous runs, height fixed at 1) and fixed-width windows
//! (exactly N contiguous blocks, height = shortest constituent).

pub mod analysis;
pub mod blocks;
pub mod classify;
pub mod error;
pub mod grid;
pub mod merge;
pub mod scan;

pub use analysis::{Analysis, AnalysisStats};
pub use blocks::{AtomicBlock, AtomicId, MergedBlock};
pub use classify::{RowGroups, group_by_row};
pub use error::{GapError, Result};
pub use grid::Grid;
pub use merge::{contiguous_window, merge_active_ranges, merge_fixed_width};
pub use scan::scan_blocks;
