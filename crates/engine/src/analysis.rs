//! The full scan -> classify -> merge pipeline over one grid snapshot.

use crate::blocks::{AtomicBlock, AtomicId, MergedBlock};
use crate::classify::{RowGroups, group_by_row};
use crate::error::Result;
use crate::grid::Grid;
use crate::merge::{merge_active_ranges, merge_fixed_width, validate_fixed_width};
use crate::scan::scan_blocks;
use serde::Serialize;

/// Result of analysing one grid.
///
/// The grid is read once, by [`Analysis::run`]. Changing the fixed-width
/// setting afterwards re-merges the stored blocks without touching the grid;
/// a changed grid needs a fresh `run`.
#[derive(Debug, Clone)]
pub struct Analysis {
    blocks: Vec<AtomicBlock>,
    active_ranges: Vec<MergedBlock>,
    fixed_width: Option<usize>,
    fixed_blocks: Vec<MergedBlock>,
}

/// Summary counts for an [`Analysis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AnalysisStats {
    pub atomic_blocks: usize,
    pub rows: usize,
    pub active_ranges: usize,
    pub fixed_blocks: usize,
}

impl Analysis {
    /// Scan `grid` and compute active ranges, plus fixed-width windows when
    /// `fixed_width` is given. A width below 2 is rejected before scanning.
    pub fn run<G: Grid + ?Sized>(grid: &G, fixed_width: Option<usize>) -> Result<Self> {
        if let Some(width) = fixed_width {
            validate_fixed_width(width)?;
        }

        let blocks = scan_blocks(grid);
        let active_ranges = merge_active_ranges(&blocks);
        let mut analysis = Self {
            blocks,
            active_ranges,
            fixed_width: None,
            fixed_blocks: Vec::new(),
        };
        if let Some(width) = fixed_width {
            analysis.remerge(width)?;
        }
        Ok(analysis)
    }

    /// Recompute the fixed-width windows for `width`. A no-op when `width`
    /// matches the current setting. On error the previous windows are kept.
    pub fn remerge(&mut self, width: usize) -> Result<&[MergedBlock]> {
        if self.fixed_width != Some(width) {
            self.fixed_blocks = merge_fixed_width(&self.blocks, width)?;
            self.fixed_width = Some(width);
        }
        Ok(&self.fixed_blocks)
    }

    /// Drop the fixed-width windows.
    pub fn clear_fixed(&mut self) {
        self.fixed_width = None;
        self.fixed_blocks.clear();
    }

    pub fn blocks(&self) -> &[AtomicBlock] {
        &self.blocks
    }

    pub fn active_ranges(&self) -> &[MergedBlock] {
        &self.active_ranges
    }

    pub fn fixed_width(&self) -> Option<usize> {
        self.fixed_width
    }

    pub fn fixed_blocks(&self) -> &[MergedBlock] {
        &self.fixed_blocks
    }

    pub fn rows(&self) -> RowGroups {
        group_by_row(&self.blocks)
    }

    /// Look up an atomic block by id.
    pub fn block(&self, id: AtomicId) -> Option<&AtomicBlock> {
        self.blocks.get(id.0)
    }

    pub fn stats(&self) -> AnalysisStats {
        AnalysisStats {
            atomic_blocks: self.blocks.len(),
            rows: self.rows().len(),
            active_ranges: self.active_ranges.len(),
            fixed_blocks: self.fixed_blocks.len(),
        }
    }
}
