use super::Grid;
use super::position::CellPos;
use std::collections::{HashMap, HashSet};

/// Obstacle cells of one 16-row band, keyed by `(x, local_y)`.
#[derive(Debug, Clone, Default)]
struct Section {
    cells: HashSet<(i32, u8)>,
}

/// Sparse obstacle map for large, mostly-empty grids.
///
/// Only obstacle cells are stored, bucketed into 16-row sections keyed by
/// `y >> 4`. A section whose last obstacle is cleared is dropped.
#[derive(Debug, Clone)]
pub struct SparseGrid {
    width: i32,
    height: i32,
    sections: HashMap<i32, Section>,
}

impl SparseGrid {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            sections: HashMap::new(),
        }
    }

    pub fn get(&self, pos: CellPos) -> bool {
        if !pos.in_bounds(self.width, self.height) {
            return false;
        }
        self.sections
            .get(&pos.section_index())
            .is_some_and(|s| s.cells.contains(&(pos.x, pos.section_local_y())))
    }

    /// Writes outside the grid are ignored.
    pub fn set(&mut self, pos: CellPos, obstacle: bool) {
        if !pos.in_bounds(self.width, self.height) {
            return;
        }
        let section_idx = pos.section_index();
        let key = (pos.x, pos.section_local_y());

        if obstacle {
            self.sections
                .entry(section_idx)
                .or_default()
                .cells
                .insert(key);
        } else if let Some(section) = self.sections.get_mut(&section_idx) {
            section.cells.remove(&key);
            if section.cells.is_empty() {
                self.sections.remove(&section_idx);
            }
        }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn obstacle_count(&self) -> usize {
        self.sections.values().map(|s| s.cells.len()).sum()
    }
}

impl Grid for SparseGrid {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn is_obstacle(&self, x: i32, y: i32) -> bool {
        self.get(CellPos::new(x, y))
    }
}
