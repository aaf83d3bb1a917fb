use super::Grid;
use super::position::CellPos;

/// Dense obstacle map stored as a flat row-major array.
///
/// Reads outside the grid report "empty" rather than panicking; writes
/// outside the grid are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl TileGrid {
    /// An all-empty grid. Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![false; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    fn index(&self, pos: CellPos) -> Option<usize> {
        pos.in_bounds(self.width, self.height)
            .then(|| (pos.y as usize) * (self.width as usize) + (pos.x as usize))
    }

    #[inline]
    pub fn get(&self, pos: CellPos) -> bool {
        self.index(pos).is_some_and(|i| self.cells[i])
    }

    #[inline]
    pub fn set(&mut self, pos: CellPos, obstacle: bool) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = obstacle;
        }
    }

    /// Set every cell of row `y`.
    pub fn fill_row(&mut self, y: i32, obstacle: bool) {
        for x in 0..self.width {
            self.set(CellPos::new(x, y), obstacle);
        }
    }

    /// Set cells `y_range` of column `x`.
    pub fn fill_column(&mut self, x: i32, y_range: std::ops::Range<i32>, obstacle: bool) {
        for y in y_range {
            self.set(CellPos::new(x, y), obstacle);
        }
    }

    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }
}

impl Grid for TileGrid {
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
