/// Number of rows bucketed together by sectioned storage.
pub const SECTION_ROWS: i32 = 16;

/// Absolute cell position in a grid. `y` grows upward from row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Index of the row section containing this cell (`y >> 4`).
    pub const fn section_index(&self) -> i32 {
        self.y >> 4
    }

    /// Row within the section (0..16).
    pub const fn section_local_y(&self) -> u8 {
        self.y.rem_euclid(SECTION_ROWS) as u8
    }

    pub const fn in_bounds(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < width && self.y < height
    }
}

