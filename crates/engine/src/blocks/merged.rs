use super::atomic::AtomicId;
use serde::Serialize;

/// A rectangle formed from `width` atomic blocks that share a starting row.
///
/// `(x, y)` is the leftmost constituent's origin. The meaning of `height`
/// depends on the merge: active ranges always carry 1, fixed-width windows
/// carry the shortest constituent height. Constituents are referenced by id,
/// left to right.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MergedBlock {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub ids: Vec<AtomicId>,
}

impl MergedBlock {
    pub fn new(x: i32, y: i32, width: u32, height: u32, ids: Vec<AtomicId>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            ids,
        }
    }

    /// First column to the right of the region (exclusive bound).
    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// First row above the region (exclusive bound).
    pub const fn top(&self) -> i32 {
        self.y + self.height as i32
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.top()
    }
}
