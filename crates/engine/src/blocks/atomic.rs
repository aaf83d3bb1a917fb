use serde::Serialize;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Identifier of an atomic block: its index in the scan output.
///
/// Assigned column-major (all of column 0 before column 1), bottom-up within
/// a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct AtomicId(pub usize);

impl AtomicId {
    /// Sentinel used while a column is being scanned, before ids are assigned.
    pub const UNASSIGNED: AtomicId = AtomicId(usize::MAX);

    pub const fn new(id: usize) -> Self {
        Self(id)
    }
}

/// One maximal vertical run of empty cells directly above solid ground.
///
/// `(x, y)` is the first empty cell of the run; `height >= 1` cells are empty
/// from there upward. Identity is the `id` alone: equality and hashing ignore
/// geometry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AtomicBlock {
    pub id: AtomicId,
    pub x: i32,
    pub y: i32,
    pub height: u32,
}

impl AtomicBlock {
    pub const fn new(id: AtomicId, x: i32, y: i32, height: u32) -> Self {
        Self { id, x, y, height }
    }

    /// First row above the run (exclusive bound).
    pub const fn top(&self) -> i32 {
        self.y + self.height as i32
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x == self.x && y >= self.y && y < self.top()
    }

    /// Horizontal ordering. Only `x` is compared, so two blocks in different
    /// rows of the same column compare equal here while still being distinct
    /// blocks.
    pub fn cmp_x(&self, other: &AtomicBlock) -> Ordering {
        self.x.cmp(&other.x)
    }
}

impl PartialEq for AtomicBlock {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AtomicBlock {}

impl Hash for AtomicBlock {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
