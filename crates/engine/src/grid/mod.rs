pub mod ascii;
pub mod position;
pub mod procedural;
pub mod sparse;
pub mod tile;

pub use position::CellPos;
pub use procedural::FnGrid;
pub use sparse::SparseGrid;
pub use tile::TileGrid;

/// Read-only occupancy query over a bounded `width x height` rectangle.
///
/// Row `y = 0` is the bottom of the grid; rows grow upward. The scanner only
/// queries cells inside `[0, width) x [0, height)`, so implementations are
/// free to answer anything for coordinates outside that range.
///
/// `is_empty` is kept separate from `is_obstacle` so a backing store can model
/// a third "undefined" state, but the default treats them as complements.
pub trait Grid {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    fn is_obstacle(&self, x: i32, y: i32) -> bool;

    fn is_empty(&self, x: i32, y: i32) -> bool {
        !self.is_obstacle(x, y)
    }

    /// True when the grid has no cells at all (either dimension `<= 0`).
    fn is_degenerate(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

impl<G: Grid + ?Sized> Grid for &G {
    fn width(&self) -> i32 {
        (**self).width()
    }

    fn height(&self) -> i32 {
        (**self).height()
    }

    fn is_obstacle(&self, x: i32, y: i32) -> bool {
        (**self).is_obstacle(x, y)
    }

    fn is_empty(&self, x: i32, y: i32) -> bool {
        (**self).is_empty(x, y)
    }
}
