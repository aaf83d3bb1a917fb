use super::Grid;

/// A grid whose cells are computed on demand by a closure returning
/// `true` for obstacles.
pub struct FnGrid<F> {
    width: i32,
    height: i32,
    obstacle: F,
}

impl<F> FnGrid<F>
where
    F: Fn(i32, i32) -> bool,
{
    pub fn new(width: i32, height: i32, obstacle: F) -> Self {
        Self {
            width,
            height,
            obstacle,
        }
    }
}

impl<F> Grid for FnGrid<F>
where
    F: Fn(i32, i32) -> bool,
{
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn is_obstacle(&self, x: i32, y: i32) -> bool {
        (self.obstacle)(x, y)
    }
}
