/// A grid coordinate.
///
/// Coordinates are signed so that a head that has just stepped off the board
/// is representable; the boundary check in the game loop is what rejects it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Point {
    pub(crate) const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}
