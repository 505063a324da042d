use super::point::Point;

/// The snake's heading.  There is no neutral variant; the snake is always
/// facing somewhere.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the cell one step from `pos` along `self`.  The vertical sense
    /// is screen-coordinate: `Up` decreases `y`.
    pub(crate) fn step(self, pos: Point) -> Point {
        let Point { x, y } = pos;
        match self {
            Direction::Up => Point::new(x, y - 1),
            Direction::Down => Point::new(x, y + 1),
            Direction::Left => Point::new(x - 1, y),
            Direction::Right => Point::new(x + 1, y),
        }
    }

    pub(crate) fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
