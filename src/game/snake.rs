use super::direction::Direction;
use super::point::Point;
use std::collections::VecDeque;

/// Snake state.
///
/// All positions are playfield cells relative to the top-left corner of the
/// level.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells occupied by the snake, head at the front, tail at the back.
    /// Never empty.
    pub(super) body: VecDeque<Point>,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,

    /// Whether the snake ate on the most recent tick.  When set, the next
    /// [`advance()`][Snake::advance] keeps the tail in place, growing the
    /// snake by one cell.
    pub(super) pending_growth: bool,
}

impl Snake {
    /// Create a new snake of `length` cells with its head at `head`, facing
    /// in `direction`, and its body extending in a straight line behind the
    /// head.
    pub(super) fn new(head: Point, length: usize, direction: Direction) -> Snake {
        let tailward = direction.opposite();
        let body = std::iter::successors(Some(head), |&p| Some(tailward.step(p)))
            .take(length.max(1))
            .collect();
        Snake {
            body,
            direction,
            pending_growth: false,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Point {
        *self.body.front().expect("snake body is never empty")
    }

    /// Return the cells occupied by the snake, head first
    pub(super) fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    /// Does any part of the snake occupy `pos`?
    pub(super) fn occupies(&self, pos: Point) -> bool {
        self.body.contains(&pos)
    }

    /// Change the snake's heading to `requested`.  A request for the exact
    /// opposite of the current heading is ignored, as honoring it would drive
    /// the head straight into the neck.
    pub(super) fn set_direction(&mut self, requested: Direction) {
        if requested != self.direction.opposite() {
            self.direction = requested;
        }
    }

    /// Move the snake forwards one cell in the current direction.  The tail
    /// cell is dropped unless a growth is pending, in which case it stays and
    /// the pending flag clears.
    pub(super) fn advance(&mut self) {
        let next = self.direction.step(self.head());
        self.body.push_front(next);
        if self.pending_growth {
            self.pending_growth = false;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Mark the snake as having eaten.  The length increase takes effect on
    /// the next [`advance()`][Snake::advance], not immediately.
    pub(super) fn grow(&mut self) {
        self.pending_growth = true;
    }
}
