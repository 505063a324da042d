use super::point::Point;
use rand::Rng;

/// The single piece of food on the playfield
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Food {
    pub(super) pos: Point,
}

impl Food {
    pub(super) fn new(pos: Point) -> Food {
        Food { pos }
    }

    pub(super) fn position(&self) -> Point {
        self.pos
    }

    /// Move the food to a uniformly random cell in `[0, width) × [0, height)`
    /// that satisfies `is_free`, by sampling until one is accepted.
    ///
    /// Does not terminate if no cell satisfies `is_free`, i.e. if the snake
    /// has filled the entire playfield.
    pub(super) fn relocate<R: Rng, F: Fn(Point) -> bool>(
        &mut self,
        rng: &mut R,
        width: i32,
        height: i32,
        is_free: F,
    ) {
        loop {
            let pos = Point::new(rng.random_range(0..width), rng.random_range(0..height));
            if is_free(pos) {
                self.pos = pos;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn relocate_stays_in_bounds() {
        for seed in 0..64 {
            let mut rng = ChaCha12Rng::seed_from_u64(seed);
            let mut food = Food::new(Point::new(0, 0));
            food.relocate(&mut rng, 7, 3, |_| true);
            let Point { x, y } = food.position();
            assert!((0..7).contains(&x), "x out of bounds for seed {seed}");
            assert!((0..3).contains(&y), "y out of bounds for seed {seed}");
        }
    }

    #[test]
    fn relocate_respects_predicate() {
        // Only one free cell on a 3x3 board; every seed must find it.
        let free = Point::new(1, 2);
        for seed in 0..64 {
            let mut rng = ChaCha12Rng::seed_from_u64(seed);
            let mut food = Food::new(Point::new(0, 0));
            food.relocate(&mut rng, 3, 3, |p| p == free);
            assert_eq!(food.position(), free, "wrong cell for seed {seed}");
        }
    }
}
