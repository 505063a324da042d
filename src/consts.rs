//! Assorted constants & hard-coded configuration
use crate::game::{Direction, Point};
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Default width of the playfield in cells
pub(crate) const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default height of the playfield in cells
pub(crate) const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Smallest playfield that fits the seeded snake and the food start cell
pub(crate) const MIN_GRID_WIDTH: u16 = 5;

/// See [`MIN_GRID_WIDTH`]
pub(crate) const MIN_GRID_HEIGHT: u16 = 5;

/// Default time between movements of the snake at score zero
pub(crate) const DEFAULT_BASE_TICK_MS: u64 = 100;

/// Default score coefficient in the tick-interval divisor; larger values make
/// the game speed up faster as the score climbs
pub(crate) const DEFAULT_SPEEDUP: f64 = 0.1;

/// Number of body segments the snake starts with
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// The direction the snake is heading before the first key press
pub(crate) const SNAKE_START_DIRECTION: Direction = Direction::Left;

/// Where the first piece of food is placed
pub(crate) const FOOD_START: Point = Point::new(2, 2);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Glyph for the cells of the snake's body, head included
pub(crate) const SNAKE_SYMBOL: char = '█';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head once it has collided with itself or a wall
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
