mod direction;
mod food;
mod point;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::point::Point;
use self::food::Food;
use self::snake::Snake;
use crate::app::Screen;
use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::{Duration, Instant};

/// One running (or just-ended) game of snake.
///
/// Generic over the RNG so that tests can pose a seeded one; outside of tests
/// the default thread RNG is used.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    config: Config,
    score: u32,
    snake: Snake,
    food: Food,
    state: GameState,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: Config) -> Self {
        Game::new_with_rng(config, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(config: Config, rng: R) -> Game<R> {
        let head = Point::new(
            i32::from(config.grid.width) / 2,
            i32::from(config.grid.height) / 2,
        );
        let snake = Snake::new(
            head,
            consts::INITIAL_SNAKE_LENGTH,
            consts::SNAKE_START_DIRECTION,
        );
        Game {
            rng,
            config,
            score: 0,
            snake,
            food: Food::new(consts::FOOD_START),
            state: GameState::Running,
            next_tick: None,
        }
    }

    /// Wait for the next tick deadline, handling any key events that arrive
    /// before it, and advance the simulation when it passes.  The deadline is
    /// recomputed from the current score after every tick.
    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.running() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + self.tick_interval());
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.advance();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Run one tick of the simulation: move the snake, then check
    /// self-collision, then the playfield boundary, then consumption.
    ///
    /// The collision checks come before the consumption check so that a move
    /// which is both fatal and food-consuming ends the game without scoring.
    fn advance(&mut self) {
        if !self.running() {
            return;
        }
        self.snake.advance();
        let head = self.snake.head();
        if self.snake.body().iter().skip(1).any(|&p| p == head) {
            self.state = GameState::GameOver;
            return;
        }
        let (width, height) = self.grid_size();
        if !(0..width).contains(&head.x) || !(0..height).contains(&head.y) {
            self.state = GameState::GameOver;
            return;
        }
        if head == self.food.position() {
            self.score += 1;
            self.snake.grow();
            let snake = &self.snake;
            self.food
                .relocate(&mut self.rng, width, height, |p| !snake.occupies(p));
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match self.state {
            GameState::Running => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::Quit => return Some(Screen::Quit),
                Command::Up => self.snake.set_direction(Direction::Up),
                Command::Down => self.snake.set_direction(Direction::Down),
                Command::Left => self.snake.set_direction(Direction::Left),
                Command::Right => self.snake.set_direction(Direction::Right),
                _ => (),
            },
            GameState::GameOver => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::R => return Some(Screen::Game(Game::new(self.config.clone()))),
                Command::Quit | Command::Q | Command::Enter => return Some(Screen::Quit),
                _ => (),
            },
        }
        None
    }

    /// Time until the next tick: the base interval divided by
    /// `speedup * score + 1`.  Strictly decreasing in the score, always
    /// positive, and recomputed from the live score rather than cached.
    fn tick_interval(&self) -> Duration {
        let divisor = self.config.timing.speedup * f64::from(self.score) + 1.0;
        let base = Duration::from_millis(self.config.timing.base_tick_ms);
        Duration::from_secs_f64(base.as_secs_f64() / divisor)
    }

    /// Project the game onto a drawing surface: one `draw_cell` per occupied
    /// playfield cell, then `draw_text` for the score overlay.  Purely a
    /// projection; never mutates game state.
    fn render_into<S: Surface>(&self, surface: &mut S) {
        for &p in self.snake.body() {
            surface.draw_cell(p, consts::SNAKE_SYMBOL, consts::SNAKE_STYLE);
        }
        surface.draw_cell(self.food.position(), consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        surface.draw_text(&format!("Score: {}", self.score));
    }

    fn grid_size(&self) -> (i32, i32) {
        (
            i32::from(self.config.grid.width),
            i32::from(self.config.grid.height),
        )
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);

        let block_size = Size {
            width: self.config.grid.width.saturating_add(2),
            height: self.config.grid.height.saturating_add(2),
        };
        let block_area = center_rect(block_area, block_size);
        Block::bordered().render(block_area, buf);

        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            text_area: score_area,
            buf,
        };
        self.render_into(&mut canvas);
        // Overdraw the head with the collision marker so a fatal move is
        // visible on the final frame.  On a boundary death the head is
        // off-board and the canvas clips it away.
        if self.state == GameState::GameOver {
            canvas.draw_cell(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
            Span::from(" GAME OVER!").render(msg1_area, buf);
            Line::from_iter([
                Span::raw(" Press "),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(" to restart or "),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(" to quit"),
            ])
            .render(msg2_area, buf);
        }
    }
}

/// A surface the game can project itself onto: a grid of colored cells plus a
/// one-line text overlay
trait Surface {
    fn draw_cell(&mut self, pos: Point, symbol: char, style: Style);
    fn draw_text(&mut self, text: &str);
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    /// The playfield interior, in buffer coordinates
    area: Rect,
    /// Where the text overlay goes
    text_area: Rect,
    buf: &'a mut Buffer,
}

impl Surface for Canvas<'_> {
    fn draw_cell(&mut self, pos: Point, symbol: char, style: Style) {
        let Ok(x) = u16::try_from(pos.x) else {
            return;
        };
        let Ok(y) = u16::try_from(pos.y) else {
            return;
        };
        if x >= self.area.width || y >= self.area.height {
            return;
        }
        let Some(x) = self.area.x.checked_add(x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }

    fn draw_text(&mut self, text: &str) {
        Line::styled(format!(" {text}"), consts::SCORE_BAR_STYLE).render(self.text_area, self.buf);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    GameOver,
}
