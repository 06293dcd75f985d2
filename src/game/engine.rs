use std::sync::Arc;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, trace, warn};

use super::{
    action::Turn,
    config::{BOARD_SIZE, GameConfig},
    grid::{Cell, Grid, Image},
    snake::Position,
    state::{GameState, GameStatus},
};
use crate::input::TurnLatch;

/// Result of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake advanced; the grid changed and should be shown
    Moved { head: Position, ate_food: bool },
    /// The snake ran into itself, or the round was already over
    GameOver,
}

/// The game controller: owns the state and advances it one tick at a time
///
/// The engine never touches the display or the clock. The caller shows
/// [`GameEngine::image`] after a move or a food placement and decides the
/// tick cadence.
pub struct GameEngine<R: Rng = StdRng> {
    config: GameConfig,
    state: GameState,
    rng: R,
    latch: Arc<TurnLatch>,
}

impl GameEngine<StdRng> {
    /// Create a new game engine with an entropy-seeded generator
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self::with_state(config, GameState::new(), rng)
    }

    /// Resume from an existing state, e.g. a position set up by hand
    pub fn with_state(config: GameConfig, state: GameState, rng: R) -> Self {
        Self {
            config,
            state,
            rng,
            latch: Arc::new(TurnLatch::new()),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Handle for the input side to post turns through
    pub fn latch(&self) -> Arc<TurnLatch> {
        Arc::clone(&self.latch)
    }

    /// Request a left turn for the next tick. Ignored if a turn is already pending.
    pub fn turn_left(&self) -> bool {
        self.latch.request(Turn::Left)
    }

    /// Request a right turn for the next tick. Ignored if a turn is already pending.
    pub fn turn_right(&self) -> bool {
        self.latch.request(Turn::Right)
    }

    /// Advance the game by one step
    ///
    /// The old head is dimmed and the tail cleared before the collision check,
    /// so the snake may move into the cell its tail leaves on this same tick.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::GameOver;
        }

        if let Some(turn) = self.latch.take() {
            self.state.snake.turn(turn);
            trace!(?turn, heading = ?self.state.snake.heading(), "turn applied");
        }

        let Some(old_head) = self.state.snake.head() else {
            warn!("tick on an empty snake");
            self.state.status = GameStatus::GameOver;
            return TickOutcome::GameOver;
        };
        self.state.grid.set(old_head, Cell::Body);

        self.state.snake.grow();
        let head = old_head.moved_in_direction(self.state.snake.heading());

        let ate_food = self.state.food == Some(head);
        if ate_food {
            // Keep the tail: the snake is one segment longer
            self.state.food = None;
            self.state.score += 1;
            debug!(score = self.state.score, x = head.x, y = head.y, "food eaten");
        } else {
            if let Some(tail) = self.state.snake.tail() {
                self.state.grid.set(tail, Cell::Empty);
            }
            self.state.snake.reduce();
        }

        if self.state.grid.get(head) == Cell::Body {
            self.state.status = GameStatus::GameOver;
            debug!(
                score = self.state.score,
                length = self.state.snake.len(),
                "snake bit itself"
            );
            return TickOutcome::GameOver;
        }

        self.state.grid.set(head, Cell::Head);
        trace!(x = head.x, y = head.y, length = self.state.snake.len(), "tick");

        TickOutcome::Moved { head, ate_food }
    }

    /// Drop food on a random free cell if none is pending
    ///
    /// Cells in line with the head along its direction of travel are refused,
    /// otherwise the snake would just run into its food. Returns `None` if no
    /// cell qualifies or the round is over.
    pub fn place_food(&mut self) -> Option<Position> {
        if self.state.food.is_some() || !self.state.is_running() {
            return self.state.food;
        }
        let head = self.state.snake.head()?;

        if !Grid::positions().any(|pos| self.is_good_food(pos, head)) {
            debug!("no free cell left for food");
            return None;
        }

        loop {
            let pos = Position::new(
                self.rng.gen_range(0..BOARD_SIZE) as i32,
                self.rng.gen_range(0..BOARD_SIZE) as i32,
            );

            if self.is_good_food(pos, head) {
                self.state.grid.set(pos, Cell::Food);
                self.state.food = Some(pos);
                trace!(x = pos.x, y = pos.y, "food placed");
                return Some(pos);
            }
        }
    }

    fn is_good_food(&self, pos: Position, head: Position) -> bool {
        if !self.state.grid.get(pos).is_empty() {
            return false;
        }

        if self.state.snake.heading().is_vertical() {
            pos.x != head.x
        } else {
            pos.y != head.y
        }
    }

    /// Start a new round: single centre segment, no food, score zero
    pub fn reset(&mut self) {
        let state = &mut self.state;
        state.snake.reset();
        state.grid.clear();
        if let Some(head) = state.snake.head() {
            state.grid.set(head, Cell::Head);
        }
        state.food = None;
        state.score = 0;
        state.status = GameStatus::Running;
        self.latch.clear();
        debug!("game reset");
    }

    /// Brightness image of the current grid
    pub fn image(&self) -> Image {
        self.state.grid.to_image(&self.config.brightness)
    }

    /// Image shown when the round ends: food off, the whole snake at full brightness
    pub fn game_over_image(&self) -> Image {
        let mut image = self.image();
        if let Some(food) = self.state.food {
            image.set_pixel(food, 0);
        }
        for segment in self.state.snake.segments() {
            image.set_pixel(segment, self.config.brightness.food);
        }
        image
    }
}
