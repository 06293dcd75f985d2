use super::{
    grid::{Cell, Grid},
    snake::{Position, Snake},
};

/// Whether the current round is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// The snake bit itself; left only through a reset
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub grid: Grid,
    pub food: Option<Position>,
    pub score: u32,
    pub status: GameStatus,
}

impl GameState {
    /// Fresh round: one lit head at the centre, no food
    pub fn new() -> Self {
        let snake = Snake::new();
        let mut grid = Grid::new();
        if let Some(head) = snake.head() {
            grid.set(head, Cell::Head);
        }

        Self {
            snake,
            grid,
            food: None,
            score: 0,
            status: GameStatus::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
