//! Core game logic module for Snake on a 5x5 matrix
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The caller owns the clock and the display.

pub mod action;
pub mod config;
pub mod dimension;
pub mod engine;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Heading, Turn};
pub use config::{BOARD_SIZE, BrightnessLevels, GameConfig};
pub use dimension::Dimension;
pub use engine::{GameEngine, TickOutcome};
pub use grid::{Cell, Grid, Image};
pub use snake::{Position, Snake};
pub use state::{GameState, GameStatus};
