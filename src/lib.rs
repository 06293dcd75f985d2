//! Matrix Snake - Snake for a 5x5 LED matrix
//!
//! This library provides:
//! - Core game logic (game module), free of any I/O
//! - Button input: key mapping and the per-tick turn latch (input module)
//! - The display interface and its terminal emulation (render module)
//! - The async game loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
