pub mod renderer;

pub use renderer::{Renderer, Screen, TerminalDisplay};

use anyhow::Result;

use crate::game::Image;

/// Output side of the board
///
/// Implementations push whatever they are given straight to the hardware (or
/// its emulation); the game never reads anything back.
pub trait Display {
    /// Show a brightness image on the matrix
    fn show(&mut self, image: &Image) -> Result<()>;

    /// Global brightness applied on top of every pixel, 255 being unchanged
    fn set_brightness(&mut self, level: u8) -> Result<()>;

    /// Replace the matrix with a line of text
    fn show_text(&mut self, text: &str) -> Result<()>;
}
