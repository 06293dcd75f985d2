use std::ops::ControlFlow;
use std::time::Duration;

use anyhow::Result;
use rand::{Rng, rngs::StdRng};
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::info;

use crate::game::{BOARD_SIZE, GameEngine, Image, TickOutcome};
use crate::render::Display;

/// Characters visible at once while scrolling text
pub const SCROLL_WINDOW: usize = BOARD_SIZE;

/// Successive views of `text` sliding across a window of [`SCROLL_WINDOW`] characters
///
/// The text enters from the right on a blank window and leaves on the left
/// until the window is blank again.
pub fn scroll_windows(text: &str) -> Vec<String> {
    let padding = std::iter::repeat_n(' ', SCROLL_WINDOW);
    let chars: Vec<char> = padding
        .clone()
        .chain(text.chars())
        .chain(padding)
        .collect();

    chars
        .windows(SCROLL_WINDOW)
        .map(|window| window.iter().collect())
        .collect()
}

/// The game loop: ticks the engine on a fixed cadence and drives the display
///
/// Every wait races the quit signal, so quitting takes effect within one pause.
pub struct Session<D: Display, R: Rng = StdRng> {
    engine: GameEngine<R>,
    display: D,
    quit: watch::Receiver<bool>,
}

impl<D: Display, R: Rng> Session<D, R> {
    pub fn new(engine: GameEngine<R>, display: D, quit: watch::Receiver<bool>) -> Self {
        Self {
            engine,
            display,
            quit,
        }
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Play rounds back to back until quit
    pub async fn run(&mut self) -> Result<()> {
        loop {
            if self.play_round().await?.is_break() {
                return Ok(());
            }
            if self.show_game_over().await?.is_break() {
                return Ok(());
            }
            self.engine.reset();
        }
    }

    /// Tick until the snake bites itself
    pub async fn play_round(&mut self) -> Result<ControlFlow<()>> {
        info!("round started");
        self.display.show(&self.engine.image())?;
        let tick = Duration::from_millis(self.engine.config().tick_ms);

        loop {
            match self.engine.tick() {
                TickOutcome::GameOver => {
                    info!(score = self.engine.state().score, "round over");
                    return Ok(ControlFlow::Continue(()));
                }
                TickOutcome::Moved { .. } => self.display.show(&self.engine.image())?,
            }

            if self.engine.state().food.is_none() && self.engine.place_food().is_some() {
                self.display.show(&self.engine.image())?;
            }

            if self.pause(tick).await.is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }
    }

    /// Flash the dead snake, then scroll the score
    pub async fn show_game_over(&mut self) -> Result<ControlFlow<()>> {
        let config = self.engine.config().clone();
        self.display.show(&self.engine.game_over_image())?;

        let flash = Duration::from_millis(config.flash_interval_ms);
        for i in 0..config.flash_count {
            let level = if i % 2 == 0 {
                config.brightness.body
            } else {
                u8::MAX
            };
            self.display.set_brightness(level)?;
            if self.pause(flash).await.is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }

        self.display.show(&Image::new())?;
        self.display.set_brightness(u8::MAX)?;

        if self
            .scroll(&config.score_label, config.text_scroll_ms)
            .await?
            .is_break()
        {
            return Ok(ControlFlow::Break(()));
        }
        let score = self.engine.state().score.to_string();
        self.scroll(&score, config.number_scroll_ms).await
    }

    async fn scroll(&mut self, text: &str, step_ms: u64) -> Result<ControlFlow<()>> {
        let step = Duration::from_millis(step_ms);
        for window in scroll_windows(text) {
            self.display.show_text(&window)?;
            if self.pause(step).await.is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    async fn pause(&mut self, duration: Duration) -> ControlFlow<()> {
        if *self.quit.borrow() {
            return ControlFlow::Break(());
        }

        tokio::select! {
            _ = sleep(duration) => ControlFlow::Continue(()),
            changed = self.quit.changed() => match changed {
                Ok(()) if !*self.quit.borrow() => ControlFlow::Continue(()),
                // Quit requested, or the input side is gone
                _ => ControlFlow::Break(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameConfig, GameState, GameStatus, Grid, Heading, Position, Snake};
    use rand::SeedableRng;
    use tokio::time::Instant;

    #[derive(Debug, Clone, PartialEq)]
    enum Shown {
        Image(Image),
        Brightness(u8),
        Text(String),
    }

    #[derive(Default)]
    struct RecordingDisplay {
        shown: Vec<Shown>,
    }

    impl Display for RecordingDisplay {
        fn show(&mut self, image: &Image) -> Result<()> {
            self.shown.push(Shown::Image(*image));
            Ok(())
        }

        fn set_brightness(&mut self, level: u8) -> Result<()> {
            self.shown.push(Shown::Brightness(level));
            Ok(())
        }

        fn show_text(&mut self, text: &str) -> Result<()> {
            self.shown.push(Shown::Text(text.to_string()));
            Ok(())
        }
    }

    /// Snake whose next tick runs into its own body
    fn doomed_state(score: u32) -> GameState {
        let snake = Snake::from_segments(
            [(2, 2), (3, 2), (3, 3), (2, 3), (1, 3)].map(|(x, y)| Position::new(x, y)),
            Heading::Down,
        );
        let mut grid = Grid::new();
        for (i, segment) in snake.segments().enumerate() {
            grid.set(segment, if i == 0 { Cell::Head } else { Cell::Body });
        }
        grid.set(Position::new(0, 0), Cell::Food);

        GameState {
            snake,
            grid,
            food: Some(Position::new(0, 0)),
            score,
            status: GameStatus::Running,
        }
    }

    fn new_session(state: GameState) -> (Session<RecordingDisplay>, watch::Sender<bool>) {
        let engine =
            GameEngine::with_state(GameConfig::default(), state, StdRng::seed_from_u64(3));
        let (quit_tx, quit_rx) = watch::channel(false);
        (
            Session::new(engine, RecordingDisplay::default(), quit_rx),
            quit_tx,
        )
    }

    #[test]
    fn test_scroll_windows() {
        let windows = scroll_windows("AB");
        assert_eq!(windows.len(), 2 + SCROLL_WINDOW + 1);
        assert_eq!(windows[0], "     ");
        assert_eq!(windows[1], "    A");
        assert_eq!(windows[5], "AB   ");
        assert_eq!(windows.last().unwrap(), "     ");
        assert!(windows.iter().all(|w| w.chars().count() == SCROLL_WINDOW));
    }

    #[test]
    fn test_scroll_windows_empty_text() {
        let windows = scroll_windows("");
        assert_eq!(windows.len(), SCROLL_WINDOW + 1);
        assert!(windows.iter().all(|w| w.trim().is_empty()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_round_ends_on_collision() {
        let (mut session, _quit) = new_session(doomed_state(3));

        let flow = session.play_round().await.unwrap();

        assert!(flow.is_continue());
        assert_eq!(session.engine().state().status, GameStatus::GameOver);
        // Only the opening frame: nothing is drawn for the fatal move
        assert_eq!(session.display().shown.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_game_over_sequence() {
        let (mut session, _quit) = new_session(doomed_state(3));
        session.play_round().await.unwrap();
        let game_over_image = session.engine().game_over_image();
        let start = Instant::now();

        let flow = session.show_game_over().await.unwrap();

        assert!(flow.is_continue());
        let shown = &session.display().shown[1..];
        assert_eq!(shown[0], Shown::Image(game_over_image));
        assert_eq!(shown[1], Shown::Brightness(15));
        assert_eq!(shown[2], Shown::Brightness(255));
        assert!(matches!(&shown[11], Shown::Image(image) if image.is_blank()));
        assert_eq!(shown[12], Shown::Brightness(255));

        let texts: Vec<&str> = shown
            .iter()
            .filter_map(|s| match s {
                Shown::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        let label_windows = scroll_windows("SCORE-");
        let score_windows = scroll_windows("3");
        assert_eq!(texts.len(), label_windows.len() + score_windows.len());
        assert!(texts.contains(&"SCORE"));
        assert!(texts.contains(&"  3  "));

        // 10 flashes at 500ms, then both scrolls
        let expected = Duration::from_millis(
            10 * 500 + label_windows.len() as u64 * 120 + score_windows.len() as u64 * 150,
        );
        let elapsed = start.elapsed();
        assert!(elapsed >= expected, "{elapsed:?}");
        assert!(elapsed < expected + Duration::from_millis(50), "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_round_places_food_and_stops_on_quit() {
        let (mut session, quit) = new_session(GameState::new());
        tokio::spawn(async move {
            sleep(Duration::from_millis(1200)).await;
            quit.send(true).unwrap();
        });

        session.run().await.unwrap();

        // Ticks at 0, 500 and 1000ms, straight up through the top edge
        let state = session.engine().state();
        assert_eq!(state.snake.head(), Some(Position::new(2, 4)));
        assert!(state.is_running());
        let food = state.food.unwrap();
        assert_ne!(food.x, 2);
        assert_eq!(state.grid.get(food), Cell::Food);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_before_start() {
        let (mut session, quit) = new_session(GameState::new());
        quit.send(true).unwrap();

        session.run().await.unwrap();

        // Opening frame, one move, one food placement
        assert_eq!(session.display().shown.len(), 3);
        assert_eq!(
            session.engine().state().snake.head(),
            Some(Position::new(2, 1))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_quit_sender_stops_session() {
        let (mut session, quit) = new_session(GameState::new());
        drop(quit);

        session.run().await.unwrap();
        assert!(session.engine().state().is_running());
    }
}
