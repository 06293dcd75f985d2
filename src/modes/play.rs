use std::io::{Stderr, stderr};
use std::ops::ControlFlow;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

use super::session::Session;
use crate::game::{GameConfig, GameEngine};
use crate::input::{InputHandler, KeyAction, TurnLatch};
use crate::render::TerminalDisplay;

type TerminalBackend = CrosstermBackend<Stderr>;

/// Play on the terminal emulation of the board
pub struct PlayMode {
    config: GameConfig,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let engine = GameEngine::new(self.config.clone());
        let (quit_tx, quit_rx) = watch::channel(false);
        let input = spawn_input(engine.latch(), quit_tx);

        let mut session = Session::new(engine, TerminalDisplay::new(terminal), quit_rx);
        let result = session.run().await;

        input.abort();
        cleanup_terminal(session.display_mut().terminal_mut())?;

        result
    }
}

/// Read key events and forward them as button presses
///
/// The task never touches the game itself: turns go through the latch and
/// quitting through the watch channel.
fn spawn_input(latch: Arc<TurnLatch>, quit: watch::Sender<bool>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let handler = InputHandler::new();
        let mut event_stream = EventStream::new();

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        let action = handler.handle_key_event(key);
                        if apply_key_action(action, &latch, &quit).is_break() {
                            break;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(error)) => {
                        warn!(?error, "failed to read terminal event");
                        quit.send_replace(true);
                        break;
                    }
                    None => break,
                },

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    quit.send_replace(true);
                    break;
                }
            }
        }
    })
}

fn apply_key_action(
    action: KeyAction,
    latch: &TurnLatch,
    quit: &watch::Sender<bool>,
) -> ControlFlow<()> {
    match action {
        KeyAction::Turn(turn) => {
            let accepted = latch.request(turn);
            trace!(?turn, accepted, "button pressed");
            ControlFlow::Continue(())
        }
        KeyAction::Quit => {
            quit.send_replace(true);
            ControlFlow::Break(())
        }
        KeyAction::None => ControlFlow::Continue(()),
    }
}

fn cleanup_terminal(terminal: &mut Terminal<TerminalBackend>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}
