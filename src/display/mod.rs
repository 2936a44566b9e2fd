//! Terminal front end.
//!
//! The display runs on its own OS thread: crossterm's event wait blocks,
//! and intents are handed to the game loop with a blocking send. It never
//! touches the engine; everything it draws comes from the [`RedrawSignal`].

mod geometry;
mod input;
mod ui;

pub use geometry::BoardGeometry;
pub use input::{translate, DisplayAction};
pub use ui::{draw, restart_hint, BoardWidget};

use crate::config::AppConfig;
use crate::game_loop::Intent;
use crate::redraw::RedrawSignal;
use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use noughts_engine::Snapshot;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Takes over the terminal and runs the display until the player quits.
///
/// The terminal is restored on every exit path, including a failed setup.
pub fn run_display(
    config: &AppConfig,
    intents: mpsc::Sender<Intent>,
    signal: RedrawSignal,
) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = Display::new(config, intents, signal).run(&mut terminal);

    if let Err(err) = &res {
        error!(error = ?err, "Display loop error");
    }
    res
}

/// Puts the terminal back into normal mode on drop.
///
/// Created right after raw mode is enabled, so any later setup failure
/// still restores the terminal.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "Failed to disable raw mode");
        }
        if let Err(err) = restore_screen(&mut io::stdout()) {
            warn!(error = %err, "Failed to restore screen");
        }
    }
}

/// Leaves the alternate screen, stops mouse capture and shows the cursor.
fn restore_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, cursor::Show)
}

/// Display state: the last snapshot drawn and the two channel ends.
struct Display<'a> {
    config: &'a AppConfig,
    intents: mpsc::Sender<Intent>,
    signal: RedrawSignal,
    snapshot: Snapshot,
}

impl<'a> Display<'a> {
    fn new(config: &'a AppConfig, intents: mpsc::Sender<Intent>, signal: RedrawSignal) -> Self {
        let snapshot = signal.current();
        Self {
            config,
            intents,
            signal,
            snapshot,
        }
    }

    /// Poll loop: redraw at most once per tick when the state is dirty,
    /// otherwise wait up to one tick for input.
    #[instrument(skip_all)]
    fn run(&mut self, terminal: &mut Term) -> Result<()> {
        info!("Let's play noughts and crosses");
        let interval = self.config.poll_interval();

        loop {
            if let Some(snapshot) = self.signal.poll() {
                self.snapshot = snapshot;
                self.repaint(terminal)?;
            } else if self.signal.is_closed() {
                warn!("Game loop gone, closing display");
                return Ok(());
            }

            if !event::poll(interval)? {
                continue;
            }

            match translate(&event::read()?, self.config) {
                Some(DisplayAction::Send(intent)) => {
                    if self.intents.blocking_send(intent).is_err() {
                        warn!("Game loop gone, closing display");
                        return Ok(());
                    }
                }
                Some(DisplayAction::Quit) => {
                    info!("Player quit");
                    return Ok(());
                }
                Some(DisplayAction::Repaint) => self.repaint(terminal)?,
                None => {}
            }
        }
    }

    fn repaint(&self, terminal: &mut Term) -> Result<()> {
        terminal.draw(|frame| draw(frame, &self.snapshot, self.config))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_screen_sequences() {
        let mut out = Vec::new();
        restore_screen(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        // Leave alternate screen, then show cursor.
        assert!(out.contains("\x1b[?1049l"), "{out:?}");
        assert!(out.contains("\x1b[?25h"), "{out:?}");
        assert!(out.find("\x1b[?1049l") < out.find("\x1b[?25h"));
    }
}
