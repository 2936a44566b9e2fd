//! The single consumer of player intents.
//!
//! GameLoop exclusively owns the [`BoardEngine`]. Intents arrive over one
//! FIFO channel, so moves and resets are applied strictly in the order the
//! display issued them and the engine is never touched concurrently.

use noughts_engine::{BoardEngine, CellClick, GameStatus, InvalidMove, StateObserver};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// A request from the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// A click on the board, or on [`CellClick::OUTSIDE`].
    Move(CellClick),
    /// The restart key was pressed.
    Reset,
}

/// What the loop did with an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The move was applied; the new status.
    Moved(GameStatus),
    /// The move was refused and nothing changed.
    Rejected(InvalidMove),
    /// The finished game was cleared.
    Reset,
    /// Reset asked for while the game was still running.
    ResetIgnored(GameStatus),
}

/// Creates the hand-off channel between display and loop.
///
/// Capacity is one: a second intent waits until the loop has taken the
/// first.
pub fn intent_channel() -> (mpsc::Sender<Intent>, mpsc::Receiver<Intent>) {
    mpsc::channel(1)
}

/// Serializes intents onto the engine.
#[derive(Debug)]
pub struct GameLoop<O> {
    engine: BoardEngine<O>,
    intents: mpsc::Receiver<Intent>,
}

impl<O: StateObserver> GameLoop<O> {
    /// Creates a loop around an engine and the receiving end of
    /// [`intent_channel`].
    pub fn new(engine: BoardEngine<O>, intents: mpsc::Receiver<Intent>) -> Self {
        Self { engine, intents }
    }

    /// Receives intents until every sender is gone, then hands the engine
    /// back.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> BoardEngine<O> {
        info!("Game loop started");

        while let Some(intent) = self.intents.recv().await {
            let outcome = self.dispatch(intent);
            debug!(?intent, ?outcome, "Intent handled");
        }

        info!("Intent channel closed, game loop stopping");
        self.engine
    }

    /// Applies one intent.
    ///
    /// Invalid moves are logged and dropped. A reset is honoured only once
    /// the game has been won or drawn.
    #[instrument(skip(self), fields(status = ?self.engine.status()))]
    pub fn dispatch(&mut self, intent: Intent) -> Dispatch {
        match intent {
            Intent::Move(click) => match self.engine.apply_click(click) {
                Ok(status) => {
                    if let Some(winner) = status.winner() {
                        info!(%winner, "{}", status);
                    } else if status == GameStatus::Draw {
                        info!("{}", status);
                    }
                    Dispatch::Moved(status)
                }
                Err(err) => {
                    warn!(error = %err, "Invalid move, please click on an empty tile");
                    Dispatch::Rejected(err)
                }
            },
            Intent::Reset => {
                let status = self.engine.status();
                if status.is_terminal() {
                    self.engine.reset();
                    Dispatch::Reset
                } else {
                    debug!("Reset ignored, game still in progress");
                    Dispatch::ResetIgnored(status)
                }
            }
        }
    }

    /// The engine, read-only.
    pub fn engine(&self) -> &BoardEngine<O> {
        &self.engine
    }
}
