//! The board engine state machine.
//!
//! States are `InProgress(P1)`, `InProgress(P2)`, `Won(_)` and `Draw`.
//! A move is only accepted while in progress; the terminal states are left
//! only through [`BoardEngine::reset`].

use crate::rules::{is_draw, is_full, victory_line};
use crate::{Board, Cell, CellClick, GameStatus, InvalidMove, Line, PlayerId, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Read-only copy of the engine state, for whoever renders it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board contents.
    pub board: Board,
    /// Current status.
    pub status: GameStatus,
    /// The completed line, when the game was won.
    pub winning_line: Option<Line>,
    /// Number of accepted mutations since the engine was created.
    pub revision: u64,
}

impl Snapshot {
    /// The player to move, if the game is in progress.
    pub fn active_player(&self) -> Option<PlayerId> {
        self.status.active_player()
    }
}

/// Receives every accepted state change.
pub trait StateObserver {
    /// Called after a successful move and after every reset.
    fn state_changed(&mut self, snapshot: &Snapshot);
}

impl StateObserver for () {
    fn state_changed(&mut self, _snapshot: &Snapshot) {}
}

impl StateObserver for Vec<Snapshot> {
    fn state_changed(&mut self, snapshot: &Snapshot) {
        self.push(snapshot.clone());
    }
}

/// Owns the board and the game status.
#[derive(Debug, Clone)]
pub struct BoardEngine<O = ()> {
    board: Board,
    status: GameStatus,
    revision: u64,
    observer: O,
}

impl Default for BoardEngine<()> {
    fn default() -> Self {
        Self::new(())
    }
}

impl<O: StateObserver> BoardEngine<O> {
    /// Creates an engine at `InProgress(P1)` with an empty board.
    ///
    /// The observer is not notified for the initial state; callers that
    /// need it can publish [`BoardEngine::snapshot`] themselves.
    pub fn new(observer: O) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::default(),
            revision: 0,
            observer,
        }
    }

    /// Clears the board and hands the first move to P1.
    ///
    /// Always succeeds and always notifies the observer.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.status = GameStatus::default();
        info!("Board reset");
        self.notify();
    }

    /// Places the active player's mark at `(row, col)`.
    ///
    /// `(-1, -1)` is the outside-board sentinel and is rejected like any
    /// other out-of-range coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the game is over, the coordinates are not
    /// on the board, or the cell is already owned. Nothing changes and the
    /// observer is not called.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn apply_move(&mut self, row: i32, col: i32) -> Result<GameStatus, InvalidMove> {
        let player = match self.status {
            GameStatus::InProgress(player) => player,
            status => {
                warn!("Move rejected, game is over");
                return Err(InvalidMove::GameOver(status));
            }
        };

        let pos = Position::try_from(CellClick::new(row, col)).map_err(|_| {
            warn!("Move rejected, not a board cell");
            InvalidMove::OutsideBoard { row, col }
        })?;

        if !self.board.is_empty(pos) {
            warn!(%pos, "Move rejected, cell occupied");
            return Err(InvalidMove::CellOccupied(pos));
        }

        self.board.set(pos, Cell::Owned(player));

        // Lines are judged for the player who just moved, before the turn
        // pointer advances.
        self.status = if victory_line(&self.board).is_some() {
            GameStatus::Won(player)
        } else if is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(player.opponent())
        };

        info!(%pos, ?player, status = ?self.status, "Move applied");
        self.notify();
        Ok(self.status)
    }

    /// Applies a click from the display.
    pub fn apply_click(&mut self, click: CellClick) -> Result<GameStatus, InvalidMove> {
        self.apply_move(click.row, click.col)
    }

    /// The first completed line in scan order, if any.
    pub fn victory_line(&self) -> Option<Line> {
        victory_line(&self.board)
    }

    /// True iff the board is full and nobody won.
    pub fn is_draw(&self) -> bool {
        match self.status {
            GameStatus::Won(_) => false,
            _ => is_draw(&self.board),
        }
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player to move, if the game is in progress.
    pub fn active_player(&self) -> Option<PlayerId> {
        self.status.active_player()
    }

    /// Board contents.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Accepted mutations so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Copies the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            status: self.status,
            winning_line: match self.status {
                GameStatus::Won(_) => self.victory_line(),
                _ => None,
            },
            revision: self.revision,
        }
    }

    /// The observer, for inspection.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn notify(&mut self) {
        self.revision += 1;
        let snapshot = self.snapshot();
        debug!(revision = snapshot.revision, "Notifying observer");
        self.observer.state_changed(&snapshot);
    }
}
