//! Move rejection.

use crate::{GameStatus, Position};

/// A move the engine refused. The board is unchanged after any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// Click outside the board, or coordinates out of range.
    #[display("No cell at ({}, {})", row, col)]
    OutsideBoard {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// The cell is already owned.
    #[display("Cell {} is already taken", _0)]
    CellOccupied(Position),

    /// The game has ended; only a reset is accepted.
    #[display("Game is over: {}", _0)]
    GameOver(GameStatus),
}

impl std::error::Error for InvalidMove {}
