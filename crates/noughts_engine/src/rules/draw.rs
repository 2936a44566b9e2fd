//! Draw detection.

use super::win::victory_line;
use crate::{Board, Cell};
use tracing::instrument;

/// Checks if every cell is owned.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && victory_line(board).is_none()
}
