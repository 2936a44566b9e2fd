//! Line (victory) detection.

use crate::{Board, PlayerId, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which of the 8 triples a line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Row `0..3`, top to bottom.
    Row(u8),
    /// Column `0..3`, left to right.
    Column(u8),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl LineKind {
    /// The three positions on this line.
    pub fn positions(self) -> [Position; 3] {
        let at = |row: usize, col: usize| Position::ALL[row * 3 + col];
        match self {
            LineKind::Row(r) => {
                let r = r as usize;
                [at(r, 0), at(r, 1), at(r, 2)]
            }
            LineKind::Column(c) => {
                let c = c as usize;
                [at(0, c), at(1, c), at(2, c)]
            }
            LineKind::MainDiagonal => [at(0, 0), at(1, 1), at(2, 2)],
            LineKind::AntiDiagonal => [at(0, 2), at(1, 1), at(2, 0)],
        }
    }
}

/// Scan order: rows top-to-bottom, columns left-to-right, main diagonal,
/// anti-diagonal.
pub const LINES: [LineKind; 8] = [
    LineKind::Row(0),
    LineKind::Row(1),
    LineKind::Row(2),
    LineKind::Column(0),
    LineKind::Column(1),
    LineKind::Column(2),
    LineKind::MainDiagonal,
    LineKind::AntiDiagonal,
];

/// A completed line and who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// Which triple.
    pub kind: LineKind,
    /// Owner of all three cells.
    pub owner: PlayerId,
}

impl Line {
    /// The three positions on this line.
    pub fn positions(&self) -> [Position; 3] {
        self.kind.positions()
    }

    /// True if `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}

/// Returns the first uniformly owned line in [`LINES`] order.
#[instrument(skip(board))]
pub fn victory_line(board: &Board) -> Option<Line> {
    LINES.into_iter().find_map(|kind| {
        let [a, b, c] = kind.positions();
        let owner = board.get(a).owner()?;
        (board.get(b).owner() == Some(owner) && board.get(c).owner() == Some(owner))
            .then_some(Line { kind, owner })
    })
}
