//! Board coordinates and the move-intent wire form.

use serde::{Deserialize, Serialize};

/// A position on the board, `row` and `col` both in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 9 positions, row-major.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Creates a position, or `None` if either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then(|| Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Creates a position from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    /// Row, top to bottom.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column, left to right.
    pub fn col(self) -> usize {
        self.col as usize
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<CellClick> for Position {
    type Error = CellClick;

    fn try_from(click: CellClick) -> Result<Self, Self::Error> {
        let row = usize::try_from(click.row).map_err(|_| click)?;
        let col = usize::try_from(click.col).map_err(|_| click)?;
        Position::new(row, col).ok_or(click)
    }
}

/// A click as reported by the display: a board cell, or
/// [`CellClick::OUTSIDE`] when the pointer missed the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellClick {
    /// Row, or -1 outside the board.
    pub row: i32,
    /// Column, or -1 outside the board.
    pub col: i32,
}

impl CellClick {
    /// Sentinel for a click outside the playable area.
    pub const OUTSIDE: CellClick = CellClick { row: -1, col: -1 };

    /// Creates a click at the given coordinates.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl From<Position> for CellClick {
    fn from(pos: Position) -> Self {
        Self {
            row: pos.row as i32,
            col: pos.col as i32,
        }
    }
}
