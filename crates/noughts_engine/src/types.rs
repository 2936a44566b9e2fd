//! Core domain types for the board.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum PlayerId {
    /// First player (noughts, moves first).
    P1,
    /// Second player (crosses).
    P2,
}

impl PlayerId {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }

    /// Player number as shown to humans (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            PlayerId::P1 => 1,
            PlayerId::P2 => 2,
        }
    }

    /// The mark this player places on the board.
    pub fn mark(self) -> Mark {
        match self {
            PlayerId::P1 => Mark::Nought,
            PlayerId::P2 => Mark::Cross,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Symbol drawn for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Circle, played by [`PlayerId::P1`].
    #[display("O")]
    Nought,
    /// Cross, played by [`PlayerId::P2`].
    #[display("X")]
    Cross,
}

impl Mark {
    /// Name of the mark in the plural, as used in the legend.
    pub fn plural(self) -> &'static str {
        match self {
            Mark::Nought => "noughts",
            Mark::Cross => "crosses",
        }
    }
}

/// A single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Claimed by a player.
    Owned(PlayerId),
}

impl Cell {
    /// Returns the owner, if any.
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Owned(player) => Some(player),
        }
    }

    /// True if no player owns the cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Overwrites the cell at the given position.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of owned cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = Position::ALL[row * 3 + col];
                match self.get(pos) {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Owned(player) => write!(f, "{}", player.mark())?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the player is the one to move.
    InProgress(PlayerId),
    /// Game ended with a completed line.
    Won(PlayerId),
    /// Board full without a line.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    /// The player to move, while in progress.
    pub fn active_player(self) -> Option<PlayerId> {
        match self {
            GameStatus::InProgress(player) => Some(player),
            _ => None,
        }
    }

    /// The winner, once won.
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::InProgress(PlayerId::P1)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress(player) => write!(f, "It's player {}'s turn", player.number()),
            GameStatus::Won(player) => write!(f, "Player {} has won!", player.number()),
            GameStatus::Draw => write!(f, "Game ended in a draw"),
        }
    }
}
