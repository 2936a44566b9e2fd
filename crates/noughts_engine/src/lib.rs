//! Board engine for noughts and crosses.
//!
//! This crate owns the 3×3 board, the turn pointer and the terminal
//! (win/draw) detection. It knows nothing about terminals, threads or
//! channels: every accepted mutation is reported to a [`StateObserver`],
//! which is the only way state leaves the engine.
//!
//! # Example
//!
//! ```
//! use noughts_engine::{BoardEngine, GameStatus, PlayerId};
//!
//! let mut engine = BoardEngine::default();
//! engine.apply_move(0, 0).unwrap();
//! assert_eq!(engine.status(), GameStatus::InProgress(PlayerId::P2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod position;
pub mod rules;
mod types;

pub use engine::{BoardEngine, Snapshot, StateObserver};
pub use error::InvalidMove;
pub use position::{CellClick, Position};
pub use rules::{Line, LineKind, LINES};
pub use types::{Board, Cell, GameStatus, Mark, PlayerId};
