//! Noughts and crosses in the terminal.
//!
//! Two actors share the game:
//!
//! - **GameLoop** owns the [`BoardEngine`] and applies intents one at a time.
//! - **Display** turns mouse and key input into intents, and redraws from
//!   the latest [`Snapshot`] whenever the engine reports a change.
//!
//! They talk only through an intent channel (display → loop) and a
//! coalescing redraw signal (loop → display).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod display;
mod game_loop;
mod logging;
mod redraw;

// Crate-level exports - CLI and configuration
pub use cli::Cli;
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Game loop
pub use game_loop::{intent_channel, Dispatch, GameLoop, Intent};

// Crate-level exports - Redraw notification
pub use redraw::{redraw_channel, RedrawSignal, WatchObserver};

// Crate-level exports - Logging
pub use logging::init_logging;

// Crate-level exports - Engine types
pub use noughts_engine::{
    Board, BoardEngine, Cell, CellClick, GameStatus, InvalidMove, Line, LineKind, Mark, PlayerId,
    Position, Snapshot, StateObserver,
};
