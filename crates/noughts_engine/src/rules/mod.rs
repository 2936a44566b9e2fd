//! Game rules.
//!
//! Pure functions over a [`Board`](crate::Board); the engine composes
//! them after each move.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{victory_line, Line, LineKind, LINES};
