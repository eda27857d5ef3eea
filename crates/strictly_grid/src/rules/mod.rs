//! Game rules for grid variants.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from board storage and history so the game
//! controller can compose them per variant.

pub mod draw;
pub mod placement;
pub mod runs;
pub mod win;

pub use draw::{is_draw, is_full};
pub use placement::{MoveError, Placement};
pub use runs::Direction;
pub use win::{WinLine, WinRule};
