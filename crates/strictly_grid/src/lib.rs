//! Strictly Grid - game-state engine for two-player grid games
//!
//! Pure data model and rules for 3×3 tic-tac-toe and 7×6 connect four,
//! with a branchable history that lets a presentation layer travel back to
//! any earlier position and play on from there.
//!
//! # Architecture
//!
//! - **Board**: fixed-size grid of squares with row/column indexing
//! - **Rules**: win detection (fixed triples or runs), draw detection and
//!   placement policies (free or gravity)
//! - **History**: snapshots tagged with the cell just played
//! - **GameState**: immutable controller; every intent returns a new state
//! - **GameView**: the read model a renderer consumes
//!
//! # Example
//!
//! ```
//! use strictly_grid::{GameState, Intent, Variant};
//!
//! let game = GameState::replay(Variant::tic_tac_toe(), [0, 4, 1, 3, 2].map(Intent::Move));
//! assert_eq!(game.status_text(), "Winner: X");
//! assert_eq!(game.view().winning_line().as_ref().map(|l| l.cells().clone()), Some(vec![0, 1, 2]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
mod history;
mod types;
mod variant;
mod view;

pub mod invariants;
pub mod rules;

pub use action::Intent;
pub use board::{Board, Dimensions};
pub use game::{GameState, GameStatus, StateError};
pub use history::{History, MoveRecord};
pub use rules::{Direction, MoveError, Placement, WinLine, WinRule};
pub use types::{Labels, Player, Square};
pub use variant::{Variant, VariantKind};
pub use view::{GameView, MoveEntry};
