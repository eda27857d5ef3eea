//! First-class intent types.
//!
//! Intents are what a presentation layer sends to the engine. They are
//! plain values so a session can be logged, serialized and replayed.

use serde::{Deserialize, Serialize};

/// A user gesture forwarded to the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Play at a cell (free placement) or column (gravity).
    #[display("move {}", _0)]
    Move(usize),
    /// View the history at the given step.
    #[display("jump {}", _0)]
    JumpTo(usize),
    /// Flip the move list between ascending and descending order.
    #[display("toggle order")]
    ToggleOrder,
}
