//! Read model handed to a presentation layer.

use super::board::Board;
use super::game::GameStatus;
use super::rules::WinLine;
use super::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    step: usize,
    /// Player who made the move; `None` for the game start.
    player: Option<Player>,
    /// `(col, row)` of the filled cell; `None` for the game start.
    coordinates: Option<(usize, usize)>,
    /// Human-readable button text.
    description: String,
    /// True for the viewed step.
    current: bool,
}

impl MoveEntry {
    /// Creates an entry, deriving the description from the other fields.
    pub fn new(
        step: usize,
        player: Option<Player>,
        label: Option<&str>,
        coordinates: Option<(usize, usize)>,
        current: bool,
    ) -> Self {
        let description = match (label, coordinates) {
            (Some(label), Some((col, row))) if step > 0 => {
                format!("Go to move #{} {}@({}, {})", step, label, col, row)
            }
            _ => "Go to game start".to_string(),
        };
        Self {
            step,
            player,
            coordinates,
            description,
            current,
        }
    }
}

/// Everything a renderer needs after each intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Board at the viewed step.
    board: Board,
    /// "Next player: ..", "Winner: .." or "Draw!".
    status_text: String,
    /// Present iff the viewed board is won.
    winning_line: Option<WinLine>,
    /// Structured status.
    status: GameStatus,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Display order flag.
    ascending: bool,
    /// Targets a move would currently accept.
    legal_targets: Vec<usize>,
}

impl GameView {
    /// Assembles a view.
    pub fn new(
        board: Board,
        status_text: String,
        winning_line: Option<WinLine>,
        status: GameStatus,
        moves: Vec<MoveEntry>,
        ascending: bool,
        legal_targets: Vec<usize>,
    ) -> Self {
        Self {
            board,
            status_text,
            winning_line,
            status,
            moves,
            ascending,
            legal_targets,
        }
    }

    /// True if `index` belongs to the winning line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.winning_line
            .as_ref()
            .is_some_and(|line| line.contains(index))
    }
}
