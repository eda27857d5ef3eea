//! Win detection.
//!
//! Two strategies share one contract: scan the board in a fixed order and
//! report the first winning line found, so simultaneous lines always
//! resolve the same way.

use super::super::{Board, Player};
use super::runs;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The eight three-in-a-row lines of a 3×3 board, in scan order.
pub const TRIPLES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A winning line: the winning player and the cells forming the run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct WinLine {
    /// The player owning every cell of the line.
    player: Player,
    /// Linear indices of the line, in the order they were walked.
    cells: Vec<usize>,
}

impl WinLine {
    /// Creates a winning line.
    pub fn new(player: Player, cells: Vec<usize>) -> Self {
        Self { player, cells }
    }

    /// True if `index` is part of the line.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Win condition of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinRule {
    /// The fixed set of 3×3 triples ([`TRIPLES`]).
    FixedLines,
    /// Any straight run of at least `length` same-player squares.
    Run {
        /// Minimum run length.
        length: usize,
    },
}

impl WinRule {
    /// Returns the first winning line on `board`, if any.
    #[instrument(skip(board))]
    pub fn detect(&self, board: &Board) -> Option<WinLine> {
        let line = match self {
            WinRule::FixedLines => check_triples(board),
            WinRule::Run { length } => runs::check_runs(board, *length),
        };
        if let Some(line) = &line {
            debug!(player = ?line.player, cells = ?line.cells, "Winning line found");
        }
        line
    }
}

/// Checks the fixed 3×3 triples in rows, columns, diagonals order.
#[instrument(skip(board))]
pub fn check_triples(board: &Board) -> Option<WinLine> {
    for [a, b, c] in TRIPLES {
        let sq = board.get(a)?;
        if let Some(player) = sq.player()
            && board.get(b) == Some(sq)
            && board.get(c) == Some(sq)
        {
            return Some(WinLine::new(player, vec![a, b, c]));
        }
    }

    None
}
