//! Move legality and landing resolution.

use super::super::{Board, Player};
use super::win::WinRule;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Placement policy of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// The target is a cell index; any empty cell may be taken.
    Free,
    /// The target is a column; the mark drops to the lowest empty cell.
    Gravity,
}

/// Reason a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the target cell is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The target column has no empty square.
    #[display("Column {} is full", _0)]
    ColumnFull(usize),

    /// The target does not name a cell (or column) of the board.
    #[display("Target {} is out of bounds", _0)]
    OutOfBounds(usize),

    /// The viewed board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl Placement {
    /// Resolves `target` to the index the mark would land on.
    ///
    /// Does not check for a finished game; see [`Placement::apply`].
    #[instrument(skip(board))]
    pub fn landing(&self, board: &Board, target: usize) -> Result<usize, MoveError> {
        let dims = board.dimensions();
        match self {
            Placement::Free => {
                if target >= dims.len() {
                    return Err(MoveError::OutOfBounds(target));
                }
                if !board.is_empty(target) {
                    return Err(MoveError::SquareOccupied(target));
                }
                Ok(target)
            }
            Placement::Gravity => {
                if target >= dims.width {
                    return Err(MoveError::OutOfBounds(target));
                }
                (0..dims.height)
                    .rev()
                    .map(|row| dims.index_of(row, target))
                    .find(|&index| board.is_empty(index))
                    .ok_or(MoveError::ColumnFull(target))
            }
        }
    }

    /// Places `player` according to this policy, returning the landing index
    /// and a fresh board.
    ///
    /// The input board is never modified.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if `rule` already finds a winner on `board`
    /// - [`MoveError::SquareOccupied`], [`MoveError::ColumnFull`] or
    ///   [`MoveError::OutOfBounds`] if the target cannot take a mark
    #[instrument(skip(board))]
    pub fn apply(
        &self,
        board: &Board,
        rule: WinRule,
        target: usize,
        player: Player,
    ) -> Result<(usize, Board), MoveError> {
        if rule.detect(board).is_some() {
            return Err(MoveError::GameOver);
        }
        let index = self.landing(board, target)?;
        let next = board.with(index, player).ok_or(MoveError::OutOfBounds(index))?;
        debug!(index, "Mark placed");
        Ok((index, next))
    }

    /// Targets that [`Placement::landing`] would accept on `board`.
    pub fn legal_targets(&self, board: &Board) -> Vec<usize> {
        let dims = board.dimensions();
        let candidates = match self {
            Placement::Free => 0..dims.len(),
            Placement::Gravity => 0..dims.width,
        };
        candidates
            .filter(|&t| self.landing(board, t).is_ok())
            .collect()
    }
}
