//! Draw detection.

use super::super::Board;
use super::win::WinRule;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A draw is a full board with no winning line under `rule`.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, rule: WinRule) -> bool {
    is_full(board) && rule.detect(board).is_none()
}
