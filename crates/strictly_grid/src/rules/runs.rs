//! Run detection for the gravity variant.

use super::super::Board;
use super::win::WinLine;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Walk direction for run detection, in scan order.
///
/// The four directions cover every undirected line: the opposite direction
/// is seen from the other end of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 0 and the last column.
    UpRight,
    /// Towards the last column.
    Right,
    /// Towards the bottom row and the last column.
    DownRight,
}

impl Direction {
    /// Row and column delta of one step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::UpRight => (-1, 1),
            Direction::Right => (0, 1),
            Direction::DownRight => (1, 1),
        }
    }
}

/// Collects the contiguous same-player run starting at `start` in `direction`.
///
/// Empty starting squares yield an empty run.
pub fn walk(board: &Board, start: usize, direction: Direction) -> Vec<usize> {
    let Some(square) = board.get(start).filter(|s| s.player().is_some()) else {
        return Vec::new();
    };
    let dims = board.dimensions();
    let (d_row, d_col) = direction.delta();

    let mut run = vec![start];
    let mut cursor = start;
    while let Some(next) = dims.step(cursor, d_row, d_col)
        && board.get(next) == Some(square)
    {
        run.push(next);
        cursor = next;
    }
    run
}

/// Returns the first run of at least `length` squares in (cell, direction) order.
#[instrument(skip(board))]
pub fn check_runs(board: &Board, length: usize) -> Option<WinLine> {
    for (start, square) in board.squares().iter().enumerate() {
        let Some(player) = square.player() else {
            continue;
        };
        for direction in Direction::iter() {
            let run = walk(board, start, direction);
            if run.len() >= length {
                return Some(WinLine::new(player, run));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::super::super::{Dimensions, Player, Square};
    use super::*;

    fn connect_four(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new(Dimensions::new(7, 6));
        for &(i, p) in marks {
            board.set(i, Square::Occupied(p));
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_run() {
        let board = connect_four(&[]);
        assert_eq!(check_runs(&board, 4), None);
        assert!(walk(&board, 0, Direction::Right).is_empty());
    }

    #[test]
    fn test_horizontal_run() {
        let board = connect_four(&[
            (36, Player::B),
            (37, Player::B),
            (38, Player::B),
            (39, Player::B),
        ]);
        let line = check_runs(&board, 4).expect("run");
        assert_eq!(line.player(), &Player::B);
        assert_eq!(line.cells(), &vec![36, 37, 38, 39]);
    }

    #[test]
    fn test_run_does_not_wrap_rows() {
        // 4, 5, 6 end row 0; 7 starts row 1.
        let board = connect_four(&[
            (4, Player::A),
            (5, Player::A),
            (6, Player::A),
            (7, Player::A),
        ]);
        assert_eq!(check_runs(&board, 4), None);
    }

    #[test]
    fn test_diagonals() {
        // Up-right from the bottom-left corner: 35, 29, 23, 17.
        let rising = connect_four(&[
            (35, Player::A),
            (29, Player::A),
            (23, Player::A),
            (17, Player::A),
        ]);
        assert_eq!(
            check_runs(&rising, 4).map(|l| l.cells().clone()),
            Some(vec![35, 29, 23, 17])
        );

        // Down-right from the top-left corner: 0, 8, 16, 24.
        let falling = connect_four(&[
            (0, Player::B),
            (8, Player::B),
            (16, Player::B),
            (24, Player::B),
        ]);
        assert_eq!(
            check_runs(&falling, 4).map(|l| l.cells().clone()),
            Some(vec![0, 8, 16, 24])
        );
    }

    #[test]
    fn test_scan_order_prefers_earlier_cell_then_direction() {
        // Vertical run in column 0 and horizontal run along the bottom row
        // share cell 35. The vertical one is only seen walking up from 35,
        // and Up precedes Right.
        let board = connect_four(&[
            (14, Player::A),
            (21, Player::A),
            (28, Player::A),
            (35, Player::A),
            (36, Player::A),
            (37, Player::A),
            (38, Player::A),
        ]);
        let line = check_runs(&board, 4).expect("run");
        assert_eq!(line.cells(), &vec![35, 28, 21, 14]);
    }

    #[test]
    fn test_long_run_reports_whole_run() {
        let board = connect_four(&[
            (35, Player::A),
            (36, Player::A),
            (37, Player::A),
            (38, Player::A),
            (39, Player::A),
        ]);
        let line = check_runs(&board, 4).expect("run");
        assert_eq!(line.cells(), &vec![35, 36, 37, 38, 39]);
    }

    #[test]
    fn test_mixed_players_break_runs() {
        let board = connect_four(&[
            (35, Player::A),
            (36, Player::A),
            (37, Player::B),
            (38, Player::A),
            (39, Player::A),
        ]);
        assert_eq!(check_runs(&board, 4), None);
        assert_eq!(walk(&board, 35, Direction::Right), vec![35, 36]);
    }
}
