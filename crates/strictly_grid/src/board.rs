//! Fixed-size grid board and indexing helpers.

use super::types::{Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Width and height of a grid.
///
/// Squares are addressed by a linear row-major index; row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl Dimensions {
    /// Creates grid dimensions.
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of squares.
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// True for a degenerate zero-sized grid.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row of a linear index.
    pub const fn row_of(&self, index: usize) -> usize {
        index / self.width
    }

    /// Column of a linear index.
    pub const fn col_of(&self, index: usize) -> usize {
        index % self.width
    }

    /// Linear index of `(row, col)`.
    pub const fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Index reached by stepping `(d_row, d_col)` from `index`, or `None` off the grid.
    ///
    /// Columns never wrap into the neighbouring row.
    pub fn step(&self, index: usize, d_row: isize, d_col: isize) -> Option<usize> {
        let row = self.row_of(index).checked_add_signed(d_row)?;
        let col = self.col_of(index).checked_add_signed(d_col)?;
        (row < self.height && col < self.width).then(|| self.index_of(row, col))
    }
}

/// Grid board of squares in row-major order.
///
/// The length never changes after construction. Boards are treated as
/// snapshots: placing a mark yields a new board via [`Board::with`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    dimensions: Dimensions,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            squares: vec![Square::Empty; dimensions.len()],
        }
    }

    /// Returns the board dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Gets the square at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of squares occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns a copy of this board with `player` placed at `index`.
    ///
    /// `self` is left untouched. Returns `None` if `index` is out of bounds.
    #[instrument(skip(self))]
    pub fn with(&self, index: usize, player: Player) -> Option<Self> {
        if index >= self.squares.len() {
            return None;
        }
        let mut next = self.clone();
        next.squares[index] = Square::Occupied(player);
        Some(next)
    }

    /// Overwrites a square in place (test corruption helper).
    #[cfg(test)]
    pub(crate) fn set(&mut self, index: usize, square: Square) {
        self.squares[index] = square;
    }
}
