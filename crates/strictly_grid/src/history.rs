//! Branchable move history.
//!
//! Every entry owns its own board snapshot. Appending from an earlier step
//! drops the abandoned future before the new entry is pushed.

use super::board::Board;
use super::game::StateError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One history entry: a board snapshot and the cell filled to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveRecord {
    /// Board after the move.
    board: Board,
    /// Cell filled by the move; `None` for the initial record.
    position: Option<usize>,
}

impl MoveRecord {
    /// The record of an unplayed board.
    pub fn initial(board: Board) -> Self {
        Self {
            board,
            position: None,
        }
    }

    /// The record produced by filling `position`.
    pub fn played(board: Board, position: usize) -> Self {
        Self {
            board,
            position: Some(position),
        }
    }
}

/// Non-empty sequence of [`MoveRecord`]s; index 0 is the initial board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredHistory")]
pub struct History {
    records: Vec<MoveRecord>,
}

#[derive(Deserialize)]
struct StoredHistory {
    records: Vec<MoveRecord>,
}

impl TryFrom<StoredHistory> for History {
    type Error = StateError;

    fn try_from(stored: StoredHistory) -> Result<Self, Self::Error> {
        if stored.records.is_empty() {
            return Err(StateError::EmptyHistory);
        }
        Ok(Self {
            records: stored.records,
        })
    }
}

impl History {
    /// Creates a history holding only the initial record for `board`.
    #[instrument(skip(board))]
    pub fn new(board: Board) -> Self {
        Self {
            records: vec![MoveRecord::initial(board)],
        }
    }

    /// Number of records (always at least one).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; kept alongside [`History::len`].
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&MoveRecord> {
        self.records.get(step)
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Drops every record past `up_to_step`, then appends `record`.
    ///
    /// The new record ends up at index `up_to_step + 1`.
    #[instrument(skip(self, record), fields(len = self.records.len()))]
    pub fn append(mut self, up_to_step: usize, record: MoveRecord) -> Self {
        let keep = (up_to_step + 1).min(self.records.len());
        if keep < self.records.len() {
            debug!(
                discarded = self.records.len() - keep,
                "Truncating abandoned future"
            );
        }
        self.records.truncate(keep);
        self.records.push(record);
        self
    }

    /// Mutable access for invariant tests.
    #[cfg(test)]
    pub(crate) fn records_mut(&mut self) -> &mut Vec<MoveRecord> {
        &mut self.records
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Dimensions, Player};
    use super::*;

    fn empty() -> Board {
        Board::new(Dimensions::new(3, 3))
    }

    #[test]
    fn test_new_history_has_initial_record() {
        let history = History::new(empty());
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.get(0).and_then(|r| *r.position()), None);
    }

    #[test]
    fn test_append_truncates_future() {
        let mut history = History::new(empty());
        let mut board = empty();
        for (step, cell) in [0, 1, 2, 3].into_iter().enumerate() {
            board = board.with(cell, Player::placed_at(step + 1)).expect("in bounds");
            history = history.append(step, MoveRecord::played(board.clone(), cell));
        }
        assert_eq!(history.len(), 5);

        let branch = history
            .get(2)
            .map(|r| r.board().clone())
            .expect("step 2")
            .with(8, Player::placed_at(3))
            .expect("in bounds");
        let history = history.append(2, MoveRecord::played(branch, 8));

        assert_eq!(history.len(), 4);
        assert_eq!(history.get(3).and_then(|r| *r.position()), Some(8));
        // Earlier snapshots are untouched by the branch.
        assert!(history.get(2).is_some_and(|r| r.board().is_empty(8)));
    }
}
