//! Game controller.
//!
//! `GameState` is an immutable value: every intent consumes the old state
//! and returns the next one. The player to move is never stored; it is the
//! parity of the viewed step.

use super::action::Intent;
use super::board::Board;
use super::history::{History, MoveRecord};
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::rules::{MoveError, WinLine};
use super::types::Player;
use super::variant::Variant;
use super::view::{GameView, MoveEntry};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Status of the board at the viewed step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Player whose mark would be placed next.
        next: Player,
    },
    /// A line was completed.
    Won(WinLine),
    /// Every square is filled and nobody won.
    Draw,
}

impl GameStatus {
    /// Returns the winning line if the game is won.
    pub fn winning_line(&self) -> Option<&WinLine> {
        match self {
            GameStatus::Won(line) => Some(line),
            _ => None,
        }
    }

    /// True for [`GameStatus::Won`] and [`GameStatus::Draw`].
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// Reason a stored game state was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StateError {
    /// The history has no initial record.
    #[display("History is empty")]
    EmptyHistory,

    /// The viewed step does not index a record.
    #[display("Step {} is outside history of {} records", step, len)]
    StepOutOfRange {
        /// Stored step.
        step: usize,
        /// Number of records.
        len: usize,
    },

    /// A snapshot does not have the variant's shape.
    #[display("Board at step {} does not match the variant's dimensions", _0)]
    DimensionMismatch(usize),

    /// The records do not form a legal game.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for StateError {}

fn describe_violations(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Complete game state: variant, history, viewed step and move-list order.
///
/// Deserialization goes through the same checks as a played game, so a
/// loaded state can always be viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredGameState")]
pub struct GameState {
    variant: Variant,
    history: History,
    step_number: usize,
    ascending: bool,
}

impl GameState {
    /// Creates a new game at the initial empty board.
    #[instrument(skip(variant), fields(kind = %variant.kind()))]
    pub fn new(variant: Variant) -> Self {
        info!("Starting new game");
        let board = Board::new(*variant.dimensions());
        Self {
            variant,
            history: History::new(board),
            step_number: 0,
            ascending: true,
        }
    }

    /// Applies `intents` in order to a fresh game.
    #[instrument(skip(variant, intents))]
    pub fn replay(variant: Variant, intents: impl IntoIterator<Item = Intent>) -> Self {
        intents
            .into_iter()
            .fold(Self::new(variant), |state, intent| state.apply(intent))
    }

    /// Returns the variant configuration.
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Returns the full history, including any future past the viewed step.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the viewed history entry.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Move-list display order.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// The viewed history entry.
    pub fn current(&self) -> &MoveRecord {
        &self.history.records()[self.step_number]
    }

    /// The viewed board.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Player whose mark would be placed next from the viewed step.
    pub fn to_move(&self) -> Player {
        Player::to_move_at(self.step_number)
    }

    /// Status of the viewed board.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn status(&self) -> GameStatus {
        let board = self.board();
        if let Some(line) = self.variant.win_rule().detect(board) {
            GameStatus::Won(line)
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.to_move(),
            }
        }
    }

    /// Status line using the variant's bare labels.
    pub fn status_text(&self) -> String {
        self.describe_status(&self.status())
    }

    fn describe_status(&self, status: &GameStatus) -> String {
        match status {
            GameStatus::InProgress { next } => {
                format!("Next player: {}", self.variant.label(*next))
            }
            GameStatus::Won(line) => format!("Winner: {}", self.variant.label(*line.player())),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }

    /// Targets a move from the viewed step would accept.
    pub fn legal_targets(&self) -> Vec<usize> {
        if self.status().is_over() {
            return Vec::new();
        }
        self.variant.placement().legal_targets(self.board())
    }

    /// Plays `target` from the viewed step, returning the next state.
    ///
    /// Any history past the viewed step is discarded. `self` is left as is.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] explaining why the move is illegal.
    #[instrument(skip(self), fields(step = self.step_number, player = ?self.to_move()))]
    pub fn try_move(&self, target: usize) -> Result<Self, MoveError> {
        let player = self.to_move();
        let (index, board) = self.variant.placement().apply(
            self.board(),
            *self.variant.win_rule(),
            target,
            player,
        )?;

        let next = Self {
            variant: self.variant.clone(),
            history: self
                .history
                .clone()
                .append(self.step_number, MoveRecord::played(board, index)),
            step_number: self.step_number + 1,
            ascending: self.ascending,
        };

        #[cfg(debug_assertions)]
        GameInvariants::check_all(&next).map_err(|violations| {
            let descriptions = describe_violations(&violations);
            tracing::warn!(%descriptions, "Invariant violated after move");
            MoveError::InvariantViolation(descriptions)
        })?;

        info!(index, step = next.step_number, "Move applied");
        Ok(next)
    }

    /// Plays `target`, or returns the state unchanged if the move is illegal.
    #[instrument(skip(self))]
    pub fn attempt_move(self, target: usize) -> Self {
        match self.try_move(target) {
            Ok(next) => next,
            Err(error) => {
                debug!(%error, "Move rejected");
                self
            }
        }
    }

    /// Views the history at `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not an index of the history. Jump targets are
    /// expected to come from the rendered move list.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(mut self, step: usize) -> Self {
        assert!(
            step < self.history.len(),
            "jump target {} outside history of {} records",
            step,
            self.history.len()
        );
        debug!(from = self.step_number, "Jumping");
        self.step_number = step;
        self
    }

    /// Flips the move-list display order.
    #[instrument(skip(self))]
    pub fn toggle_order(mut self) -> Self {
        self.ascending = !self.ascending;
        self
    }

    /// Applies one intent.
    #[instrument(skip(self))]
    pub fn apply(self, intent: Intent) -> Self {
        match intent {
            Intent::Move(target) => self.attempt_move(target),
            Intent::JumpTo(step) => self.jump_to(step),
            Intent::ToggleOrder => self.toggle_order(),
        }
    }

    /// Move list entries in display order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let dims = self.variant.dimensions();
        let mut entries: Vec<MoveEntry> = self
            .history
            .records()
            .iter()
            .enumerate()
            .map(|(step, record)| {
                let player = record.position().map(|_| Player::placed_at(step));
                let label = player.map(|p| self.variant.label(p));
                MoveEntry::new(
                    step,
                    player,
                    label,
                    record.position().map(|i| (dims.col_of(i), dims.row_of(i))),
                    step == self.step_number,
                )
            })
            .collect();
        if !self.ascending {
            entries.reverse();
        }
        entries
    }

    /// Builds the read model for a presentation layer.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        let status = self.status();
        GameView::new(
            self.board().clone(),
            self.describe_status(&status),
            status.winning_line().cloned(),
            status,
            self.moves(),
            self.ascending,
            self.legal_targets(),
        )
    }

    /// Mutable history access for invariant tests.
    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Sets the viewed step without bounds checks (invariant tests).
    #[cfg(test)]
    pub(crate) fn set_step(&mut self, step: usize) {
        self.step_number = step;
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct StoredGameState {
    variant: Variant,
    history: History,
    step_number: usize,
    ascending: bool,
}

impl TryFrom<StoredGameState> for GameState {
    type Error = StateError;

    #[instrument(skip_all, fields(step = stored.step_number, len = stored.history.len()))]
    fn try_from(stored: StoredGameState) -> Result<Self, Self::Error> {
        let len = stored.history.len();
        if stored.step_number >= len {
            return Err(StateError::StepOutOfRange {
                step: stored.step_number,
                len,
            });
        }

        let dims = *stored.variant.dimensions();
        if let Some(step) = stored.history.records().iter().position(|record| {
            record.board().dimensions() != dims || record.board().squares().len() != dims.len()
        }) {
            return Err(StateError::DimensionMismatch(step));
        }

        let state = Self {
            variant: stored.variant,
            history: stored.history,
            step_number: stored.step_number,
            ascending: stored.ascending,
        };
        GameInvariants::check_all(&state).map_err(|violations| {
            let descriptions = describe_violations(&violations);
            tracing::warn!(%descriptions, "Stored game rejected");
            StateError::InvariantViolation(descriptions)
        })?;

        debug!("Stored game accepted");
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}
