//! Core domain types shared by every grid variant.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player (moves on odd steps).
    A,
    /// Second player.
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Player whose turn it is when the history is viewed at `step`.
    ///
    /// Even steps belong to `A`, odd steps to `B`.
    pub fn to_move_at(step: usize) -> Self {
        if step % 2 == 0 { Player::A } else { Player::B }
    }

    /// Player whose mark was placed to produce history entry `step` (`step >= 1`).
    pub fn placed_at(step: usize) -> Self {
        Self::to_move_at(step + 1)
    }
}

/// A square on a grid board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Display labels for the two players of a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    /// Label for [`Player::A`].
    pub first: String,
    /// Label for [`Player::B`].
    pub second: String,
}

impl Labels {
    /// Creates a label pair.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Returns the label of `player`.
    pub fn of(&self, player: Player) -> &str {
        match player {
            Player::A => &self.first,
            Player::B => &self.second,
        }
    }
}
