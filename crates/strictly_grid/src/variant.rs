//! Variant configuration: board size, win rule, placement policy and labels.

use super::board::Dimensions;
use super::rules::{Placement, WinRule};
use super::types::{Labels, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The built-in variants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum VariantKind {
    /// 3×3 three-in-a-row with free placement.
    #[default]
    TicTacToe,
    /// 7×6 four-in-a-row with gravity drop.
    ConnectFour,
}

impl VariantKind {
    /// Builds the variant configuration.
    pub fn variant(self) -> Variant {
        match self {
            VariantKind::TicTacToe => Variant::tic_tac_toe(),
            VariantKind::ConnectFour => Variant::connect_four(),
        }
    }
}

/// Everything the engine needs to know about a game family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Variant {
    /// Which built-in variant this is.
    kind: VariantKind,
    /// Grid size.
    dimensions: Dimensions,
    /// How a winner is detected.
    win_rule: WinRule,
    /// How a target becomes a landing cell.
    placement: Placement,
    /// Player display labels.
    labels: Labels,
}

impl Variant {
    /// Classic 3×3 tic-tac-toe, X moves first.
    #[instrument]
    pub fn tic_tac_toe() -> Self {
        Self {
            kind: VariantKind::TicTacToe,
            dimensions: Dimensions::new(3, 3),
            win_rule: WinRule::FixedLines,
            placement: Placement::Free,
            labels: Labels::new("X", "O"),
        }
    }

    /// 7 columns by 6 rows, four in a row wins, Blue moves first.
    #[instrument]
    pub fn connect_four() -> Self {
        Self {
            kind: VariantKind::ConnectFour,
            dimensions: Dimensions::new(7, 6),
            win_rule: WinRule::Run { length: 4 },
            placement: Placement::Gravity,
            labels: Labels::new("Blue", "Red"),
        }
    }

    /// Replaces the player labels.
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Label of `player` in this variant.
    pub fn label(&self, player: Player) -> &str {
        self.labels.of(player)
    }
}

impl Default for Variant {
    fn default() -> Self {
        VariantKind::default().variant()
    }
}
