//! History chain invariant: each snapshot extends its predecessor by one mark.

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: the history is a chain of single-mark extensions.
///
/// Entry 0 is an empty board with no position. Entry `k` differs from
/// entry `k - 1` in exactly its recorded position, which holds the mark of
/// the player who moves on step `k`.
pub struct HistoryChainInvariant;

impl Invariant<GameState> for HistoryChainInvariant {
    fn holds(game: &GameState) -> bool {
        let records = game.history().records();
        let Some(first) = records.first() else {
            return false;
        };
        if first.position().is_some()
            || first.board().squares().iter().any(|s| *s != Square::Empty)
        {
            return false;
        }

        records.windows(2).enumerate().all(|(i, pair)| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(position) = *pair[1].position() else {
                return false;
            };
            let changed: Vec<usize> = before
                .squares()
                .iter()
                .zip(after.squares())
                .enumerate()
                .filter(|(_, (b, a))| b != a)
                .map(|(index, _)| index)
                .collect();

            changed == [position]
                && before.get(position) == Some(Square::Empty)
                && after.get(position) == Some(Square::Occupied(Player::placed_at(i + 1)))
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly the recorded mark to its predecessor"
    }
}
