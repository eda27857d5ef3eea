//! Alternating count invariant: players take turns, first player first.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: entry `k` holds `k` marks, and the first player has either
/// as many marks as the second or exactly one more.
pub struct AlternatingCountInvariant;

impl Invariant<GameState> for AlternatingCountInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .records()
            .iter()
            .enumerate()
            .all(|(step, record)| {
                let first = record.board().count(Player::A);
                let second = record.board().count(Player::B);
                first + second == step && (first == second || first == second + 1)
            })
    }

    fn description() -> &'static str {
        "Players alternate turns, first player first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Intent, MoveRecord, Variant};

    #[test]
    fn test_alternating_sequence_holds() {
        let game = GameState::replay(Variant::tic_tac_toe(), [0, 4, 2, 6, 8].map(Intent::Move));
        assert!(AlternatingCountInvariant::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameState::replay(Variant::tic_tac_toe(), [0, 4].map(Intent::Move));
        let previous = game.history().records()[1].board().clone();
        let forged = previous.with(4, Player::A).expect("in bounds");
        game.history_mut().records_mut()[2] = MoveRecord::played(forged, 4);
        assert!(!AlternatingCountInvariant::holds(&game));
    }
}
