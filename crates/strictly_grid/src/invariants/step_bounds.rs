//! Step bounds invariant: the viewed step exists.

use super::super::GameState;
use super::Invariant;

/// Invariant: `step_number` indexes an existing history entry.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.step_number() < game.history().len()
    }

    fn description() -> &'static str {
        "Viewed step is inside the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_step_violates() {
        let mut game = GameState::default();
        assert!(StepInBoundsInvariant::holds(&game));
        game.set_step(1);
        assert!(!StepInBoundsInvariant::holds(&game));
    }
}
