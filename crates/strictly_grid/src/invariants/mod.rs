//! First-class invariants over [`GameState`](crate::GameState).
//!
//! Invariants are logical properties that must hold after every
//! transition. The controller checks them after moves in debug builds and
//! on every deserialized state. They can also be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod alternating_count;
pub mod history_chain;
pub mod step_bounds;

pub use alternating_count::AlternatingCountInvariant;
pub use history_chain::HistoryChainInvariant;
pub use step_bounds::StepInBoundsInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    StepInBoundsInvariant,
    HistoryChainInvariant,
    AlternatingCountInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Intent, MoveRecord, Player, Variant};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameState::new(Variant::connect_four());
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let game = GameState::replay(
            Variant::tic_tac_toe(),
            [0, 4, 8, 2].map(Intent::Move),
        )
        .jump_to(1)
        .attempt_move(5);
        assert_eq!(game.history().len(), 3);
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = GameState::replay(Variant::tic_tac_toe(), [4].map(Intent::Move));
        // Sneak an extra mark into the latest snapshot and view past the end.
        let forged = game.board().with(0, Player::A).expect("in bounds");
        game.history_mut().records_mut()[1] = MoveRecord::played(forged, 4);
        game.set_step(5);

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameState::default();
        type TwoInvariants = (StepInBoundsInvariant, HistoryChainInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
