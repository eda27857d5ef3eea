//! Time-travel tests: jumping, branching and move-list ordering.

use strictly_grid::{GameState, GameStatus, Intent, Player, Variant};

#[test]
fn test_branch_truncates_future() {
    let game = GameState::replay(Variant::tic_tac_toe(), [0, 1, 2, 3].map(Intent::Move));
    assert_eq!(game.history().len(), 5);

    let game = game.jump_to(2).attempt_move(8);

    assert_eq!(game.history().len(), 4);
    assert_eq!(game.step_number(), 3);
    let positions: Vec<_> = game
        .history()
        .records()
        .iter()
        .map(|r| *r.position())
        .collect();
    assert_eq!(positions, vec![None, Some(0), Some(1), Some(8)]);
}

#[test]
fn test_jump_keeps_future_until_next_move() {
    let game = GameState::replay(Variant::tic_tac_toe(), [0, 1, 2].map(Intent::Move));
    let game = game.jump_to(1);

    assert_eq!(game.history().len(), 4);
    assert_eq!(game.to_move(), Player::B);
    assert_eq!(game.status_text(), "Next player: O");
    assert_eq!(game.board().squares().iter().filter(|s| s.player().is_some()).count(), 1);

    let game = game.jump_to(3);
    assert_eq!(game.to_move(), Player::B);
    assert_eq!(game.board().squares().iter().filter(|s| s.player().is_some()).count(), 3);
}

#[test]
fn test_jump_to_start_then_replay_differently() {
    let won = GameState::replay(Variant::tic_tac_toe(), [0, 4, 1, 3, 2].map(Intent::Move));
    let game = won.apply(Intent::JumpTo(0)).apply(Intent::Move(4));

    assert_eq!(game.history().len(), 2);
    assert_eq!(game.status(), GameStatus::InProgress { next: Player::B });
}

#[test]
fn test_snapshots_survive_branching() {
    let game = GameState::replay(Variant::connect_four(), [3, 3, 3].map(Intent::Move));
    let before: Vec<_> = game.history().records()[..3].to_vec();

    let game = game.jump_to(2).attempt_move(0);

    assert_eq!(&game.history().records()[..3], before.as_slice());
    assert_eq!(*game.current().position(), Some(35));
}

#[test]
fn test_move_list_order_and_current_flag() {
    let game = GameState::replay(
        Variant::tic_tac_toe(),
        [Intent::Move(4), Intent::Move(0), Intent::JumpTo(1), Intent::ToggleOrder],
    );
    let moves = game.moves();

    let steps: Vec<_> = moves.iter().map(|m| *m.step()).collect();
    assert_eq!(steps, vec![2, 1, 0]);
    let current: Vec<_> = moves.iter().map(|m| *m.current()).collect();
    assert_eq!(current, vec![false, true, false]);
    assert_eq!(moves[0].description(), "Go to move #2 O@(0, 0)");
    assert_eq!(moves[1].description(), "Go to move #1 X@(1, 1)");
    assert_eq!(moves[2].description(), "Go to game start");

    let game = game.toggle_order();
    assert!(game.ascending());
    assert_eq!(*game.moves()[0].step(), 0);
}

#[test]
#[should_panic(expected = "outside history")]
fn test_jump_past_history_panics() {
    let game = GameState::replay(Variant::tic_tac_toe(), [0].map(Intent::Move));
    let _ = game.jump_to(2);
}
