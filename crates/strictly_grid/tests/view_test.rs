//! Read model tests.

use strictly_grid::{GameState, Intent, Labels, Variant};

#[test]
fn test_view_reflects_viewed_step() {
    let game = GameState::replay(Variant::tic_tac_toe(), [0, 4, 1, 3, 2].map(Intent::Move));
    let view = game.clone().jump_to(3).view();

    assert_eq!(view.status_text(), "Next player: O");
    assert!(view.winning_line().is_none());
    assert_eq!(view.moves().len(), 6);
    assert!(*view.moves()[3].current());
    assert!(view.legal_targets().contains(&8));
    assert_eq!(view.board(), game.history().records()[3].board());
}

#[test]
fn test_custom_labels_flow_into_text() {
    let variant = Variant::connect_four().with_labels(Labels::new("Yellow", "Green"));
    let game = GameState::replay(variant, [2].map(Intent::Move));

    let view = game.view();
    assert_eq!(view.status_text(), "Next player: Green");
    assert_eq!(view.moves()[1].description(), "Go to move #1 Yellow@(2, 5)");
}

#[test]
fn test_view_serializes_to_json() {
    let game = GameState::replay(Variant::tic_tac_toe(), [0, 4, 1, 3, 2].map(Intent::Move));
    let json = serde_json::to_value(game.view()).expect("serializable");

    assert_eq!(json["status_text"], "Winner: X");
    assert_eq!(json["winning_line"]["cells"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["ascending"], true);
    assert_eq!(json["moves"][0]["description"], "Go to game start");
}

#[test]
fn test_intents_round_trip_through_json() {
    let intents = vec![Intent::Move(3), Intent::JumpTo(0), Intent::ToggleOrder];
    let json = serde_json::to_string(&intents).expect("serializable");
    let parsed: Vec<Intent> = serde_json::from_str(&json).expect("parsable");

    assert_eq!(
        GameState::replay(Variant::connect_four(), parsed),
        GameState::replay(Variant::connect_four(), intents)
    );
}
