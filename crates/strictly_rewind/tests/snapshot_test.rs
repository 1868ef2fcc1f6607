//! Tests for the view-layer projection.

use strictly_rewind::{GameState, GameStatus, Player, Position, Snapshot};

#[test]
fn test_move_list_describes_each_mark() {
    let snapshot = GameState::replay(&[4, 0])
        .expect("valid replay")
        .snapshot();

    let played: Vec<_> = snapshot.moves().iter().map(|m| m.played()).collect();
    assert_eq!(
        played,
        [
            None,
            Some((Position::Center, Player::X)),
            Some((Position::TopLeft, Player::O)),
        ]
    );
    assert!(snapshot.moves()[2].is_current());
}

#[test]
fn test_snapshot_json_shape() {
    let snapshot = GameState::replay(&[4]).expect("valid replay").snapshot();
    let json = serde_json::to_value(&snapshot).expect("serializable");

    assert_eq!(json["status"], serde_json::json!({ "NextTurn": "O" }));
    assert_eq!(json["moves"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["moves"][1]["is_current"], serde_json::json!(true));
    assert_eq!(json["winning_line"], serde_json::Value::Null);

    let back: Snapshot = serde_json::from_value(json).expect("deserializable");
    assert_eq!(back, snapshot);
}

#[test]
fn test_status_after_jump_uses_cursor_parity() {
    let state = GameState::replay(&[0, 1, 3, 4, 6]).expect("valid replay");
    assert_eq!(*state.snapshot().status(), GameStatus::Winner(Player::X));

    let rewound = state.jump_to(3).expect("valid step");
    assert_eq!(*rewound.snapshot().status(), GameStatus::NextTurn(Player::O));
    assert_eq!(rewound.snapshot().current_step(), 3);
}
