//! Tests for the read model handed to front-ends.

use rewind_tictactoe::{GameSession, GameStatus, Player};

#[test]
fn test_initial_view() {
    let view = GameSession::new().view();

    assert_eq!(view.board().occupied(), 0);
    assert_eq!(*view.win_line(), None);
    assert_eq!(*view.status(), GameStatus::InProgress { next: Player::X });
    assert_eq!(view.moves().len(), 1);
    assert_eq!(view.moves()[0].label(), "0. Game start");
    assert!(*view.moves()[0].is_latest());
    assert!(*view.moves()[0].is_current());
}

#[test]
fn test_move_labels_follow_history() {
    let mut session = GameSession::new();
    for cell in [4, 0, 5] {
        session.play_move(cell);
    }
    session.jump_to(1).expect("in range");

    let view = session.view();
    let labels: Vec<&str> = view.moves().iter().map(|m| m.label().as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "0. Game start",
            "1. Turn position: row: 2 col: 2",
            "2. Turn position: row: 1 col: 1",
            "3. Turn position: row: 2 col: 3",
        ]
    );

    let latest: Vec<bool> = view.moves().iter().map(|m| *m.is_latest()).collect();
    assert_eq!(latest, vec![false, false, false, true]);
    let current: Vec<bool> = view.moves().iter().map(|m| *m.is_current()).collect();
    assert_eq!(current, vec![false, true, false, false]);
    assert_eq!(view.moves()[3].jump_label(), "Return to move #3");
}

#[test]
fn test_win_line_in_view() {
    let mut session = GameSession::new();
    for cell in [2, 0, 4, 1, 6] {
        session.play_move(cell);
    }

    let view = session.view();
    assert_eq!(*view.win_line(), Some([2, 4, 6]));
    assert_eq!(view.status().to_string(), "Winner: X");
}

#[test]
fn test_reversed_order_is_render_only() {
    let mut session = GameSession::new();
    for cell in [0, 1] {
        session.play_move(cell);
    }
    session.toggle_list_order();

    let view = session.view();
    assert!(*view.list_reversed());
    let rendered: Vec<usize> = view.ordered_moves().iter().map(|m| *m.step()).collect();
    assert_eq!(rendered, vec![2, 1, 0]);
    assert!(session.history()[0].coordinates().is_none());
}

#[test]
fn test_view_serializes() {
    let mut session = GameSession::new();
    session.play_move(4);

    let json = serde_json::to_value(session.view()).expect("serializable");
    assert_eq!(json["step"], 1);
    assert_eq!(json["list_reversed"], false);
    assert_eq!(json["moves"][1]["label"], "1. Turn position: row: 2 col: 2");
    assert_eq!(json["moves"][1]["coordinates"]["row"], 2);
    assert_eq!(json["status"]["InProgress"]["next"], "O");
    assert_eq!(json["board"]["squares"][4]["Occupied"], "X");
    assert!(json["win_line"].is_null());
}
