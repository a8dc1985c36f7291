//! Tests for the derived presentation view.

use tictactrace::{Game, Outcome, Player, Position};

fn three_move_game() -> Game {
    let mut game = Game::new();
    game.play(Position::TopLeft); // X
    game.play(Position::Center); // O
    game.play(Position::TopRight); // X
    game
}

#[test]
fn test_ascending_move_list() {
    let view = three_move_game().view();

    assert!(view.ascending());
    let steps: Vec<usize> = view.moves().iter().map(|entry| entry.step()).collect();
    assert_eq!(steps, vec![0, 1, 2, 3]);

    assert!(view.moves()[0].detail().is_none(), "game start has no detail");
    let first = view.moves()[1].detail().expect("move 1 has a detail");
    assert_eq!(first.player(), Player::X);
    assert_eq!((first.row(), first.column()), (1, 1));
    let second = view.moves()[2].detail().expect("move 2 has a detail");
    assert_eq!(second.player(), Player::O);
    assert_eq!((second.row(), second.column()), (2, 2));
}

#[test]
fn test_descending_move_list_is_the_same_list_reversed() {
    let mut game = three_move_game();
    game.toggle_sort_order();
    let view = game.view();

    assert!(!view.ascending());
    let steps: Vec<usize> = view.moves().iter().map(|entry| entry.step()).collect();
    assert_eq!(steps, vec![3, 2, 1, 0]);

    // The game-start entry is still present, detail-free, at the far end.
    assert!(view.moves()[3].detail().is_none());
}

#[test]
fn test_current_marker_follows_the_step_pointer() {
    let mut game = three_move_game();
    game.jump_to(1);
    let view = game.view();

    let current: Vec<usize> = view
        .moves()
        .iter()
        .filter(|entry| entry.current())
        .map(|entry| entry.step())
        .collect();
    assert_eq!(current, vec![1]);
    assert_eq!(view.step(), 1);
    assert_eq!(view.to_move(), Player::O);
}

#[test]
fn test_view_reports_the_winning_line() {
    let mut game = Game::new();
    for position in [
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::TopRight,
    ] {
        game.play(position);
    }

    let view = game.view();
    assert_eq!(
        view.outcome().winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
    assert_eq!(view.outcome().winner(), Some(Player::X));
}

#[test]
fn test_view_reflects_the_displayed_step_not_the_latest() {
    let mut game = three_move_game();
    game.jump_to(0);
    let view = game.view();

    assert_eq!(*view.outcome(), Outcome::InProgress);
    assert!(view.board().is_empty(Position::TopLeft));
    // The full move list remains available while browsing.
    assert_eq!(view.moves().len(), 4);
}

#[test]
fn test_view_serializes_for_front_ends() {
    let mut game = Game::new();
    game.play(Position::TopLeft);

    let value = serde_json::to_value(game.view()).expect("view serializes");
    assert_eq!(value["ascending"], serde_json::json!(true));
    assert_eq!(value["step"], serde_json::json!(1));
    assert_eq!(value["to_move"], serde_json::json!("O"));
    assert_eq!(value["outcome"], serde_json::json!("InProgress"));
    assert_eq!(value["moves"][0]["detail"], serde_json::Value::Null);
    assert_eq!(value["moves"][1]["detail"]["player"], serde_json::json!("X"));
    assert_eq!(
        value["moves"][1]["detail"]["position"],
        serde_json::json!("TopLeft")
    );
    assert_eq!(
        value["board"]["cells"][0],
        serde_json::json!({ "Occupied": "X" })
    );
}
