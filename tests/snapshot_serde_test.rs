//! Snapshots are plain data and serialize for external renderers.

use blockfall::core::{Board, Game, GameError, GameSnapshot, ScriptedRandomizer};
use blockfall::types::{Color, Command, ShapeKind};

#[test]
fn snapshot_json_roundtrip_preserves_state() {
    let rng = ScriptedRandomizer::from_pieces(&[
        (ShapeKind::L, Color::Orange),
        (ShapeKind::Z, Color::Green),
    ]);
    let mut game = Game::with_randomizer(8, 12, rng).unwrap();
    for _ in 0..20 {
        game.tick(Some(Command::Left));
    }
    let snap = game.snapshot();

    let json = serde_json::to_string(&snap).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}

#[test]
fn snapshot_json_shape() {
    let snap = Game::with_seed(4, 4, 3).unwrap().snapshot();
    let value = serde_json::to_value(&snap).unwrap();

    assert_eq!(value["score"], 0);
    assert_eq!(value["is_over"], false);
    assert_eq!(value["current"]["row"], 0);
    assert_eq!(value["board"]["width"], 4);
    assert_eq!(value["board"]["cells"].as_array().map(Vec::len), Some(16));
    assert_eq!(value["board"]["cells"][0], "Empty");
}

#[test]
fn board_json_with_missing_cells_is_rejected() {
    let err = serde_json::from_str::<Board>(r#"{"width":4,"height":4,"cells":[]}"#).unwrap_err();
    assert!(err.to_string().contains("board has 0 cells, expected 16"), "{err}");
}

#[test]
fn board_json_with_zero_width_is_rejected() {
    let err = serde_json::from_str::<Board>(r#"{"width":0,"height":3,"cells":[]}"#).unwrap_err();
    assert!(err.to_string().contains("invalid board dimension 0x3"), "{err}");
}

#[test]
fn loaded_board_resumes_a_game() {
    let mut board = Board::new(4, 4).unwrap();
    board.set(0, 3, blockfall::types::Cell::Filled(Color::Red));
    let json = serde_json::to_string(&board).unwrap();

    let loaded: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, board);

    let mut game = Game::with_board(loaded, ScriptedRandomizer::default());
    assert!(!game.is_over());
    assert_eq!(game.tick(None).board.filled_count(), 1);
}

#[test]
fn error_variants_display_real_sizes() {
    let err = GameError::TooLarge {
        width: 70000,
        height: 2,
    };
    assert_eq!(err.to_string(), "board 70000x2 exceeds 65535x65535");
}
