//! Integration tests driving a game through the public API the way a move
//! engine and a storage layer would.

use gambit_core::{
    Game, GameError, GameId, GameMode, Piece, PieceKind, PlyRecord, ROOK_LONG_COLUMN,
    ROOK_SHORT_COLUMN, Side,
};

fn ply(side: Side, kind: PieceKind, from_column: u8) -> PlyRecord {
    PlyRecord::new(Piece::of(side, kind), from_column)
}

// ── Lifecycle ────────────────────────────────────────────────────────────────

#[test]
fn new_ai_game_then_white_loses_castling() {
    let mut game = Game::new(GameMode::Ai);
    assert_eq!(game.position(), 0);
    assert_eq!(game.active_side(), Side::White);

    game.disable_castling(Side::White);
    assert!(!game.is_short_castling_available(Side::White));
    assert!(!game.is_long_castling_available(Side::White));
    assert!(game.is_short_castling_available(Side::Black));
    assert!(game.is_long_castling_available(Side::Black));
}

#[test]
fn ai_game_player_side_tracks_sessions() {
    let mut game = Game::new(GameMode::Ai);
    assert_eq!(game.player_side(), Ok(None));

    game.register_session(Side::White, "abc");
    assert_eq!(game.player_side(), Ok(Some(Side::White)));

    game.register_session(Side::Black, "bot-observer");
    assert_eq!(game.player_side(), Ok(None));
}

#[test]
fn pvp_game_has_no_player_side() {
    let game = Game::new(GameMode::Pvp);
    assert!(matches!(
        game.player_side(),
        Err(GameError::InvalidMode { mode: GameMode::Pvp })
    ));
}

// ── A short opening ──────────────────────────────────────────────────────────

#[test]
fn opening_sequence() {
    let mut game = Game::new(GameMode::Pvp);

    // 1. pawn two squares on column 3
    game.apply_ply(&ply(Side::White, PieceKind::Pawn, 3).with_long_advance())
        .unwrap();
    assert_eq!(game.pawn_long_move_column(Side::White), Some(3));
    assert_eq!(game.active_side(), Side::Black);

    // 1... pawn two squares on column 4
    game.apply_ply(&ply(Side::Black, PieceKind::Pawn, 4).with_long_advance())
        .unwrap();
    assert_eq!(game.pawn_long_move_column(Side::Black), Some(4));
    assert_eq!(game.pawn_long_move_column(Side::White), Some(3));

    // 2. short rook leaves its corner, giving check
    game.apply_ply(&ply(Side::White, PieceKind::Rook, ROOK_SHORT_COLUMN).with_check(Side::Black))
        .unwrap();
    assert_eq!(game.pawn_long_move_column(Side::White), None);
    assert!(!game.is_short_castling_available(Side::White));
    assert!(game.is_long_castling_available(Side::White));
    assert_eq!(game.under_check_side(), Some(Side::Black));

    // 2... king steps out of check
    game.apply_ply(&ply(Side::Black, PieceKind::King, 3)).unwrap();
    assert_eq!(game.under_check_side(), None);
    assert_eq!(game.pawn_long_move_column(Side::Black), None);
    assert!(!game.is_short_castling_available(Side::Black));
    assert!(!game.is_long_castling_available(Side::Black));

    // 3. long rook leaves its corner
    game.apply_ply(&ply(Side::White, PieceKind::Rook, ROOK_LONG_COLUMN))
        .unwrap();
    assert!(!game.is_long_castling_available(Side::White));
    assert_eq!(game.position(), 5);
    assert_eq!(game.active_side(), Side::Black);
}

#[test]
fn rights_never_come_back() {
    let mut game = Game::new(GameMode::Pvp);
    game.disable_castling(Side::Black);
    for column in 0..8 {
        game.disable_castling_for_rook(Side::Black, column);
    }
    game.advance().unwrap();
    game.apply_ply(&ply(Side::Black, PieceKind::Rook, ROOK_SHORT_COLUMN))
        .unwrap();
    assert!(!game.is_short_castling_available(Side::Black));
    assert!(!game.is_long_castling_available(Side::Black));
}

#[test]
fn check_flag_is_never_on_both_sides() {
    let mut game = Game::new(GameMode::Pvp);
    let sequence = [
        Some(Side::White),
        Some(Side::Black),
        None,
        Some(Side::Black),
        Some(Side::White),
        Some(Side::White),
        None,
    ];
    for side in sequence {
        game.set_under_check_side(side);
        let flagged = Side::ALL
            .iter()
            .filter(|&&s| game.side_features(s).is_under_check())
            .count();
        assert!(flagged <= 1);
        assert_eq!(game.under_check_side(), side);
    }
}

// ── Storage round trip ───────────────────────────────────────────────────────

#[test]
fn persisted_game_survives_reload() {
    let mut game = Game::new(GameMode::Ai);
    game.set_id(GameId(1001));
    game.register_session(Side::Black, "session-1");
    game.apply_ply(&ply(Side::White, PieceKind::Pawn, 6).with_long_advance())
        .unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let reloaded: Game = serde_json::from_str(&json).unwrap();

    assert_eq!(reloaded, game);
    assert_eq!(reloaded.player_side(), Ok(Some(Side::Black)));
    assert_eq!(reloaded.pawn_long_move_column(Side::White), Some(6));
    assert_eq!(reloaded.session_side("session-1"), Some(Side::Black));
}
