//! Bookkeeping for one already-validated move.

use tracing::debug;

use crate::error::GameError;
use crate::features::MAX_COLUMN;
use crate::game::Game;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;

/// What the move engine established about a move it has just validated and
/// played on its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlyRecord {
    /// The piece that moved.
    pub piece: &'static Piece,
    /// Column the piece moved from.
    pub from_column: u8,
    /// The move was a pawn advancing two squares.
    pub long_advance: bool,
    /// Side in check once the move is on the board.
    pub checked_side: Option<Side>,
}

impl PlyRecord {
    /// A plain move of `piece` from `from_column`, no check given.
    pub fn new(piece: &'static Piece, from_column: u8) -> PlyRecord {
        PlyRecord {
            piece,
            from_column,
            long_advance: false,
            checked_side: None,
        }
    }

    /// Mark the move as a two-square pawn advance.
    pub fn with_long_advance(mut self) -> PlyRecord {
        self.long_advance = true;
        self
    }

    /// Mark `side` as in check after the move.
    pub fn with_check(mut self, side: Side) -> PlyRecord {
        self.checked_side = Some(side);
        self
    }
}

impl Game {
    /// Update the game for a move that has been played.
    ///
    /// Advances the ply counter, clears the mover's stale en-passant column
    /// (the opponent's window on it has now passed), sets the check flag,
    /// revokes castling for king and corner-rook moves and records a new
    /// two-square pawn advance.
    ///
    /// Nothing is changed if an error is returned.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotSideToMove`] if the piece's side is not the active side.
    /// - [`GameError::InvalidColumn`] if `from_column` is off the board.
    /// - [`GameError::LongAdvanceByNonPawn`] if a non-pawn is marked as a long advance.
    /// - [`GameError::SelfCheck`] if the mover is marked as in check after its own move.
    /// - [`GameError::PositionOverflow`] if the ply counter is already at its maximum.
    pub fn apply_ply(&mut self, ply: &PlyRecord) -> Result<(), GameError> {
        let mover = ply.piece.side();
        let expected = self.active_side();
        if mover != expected {
            return Err(GameError::NotSideToMove {
                side: mover,
                expected,
            });
        }
        if ply.from_column > MAX_COLUMN {
            return Err(GameError::InvalidColumn {
                column: ply.from_column,
            });
        }
        if ply.long_advance && !ply.piece.is_pawn() {
            return Err(GameError::LongAdvanceByNonPawn { piece: *ply.piece });
        }
        if ply.checked_side == Some(mover) {
            return Err(GameError::SelfCheck { side: mover });
        }

        self.advance()?;
        self.features[mover].pawn_long_move_column = None;
        self.set_under_check_side(ply.checked_side);

        match ply.piece.kind() {
            PieceKind::King => self.disable_castling(mover),
            PieceKind::Rook => self.disable_castling_for_rook(mover, ply.from_column),
            PieceKind::Pawn if ply.long_advance => {
                self.features[mover].pawn_long_move_column = Some(ply.from_column);
            }
            _ => {}
        }

        debug!(
            position = self.position,
            piece = ?ply.piece,
            check = ?ply.checked_side,
            "ply applied"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::PlyRecord;
    use crate::error::GameError;
    use crate::game::{Game, GameMode};
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::side::Side;

    fn piece(side: Side, kind: PieceKind) -> &'static Piece {
        Piece::of(side, kind)
    }

    #[test]
    fn advances_position() {
        let mut game = Game::new(GameMode::Pvp);
        game.apply_ply(&PlyRecord::new(piece(Side::White, PieceKind::Knight), 1))
            .unwrap();
        assert_eq!(game.position(), 1);
        assert_eq!(game.active_side(), Side::Black);
    }

    #[test]
    fn rejects_wrong_side() {
        let mut game = Game::new(GameMode::Pvp);
        let result = game.apply_ply(&PlyRecord::new(piece(Side::Black, PieceKind::Pawn), 3));
        assert_eq!(
            result,
            Err(GameError::NotSideToMove {
                side: Side::Black,
                expected: Side::White,
            })
        );
        assert_eq!(game.position(), 0);
    }

    #[test]
    fn rejects_long_advance_by_non_pawn() {
        let mut game = Game::new(GameMode::Pvp);
        let ply = PlyRecord::new(piece(Side::White, PieceKind::Bishop), 2).with_long_advance();
        assert!(matches!(
            game.apply_ply(&ply),
            Err(GameError::LongAdvanceByNonPawn { .. })
        ));
        assert_eq!(game, Game::new(GameMode::Pvp));
    }

    #[test]
    fn rejects_off_board_column() {
        let mut game = Game::new(GameMode::Pvp);
        let ply = PlyRecord::new(piece(Side::White, PieceKind::Rook), 8);
        assert_eq!(
            game.apply_ply(&ply),
            Err(GameError::InvalidColumn { column: 8 })
        );
    }

    #[test]
    fn rejects_mover_left_in_check() {
        let mut game = Game::new(GameMode::Pvp);
        let ply = PlyRecord::new(piece(Side::White, PieceKind::Queen), 4).with_check(Side::White);
        assert_eq!(
            game.apply_ply(&ply),
            Err(GameError::SelfCheck { side: Side::White })
        );
        assert_eq!(game, Game::new(GameMode::Pvp));
    }

    #[test]
    fn rejects_ply_past_counter_limit() {
        let mut record = Game::new(GameMode::Pvp).to_record();
        record.position = u32::MAX;
        record.features.black.pawn_long_move_column_index = Some(2);
        let mut game = Game::restore(record).unwrap();
        let before = game.clone();

        let ply = PlyRecord::new(piece(Side::Black, PieceKind::Knight), 1);
        assert_eq!(
            game.apply_ply(&ply),
            Err(GameError::PositionOverflow { position: u32::MAX })
        );
        assert_eq!(game, before);
        assert_eq!(game.position(), u32::MAX);
    }

    #[test]
    fn king_move_revokes_both_rights() {
        let mut game = Game::new(GameMode::Pvp);
        game.apply_ply(&PlyRecord::new(piece(Side::White, PieceKind::King), 3))
            .unwrap();
        assert!(!game.is_short_castling_available(Side::White));
        assert!(!game.is_long_castling_available(Side::White));
        assert!(game.is_short_castling_available(Side::Black));
        assert!(game.is_long_castling_available(Side::Black));
    }

    #[test]
    fn rook_move_revokes_matching_right() {
        let mut game = Game::new(GameMode::Pvp);
        game.apply_ply(&PlyRecord::new(piece(Side::White, PieceKind::Rook), 7))
            .unwrap();
        assert!(game.is_short_castling_available(Side::White));
        assert!(!game.is_long_castling_available(Side::White));

        game.apply_ply(&PlyRecord::new(piece(Side::Black, PieceKind::Rook), 0))
            .unwrap();
        assert!(!game.is_short_castling_available(Side::Black));
        assert!(game.is_long_castling_available(Side::Black));
    }

    #[test]
    fn rook_move_off_corner_keeps_rights() {
        let mut game = Game::new(GameMode::Pvp);
        game.apply_ply(&PlyRecord::new(piece(Side::White, PieceKind::Rook), 4))
            .unwrap();
        assert!(game.is_short_castling_available(Side::White));
        assert!(game.is_long_castling_available(Side::White));
    }

    #[test]
    fn en_passant_window_lasts_one_ply() {
        let mut game = Game::new(GameMode::Pvp);
        let long = PlyRecord::new(piece(Side::White, PieceKind::Pawn), 4).with_long_advance();
        game.apply_ply(&long).unwrap();
        // Black to move: White's advance is capturable.
        assert_eq!(game.pawn_long_move_column(Side::White), Some(4));

        game.apply_ply(&PlyRecord::new(piece(Side::Black, PieceKind::Knight), 1))
            .unwrap();
        game.apply_ply(&PlyRecord::new(piece(Side::White, PieceKind::Knight), 6))
            .unwrap();
        assert_eq!(game.pawn_long_move_column(Side::White), None);
    }

    #[test]
    fn short_pawn_move_clears_previous_column() {
        let mut game = Game::new(GameMode::Pvp);
        game.set_pawn_long_move_column(Side::White, Some(2)).unwrap();
        game.apply_ply(&PlyRecord::new(piece(Side::White, PieceKind::Pawn), 5))
            .unwrap();
        assert_eq!(game.pawn_long_move_column(Side::White), None);
    }

    #[test]
    fn check_flag_follows_ply() {
        let mut game = Game::new(GameMode::Pvp);
        let checking =
            PlyRecord::new(piece(Side::White, PieceKind::Queen), 4).with_check(Side::Black);
        game.apply_ply(&checking).unwrap();
        assert_eq!(game.under_check_side(), Some(Side::Black));

        game.apply_ply(&PlyRecord::new(piece(Side::Black, PieceKind::King), 3))
            .unwrap();
        assert_eq!(game.under_check_side(), None);
    }
}
