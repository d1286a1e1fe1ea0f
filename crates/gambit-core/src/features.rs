//! Per-side mutable state owned by a game.

use chrono::NaiveDateTime;

use crate::castling::{CastleSide, CastlingRights};
use crate::side::Side;

/// Highest valid column index on the board.
pub const MAX_COLUMN: u8 = 7;

/// State one side carries through a game: castling rights, the en-passant
/// column of its last two-square pawn advance, the check flag and the
/// session bound to it.
///
/// Fields are read through accessors. Everything that takes part in a
/// cross-side invariant is changed only through [`Game`](crate::game::Game).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideFeatures {
    pub(crate) id: Option<u64>,
    pub(crate) side: Side,
    pub(crate) session_id: Option<String>,
    pub(crate) last_visit_date: Option<NaiveDateTime>,
    pub(crate) castling: CastlingRights,
    pub(crate) pawn_long_move_column: Option<u8>,
    pub(crate) under_check: bool,
}

impl SideFeatures {
    /// Fresh state for `side`: both castling rights, no check, no session.
    pub fn new(side: Side) -> SideFeatures {
        SideFeatures {
            id: None,
            side,
            session_id: None,
            last_visit_date: None,
            castling: CastlingRights::ALL,
            pawn_long_move_column: None,
            under_check: false,
        }
    }

    /// Storage identity, `None` until persisted.
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn last_visit_date(&self) -> Option<NaiveDateTime> {
        self.last_visit_date
    }

    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    pub fn is_short_castling_available(&self) -> bool {
        self.castling.has(CastleSide::Short)
    }

    pub fn is_long_castling_available(&self) -> bool {
        self.castling.has(CastleSide::Long)
    }

    /// Column of this side's pawn that just advanced two squares.
    pub fn pawn_long_move_column(&self) -> Option<u8> {
        self.pawn_long_move_column
    }

    pub fn is_under_check(&self) -> bool {
        self.under_check
    }

    pub(crate) fn revoke_castling(&mut self, castle_side: CastleSide) {
        self.castling = self.castling.revoke(castle_side);
    }

    pub(crate) fn revoke_all_castling(&mut self) {
        self.castling = self.castling.revoke_all();
    }
}
