//! Per-side castling rights stored as a 2-bit field within a `u8`.
//!
//! Rights only ever go from available to revoked.

use std::fmt;

/// Home column of the rook on the short-castling side.
pub const ROOK_SHORT_COLUMN: u8 = 0;
/// Home column of the rook on the long-castling side.
pub const ROOK_LONG_COLUMN: u8 = 7;

/// Which rook a castling move uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Short,
    Long,
}

impl CastleSide {
    /// Both castle sides.
    pub const ALL: [CastleSide; 2] = [CastleSide::Short, CastleSide::Long];

    /// The castle side whose rook starts on `column`, if any.
    #[inline]
    pub const fn from_rook_column(column: u8) -> Option<CastleSide> {
        match column {
            ROOK_SHORT_COLUMN => Some(CastleSide::Short),
            ROOK_LONG_COLUMN => Some(CastleSide::Long),
            _ => None,
        }
    }

    /// Home column of this side's rook.
    #[inline]
    pub const fn rook_column(self) -> u8 {
        match self {
            CastleSide::Short => ROOK_SHORT_COLUMN,
            CastleSide::Long => ROOK_LONG_COLUMN,
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            CastleSide::Short => 0b01,
            CastleSide::Long => 0b10,
        }
    }
}

/// Castling rights of one side: bit 0 = short, bit 1 = long.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// Both rights still available, the state of a fresh game.
    pub const ALL: CastlingRights = CastlingRights(0b11);
    /// No rights left. Terminal.
    pub const NONE: CastlingRights = CastlingRights(0);

    /// Build rights from two flags, as loaded from storage.
    #[inline]
    pub const fn from_flags(short: bool, long: bool) -> CastlingRights {
        CastlingRights((short as u8) | ((long as u8) << 1))
    }

    /// Return `true` if castling toward `side` is still allowed.
    #[inline]
    pub const fn has(self, side: CastleSide) -> bool {
        self.0 & side.bit() != 0
    }

    /// Return `true` once both rights are gone.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return rights with `side` revoked. Revoking twice is a no-op.
    #[inline]
    pub const fn revoke(self, side: CastleSide) -> CastlingRights {
        CastlingRights(self.0 & !side.bit())
    }

    /// Return rights with both sides revoked.
    #[inline]
    pub const fn revoke_all(self) -> CastlingRights {
        CastlingRights::NONE
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::ALL
    }
}

impl fmt::Debug for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CastlingRights(short: {}, long: {})",
            self.has(CastleSide::Short),
            self.has(CastleSide::Long)
        )
    }
}
