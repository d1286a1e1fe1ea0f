//! The closed catalog of the twelve sided chess pieces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::piece_kind::PieceKind;
use crate::side::Side;

/// Client-facing `{kind, side}` form of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceDescriptor {
    pub kind: PieceKind,
    pub side: Side,
}

/// A sided chess piece.
///
/// Every value lives in a single compile-time table and is handed out as a
/// `&'static Piece`, so two lookups with the same side and kind return the
/// same reference. The serializable descriptor is computed when the table is
/// built, not per call.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    side: Side,
    kind: PieceKind,
    descriptor: PieceDescriptor,
}

/// White pieces occupy indices 0-5, Black pieces 6-11, kinds in [`PieceKind::ALL`] order.
static CATALOG: [Piece; Piece::COUNT] = build_catalog();

const fn build_catalog() -> [Piece; Piece::COUNT] {
    let mut table = [Piece::new(Side::White, PieceKind::Pawn); Piece::COUNT];
    let mut i = 0;
    while i < Piece::COUNT {
        table[i] = Piece::new(
            Side::ALL[i / PieceKind::COUNT],
            PieceKind::ALL[i % PieceKind::COUNT],
        );
        i += 1;
    }
    table
}

impl Piece {
    /// Number of distinct pieces.
    pub const COUNT: usize = Side::COUNT * PieceKind::COUNT;

    const fn new(side: Side, kind: PieceKind) -> Piece {
        Piece {
            side,
            kind,
            descriptor: PieceDescriptor { kind, side },
        }
    }

    /// Look up the piece for a side and kind.
    #[inline]
    pub fn of(side: Side, kind: PieceKind) -> &'static Piece {
        &CATALOG[side.index() * PieceKind::COUNT + kind.index()]
    }

    /// Look up a piece by its contiguous index, `None` outside 0-11.
    #[inline]
    pub fn from_index(index: usize) -> Option<&'static Piece> {
        CATALOG.get(index)
    }

    /// All twelve pieces in index order.
    pub fn all() -> impl Iterator<Item = &'static Piece> {
        CATALOG.iter()
    }

    /// Parse a piece letter. Uppercase is White, lowercase is Black.
    pub fn from_symbol(c: char) -> Option<&'static Piece> {
        let kind = PieceKind::from_symbol(c)?;
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Some(Piece::of(side, kind))
    }

    /// Parse a one-letter piece token such as `N` or `q`.
    ///
    /// # Errors
    ///
    /// - [`ParseError::InvalidPieceChar`] if the letter names no piece.
    /// - [`ParseError::InvalidPieceKind`] if the token is not exactly one character.
    pub fn parse(s: &str) -> Result<&'static Piece, ParseError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Piece::from_symbol(c).ok_or(ParseError::InvalidPieceChar { character: c })
            }
            _ => Err(ParseError::InvalidPieceKind {
                found: s.to_string(),
            }),
        }
    }

    #[inline]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Contiguous index 0-11, matching the catalog layout.
    #[inline]
    pub const fn index(&self) -> usize {
        self.side.index() * PieceKind::COUNT + self.kind.index()
    }

    /// The precomputed serializable descriptor.
    #[inline]
    pub const fn descriptor(&self) -> &PieceDescriptor {
        &self.descriptor
    }

    #[inline]
    pub const fn is_pawn(&self) -> bool {
        matches!(self.kind, PieceKind::Pawn)
    }

    #[inline]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    #[inline]
    pub const fn is_rook(&self) -> bool {
        matches!(self.kind, PieceKind::Rook)
    }

    /// Piece letter: uppercase for White, lowercase for Black.
    pub fn symbol(&self) -> char {
        let base = self.kind.symbol();
        match self.side {
            Side::White => base.to_ascii_uppercase(),
            Side::Black => base,
        }
    }
}

impl Serialize for Piece {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.descriptor.serialize(serializer)
    }
}

impl FromStr for Piece {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Piece, ParseError> {
        Piece::parse(s).copied()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_prefix = match self.side {
            Side::White => 'W',
            Side::Black => 'B',
        };
        write!(f, "{}{}", side_prefix, self.kind.symbol().to_ascii_uppercase())
    }
}
