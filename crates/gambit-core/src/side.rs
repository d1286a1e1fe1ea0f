//! The two sides of a game and turn derivation from the ply counter.

use std::fmt;
use std::ops::{Index, IndexMut, Not};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A side of the board: White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    /// Total number of sides.
    pub const COUNT: usize = 2;

    /// All sides in index order.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite side.
    #[inline]
    pub const fn reverse(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Return the side to move at ply `position`: White on even plies, Black on odd.
    #[inline]
    pub const fn to_move(position: u32) -> Side {
        if position % 2 == 0 {
            Side::White
        } else {
            Side::Black
        }
    }

    /// Row step of a forward pawn move for this side.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }
}

impl Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.reverse()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "WHITE"),
            Side::Black => write!(f, "BLACK"),
        }
    }
}

impl FromStr for Side {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Side, ParseError> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Side::White),
            "black" | "b" => Ok(Side::Black),
            _ => Err(ParseError::InvalidSide {
                found: s.to_string(),
            }),
        }
    }
}

/// A fixed two-slot table holding exactly one value per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct BySide<T> {
    pub white: T,
    pub black: T,
}

impl<T> BySide<T> {
    /// Build a table by calling `f` once per side, White first.
    pub fn from_fn(mut f: impl FnMut(Side) -> T) -> BySide<T> {
        BySide {
            white: f(Side::White),
            black: f(Side::Black),
        }
    }

    /// Iterate `(side, value)` pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::White, &self.white), (Side::Black, &self.black)].into_iter()
    }

    /// Apply `f` to both slots.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> BySide<U> {
        BySide {
            white: f(self.white),
            black: f(self.black),
        }
    }
}

impl<T> Index<Side> for BySide<T> {
    type Output = T;

    #[inline]
    fn index(&self, side: Side) -> &T {
        match side {
            Side::White => &self.white,
            Side::Black => &self.black,
        }
    }
}

impl<T> IndexMut<Side> for BySide<T> {
    #[inline]
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::White => &mut self.white,
            Side::Black => &mut self.black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BySide, Side};

    #[test]
    fn index_values() {
        assert_eq!(Side::White.index(), 0);
        assert_eq!(Side::Black.index(), 1);
    }

    #[test]
    fn reverse_roundtrip() {
        assert_eq!(Side::White.reverse(), Side::Black);
        assert_eq!(Side::Black.reverse(), Side::White);
        assert_eq!(Side::White.reverse().reverse(), Side::White);
    }

    #[test]
    fn not_operator() {
        assert_eq!(!Side::White, Side::Black);
        assert_eq!(!Side::Black, Side::White);
    }

    #[test]
    fn to_move_alternates_with_parity() {
        for position in 0..64u32 {
            let expected = if position % 2 == 0 {
                Side::White
            } else {
                Side::Black
            };
            assert_eq!(Side::to_move(position), expected, "position {position}");
            assert_eq!(Side::to_move(position + 1), expected.reverse());
        }
        assert_eq!(Side::to_move(u32::MAX), Side::Black);
    }

    #[test]
    fn pawn_direction() {
        assert_eq!(Side::White.pawn_direction(), 1);
        assert_eq!(Side::Black.pawn_direction(), -1);
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(format!("{}", Side::White), "WHITE");
        assert_eq!(format!("{}", Side::Black), "BLACK");
        assert_eq!("white".parse::<Side>(), Ok(Side::White));
        assert_eq!("BLACK".parse::<Side>(), Ok(Side::Black));
        assert_eq!("w".parse::<Side>(), Ok(Side::White));
        assert_eq!("b".parse::<Side>(), Ok(Side::Black));
        assert!("red".parse::<Side>().is_err());
    }

    #[test]
    fn by_side_indexing() {
        let mut table = BySide::from_fn(|side| side.index() * 10);
        assert_eq!(table[Side::White], 0);
        assert_eq!(table[Side::Black], 10);

        table[Side::Black] += 1;
        let pairs: Vec<(Side, usize)> = table.iter().map(|(s, v)| (s, *v)).collect();
        assert_eq!(pairs, vec![(Side::White, 0), (Side::Black, 11)]);
        assert_eq!(table.map(|v| v * 2), BySide { white: 0, black: 22 });
    }

    #[test]
    fn all_and_count() {
        assert_eq!(Side::COUNT, 2);
        assert_eq!(Side::ALL.len(), Side::COUNT);
        assert_eq!(Side::ALL[0], Side::White);
        assert_eq!(Side::ALL[1], Side::Black);
    }
}
