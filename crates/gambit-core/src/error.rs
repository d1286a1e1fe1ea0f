//! Error types for game state mutation and textual parsing.

use crate::game::GameMode;
use crate::piece::Piece;
use crate::side::Side;

/// Errors raised by [`Game`](crate::game::Game) operations.
///
/// All of these are programmer or invariant errors; none is transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// An AI-only query was made on a game in another mode.
    #[error("game mode is {mode}, expected AI")]
    InvalidMode {
        /// The mode the game is actually in.
        mode: GameMode,
    },
    /// The aggregate is internally inconsistent.
    #[error("game invariant violated: {reason}")]
    InvariantViolation {
        /// What was found to be inconsistent.
        reason: String,
    },
    /// A column index outside the 8-column board.
    #[error("column index {column} is outside 0-7")]
    InvalidColumn {
        /// The rejected column.
        column: u8,
    },
    /// A move was reported for the side that is not on turn.
    #[error("{side} moved, but it is {expected}'s turn")]
    NotSideToMove {
        /// Side of the moving piece.
        side: Side,
        /// Side the ply counter says is on turn.
        expected: Side,
    },
    /// The ply counter is already at its maximum.
    #[error("ply counter {position} cannot advance further")]
    PositionOverflow {
        /// The counter's current value.
        position: u32,
    },
    /// A move was reported as leaving its own side in check.
    #[error("{side} cannot be left in check by its own move")]
    SelfCheck {
        /// Side that moved.
        side: Side,
    },
    /// A two-square advance was reported for a piece that is not a pawn.
    #[error("long advance reported for non-pawn {piece}")]
    LongAdvanceByNonPawn {
        /// The offending piece.
        piece: Piece,
    },
}

/// Errors from parsing sides, pieces and modes out of text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Not one of `white`, `black`, `w`, `b`.
    #[error("invalid side: \"{found}\"")]
    InvalidSide {
        /// The rejected text.
        found: String,
    },
    /// Not a known piece kind name or letter.
    #[error("invalid piece kind: \"{found}\"")]
    InvalidPieceKind {
        /// The rejected text.
        found: String,
    },
    /// Not a valid piece letter.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The rejected character.
        character: char,
    },
    /// Not `pvp` or `ai`.
    #[error("invalid game mode: \"{found}\"")]
    InvalidMode {
        /// The rejected text.
        found: String,
    },
}
