//! Game state tracking for a chess service: turn, castling rights, check,
//! en-passant eligibility and session binding for each side.

mod castling;
mod error;
mod features;
mod game;
mod piece;
mod piece_kind;
mod ply;
mod record;
mod side;

pub use castling::{CastleSide, CastlingRights, ROOK_LONG_COLUMN, ROOK_SHORT_COLUMN};
pub use error::{GameError, ParseError};
pub use features::{MAX_COLUMN, SideFeatures};
pub use game::{Game, GameId, GameMode, GameSummary};
pub use piece::{Piece, PieceDescriptor};
pub use piece_kind::PieceKind;
pub use ply::PlyRecord;
pub use record::{FeaturesRecord, GameRecord};
pub use side::{BySide, Side};
