//! Persisted shape of a game and validation when loading it back.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::castling::CastlingRights;
use crate::error::GameError;
use crate::features::{MAX_COLUMN, SideFeatures};
use crate::game::{Game, GameId, GameMode};
use crate::side::{BySide, Side};

/// One side's row, as a storage layer or client sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesRecord {
    #[serde(default)]
    pub id: Option<u64>,
    pub side: Side,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub last_visit_date: Option<NaiveDateTime>,
    #[serde(default = "available")]
    pub short_castling_available: bool,
    #[serde(default = "available")]
    pub long_castling_available: bool,
    #[serde(default)]
    pub pawn_long_move_column_index: Option<u8>,
    #[serde(default)]
    pub is_under_check: bool,
}

fn available() -> bool {
    true
}

/// A whole game, as a storage layer or client sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(default)]
    pub id: Option<GameId>,
    #[serde(default)]
    pub position: u32,
    pub mode: GameMode,
    pub features: BySide<FeaturesRecord>,
}

impl From<&SideFeatures> for FeaturesRecord {
    fn from(features: &SideFeatures) -> Self {
        FeaturesRecord {
            id: features.id(),
            side: features.side(),
            session_id: features.session_id().map(str::to_string),
            last_visit_date: features.last_visit_date(),
            short_castling_available: features.is_short_castling_available(),
            long_castling_available: features.is_long_castling_available(),
            pawn_long_move_column_index: features.pawn_long_move_column(),
            is_under_check: features.is_under_check(),
        }
    }
}

impl Game {
    /// Snapshot the game into its persisted shape.
    pub fn to_record(&self) -> GameRecord {
        GameRecord {
            id: self.id,
            position: self.position,
            mode: self.mode,
            features: BySide::from_fn(|side| FeaturesRecord::from(&self.features[side])),
        }
    }

    /// Rebuild a game from its persisted shape, checking the invariants a
    /// well-formed game always holds.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvariantViolation`] if a record sits in the other
    ///   side's slot or both sides are flagged as in check.
    /// - [`GameError::InvalidColumn`] if an en-passant column is off the board.
    pub fn restore(record: GameRecord) -> Result<Game, GameError> {
        for (slot, features) in record.features.iter() {
            if features.side != slot {
                warn!(%slot, found = %features.side, "features stored under wrong side");
                return Err(GameError::InvariantViolation {
                    reason: format!("features for {} stored under {slot}", features.side),
                });
            }
            if let Some(column) = features.pawn_long_move_column_index {
                if column > MAX_COLUMN {
                    return Err(GameError::InvalidColumn { column });
                }
            }
        }

        if record.features.white.is_under_check && record.features.black.is_under_check {
            warn!(id = ?record.id, "both sides flagged as in check");
            return Err(GameError::InvariantViolation {
                reason: "both sides are under check".to_string(),
            });
        }

        Ok(Game {
            id: record.id,
            position: record.position,
            mode: record.mode,
            features: record.features.map(|features| SideFeatures {
                id: features.id,
                side: features.side,
                session_id: features.session_id,
                last_visit_date: features.last_visit_date,
                castling: CastlingRights::from_flags(
                    features.short_castling_available,
                    features.long_castling_available,
                ),
                pawn_long_move_column: features.pawn_long_move_column_index,
                under_check: features.is_under_check,
            }),
        })
    }
}

impl From<Game> for GameRecord {
    fn from(game: Game) -> Self {
        game.to_record()
    }
}

impl TryFrom<GameRecord> for Game {
    type Error = GameError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        Game::restore(record)
    }
}
