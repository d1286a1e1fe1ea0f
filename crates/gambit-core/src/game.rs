//! The game aggregate: ply counter, mode and both sides' features.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::castling::CastleSide;
use crate::error::{GameError, ParseError};
use crate::features::{MAX_COLUMN, SideFeatures};
use crate::record::GameRecord;
use crate::side::{BySide, Side};

/// Who is playing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameMode {
    /// Two humans.
    Pvp,
    /// One human against the engine.
    Ai,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Pvp => write!(f, "PVP"),
            GameMode::Ai => write!(f, "AI"),
        }
    }
}

impl FromStr for GameMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<GameMode, ParseError> {
        match s.to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::Pvp),
            "ai" => Ok(GameMode::Ai),
            _ => Err(ParseError::InvalidMode {
                found: s.to_string(),
            }),
        }
    }
}

/// Storage identity of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Listing view of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: Option<GameId>,
    pub position: u32,
}

/// One chess game's legality state.
///
/// Owns exactly one [`SideFeatures`] per side. All mutation goes through
/// methods that keep these invariants:
///
/// - at most one side is flagged as under check;
/// - castling rights are only ever revoked;
/// - `position` never decreases, and its parity names the side to move.
///
/// A move engine reads the query methods before deciding legality and
/// calls the mutators (or [`apply_ply`](Game::apply_ply)) after a move.
/// Persisting a game, including every mutation made for a single move, is
/// expected to happen as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord", into = "GameRecord")]
pub struct Game {
    pub(crate) id: Option<GameId>,
    pub(crate) position: u32,
    pub(crate) mode: GameMode,
    pub(crate) features: BySide<SideFeatures>,
}

impl Game {
    /// Start a new, not yet persisted game at ply 0 with default rights on both sides.
    pub fn new(mode: GameMode) -> Game {
        Game {
            id: None,
            position: 0,
            mode,
            features: BySide::from_fn(SideFeatures::new),
        }
    }

    pub fn id(&self) -> Option<GameId> {
        self.id
    }

    /// Attach the identity handed out by storage.
    pub fn set_id(&mut self, id: GameId) {
        self.id = Some(id);
    }

    /// Ply counter. Starts at 0.
    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Move on to the next ply.
    ///
    /// # Errors
    ///
    /// [`GameError::PositionOverflow`] if the counter is at `u32::MAX`. The
    /// counter is left unchanged.
    pub fn advance(&mut self) -> Result<(), GameError> {
        self.position = self
            .position
            .checked_add(1)
            .ok_or(GameError::PositionOverflow {
                position: self.position,
            })?;
        Ok(())
    }

    /// Both sides' features.
    pub fn features(&self) -> &BySide<SideFeatures> {
        &self.features
    }

    /// One side's features.
    pub fn side_features(&self, side: Side) -> &SideFeatures {
        &self.features[side]
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            id: self.id,
            position: self.position,
        }
    }

    // ── Turn ────────────────────────────────────────────────────────────────

    /// Side that has the next move: White on even plies, Black on odd.
    pub fn active_side(&self) -> Side {
        Side::to_move(self.position)
    }

    /// The human's side in an AI game.
    ///
    /// Returns `Ok(None)` when neither side or both sides have a session,
    /// so callers have to handle the undetermined case themselves.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidMode`] if the game is not in AI mode.
    pub fn player_side(&self) -> Result<Option<Side>, GameError> {
        if self.mode != GameMode::Ai {
            return Err(GameError::InvalidMode { mode: self.mode });
        }

        let white = self.features.white.session_id.is_some();
        let black = self.features.black.session_id.is_some();
        Ok(match (white, black) {
            (true, false) => Some(Side::White),
            (false, true) => Some(Side::Black),
            _ => None,
        })
    }

    // ── Castling ────────────────────────────────────────────────────────────

    pub fn disable_short_castling(&mut self, side: Side) {
        self.features[side].revoke_castling(CastleSide::Short);
    }

    pub fn disable_long_castling(&mut self, side: Side) {
        self.features[side].revoke_castling(CastleSide::Long);
    }

    /// Revoke both rights, e.g. once the king has moved.
    pub fn disable_castling(&mut self, side: Side) {
        debug!(%side, "castling disabled");
        self.features[side].revoke_all_castling();
    }

    /// Revoke the right tied to the rook whose home column is `rook_column`.
    ///
    /// Column 0 revokes short castling, column 7 long castling. Any other
    /// column leaves the rights untouched.
    pub fn disable_castling_for_rook(&mut self, side: Side, rook_column: u8) {
        if let Some(castle_side) = CastleSide::from_rook_column(rook_column) {
            self.features[side].revoke_castling(castle_side);
        }
    }

    pub fn is_short_castling_available(&self, side: Side) -> bool {
        self.features[side].is_short_castling_available()
    }

    pub fn is_long_castling_available(&self, side: Side) -> bool {
        self.features[side].is_long_castling_available()
    }

    // ── En passant ──────────────────────────────────────────────────────────

    /// Column of `side`'s pawn that advanced two squares on the last ply.
    pub fn pawn_long_move_column(&self, side: Side) -> Option<u8> {
        self.features[side].pawn_long_move_column
    }

    /// Record (or clear with `None`) the column of `side`'s two-square pawn advance.
    ///
    /// The value is kept until it is overwritten or cleared. It does not
    /// lapse when the ply counter moves on; whoever applies moves has to
    /// clear it once the opponent's single-ply window has passed.
    /// [`apply_ply`](Game::apply_ply) does this for the moving side.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidColumn`] if `column` is past the last column.
    pub fn set_pawn_long_move_column(
        &mut self,
        side: Side,
        column: Option<u8>,
    ) -> Result<(), GameError> {
        if let Some(column) = column {
            if column > MAX_COLUMN {
                return Err(GameError::InvalidColumn { column });
            }
        }
        self.features[side].pawn_long_move_column = column;
        Ok(())
    }

    // ── Check ───────────────────────────────────────────────────────────────

    /// The side currently in check, if any.
    pub fn under_check_side(&self) -> Option<Side> {
        self.features
            .iter()
            .find(|(_, features)| features.under_check)
            .map(|(side, _)| side)
    }

    /// Flag `side` as in check and clear the other side, or clear both with `None`.
    pub fn set_under_check_side(&mut self, side: Option<Side>) {
        for s in Side::ALL {
            self.features[s].under_check = side == Some(s);
        }
    }

    // ── Sessions ────────────────────────────────────────────────────────────

    /// Bind a player session to `side`, replacing any previous one.
    pub fn register_session(&mut self, side: Side, session_id: impl Into<String>) {
        let session_id = session_id.into();
        debug!(%side, session = %session_id, "session registered");
        self.features[side].session_id = Some(session_id);
    }

    pub fn set_last_visit_date(&mut self, side: Side, date: NaiveDateTime) {
        self.features[side].last_visit_date = Some(date);
    }

    /// Return `true` if `session_id` is bound to either side.
    pub fn is_session_registered(&self, session_id: &str) -> bool {
        self.session_side(session_id).is_some()
    }

    /// The side `session_id` plays, if it is bound to one.
    pub fn session_side(&self, session_id: &str) -> Option<Side> {
        self.features
            .iter()
            .find(|(_, features)| features.session_id() == Some(session_id))
            .map(|(side, _)| side)
    }

    /// Return `true` if no session is bound to `side`.
    pub fn is_side_empty(&self, side: Side) -> bool {
        self.features[side].session_id.is_none()
    }
}
