//! The console loop: reads commands, applies them to the current game and
//! writes replies.

use std::io::{BufRead, Write};

use chrono::Utc;
use tracing::{debug, info, warn};

use gambit_core::Game;

use crate::command::{Command, ConsoleOption, parse_command};
use crate::error::ConsoleError;

/// Settings adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleConfig {
    /// Pretty-print JSON from `show`.
    pub pretty: bool,
}

/// Whether the loop keeps reading after a command.
enum Flow {
    Continue,
    Quit,
}

/// Holds the game being driven and the console settings.
#[derive(Debug, Default)]
pub struct Console {
    game: Option<Game>,
    config: ConsoleConfig,
}

impl Console {
    /// Create a console with no game and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a console with the given settings.
    pub fn with_config(config: ConsoleConfig) -> Self {
        Self { game: None, config }
    }

    /// The game currently being driven, if one was started.
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn config(&self) -> ConsoleConfig {
        self.config
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Malformed or rejected commands are reported on `output` as
    /// `error: ...` lines and the loop carries on. Only I/O failures end it
    /// early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<(), ConsoleError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let outcome = parse_command(trimmed).and_then(|cmd| self.execute(cmd, output));
            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err @ ConsoleError::Io { .. }) => return Err(err),
                Err(err) => {
                    warn!(error = %err, cmd = %trimmed, "command failed");
                    writeln!(output, "error: {err}")?;
                }
            }
        }

        info!("console shutting down");
        Ok(())
    }

    fn execute<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<Flow, ConsoleError> {
        match cmd {
            Command::New(mode) => {
                self.game = Some(Game::new(mode));
                info!(%mode, "new game");
                writeln!(output, "game {mode}")?;
            }
            Command::Join { side, session } => self.game_mut()?.register_session(side, session),
            Command::Visit(side) => {
                let now = Utc::now().naive_utc();
                self.game_mut()?.set_last_visit_date(side, now);
            }
            Command::Turn => {
                let side = self.game_ref()?.active_side();
                writeln!(output, "turn {side}")?;
            }
            Command::Player => match self.game_ref()?.player_side()? {
                Some(side) => writeln!(output, "player {side}")?,
                None => writeln!(output, "player none")?,
            },
            Command::Castle { side, rook_column } => {
                let game = self.game_mut()?;
                match rook_column {
                    Some(column) => game.disable_castling_for_rook(side, column),
                    None => game.disable_castling(side),
                }
            }
            Command::Check(side) => self.game_mut()?.set_under_check_side(side),
            Command::EnPassant { side, column } => {
                self.game_mut()?.set_pawn_long_move_column(side, column)?;
            }
            Command::Ply(ply) => {
                let game = self.game_mut()?;
                game.apply_ply(&ply)?;
                writeln!(output, "position {}", game.position())?;
            }
            Command::Show => {
                let game = self.game_ref()?;
                let json = if self.config.pretty {
                    serde_json::to_string_pretty(game)?
                } else {
                    serde_json::to_string(game)?
                };
                writeln!(output, "{json}")?;
            }
            Command::Set(option) => self.handle_set(option),
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(_) => {}
        }
        Ok(Flow::Continue)
    }

    fn handle_set(&mut self, option: ConsoleOption) {
        match option {
            ConsoleOption::Pretty(on) => self.config.pretty = on,
        }
    }

    fn game_ref(&self) -> Result<&Game, ConsoleError> {
        self.game.as_ref().ok_or(ConsoleError::NoGame)
    }

    fn game_mut(&mut self) -> Result<&mut Game, ConsoleError> {
        self.game.as_mut().ok_or(ConsoleError::NoGame)
    }
}
