//! Console command parsing.

use gambit_core::{GameMode, Piece, PlyRecord, Side};

use crate::error::ConsoleError;

/// A runtime setting changed with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleOption {
    /// Pretty-print JSON from `show`.
    Pretty(bool),
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new pvp|ai` -- start a fresh game.
    New(GameMode),
    /// `join <side> <session>` -- bind a session to a side.
    Join { side: Side, session: String },
    /// `visit <side>` -- stamp the side's last visit with the current time.
    Visit(Side),
    /// `turn` -- print the side to move.
    Turn,
    /// `player` -- print the human's side in an AI game.
    Player,
    /// `castle <side> [rook-column]` -- revoke castling rights.
    Castle { side: Side, rook_column: Option<u8> },
    /// `check <side>|none` -- set or clear the check flag.
    Check(Option<Side>),
    /// `ep <side> <column>|-` -- record or clear a two-square pawn advance.
    EnPassant { side: Side, column: Option<u8> },
    /// `ply <piece> <from-column> [long] [check]` -- book a played move.
    Ply(PlyRecord),
    /// `show` -- print the game as JSON.
    Show,
    /// `set <name> <value>` -- change a console setting.
    Set(ConsoleOption),
    /// `quit` -- leave the console.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    let args = &tokens[1..];
    match tokens[0] {
        "new" => Ok(Command::New(arg(args, 0, "mode")?.parse()?)),
        "join" => Ok(Command::Join {
            side: arg(args, 0, "side")?.parse()?,
            session: arg(args, 1, "session")?.to_string(),
        }),
        "visit" => Ok(Command::Visit(arg(args, 0, "side")?.parse()?)),
        "turn" => Ok(Command::Turn),
        "player" => Ok(Command::Player),
        "castle" => Ok(Command::Castle {
            side: arg(args, 0, "side")?.parse()?,
            rook_column: args.get(1).map(|c| parse_column(c)).transpose()?,
        }),
        "check" => match arg(args, 0, "side")? {
            "none" | "-" => Ok(Command::Check(None)),
            side => Ok(Command::Check(Some(side.parse()?))),
        },
        "ep" => Ok(Command::EnPassant {
            side: arg(args, 0, "side")?.parse()?,
            column: match arg(args, 1, "column")? {
                "-" | "none" => None,
                column => Some(parse_column(column)?),
            },
        }),
        "ply" => parse_ply(args),
        "show" => Ok(Command::Show),
        "set" => parse_set(args),
        "quit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse `ply` arguments: piece letter, from-column, then optional flags.
///
/// `long` marks a two-square pawn advance; `check` puts the mover's
/// opponent in check. Unknown flags are rejected.
fn parse_ply(args: &[&str]) -> Result<Command, ConsoleError> {
    let letter = arg(args, 0, "piece")?;
    let piece = Piece::parse(letter)?;
    let mut ply = PlyRecord::new(piece, parse_column(arg(args, 1, "column")?)?);

    for flag in &args[2..] {
        match *flag {
            "long" => ply = ply.with_long_advance(),
            "check" => ply = ply.with_check(piece.side().reverse()),
            other => {
                return Err(ConsoleError::InvalidArgument {
                    name: "ply flag",
                    value: other.to_string(),
                });
            }
        }
    }

    Ok(Command::Ply(ply))
}

fn parse_set(args: &[&str]) -> Result<Command, ConsoleError> {
    let name = arg(args, 0, "option name")?;
    let value = arg(args, 1, "option value")?;
    match name.to_ascii_lowercase().as_str() {
        "pretty" => {
            let on = value.parse().map_err(|_| ConsoleError::InvalidArgument {
                name: "pretty",
                value: value.to_string(),
            })?;
            Ok(Command::Set(ConsoleOption::Pretty(on)))
        }
        _ => Err(ConsoleError::InvalidArgument {
            name: "option name",
            value: name.to_string(),
        }),
    }
}

/// Return the argument at `index` or a missing-argument error naming it.
fn arg<'a>(args: &[&'a str], index: usize, name: &'static str) -> Result<&'a str, ConsoleError> {
    args.get(index)
        .copied()
        .ok_or(ConsoleError::MissingArgument { name })
}

/// Parse a column index. Range checks are left to the game.
fn parse_column(token: &str) -> Result<u8, ConsoleError> {
    token.parse().map_err(|_| ConsoleError::InvalidArgument {
        name: "column",
        value: token.to_string(),
    })
}
