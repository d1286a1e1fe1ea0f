//! Console protocol errors.

use gambit_core::{GameError, ParseError};

/// Errors that can occur while reading or executing console commands.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A command was given too few arguments.
    #[error("missing {name}")]
    MissingArgument {
        /// Name of the missing argument.
        name: &'static str,
    },

    /// An argument could not be parsed.
    #[error("invalid {name}: {value}")]
    InvalidArgument {
        /// Name of the argument.
        name: &'static str,
        /// The text that failed to parse.
        value: String,
    },

    /// A side, piece or mode token failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The game rejected the operation.
    #[error(transparent)]
    Game(#[from] GameError),

    /// A command needs a game but none has been started.
    #[error("no game in progress, use `new pvp` or `new ai`")]
    NoGame,

    /// Serializing the game failed.
    #[error("JSON error: {source}")]
    Json {
        /// The underlying serde error.
        #[from]
        source: serde_json::Error,
    },

    /// An I/O error occurred on the input or output stream.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
