//! Line-oriented console for driving a single game's state by hand or from scripts.

pub mod command;
pub mod console;
pub mod error;

pub use command::{Command, ConsoleOption};
pub use console::{Console, ConsoleConfig};
pub use error::ConsoleError;
