use thiserror::Error;

use crate::service::messages;

/// Malformed command arguments.
///
/// These are usage mistakes by the player, not system faults: the router answers
/// with a corrective message and leaves the scores untouched.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The command was given the wrong number of whitespace-separated tokens.
    #[error("Expected {expected} tokens, found {found}")]
    WrongArgumentCount {
        /// Token count the command requires, including the command itself
        expected: usize,
        /// Token count actually received
        found: usize,
    },

    /// The points argument is not a finite number.
    #[error("Invalid points value '{value}'")]
    InvalidPoints {
        /// The raw token that failed to parse
        value: String,
    },
}

impl CommandError {
    /// Corrective message shown to the player.
    pub fn reply(&self) -> &'static str {
        match self {
            Self::WrongArgumentCount { .. } => messages::ADD_POINTS_USAGE,
            Self::InvalidPoints { .. } => messages::INVALID_POINTS,
        }
    }
}
