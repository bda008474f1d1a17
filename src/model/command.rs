//! Chat command model and tokenizer
//!
//! Commands are recognized by a case-sensitive prefix of the message content and
//! split into whitespace-delimited tokens. There is no quoting, so a player name
//! can never contain whitespace.

use crate::{error::command::CommandError, util::parse::parse_points};

/// Prefix of the command adding points to a player
pub const ADD_POINTS_PREFIX: &str = "!aktywnosc";
/// Prefix of the command posting the leaderboard
pub const REPORT_PREFIX: &str = "!zliczenie";
/// Prefix of the command clearing the leaderboard
pub const RESET_PREFIX: &str = "!reset";

/// Token count of a well-formed add points command: command, name, points
const ADD_POINTS_TOKENS: usize = 3;

/// A parsed chat command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add `points` to the total of `name`, creating the player if needed
    AddPoints { name: String, points: f64 },
    /// Post the current leaderboard
    Report,
    /// Post the leaderboard and clear it (role gated)
    Reset,
    /// Any message that is not a command, ignored by the router
    Unrecognized,
}

impl Command {
    /// Parses a message into a command.
    ///
    /// # Arguments
    /// - `content` - Raw message content
    ///
    /// # Returns
    /// - `Ok(Command)` - Recognized command, or `Command::Unrecognized`
    /// - `Err(CommandError::WrongArgumentCount)` - Add points command without exactly
    ///   a name and a points value
    /// - `Err(CommandError::InvalidPoints)` - Points value is not a finite number
    pub fn parse(content: &str) -> Result<Self, CommandError> {
        if content.starts_with(ADD_POINTS_PREFIX) {
            let tokens: Vec<&str> = content.split_whitespace().collect();

            let [_, name, points] = tokens.as_slice() else {
                return Err(CommandError::WrongArgumentCount {
                    expected: ADD_POINTS_TOKENS,
                    found: tokens.len(),
                });
            };

            return Ok(Self::AddPoints {
                name: name.to_string(),
                points: parse_points(points)?,
            });
        }

        if content.starts_with(REPORT_PREFIX) {
            return Ok(Self::Report);
        }

        if content.starts_with(RESET_PREFIX) {
            return Ok(Self::Reset);
        }

        Ok(Self::Unrecognized)
    }
}
