use thiserror::Error;

use crate::service::messages;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The privileged command was sent outside of a guild.
    ///
    /// Role membership only exists within a guild, so direct messages can never
    /// pass the role gate.
    #[error("Command requires a guild context")]
    NotInGuild,

    /// The author does not hold the role required by the command.
    #[error("Member does not have the required role '{role}'")]
    MissingRole {
        /// Name of the role that was required
        role: String,
    },
}

impl AuthError {
    /// Message shown to the member whose command was rejected.
    ///
    /// Both variants share the same denial text; the distinction only matters for
    /// logs.
    pub fn reply(&self) -> &'static str {
        match self {
            Self::NotInGuild | Self::MissingRole { .. } => messages::PERMISSION_DENIED,
        }
    }
}
