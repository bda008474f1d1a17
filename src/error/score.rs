use thiserror::Error;

use crate::service::messages;

#[derive(Error, Debug, PartialEq)]
pub enum ScoreError {
    /// Applying the delta would push the total outside the finite range.
    ///
    /// The total is left unchanged.
    #[error("Adding {delta} points to '{name}' would overflow the total")]
    NonFiniteTotal {
        /// Player the points were meant for
        name: String,
        /// The rejected delta
        delta: f64,
    },
}

impl ScoreError {
    /// Message shown to the player whose points were rejected.
    pub fn reply(&self) -> &'static str {
        match self {
            Self::NonFiniteTotal { .. } => messages::INVALID_POINTS,
        }
    }
}
