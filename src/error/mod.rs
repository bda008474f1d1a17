//! Error types for the bot.
//!
//! `AppError` is the top-level error returned by startup, gateway and scheduler
//! code. The user-facing errors (`CommandError`, `AuthError`, `ScoreError`) never bubble up to
//! it: the command router turns them into chat replies instead, mirroring how
//! each variant maps to exactly one message the player sees.

pub mod auth;
pub mod command;
pub mod config;
pub mod delivery;
pub mod score;

use thiserror::Error;

use crate::error::{config::ConfigError, delivery::DeliveryError};

/// Top-level application error type.
///
/// Aggregates the failures that can occur outside of command parsing. Handlers
/// log these and carry on; only startup treats them as fatal.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// A leaderboard could not be delivered, so the accompanying reset was skipped.
    #[error(transparent)]
    DeliveryErr(#[from] DeliveryError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
