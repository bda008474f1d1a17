//! Business logic between the bot handlers, the scheduler and the score store.
//!
//! - `command` - parses chat commands and applies them to the scores
//! - `report` - posts leaderboards and performs resets
//! - `leaderboard` - renders the score table
//! - `gateway` - traits the services use to talk to the chat platform
//! - `messages` - texts posted by the bot

pub mod command;
pub mod gateway;
pub mod leaderboard;
pub mod messages;
pub mod report;
