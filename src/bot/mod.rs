//! Discord bot integration.
//!
//! The bot listens for chat commands in guild text channels and posts leaderboards.
//! Its HTTP client and cache are shared with the report scheduler through
//! `DiscordGateway`, so scheduled reports reuse the bot's connection.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Populates the cache with the guild, its channels and roles
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `MESSAGE_CONTENT` - Read the text of those messages (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod discord;
pub mod handler;
pub mod start;
