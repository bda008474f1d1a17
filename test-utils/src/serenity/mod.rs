//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON shaped
//! like Discord's API payloads, with defaults for every field the bot never reads.
//!
//! # Available Factories
//!
//! - `message::create_test_message` - Create Serenity Message objects
//! - `role::create_test_role` - Create Serenity Role objects

pub mod message;
pub mod role;

pub use message::create_test_message;
pub use role::create_test_role;
