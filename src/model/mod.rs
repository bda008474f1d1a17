//! Domain models shared by the command router, the score store and the scheduler.
//!
//! These types are platform-neutral: serenity objects are converted into them at
//! the bot boundary so the scoring logic can be exercised without a gateway.

pub mod command;
pub mod message;
pub mod score;
