//! Tallyboard Test Utils
//!
//! Shared testing utilities for the tallyboard bot. The bot keeps no persistent
//! state, so the only fixtures needed are Serenity API objects for exercising the
//! Discord boundary without a live gateway connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_role};
//!
//! #[test]
//! fn converts_guild_message() {
//!     let message = create_test_message(1, 2, Some(3), 4, false, "!zliczenie");
//!     let role = create_test_role(5, "botek");
//!     // ...
//! }
//! ```

pub mod serenity;
