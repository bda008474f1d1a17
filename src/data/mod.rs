//! In-memory data layer.
//!
//! Scores live only in process memory: nothing is written to disk, so every
//! restart begins with an empty leaderboard.

pub mod score;
