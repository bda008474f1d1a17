//! Time-triggered leaderboard reports.
//!
//! `schedule` describes when reports are due; `leaderboard_reports` runs the cron
//! job that evaluates it and posts the report.

pub mod leaderboard_reports;
pub mod schedule;
