use chrono::{DateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::error::{config::ConfigError, AppError};
use crate::scheduler::schedule::{Schedule, Trigger};

/// One-off report at the end of the September 2024 event.
const FIXED_REPORT_INSTANT: &str = "2024-09-07T16:37:00+02:00";
/// Local time of the end-of-month report.
const MONTHLY_REPORT_TIME: &str = "22:00";
/// IANA time zone the end-of-month report time is expressed in.
const MONTHLY_REPORT_TIME_ZONE: &str = "Europe/Warsaw";
/// Role required to reset the scores with `!reset`.
const RESET_ROLE: &str = "botek";

pub struct Config {
    pub discord_bot_token: String,

    pub fixed_report_instant: DateTime<Utc>,
    pub monthly_report_time: NaiveTime,
    pub monthly_report_zone: Tz,

    pub reset_role: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            fixed_report_instant: DateTime::parse_from_rfc3339(FIXED_REPORT_INSTANT)
                .map_err(|e| invalid("FIXED_REPORT_INSTANT", FIXED_REPORT_INSTANT, e))?
                .with_timezone(&Utc),
            monthly_report_time: NaiveTime::parse_from_str(MONTHLY_REPORT_TIME, "%H:%M")
                .map_err(|e| invalid("MONTHLY_REPORT_TIME", MONTHLY_REPORT_TIME, e))?,
            monthly_report_zone: MONTHLY_REPORT_TIME_ZONE
                .parse::<Tz>()
                .map_err(|e| invalid("MONTHLY_REPORT_TIME_ZONE", MONTHLY_REPORT_TIME_ZONE, e))?,
            reset_role: RESET_ROLE.to_string(),
        })
    }

    /// Builds the report schedule from the configured instants.
    pub fn schedule(&self) -> Schedule {
        Schedule::new(vec![
            Trigger::Once {
                at: self.fixed_report_instant,
            },
            Trigger::MonthlyLastDay {
                time: self.monthly_report_time,
                zone: self.monthly_report_zone,
            },
        ])
    }
}

fn invalid(name: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
