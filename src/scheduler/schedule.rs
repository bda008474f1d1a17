//! Report schedule described as data.
//!
//! Deciding *when* a report is due is kept separate from *what* the report does so
//! the calendar rules can be checked against any pair of instants instead of the
//! wall clock. The scheduler asks whether a trigger fired inside the window
//! between its previous tick and the current one.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Days of the month on which the monthly trigger considers firing.
///
/// Not every month has a 31st (or 30th, or 29th), so a day in this range is only
/// a candidate until `is_last_day_of_month` confirms it.
const MONTHLY_CANDIDATE_DAYS: std::ops::RangeInclusive<u32> = 28..=31;

/// A point or recurrence in time at which the leaderboard is reported and reset.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    /// Fires once at a fixed instant.
    Once { at: DateTime<Utc> },
    /// Fires at wall-clock `time` in `zone` on the last day of every month.
    MonthlyLastDay { time: NaiveTime, zone: Tz },
}

impl Trigger {
    /// Checks whether the trigger fired inside the window `(since, now]`.
    ///
    /// # Arguments
    /// - `since` - Instant of the previous evaluation (exclusive)
    /// - `now` - Instant of the current evaluation (inclusive)
    ///
    /// # Returns
    /// - `true` - At least one firing of this trigger falls inside the window
    /// - `false` - No firing inside the window, or the window is empty
    pub fn is_due(&self, since: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        if now <= since {
            return false;
        }

        match self {
            Self::Once { at } => since < *at && *at <= now,
            Self::MonthlyLastDay { time, zone } => {
                let first_day = since.with_timezone(zone).date_naive();
                let last_day = now.with_timezone(zone).date_naive();

                first_day
                    .iter_days()
                    .take_while(|day| *day <= last_day)
                    .filter(|day| is_candidate_day(*day))
                    .filter(|day| is_last_day_of_month(*day))
                    .filter_map(|day| {
                        zone.from_local_datetime(&day.and_time(*time))
                            .earliest()
                    })
                    .any(|fire_at| {
                        let fire_at = fire_at.with_timezone(&Utc);
                        since < fire_at && fire_at <= now
                    })
            }
        }
    }

    /// Checks whether the trigger can never fire at or after `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self {
            Self::Once { at } => *at < now,
            Self::MonthlyLastDay { .. } => false,
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Once { at } => write!(f, "one-off report at {}", at.to_rfc3339()),
            Self::MonthlyLastDay { time, zone } => write!(
                f,
                "monthly report at {} {} on the last day of the month",
                time.format("%H:%M"),
                zone
            ),
        }
    }
}

/// The set of triggers the scheduler evaluates on every tick.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pub triggers: Vec<Trigger>,
}

impl Schedule {
    pub fn new(triggers: Vec<Trigger>) -> Self {
        Self { triggers }
    }

    /// Returns the triggers that fired inside the window `(since, now]`.
    pub fn due(&self, since: DateTime<Utc>, now: DateTime<Utc>) -> Vec<&Trigger> {
        self.triggers
            .iter()
            .filter(|trigger| trigger.is_due(since, now))
            .collect()
    }
}

/// Day-of-month filter of the monthly trigger, before the month length is known.
pub fn is_candidate_day(day: NaiveDate) -> bool {
    MONTHLY_CANDIDATE_DAYS.contains(&day.day())
}

/// Checks whether `day` is the last day of its month.
pub fn is_last_day_of_month(day: NaiveDate) -> bool {
    day.succ_opt()
        .map_or(true, |next| next.month() != day.month())
}
