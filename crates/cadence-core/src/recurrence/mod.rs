//! Recurrence model and cron codec.
//!
//! A recurrence is daily, weekly on one weekday, or monthly on one day of
//! the month, always at a fixed time of day. The wire form is the
//! five-field `minute hour day-of-month month day-of-week` cron string
//! understood by the backend scheduler. Only that positional grammar is
//! supported: each field is `*` or a single integer literal.

mod codec;
mod next_run;
mod slots;

pub use codec::{describe_cron, weekday_from_name, weekday_name};
pub use next_run::{describe_next_run, next_occurrence};
pub use slots::time_slots;

use chrono::Weekday;

use crate::error::ScheduleError;

/// How often an automation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    /// Picker label ("Every Day" / "Every Week" / "Every Month").
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Daily => "Day",
            Frequency::Weekly => "Week",
            Frequency::Monthly => "Month",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Frequency {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" | "daily" => Ok(Frequency::Daily),
            "week" | "weekly" => Ok(Frequency::Weekly),
            "month" | "monthly" => Ok(Frequency::Monthly),
            _ => Err(ScheduleError::InvalidValue {
                field: "frequency",
                message: format!("{s:?} is not one of day, week, month"),
            }),
        }
    }
}

/// Wall-clock time of day, 24-hour.
///
/// Construction is validated so a value always holds hour 0-23 and
/// minute 0-59.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self, ScheduleError> {
        if hour > 23 {
            return Err(ScheduleError::InvalidValue {
                field: "hour",
                message: format!("{hour} is out of range 0-23"),
            });
        }
        if minute > 59 {
            return Err(ScheduleError::InvalidValue {
                field: "minute",
                message: format!("{minute} is out of range 0-59"),
            });
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// 12-hour display form, e.g. "9:05 PM". Minutes are zero-padded for
    /// display only; cron fields stay unpadded.
    pub fn display(&self) -> String {
        let period = if self.hour >= 12 { "PM" } else { "AM" };
        let display_hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", display_hour, self.minute, period)
    }
}

/// Structured recurrence: frequency, day selector and time of day.
///
/// The variant carries its own day selector, so a weekly recurrence always
/// has a weekday and a monthly one always has a day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    /// Every day at a fixed time.
    Daily { time: TimeOfDay },
    /// Once a week on the given weekday.
    Weekly { time: TimeOfDay, weekday: Weekday },
    /// Once a month on the given day (1-31).
    Monthly { time: TimeOfDay, day: u8 },
}

impl Recurrence {
    pub fn daily(time: TimeOfDay) -> Self {
        Recurrence::Daily { time }
    }

    pub fn weekly(time: TimeOfDay, weekday: Weekday) -> Self {
        Recurrence::Weekly { time, weekday }
    }

    pub fn monthly(time: TimeOfDay, day: u8) -> Result<Self, ScheduleError> {
        if !(1..=31).contains(&day) {
            return Err(ScheduleError::InvalidValue {
                field: "day of month",
                message: format!("{day} is out of range 1-31"),
            });
        }
        Ok(Recurrence::Monthly { time, day })
    }

    pub fn frequency(&self) -> Frequency {
        match self {
            Recurrence::Daily { .. } => Frequency::Daily,
            Recurrence::Weekly { .. } => Frequency::Weekly,
            Recurrence::Monthly { .. } => Frequency::Monthly,
        }
    }

    pub fn time(&self) -> TimeOfDay {
        match self {
            Recurrence::Daily { time }
            | Recurrence::Weekly { time, .. }
            | Recurrence::Monthly { time, .. } => *time,
        }
    }
}
