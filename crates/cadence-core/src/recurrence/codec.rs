//! Bidirectional translation between recurrences and cron expressions.
//!
//! Decoding classifies the frequency in one ordered decision over the
//! day-of-month and day-of-week fields: both wildcards mean daily, a
//! literal day-of-week means weekly, otherwise the literal day-of-month
//! means monthly. A weekly expression also carries a wildcard day-of-month,
//! so checking the fields independently would mis-read it as daily.

use chrono::Weekday;

use super::{Recurrence, TimeOfDay};
use crate::error::ScheduleError;

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Display name for a weekday ("Monday").
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_sunday() as usize]
}

/// Reverse lookup for picker input; case-insensitive.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    WEEKDAY_NAMES
        .iter()
        .position(|n| n.eq_ignore_ascii_case(name))
        .and_then(|i| weekday_from_cron_index(i as u32))
}

fn weekday_from_cron_index(index: u32) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// One parsed cron field: `*` or a single integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CronField {
    Any,
    Literal(u32),
}

fn parse_field(token: &str, cron: &str) -> Result<CronField, ScheduleError> {
    if token == "*" {
        return Ok(CronField::Any);
    }
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(value) = token.parse::<u32>() {
            return Ok(CronField::Literal(value));
        }
    }
    // Ranges, lists, steps, names -- anything but a bare literal.
    Err(ScheduleError::UnsupportedFormat {
        cron: cron.to_string(),
    })
}

/// A wildcard minute or hour means every-minute/every-hour, which the
/// editor cannot represent.
fn literal(field: CronField, cron: &str) -> Result<u32, ScheduleError> {
    match field {
        CronField::Literal(value) => Ok(value),
        CronField::Any => Err(ScheduleError::UnsupportedFormat {
            cron: cron.to_string(),
        }),
    }
}

impl Recurrence {
    /// Decode a five-field cron expression.
    ///
    /// Expressions outside the positional grammar (wrong field count,
    /// ranges, lists, steps, a literal month, a wildcard minute or hour)
    /// are [`ScheduleError::UnsupportedFormat`]; values that parse but fall
    /// outside their range are [`ScheduleError::InvalidValue`].
    pub fn from_cron(cron: &str) -> Result<Self, ScheduleError> {
        let fields: Vec<&str> = cron.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(ScheduleError::UnsupportedFormat {
                cron: cron.to_string(),
            });
        }

        let minute = literal(parse_field(fields[0], cron)?, cron)?;
        let hour = literal(parse_field(fields[1], cron)?, cron)?;
        let day_of_month = parse_field(fields[2], cron)?;
        let month = parse_field(fields[3], cron)?;
        let day_of_week = parse_field(fields[4], cron)?;

        // A literal month cannot round-trip through the editor.
        if month != CronField::Any {
            return Err(ScheduleError::UnsupportedFormat {
                cron: cron.to_string(),
            });
        }

        if minute > 59 {
            return Err(ScheduleError::InvalidValue {
                field: "minute",
                message: format!("{minute} is out of range 0-59"),
            });
        }
        if hour > 23 {
            return Err(ScheduleError::InvalidValue {
                field: "hour",
                message: format!("{hour} is out of range 0-23"),
            });
        }
        let time = TimeOfDay::new(hour as u8, minute as u8)?;

        // Ordered classification: daily, then weekly, then monthly.
        if day_of_week == CronField::Any && day_of_month == CronField::Any {
            Ok(Recurrence::Daily { time })
        } else if let CronField::Literal(dow) = day_of_week {
            let weekday =
                weekday_from_cron_index(dow).ok_or(ScheduleError::InvalidValue {
                    field: "day of week",
                    message: format!("{dow} is out of range 0-6"),
                })?;
            Ok(Recurrence::Weekly { time, weekday })
        } else if let CronField::Literal(dom) = day_of_month {
            if !(1..=31).contains(&dom) {
                return Err(ScheduleError::InvalidValue {
                    field: "day of month",
                    message: format!("{dom} is out of range 1-31"),
                });
            }
            Ok(Recurrence::Monthly {
                time,
                day: dom as u8,
            })
        } else {
            Err(ScheduleError::UnsupportedFormat {
                cron: cron.to_string(),
            })
        }
    }

    /// Encode as a five-field cron expression.
    pub fn to_cron(&self) -> String {
        let time = self.time();
        let (m, h) = (time.minute(), time.hour());
        match self {
            Recurrence::Daily { .. } => format!("{m} {h} * * *"),
            Recurrence::Weekly { weekday, .. } => {
                format!("{m} {h} * * {}", weekday.num_days_from_sunday())
            }
            Recurrence::Monthly { day, .. } => format!("{m} {h} {day} * *"),
        }
    }

    /// Human sentence for display cards, e.g. "every Monday at 9:00 AM".
    /// One-way only; never parsed back.
    pub fn describe(&self) -> String {
        match self {
            Recurrence::Daily { time } => format!("every day at {}", time.display()),
            Recurrence::Weekly { time, weekday } => {
                format!("every {} at {}", weekday_name(*weekday), time.display())
            }
            Recurrence::Monthly { time, day } => {
                format!("every month on the {} at {}", ordinal(*day), time.display())
            }
        }
    }
}

/// Decode a cron expression and render it as a sentence.
pub fn describe_cron(cron: &str) -> Result<String, ScheduleError> {
    Ok(Recurrence::from_cron(cron)?.describe())
}

/// Ordinal day-of-month rendering (1st, 2nd, 3rd, 11th, 21st, ...).
pub(crate) fn ordinal(day: u8) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}
