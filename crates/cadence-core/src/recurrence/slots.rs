//! The fixed catalog of selectable times of day.
//!
//! The editor offers quarter-hour times on a 12-hour clock; this catalog is
//! the only vocabulary the codec accepts for display-time input.

use super::TimeOfDay;
use crate::error::ScheduleError;

/// Every selectable time token, in order: 96 entries from "12:00 AM"
/// through "11:45 PM".
pub fn time_slots() -> Vec<String> {
    let mut slots = Vec::with_capacity(96);
    for period in ["AM", "PM"] {
        for hour in 0..12u8 {
            let display_hour = if hour == 0 { 12 } else { hour };
            for minute in [0u8, 15, 30, 45] {
                slots.push(format!("{display_hour}:{minute:02} {period}"));
            }
        }
    }
    slots
}

impl TimeOfDay {
    /// Parse a selectable time token ("9:30 PM") into a 24-hour time.
    ///
    /// Only tokens from [`time_slots`] are accepted; anything else is
    /// [`ScheduleError::InvalidValue`].
    pub fn from_slot(token: &str) -> Result<Self, ScheduleError> {
        let reject = || ScheduleError::InvalidValue {
            field: "time",
            message: format!("{token:?} is not a selectable time"),
        };

        if !time_slots().iter().any(|slot| slot == token) {
            return Err(reject());
        }

        let (clock, period) = token.split_once(' ').ok_or_else(reject)?;
        let (hour, minute) = clock.split_once(':').ok_or_else(reject)?;
        let display_hour: u8 = hour.parse().map_err(|_| reject())?;
        let minute: u8 = minute.parse().map_err(|_| reject())?;

        // 12 AM is hour 0; PM adds twelve except for 12 PM itself.
        let hour = match (display_hour, period) {
            (12, "AM") => 0,
            (12, "PM") => 12,
            (h, "AM") => h,
            (h, _) => h + 12,
        };
        TimeOfDay::new(hour, minute)
    }
}
