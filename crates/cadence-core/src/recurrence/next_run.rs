//! Next-occurrence computation for display cards.
//!
//! Derived from the cron expression alone so the caller never has to trust
//! a stale server string.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use super::codec::{ordinal, weekday_name};
use super::{Recurrence, TimeOfDay};
use crate::error::ScheduleError;

fn target_time(time: TimeOfDay) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour().into(), time.minute().into(), 0)
        .unwrap_or(NaiveTime::MIN)
}

/// Earliest instant strictly after `after` matching the recurrence.
pub fn next_occurrence(spec: &Recurrence, after: DateTime<Utc>) -> DateTime<Utc> {
    let target = target_time(spec.time());
    let today = after.date_naive();

    let next = match spec {
        Recurrence::Daily { .. } => {
            let candidate = today.and_time(target);
            if candidate > after.naive_utc() {
                candidate
            } else {
                candidate + Duration::days(1)
            }
        }
        Recurrence::Weekly { weekday, .. } => {
            let days_ahead = i64::from(weekday.num_days_from_sunday())
                - i64::from(today.weekday().num_days_from_sunday());
            let date = today + Duration::days(days_ahead.rem_euclid(7));
            let candidate = date.and_time(target);
            if candidate > after.naive_utc() {
                candidate
            } else {
                candidate + Duration::days(7)
            }
        }
        Recurrence::Monthly { day, .. } => {
            // Walk forward month by month; days 29-31 skip months too
            // short for them.
            let mut year = today.year();
            let mut month = today.month();
            loop {
                if let Some(date) = NaiveDate::from_ymd_opt(year, month, (*day).into()) {
                    let candidate = date.and_time(target);
                    if candidate > after.naive_utc() {
                        break candidate;
                    }
                }
                month += 1;
                if month > 12 {
                    month = 1;
                    year += 1;
                }
            }
        }
    };

    Utc.from_utc_datetime(&next)
}

/// Render the next run of a cron expression as a short sentence,
/// e.g. "Next run at 9:00 PM today" or "Next run at 9:00 AM on Monday".
pub fn describe_next_run(cron: &str, now: DateTime<Utc>) -> Result<String, ScheduleError> {
    let spec = Recurrence::from_cron(cron)?;
    let next = next_occurrence(&spec, now);

    let when = match spec {
        Recurrence::Daily { .. } => {
            if next.date_naive() == now.date_naive() {
                "today".to_string()
            } else {
                "tomorrow".to_string()
            }
        }
        Recurrence::Weekly { weekday, .. } => format!("on {}", weekday_name(weekday)),
        Recurrence::Monthly { day, .. } => format!("on the {}", ordinal(day)),
    };

    Ok(format!("Next run at {} {}", spec.time().display(), when))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn time(hour: u8, minute: u8) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    // Wednesday.
    fn noon_may_15() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn daily_later_today_or_tomorrow() {
        let spec = Recurrence::daily(time(21, 0));
        let next = next_occurrence(&spec, noon_may_15());
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 5, 15, 21, 0, 0).unwrap());

        let spec = Recurrence::daily(time(9, 0));
        let next = next_occurrence(&spec, noon_may_15());
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 5, 16, 9, 0, 0).unwrap());
    }

    #[test]
    fn daily_exact_match_rolls_to_next_day() {
        let spec = Recurrence::daily(time(12, 0));
        let next = next_occurrence(&spec, noon_may_15());
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 5, 16, 12, 0, 0).unwrap());
    }

    #[test]
    fn weekly_same_day_and_next_week() {
        // Later the same Wednesday.
        let spec = Recurrence::weekly(time(21, 0), Weekday::Wed);
        let next = next_occurrence(&spec, noon_may_15());
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 5, 15, 21, 0, 0).unwrap());

        // Earlier on Wednesday, so a week out.
        let spec = Recurrence::weekly(time(9, 0), Weekday::Wed);
        let next = next_occurrence(&spec, noon_may_15());
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 5, 22, 9, 0, 0).unwrap());

        // Following Monday.
        let spec = Recurrence::weekly(time(9, 0), Weekday::Mon);
        let next = next_occurrence(&spec, noon_may_15());
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 5, 20, 9, 0, 0).unwrap());
    }

    #[test]
    fn monthly_this_month_then_next() {
        let spec = Recurrence::monthly(time(9, 0), 20).unwrap();
        let next = next_occurrence(&spec, noon_may_15());
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 5, 20, 9, 0, 0).unwrap());

        let spec = Recurrence::monthly(time(9, 0), 10).unwrap();
        let next = next_occurrence(&spec, noon_may_15());
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap());
    }

    #[test]
    fn monthly_skips_months_without_the_day() {
        let after = Utc.with_ymd_and_hms(2024, 6, 5, 0, 0, 0).unwrap();
        let spec = Recurrence::monthly(time(9, 0), 31).unwrap();
        let next = next_occurrence(&spec, after);
        // June has 30 days.
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 7, 31, 9, 0, 0).unwrap());
    }

    #[test]
    fn describes_next_runs() {
        let now = noon_may_15();
        assert_eq!(
            describe_next_run("0 21 * * *", now).unwrap(),
            "Next run at 9:00 PM today"
        );
        assert_eq!(
            describe_next_run("0 9 * * *", now).unwrap(),
            "Next run at 9:00 AM tomorrow"
        );
        assert_eq!(
            describe_next_run("0 9 * * 1", now).unwrap(),
            "Next run at 9:00 AM on Monday"
        );
        assert_eq!(
            describe_next_run("30 8 15 * *", now).unwrap(),
            "Next run at 8:30 AM on the 15th"
        );
    }

    #[test]
    fn describe_next_run_propagates_codec_errors() {
        assert!(describe_next_run("0 9 * * 1-5", noon_may_15()).is_err());
    }
}
