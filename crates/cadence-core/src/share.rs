//! Share links for automations.
//!
//! A share link carries the three defining fields of an automation as
//! query parameters on a fixed path, so another user can import it:
//! `{origin}/automations?subject=...&query=...&crontime=...`.

use url::Url;

use crate::automation::Automation;
use crate::error::ScheduleError;
use crate::recurrence::describe_cron;

/// Path component of a share link.
pub const SHARE_PATH: &str = "/automations";

/// Build a share link for an automation. Each field is percent-encoded
/// independently.
pub fn share_link(origin: &str, automation: &Automation) -> String {
    format!(
        "{}{}?subject={}&query={}&crontime={}",
        origin.trim_end_matches('/'),
        SHARE_PATH,
        urlencoding::encode(&automation.subject),
        urlencoding::encode(&automation.query_to_run),
        urlencoding::encode(&automation.crontime),
    )
}

/// Decode a share link back into an importable automation.
///
/// Returns `Ok(None)` when the URL does not parse or any of the three
/// parameters is missing or empty -- an incomplete link means there is
/// nothing to import, not an error. A complete link with a cron outside
/// the supported grammar is an error the caller should surface.
///
/// The returned record has id 0, marking it as not yet persisted, and its
/// `schedule` derived from the cron expression.
pub fn parse_share_link(link: &str) -> Result<Option<Automation>, ScheduleError> {
    let Ok(url) = Url::parse(link) else {
        return Ok(None);
    };

    let mut subject = None;
    let mut query = None;
    let mut crontime = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "subject" => subject = Some(value.into_owned()),
            "query" => query = Some(value.into_owned()),
            "crontime" => crontime = Some(value.into_owned()),
            _ => {}
        }
    }

    let (Some(subject), Some(query_to_run), Some(crontime)) = (subject, query, crontime) else {
        return Ok(None);
    };
    if subject.is_empty() || query_to_run.is_empty() || crontime.is_empty() {
        return Ok(None);
    }

    let schedule = describe_cron(&crontime)?;
    Ok(Some(Automation {
        id: 0,
        subject,
        query_to_run,
        scheduling_request: String::new(),
        schedule,
        crontime,
        next: String::new(),
    }))
}
