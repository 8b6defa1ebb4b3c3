//! Reconciliation of persisted, pending and suggested automations.
//!
//! The registry is the single owner of the three collections the caller
//! renders: records persisted on the server, records created locally in
//! this session and not yet confirmed, and catalog templates hidden once an
//! automation with the same subject exists. Callers hold and pass a
//! registry value; there is no ambient shared state.

use super::{suggested_automations, Automation};
use crate::recurrence::describe_cron;

/// In-memory view over one user's automations.
///
/// Expected to be driven by a single logical session; wrap it in a lock if
/// multiple writers ever share one instance, since [`suggested_to_show`]
/// reads both mutable sets and must observe a consistent snapshot.
///
/// [`suggested_to_show`]: AutomationRegistry::suggested_to_show
#[derive(Debug, Default)]
pub struct AutomationRegistry {
    persisted: Vec<Automation>,
    pending: Vec<Automation>,
    suggested: Vec<Automation>,
}

impl AutomationRegistry {
    /// Registry with the built-in starter catalog. `base_id` seeds the
    /// catalog's synthetic ids; pass the current epoch milliseconds.
    pub fn new(base_id: i64) -> Self {
        Self {
            persisted: Vec::new(),
            pending: Vec::new(),
            suggested: suggested_automations(base_id),
        }
    }

    /// Registry with a custom suggested catalog.
    pub fn with_catalog(suggested: Vec<Automation>) -> Self {
        Self {
            persisted: Vec::new(),
            pending: Vec::new(),
            suggested,
        }
    }

    /// Replace the persisted set from a server list response.
    pub fn set_persisted(&mut self, records: Vec<Automation>) {
        self.persisted = records.into_iter().map(refresh_display).collect();
    }

    /// Track a locally created automation until the server confirms it.
    /// Never touches the persisted set.
    pub fn add_pending(&mut self, record: Automation) {
        self.pending.push(refresh_display(record));
    }

    /// Fold a server-confirmed record into the persisted set, dropping the
    /// pending entry it replaces. An unknown `pending_id` still records the
    /// confirmed automation; the server is authoritative.
    pub fn confirm(&mut self, pending_id: i64, confirmed: Automation) {
        self.pending.retain(|a| a.id != pending_id);
        self.persisted.push(refresh_display(confirmed));
    }

    /// Remove an automation from whichever set holds it. Removing an
    /// absent id is a no-op, so retries after a failed delete are safe.
    pub fn remove(&mut self, id: i64) {
        self.persisted.retain(|a| a.id != id);
        self.pending.retain(|a| a.id != id);
    }

    /// Records persisted on the server.
    pub fn persisted(&self) -> &[Automation] {
        &self.persisted
    }

    /// Locally created records awaiting confirmation.
    pub fn pending(&self) -> &[Automation] {
        &self.pending
    }

    /// Catalog entries not shadowed by an existing automation with the
    /// same subject (case-sensitive). Recomputed on every call.
    pub fn suggested_to_show(&self) -> Vec<&Automation> {
        self.suggested
            .iter()
            .filter(|template| {
                !self
                    .persisted
                    .iter()
                    .chain(self.pending.iter())
                    .any(|a| a.subject == template.subject)
            })
            .collect()
    }
}

/// Re-derive the display schedule from the cron expression. Crons outside
/// the editor grammar (the weekday-range starter) keep their curated
/// string.
fn refresh_display(mut record: Automation) -> Automation {
    if let Ok(schedule) = describe_cron(&record.crontime) {
        record.schedule = schedule;
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, subject: &str, crontime: &str) -> Automation {
        Automation {
            id,
            subject: subject.to_string(),
            query_to_run: format!("run {subject}"),
            scheduling_request: String::new(),
            schedule: String::new(),
            crontime: crontime.to_string(),
            next: String::new(),
        }
    }

    #[test]
    fn suggestion_hidden_by_persisted_subject() {
        let mut registry = AutomationRegistry::new(1);
        registry.set_persisted(vec![record(10, "Weekly Newsletter", "0 9 * * 1")]);

        let shown: Vec<&str> = registry
            .suggested_to_show()
            .iter()
            .map(|a| a.subject.as_str())
            .collect();
        assert!(!shown.contains(&"Weekly Newsletter"));
        assert_eq!(shown.len(), 3);
    }

    #[test]
    fn subject_match_is_case_sensitive() {
        let mut registry = AutomationRegistry::new(1);
        registry.set_persisted(vec![record(10, "weekly newsletter", "0 9 * * 1")]);
        assert_eq!(registry.suggested_to_show().len(), 4);
    }

    #[test]
    fn pending_subject_hides_suggestion() {
        let mut registry = AutomationRegistry::new(1);
        registry.add_pending(record(900, "Front Page of Hacker News", "0 21 * * 3"));

        let shown: Vec<&str> = registry
            .suggested_to_show()
            .iter()
            .map(|a| a.subject.as_str())
            .collect();
        assert_eq!(
            shown,
            vec!["Weekly Newsletter", "Daily Bedtime Story", "Market Summary"]
        );
    }

    #[test]
    fn add_pending_never_touches_persisted() {
        let mut registry = AutomationRegistry::new(1);
        registry.set_persisted(vec![record(10, "Digest", "0 9 * * *")]);
        registry.add_pending(record(900, "Other", "0 21 * * *"));
        assert_eq!(registry.persisted().len(), 1);
        assert_eq!(registry.pending().len(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut registry = AutomationRegistry::new(1);
        registry.set_persisted(vec![record(10, "Digest", "0 9 * * *")]);
        registry.add_pending(record(900, "Other", "0 21 * * *"));

        registry.remove(10);
        registry.remove(10);
        registry.remove(424242);

        assert!(registry.persisted().is_empty());
        assert_eq!(registry.pending().len(), 1);
    }

    #[test]
    fn confirm_moves_pending_to_persisted() {
        let mut registry = AutomationRegistry::new(1);
        registry.add_pending(record(900, "Digest", "0 9 * * *"));

        registry.confirm(900, record(77, "Digest", "0 9 * * *"));

        assert!(registry.pending().is_empty());
        assert_eq!(registry.persisted().len(), 1);
        assert_eq!(registry.persisted()[0].id, 77);
        // Suggestion shadowing survives the transition.
        assert_eq!(registry.suggested_to_show().len(), 4);
    }

    #[test]
    fn display_schedule_rederived_from_cron() {
        let mut registry = AutomationRegistry::new(1);
        let mut stale = record(10, "Digest", "0 9 * * 1");
        stale.schedule = "some stale sentence".to_string();
        registry.set_persisted(vec![stale]);
        assert_eq!(registry.persisted()[0].schedule, "every Monday at 9:00 AM");
    }

    #[test]
    fn curated_display_kept_for_unsupported_cron() {
        let mut registry = AutomationRegistry::new(1);
        let mut weekdays = record(10, "Market Summary", "0 9 * * 1-5");
        weekdays.schedule = "9AM on every weekday".to_string();
        registry.set_persisted(vec![weekdays]);
        assert_eq!(registry.persisted()[0].schedule, "9AM on every weekday");
    }
}
