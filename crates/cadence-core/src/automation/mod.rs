//! Automation records and collection reconciliation.

mod registry;
mod suggested;

pub use registry::AutomationRegistry;
pub use suggested::suggested_automations;

use serde::{Deserialize, Serialize};

/// A recurring automation as the server represents it.
///
/// `crontime` is the authoritative schedule; `schedule` and `next` are
/// display strings derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Automation {
    /// Server-assigned id. 0 marks a record not yet persisted.
    pub id: i64,
    /// Email subject for the delivered result.
    #[serde(default)]
    pub subject: String,
    /// What the automation does when it runs.
    pub query_to_run: String,
    /// The user's original natural-language scheduling request, if any.
    #[serde(default)]
    pub scheduling_request: String,
    /// Human-readable schedule sentence.
    #[serde(default)]
    pub schedule: String,
    /// Five-field cron expression.
    pub crontime: String,
    /// Human-readable next-run sentence.
    #[serde(default)]
    pub next: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn automation_wire_format() {
        let json = r#"{
            "id": 42,
            "subject": "Morning digest",
            "query_to_run": "Summarize my inbox",
            "scheduling_request": "every morning",
            "schedule": "every day at 9:00 AM",
            "crontime": "0 9 * * *",
            "next": "Next run at 9:00 AM tomorrow"
        }"#;
        let automation: Automation = serde_json::from_str(json).unwrap();
        assert_eq!(automation.id, 42);
        assert_eq!(automation.crontime, "0 9 * * *");

        let back = serde_json::to_string(&automation).unwrap();
        let reparsed: Automation = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed, automation);
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let json = r#"{"id": 1, "query_to_run": "q", "crontime": "0 9 * * *"}"#;
        let automation: Automation = serde_json::from_str(json).unwrap();
        assert_eq!(automation.subject, "");
        assert_eq!(automation.next, "");
    }
}
