//! HTTP client for the automations API.

mod client;

pub use client::AutomationsClient;

use serde::{Deserialize, Serialize};

/// Fields sent on create and update calls.
#[derive(Debug, Clone, Default)]
pub struct AutomationFields {
    /// What the automation should do when it runs.
    pub query_to_run: String,
    /// Email subject; the server generates one when absent.
    pub subject: Option<String>,
    /// Five-field cron expression.
    pub crontime: String,
    /// Approximate client location, forwarded verbatim.
    pub location: Option<LocationHint>,
}

/// Approximate client location, passed through so the server schedules
/// runs in the user's timezone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationHint {
    pub city: String,
    pub region: String,
    pub country: String,
    pub timezone: String,
}
