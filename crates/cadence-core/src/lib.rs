//! # Cadence Core Library
//!
//! This library provides the core business logic for Cadence, a
//! recurring-automations product. A user describes "do X repeatedly" in
//! natural terms (frequency, day, time); Cadence persists it on the server
//! as a standard five-field cron expression and renders stored expressions
//! back into the same natural terms for editing, and into a human-readable
//! sentence for display.
//!
//! ## Architecture
//!
//! - **Recurrence codec**: pure, bidirectional translation between a
//!   structured recurrence and a cron expression, plus a sentence renderer
//! - **Automation registry**: reconciles server-persisted, locally-pending
//!   and suggested automations into the collections the caller renders
//! - **Share links**: encode/decode an automation's defining fields as URL
//!   query parameters
//! - **Server client**: HTTP client for the automations API
//!
//! ## Key Components
//!
//! - [`Recurrence`]: structured recurrence, cron encode/decode
//! - [`AutomationRegistry`]: persisted/pending/suggested reconciliation
//! - [`AutomationsClient`]: list/create/update/delete/trigger against the server
//! - [`Config`]: application configuration

pub mod api;
pub mod automation;
pub mod error;
pub mod recurrence;
pub mod share;
pub mod storage;

pub use api::{AutomationFields, AutomationsClient, LocationHint};
pub use automation::{suggested_automations, Automation, AutomationRegistry};
pub use error::{ApiError, ConfigError, CoreError, ScheduleError};
pub use recurrence::{
    describe_cron, describe_next_run, next_occurrence, time_slots, weekday_from_name,
    weekday_name, Frequency, Recurrence, TimeOfDay,
};
pub use share::{parse_share_link, share_link};
pub use storage::Config;
