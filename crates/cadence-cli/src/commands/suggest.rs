use chrono::Utc;
use clap::Subcommand;

use cadence_core::{AutomationFields, AutomationRegistry, Config};

#[derive(Subcommand)]
pub enum SuggestAction {
    /// List starter automations you have not adopted yet
    List,
    /// Adopt a starter automation by subject
    Add {
        /// Subject of the suggestion, e.g. "Weekly Newsletter"
        subject: String,
    },
}

pub async fn run(action: SuggestAction) -> Result<(), Box<dyn std::error::Error>> {
    let client = super::client()?;
    let mut registry = AutomationRegistry::new(Utc::now().timestamp_millis());
    registry.set_persisted(client.list().await?);

    match action {
        SuggestAction::List => {
            let suggestions = registry.suggested_to_show();
            if suggestions.is_empty() {
                println!("all starter automations are already set up");
            }
            for suggestion in suggestions {
                println!("{}  ({})", suggestion.subject, suggestion.schedule);
                println!("    {}", suggestion.query_to_run);
            }
        }
        SuggestAction::Add { subject } => {
            let template = registry
                .suggested_to_show()
                .into_iter()
                .find(|t| t.subject == subject)
                .cloned()
                .ok_or_else(|| format!("no unadopted suggestion named {subject:?}"))?;

            let config = Config::load_or_default();
            // The template's cron goes to the server verbatim; the
            // weekday-range starter stays a weekday range.
            let fields = AutomationFields {
                query_to_run: template.query_to_run,
                subject: Some(template.subject),
                crontime: template.crontime,
                location: config.location,
            };
            tracing::debug!(crontime = %fields.crontime, "adopting suggestion");
            let created = client.create(&fields).await?;
            println!("created automation {} from suggestion", created.id);
        }
    }
    Ok(())
}
