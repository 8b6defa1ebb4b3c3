use clap::Subcommand;

use cadence_core::{parse_share_link, share_link, AutomationFields, Config};

#[derive(Subcommand)]
pub enum ShareAction {
    /// Print a share link for one of your automations
    Link { id: i64 },
    /// Import an automation from a share link
    Import {
        /// The full share URL
        url: String,
    },
}

pub async fn run(action: ShareAction) -> Result<(), Box<dyn std::error::Error>> {
    let client = super::client()?;
    match action {
        ShareAction::Link { id } => {
            let automations = client.list().await?;
            let automation = automations
                .iter()
                .find(|a| a.id == id)
                .ok_or_else(|| format!("no automation with id {id}"))?;
            let config = Config::load_or_default();
            println!("{}", share_link(&config.server.base_url, automation));
        }
        ShareAction::Import { url } => {
            // An incomplete link is not an error; there is simply
            // nothing to import.
            let Some(shared) = parse_share_link(&url)? else {
                println!("nothing to import");
                return Ok(());
            };

            let config = Config::load_or_default();
            let fields = AutomationFields {
                query_to_run: shared.query_to_run,
                subject: Some(shared.subject),
                crontime: shared.crontime,
                location: config.location,
            };
            tracing::debug!(crontime = %fields.crontime, "importing shared automation");
            let created = client.create(&fields).await?;
            println!("imported automation {} ({})", created.id, shared.schedule);
        }
    }
    Ok(())
}
