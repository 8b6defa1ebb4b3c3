use clap::Subcommand;

use cadence_core::{Config, LocationHint};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the server base URL
    SetServer { url: String },
    /// Set the location hint sent with new automations
    SetLocation {
        city: String,
        region: String,
        country: String,
        timezone: String,
    },
    /// Clear the location hint
    ClearLocation,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::SetServer { url } => {
            let mut config = Config::load_or_default();
            config.server.base_url = url;
            config.save()?;
            println!("server updated");
        }
        ConfigAction::SetLocation {
            city,
            region,
            country,
            timezone,
        } => {
            let mut config = Config::load_or_default();
            config.location = Some(LocationHint {
                city,
                region,
                country,
                timezone,
            });
            config.save()?;
            println!("location updated");
        }
        ConfigAction::ClearLocation => {
            let mut config = Config::load_or_default();
            config.location = None;
            config.save()?;
            println!("location cleared");
        }
    }
    Ok(())
}
