pub mod automation;
pub mod config;
pub mod share;
pub mod suggest;

use cadence_core::{AutomationsClient, Config};

/// Client against the configured server.
pub fn client() -> Result<AutomationsClient, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    Ok(AutomationsClient::new(&config.server.base_url)?)
}
