//! One-shot listing of the current readings.

use clap::Args;

use tempview::{Config, ReadingSync, StoreClient};

use super::print_readings;

/// Fetch the readings once and print them
#[derive(Debug, Default, Args)]
pub struct ListCommand {}

impl ListCommand {
    pub async fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let client = StoreClient::from_config(config)?;
        let sync = ReadingSync::new(client);

        let readings = sync.fetch_all().await?;
        print_readings(&readings);

        Ok(())
    }
}
