//! Interactive view with on-demand refresh.
//!
//! Terminal stand-in for the station dashboard: fetch on start, then
//! re-fetch whenever the user asks. The command owns the displayed list and
//! replaces it wholesale on each delivered result; a failed refresh keeps
//! the previous readings on screen.

use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};

use tempview::{Config, ReadingList, ReadingSync, StoreClient};

use super::print_readings;

/// Show the readings and refresh on demand
#[derive(Debug, Args)]
pub struct WatchCommand {}

impl WatchCommand {
    pub async fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let client = StoreClient::from_config(config)?;
        let sync = ReadingSync::new(client);

        let mut readings: ReadingList = Vec::new();
        match sync.fetch_all().await {
            Ok(list) => readings = list,
            Err(e) => tracing::warn!("Initial fetch failed: {}", e),
        }
        print_readings(&readings);
        println!("Press Enter to refresh, q to quit.");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim() == "q" {
                break;
            }

            match sync.fetch_all().await {
                Ok(list) => readings = list,
                Err(e) => {
                    tracing::warn!("Refresh failed, keeping previous readings: {}", e);
                }
            }
            print_readings(&readings);
            println!("Press Enter to refresh, q to quit.");
        }

        Ok(())
    }
}
