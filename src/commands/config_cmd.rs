use clap::{Args, Subcommand};

use tempview::Config;

#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show,
}

impl ConfigCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show => {
                println!("Configuration");
                println!("=============\n");

                println!("Config file: {}", Config::default_config_path().display());
                println!();

                if config.store_url.is_empty() {
                    println!("store_url: (not set)");
                } else {
                    println!("store_url: {}", config.store_url);
                }
                println!("collection: {}", config.collection);
                println!(
                    "auth_token: {}",
                    if config.auth_token.is_some() {
                        "(set)"
                    } else {
                        "(not set)"
                    }
                );
            }
        }

        Ok(())
    }
}
