//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use turnscript_core::Segmenter;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let config = match CliConfig::load(&self.config) {
            Ok(config) => config,
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                return Err(anyhow::anyhow!("Validation failed: {:#}", e));
            }
        };

        let speakers = config.speaker_config();
        if let Err(e) = Segmenter::new(&speakers) {
            println!("✗ Configuration is invalid!");
            println!("  Error: {e}");
            return Err(anyhow::anyhow!("Validation failed: {}", e));
        }

        println!("✓ Configuration is valid!");
        println!("  Host: {}", speakers.host().unwrap_or("(none)"));
        println!("  Guest: {}", speakers.guest().unwrap_or("(none)"));
        println!(
            "  Output: {} ({})",
            config.output.path.display(),
            config.output.format
        );

        if speakers.host().is_none() && speakers.guest().is_none() {
            println!("  Warning: no speakers configured; the whole transcript becomes one entry");
        }
        if speakers.has_identical_names() {
            println!("  Warning: host and guest share a name; every marker goes to the host");
        }

        Ok(())
    }
}
