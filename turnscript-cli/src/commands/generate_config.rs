//! Generate config command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Host name to pre-fill
    #[arg(long, value_name = "NAME")]
    pub host: Option<String>,

    /// Guest name to pre-fill
    #[arg(long, value_name = "NAME")]
    pub guest: Option<String>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the speaker names to match the marker lines in your transcript");
        println!("2. Validate your configuration:");
        println!("   turnscript validate --config {}", self.output.display());
        println!("3. Use it for rendering:");
        println!(
            "   turnscript render -i transcript.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# turnscript configuration

# Speaker names exactly as they appear in marker lines such as
# "Alice (1:02)" or "Bob (1:03:05)". Leave a name empty to disable it.
[speakers]
host = {host}
guest = {guest}

[output]
# Output file; "-" writes to stdout
path = "transcript.html"

# One of: html, fragment, json, markdown
format = "html"

# Copy the rendered transcript to the system clipboard
clipboard = true

# Page title for html output (defaults to the speaker names)
# title = "Episode 1"

# Indent json output
pretty_json = true
"#,
            host = toml_string(self.host.as_deref().unwrap_or("")),
            guest = toml_string(self.guest.as_deref().unwrap_or("")),
        )
    }
}

/// Quote a value as a TOML basic string
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
