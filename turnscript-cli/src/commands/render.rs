//! Render command implementation

use crate::config::CliConfig;
use crate::input::FileReader;
use crate::output::OutputFormat;
use crate::sink::{copy_to_clipboard, write_output, OutputTarget};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use turnscript_core::{Segmenter, SpeakerConfig};

/// Arguments for the render command
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Transcript file to read
    #[arg(short, long, alias = "file", value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Host name as written in marker lines
    #[arg(long, value_name = "NAME")]
    pub host: Option<String>,

    /// Guest name as written in marker lines
    #[arg(long, value_name = "NAME")]
    pub guest: Option<String>,

    /// Output file, `-` for stdout [default: transcript.html]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: html]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Page title for HTML output
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Do not copy the rendered transcript to the clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting transcript rendering");
        log::debug!("Arguments: {:?}", self);

        let config = self.resolve_config()?;
        let speakers = config.speaker_config();
        if speakers.has_identical_names() {
            log::warn!(
                "Host and guest share the same name; every marker is attributed to the host"
            );
        }

        let segmenter = Segmenter::new(&speakers).context("Failed to prepare speaker markers")?;
        log::debug!(
            "Reading {} ({} bytes)",
            self.input.display(),
            FileReader::file_size(&self.input).unwrap_or(0)
        );
        let entries = FileReader::read_entries(&self.input, &segmenter)?;

        let formatter = config.output.format.formatter(
            speakers.clone(),
            config.title(),
            config.output.pretty_json,
        );
        let rendered = formatter.format_entries(&entries)?;

        let target = OutputTarget::from_path(&config.output.path);
        write_output(&target, &rendered.body)?;

        if config.output.clipboard {
            copy_to_clipboard(&rendered.clipboard)?;
        }

        if target != OutputTarget::Stdout {
            println!("Transcript written to: {}", target.display_name());
            println!("{}", speaker_summary(&speakers));
        }

        Ok(())
    }

    /// Merge the config file (if any) with command-line overrides
    pub fn resolve_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        if let Some(host) = &self.host {
            config.speakers.host = Some(host.clone());
        }
        if let Some(guest) = &self.guest {
            config.speakers.guest = Some(guest.clone());
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(title) = &self.title {
            config.output.title = Some(title.clone());
        }
        if self.no_clipboard {
            config.output.clipboard = false;
        }

        Ok(config)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when commands run in-process.
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

fn speaker_summary(speakers: &SpeakerConfig) -> String {
    format!(
        "Host: {}, Guest: {}",
        speakers.host().unwrap_or(""),
        speakers.guest().unwrap_or("")
    )
}
