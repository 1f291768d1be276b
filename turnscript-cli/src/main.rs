//! turnscript command-line entry point

use anyhow::Result;
use clap::Parser;
use turnscript_cli::commands::Commands;

/// Turn plain-text dialogue transcripts into speaker-attributed HTML
#[derive(Debug, Parser)]
#[command(name = "turnscript", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_command() {
        let cli = Cli::try_parse_from([
            "turnscript",
            "render",
            "--file",
            "talk.txt",
            "--host",
            "Alice",
        ])
        .unwrap();

        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.input.to_str(), Some("talk.txt"));
                assert_eq!(args.host.as_deref(), Some("Alice"));
                assert_eq!(args.guest, None);
            }
            other => panic!("expected render, got {other:?}"),
        }
    }
}
