//! CLI for the Silo image loader.

mod commands;


use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use silo_core::config;

use commands::{run_config_path, run_fetch, run_resolve};

/// Top-level CLI for the Silo image loader.
#[derive(Debug, Parser)]
#[command(name = "silo")]
#[command(about = "Silo: image loader for HTTP and S3-compatible origins", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Load one image and write its bytes to a file or stdout.
    Fetch {
        /// Request URL (bucket path like /images/photo.jpg, or http(s) URL).
        url: String,

        /// Output file; stdout when omitted.
        #[arg(short, long, value_name = "FILE")]
        output: Option<std::path::PathBuf>,
    },

    /// Show the bucket/key a URL resolves to and whether the bucket is allowed.
    Resolve {
        /// Request URL to resolve.
        url: String,
    },

    /// Print the path of the active config file.
    ConfigPath,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Load global config early; commands receive it by reference.
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { url, output } => run_fetch(&cfg, &url, output.as_deref()).await,
            CliCommand::Resolve { url } => run_resolve(&cfg, &url),
            CliCommand::ConfigPath => run_config_path(),
            CliCommand::Completions { shell } => {
                let mut cmd = Cli::command();
                clap_complete::generate(shell, &mut cmd, "silo", &mut std::io::stdout());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn parse(args: &[&str]) -> CliCommand {
    Cli::parse_from(args).command
}
