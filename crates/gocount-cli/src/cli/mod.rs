//! CLI for gocount.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use gocount_core::config;

use commands::{run_completions, run_config, run_count};

/// Top-level CLI. With no subcommand, behaves like `gocount count`.
#[derive(Debug, Parser)]
#[command(name = "gocount")]
#[command(about = "Count occurrences of \"Go\" in files and URLs listed on stdin", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Read sources (paths or http(s) URLs) from stdin, one per line, and count "Go" in each.
    Count {
        /// Fetch at most N sources at once (default from config, normally 5).
        #[arg(long, value_name = "N")]
        workers: Option<usize>,
    },

    /// Show the config file path and the effective settings.
    Config,

    /// Print a shell completion script to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Default for CliCommand {
    fn default() -> Self {
        CliCommand::Count { workers: None }
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let command = cli.command.unwrap_or_default();

        match command {
            // A counting run never fails on config: missing or broken files fall back to defaults.
            CliCommand::Count { workers } => run_count(config::find_config_path(), workers).await?,
            CliCommand::Config => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_config(&cfg)?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
