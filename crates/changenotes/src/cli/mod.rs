//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;

use changenotes_core::config::{load_config, load_config_or_default, Config};

use commands::{CheckCommand, GenerateCommand, InitCommand, ListCommand};

/// changenotes - Generate release notes from fastlane changelogs
#[derive(Debug, Parser)]
#[command(name = "changenotes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory (project root)
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Configuration file (default: search from the project root upward)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run (default: generate)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the HTML release notes and the Markdown changes document
    Generate(GenerateCommand),

    /// List discovered changelog files
    List(ListCommand),

    /// Check that generated documents are up to date
    Check(CheckCommand),

    /// Create a configuration file
    Init(InitCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Some(Commands::Generate(ref cmd)) => cmd.execute(&self),
            Some(Commands::List(ref cmd)) => cmd.execute(&self),
            Some(Commands::Check(ref cmd)) => cmd.execute(&self),
            Some(Commands::Init(ref cmd)) => cmd.execute(&self),
            None => GenerateCommand::default().execute(&self),
        }
    }

    /// Load the configuration for a project root
    pub fn load_config(&self, root: &Path) -> anyhow::Result<(Config, Option<PathBuf>)> {
        if let Some(path) = &self.config {
            debug!(path = %path.display(), "using config from command line");
            let config = load_config(path)?;
            return Ok((config, Some(path.clone())));
        }

        Ok(load_config_or_default(root)?)
    }
}
