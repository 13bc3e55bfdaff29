//! Check command - verify generated documents match the changelogs

use clap::Args;
use console::style;
use tracing::info;

use changenotes_changelog::{NotesGenerator, StaleReason};

use crate::cli::output::{self, path_style};
use crate::cli::{Cli, OutputFormat};
use crate::exit_codes;

/// Check that generated documents are up to date
#[derive(Debug, Args)]
pub struct CheckCommand {}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!("executing check command");
        let root = std::env::current_dir()?;
        let (config, _) = cli.load_config(&root)?;
        let generator = NotesGenerator::new(config);

        let stale = generator.check(&root)?;

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "up_to_date": stale.is_empty(),
                    "stale": stale,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    for document in &stale {
                        let reason = match document.reason {
                            StaleReason::Missing => style("missing").red(),
                            StaleReason::Outdated => style("outdated").yellow(),
                        };
                        println!(
                            "  {} {} ({})",
                            style("✗").red(),
                            path_style().apply_to(document.path.display()),
                            reason
                        );
                    }

                    if stale.is_empty() {
                        output::success("Generated documents are up to date");
                    } else {
                        println!();
                        println!("Run {} to regenerate", style("changenotes generate").cyan());
                    }
                }
            }
        }

        if !stale.is_empty() {
            std::process::exit(exit_codes::VALIDATION_ERROR);
        }

        Ok(())
    }
}
