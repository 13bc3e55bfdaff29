//! Generate command

use clap::{Args, ValueEnum};
use tracing::info;

use changenotes_changelog::{DocumentKind, GenerationReport, NotesGenerator};

use crate::cli::output::{self, path_style};
use crate::cli::{Cli, OutputFormat};

/// Generate the HTML release notes and the Markdown changes document
#[derive(Debug, Default, Args)]
pub struct GenerateCommand {
    /// Render without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Print one rendered document to stdout instead of writing files
    #[arg(long, value_enum, value_name = "DOCUMENT", conflicts_with = "dry_run")]
    pub stdout: Option<DocumentArg>,
}

/// Document selector for `--stdout`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentArg {
    /// HTML release notes
    Html,
    /// Markdown changes document
    Markdown,
}

impl From<DocumentArg> for DocumentKind {
    fn from(arg: DocumentArg) -> Self {
        match arg {
            DocumentArg::Html => DocumentKind::Html,
            DocumentArg::Markdown => DocumentKind::Markdown,
        }
    }
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(dry_run = self.dry_run, stdout = ?self.stdout, "executing generate command");
        let root = std::env::current_dir()?;
        let (config, _) = cli.load_config(&root)?;
        let generator = NotesGenerator::new(config);

        if let Some(arg) = self.stdout {
            let kind = DocumentKind::from(arg);
            let document = generator
                .render(&root)?
                .into_iter()
                .find(|d| d.kind == kind)
                .ok_or_else(|| anyhow::anyhow!("{} output is disabled in the configuration", kind))?;
            print!("{}", document.content);
            return Ok(());
        }

        let report = if self.dry_run {
            generator.dry_run(&root)?
        } else {
            generator.write(&root)?
        };

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    print_report(&report, &generator);
                }
            }
        }

        Ok(())
    }
}

fn print_report(report: &GenerationReport, generator: &NotesGenerator) {
    if report.changelog_count == 0 {
        output::warning(&format!(
            "No changelogs found in {}",
            path_style().apply_to(generator.config().sources.dir.display())
        ));
    }

    for document in &report.documents {
        let verb = if report.dry_run { "Would write" } else { "Wrote" };
        let message = format!(
            "{} {} ({} versions, {} bytes)",
            verb,
            path_style().apply_to(document.path.display()),
            document.version_count,
            document.len()
        );

        if report.dry_run {
            output::info(&message);
        } else {
            output::success(&message);
        }
    }
}
