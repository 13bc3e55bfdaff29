//! List command

use std::path::Path;

use clap::Args;
use console::style;
use tracing::info;

use changenotes_changelog::{types::sorted_newest_first, ChangelogFile, NotesGenerator};

use crate::cli::output::{path_style, version_style};
use crate::cli::{Cli, OutputFormat};

/// List discovered changelog files, newest version first
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Show only the newest N versions
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

impl ListCommand {
    /// Execute the list command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(limit = ?self.limit, "executing list command");
        let root = std::env::current_dir()?;
        let (config, config_path) = cli.load_config(&root)?;
        let generator = NotesGenerator::new(config);

        let changelogs = generator.discover(&root)?;
        let dir = &generator.config().sources.dir;

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "config_path": config_path.map(|p| p.to_string_lossy().to_string()),
                    "dir": dir.to_string_lossy(),
                    "total": changelogs.len(),
                    "changelogs": self.shown(&changelogs).iter().map(|c| serde_json::json!({
                        "version": c.version,
                        "version_code": c.version_code,
                        "path": c.path.to_string_lossy().to_string(),
                        "lines": c.line_count(),
                    })).collect::<Vec<_>>()
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                for line in self.text_lines(&changelogs, dir, cli.quiet) {
                    println!("{}", line);
                }
            }
        }

        Ok(())
    }

    /// Changelogs to show, newest first, honoring `--limit`
    fn shown<'a>(&self, changelogs: &'a [ChangelogFile]) -> Vec<&'a ChangelogFile> {
        let mut sorted = sorted_newest_first(changelogs);
        if let Some(limit) = self.limit {
            sorted.truncate(limit);
        }
        sorted
    }

    fn text_lines(&self, changelogs: &[ChangelogFile], dir: &Path, quiet: bool) -> Vec<String> {
        if changelogs.is_empty() {
            if quiet {
                return Vec::new();
            }
            return vec![style(format!("No changelogs found in {}", dir.display()))
                .yellow()
                .to_string()];
        }

        let shown = self.shown(changelogs);
        let mut lines: Vec<String> = shown
            .iter()
            .map(|changelog| {
                format!(
                    "  {:>12}  {}  {}",
                    version_style().apply_to(format!("Version {}", changelog.version)),
                    path_style().apply_to(changelog.path.display()),
                    style(format!("{} lines", changelog.line_count())).dim()
                )
            })
            .collect();

        if !quiet && shown.len() < changelogs.len() {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(
                style(format!("{} of {} versions shown", shown.len(), changelogs.len()))
                    .dim()
                    .to_string(),
            );
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn changelogs() -> Vec<ChangelogFile> {
        vec![
            ChangelogFile::new("changelogs/300000.txt", 3, "300000", "- three\n"),
            ChangelogFile::new("changelogs/1000000.txt", 10, "1000000", "- ten\n"),
        ]
    }

    #[test]
    fn test_parse_limit() {
        let cli = Cli::try_parse_from(["changenotes", "list", "-n", "3"]).unwrap();
        match cli.command {
            Some(crate::cli::Commands::List(cmd)) => assert_eq!(cmd.limit, Some(3)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_limit_keeps_newest() {
        let cmd = ListCommand { limit: Some(1) };
        let files = changelogs();
        let shown = cmd.shown(&files);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].version, 10);
    }

    #[test]
    fn test_zero_limit_with_changelogs() {
        let cmd = ListCommand { limit: Some(0) };
        let lines = cmd.text_lines(&changelogs(), Path::new("changelogs"), false);

        assert!(lines.iter().all(|l| !l.contains("No changelogs found")));
        assert!(lines.iter().any(|l| l.contains("0 of 2 versions shown")));
    }

    #[test]
    fn test_empty_directory_message() {
        let cmd = ListCommand { limit: None };
        let lines = cmd.text_lines(&[], Path::new("changelogs"), false);

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("No changelogs found in changelogs"));
        assert!(cmd.text_lines(&[], Path::new("changelogs"), true).is_empty());
    }
}
