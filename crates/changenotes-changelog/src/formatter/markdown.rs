//! Markdown changes formatter

use changenotes_core::config::{ChangesConfig, DEFAULT_CHANGES_TITLE};
use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::types::{sorted_newest_first, ChangelogFile, DocumentKind};

/// Markdown changes formatter.
///
/// Unlike the HTML release notes, file content is copied verbatim: bullet
/// markers and blank lines are kept.
pub struct MarkdownFormatter {
    /// Document title
    pub title: String,
}

impl MarkdownFormatter {
    /// Create a formatter with the default title
    pub fn new() -> Self {
        Self {
            title: DEFAULT_CHANGES_TITLE.to_string(),
        }
    }

    /// Create a formatter from the changes configuration
    pub fn from_config(config: &ChangesConfig) -> Self {
        Self::new().with_title(config.title.clone())
    }

    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    fn format(&self, changelogs: &[ChangelogFile]) -> String {
        render_changes_markdown(changelogs, &self.title)
    }

    fn kind(&self) -> DocumentKind {
        DocumentKind::Markdown
    }
}

/// Render the Markdown changes document, newest version first
#[instrument(skip_all, fields(changelog_count = changelogs.len()))]
pub fn render_changes_markdown(changelogs: &[ChangelogFile], title: &str) -> String {
    let mut output = format!("# {}\n\n", title);

    for changelog in sorted_newest_first(changelogs) {
        output.push_str(&format!("## Version {}\n\n", changelog.version));
        output.push_str(&changelog.content);
        output.push('\n');
    }

    debug!(output_len = output.len(), "markdown changes formatted");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changelog(version: u64, content: &str) -> ChangelogFile {
        let code = version * 100_000;
        ChangelogFile::new(format!("changelogs/{}.txt", code), version, code.to_string(), content)
    }

    #[test]
    fn test_copies_lines_verbatim() {
        let files = vec![changelog(5, "- fixed bug\n\n   \nadded feature\n")];
        let output = render_changes_markdown(&files, "Forkyz Changelog");

        assert_eq!(
            output,
            "# Forkyz Changelog\n\n## Version 5\n\n- fixed bug\n\n   \nadded feature\n\n"
        );
    }

    #[test]
    fn test_versions_descending() {
        let files = vec![changelog(3, "c\n"), changelog(10, "t\n"), changelog(1, "o\n")];
        let output = MarkdownFormatter::new().format(&files);

        assert_eq!(
            output,
            "# Forkyz Changelog\n\n\
             ## Version 10\n\nt\n\n\
             ## Version 3\n\nc\n\n\
             ## Version 1\n\no\n\n"
        );
    }

    #[test]
    fn test_empty_is_title_only() {
        let output = MarkdownFormatter::new().with_title("App").format(&[]);
        assert_eq!(output, "# App\n\n");
    }

    #[test]
    fn test_missing_final_newline_is_kept() {
        let files = vec![changelog(2, "- last line")];
        let output = render_changes_markdown(&files, "T");
        assert!(output.ends_with("## Version 2\n\n- last line\n"));
    }
}
