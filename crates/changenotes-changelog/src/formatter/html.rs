//! HTML release notes formatter

use changenotes_core::config::{ReleaseNotesConfig, DEFAULT_RELEASE_INTRO};
use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::types::{sorted_newest_first, ChangelogFile, DocumentKind};

/// Bullet glyph written before each note: U+2022, encoded once as UTF-8
const BULLET: &str = "\u{2022}";

/// HTML release notes formatter
pub struct HtmlFormatter {
    /// Fragment written before the first version section
    pub intro: String,
}

impl HtmlFormatter {
    /// Create a formatter with the default intro
    pub fn new() -> Self {
        Self {
            intro: DEFAULT_RELEASE_INTRO.to_string(),
        }
    }

    /// Create a formatter from the release notes configuration
    pub fn from_config(config: &ReleaseNotesConfig) -> Self {
        Self::new().with_intro(config.intro.clone())
    }

    /// Set the intro fragment
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogFormatter for HtmlFormatter {
    fn format(&self, changelogs: &[ChangelogFile]) -> String {
        render_release_html(changelogs, &self.intro)
    }

    fn kind(&self) -> DocumentKind {
        DocumentKind::Html
    }
}

/// Text of a release note line, or `None` if the line is blank.
///
/// One leading `-` is dropped only when it is the first character of the raw
/// line; the rest is trimmed.
pub fn release_line(line: &str) -> Option<&str> {
    let text = line.strip_prefix('-').unwrap_or(line).trim();
    (!text.is_empty()).then_some(text)
}

/// Render the HTML release notes, newest version first
#[instrument(skip_all, fields(changelog_count = changelogs.len()))]
pub fn render_release_html(changelogs: &[ChangelogFile], intro: &str) -> String {
    let mut output = String::from(intro);

    for changelog in sorted_newest_first(changelogs) {
        output.push_str(&format!("<h2>Version {}</h2>\n\n", changelog.version));

        for text in changelog.lines().filter_map(release_line) {
            output.push_str(&format!("{} {}<br>\n", BULLET, text));
        }
    }

    debug!(output_len = output.len(), "html release notes formatted");
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
    fn test_release_line() {
        assert_eq!(release_line("- fixed bug"), Some("fixed bug"));
        assert_eq!(release_line("added feature"), Some("added feature"));
        assert_eq!(release_line(""), None);
        assert_eq!(release_line("   "), None);
        assert_eq!(release_line("-"), None);
        assert_eq!(release_line("--double"), Some("-double"));
        assert_eq!(release_line("  - indented"), Some("- indented"));
    }

    #[test]
    fn test_filters_and_strips() {
        let files = vec![changelog(5, "- fixed bug\n\n   \nadded feature\n")];
        let output = render_release_html(&files, "");

        assert_eq!(
            output,
            "<h2>Version 5</h2>\n\n• fixed bug<br>\n• added feature<br>\n"
        );
    }

    #[test]
    fn test_versions_descending() {
        let files = vec![changelog(3, "c\n"), changelog(10, "t\n"), changelog(1, "o\n")];
        let output = HtmlFormatter::new().with_intro("<h1>App</h1>\n").format(&files);

        let ten = output.find("Version 10").unwrap();
        let three = output.find("Version 3<").unwrap();
        let one = output.find("Version 1<").unwrap();
        assert!(output.starts_with("<h1>App</h1>\n"));
        assert!(ten < three && three < one);
    }

    #[test]
    fn test_empty_is_intro_only() {
        let output = HtmlFormatter::new().format(&[]);
        assert_eq!(output, DEFAULT_RELEASE_INTRO);
    }

    #[test]
    fn test_markup_is_not_escaped() {
        let files = vec![changelog(2, "- see <b>settings</b>\n")];
        let output = render_release_html(&files, "");
        assert!(output.contains("• see <b>settings</b><br>\n"));
    }

    #[test]
    fn test_bullet_is_single_utf8_encoded() {
        let files = vec![changelog(1, "- one\n")];
        let output = render_release_html(&files, "");
        let line = output.lines().last().unwrap();

        assert_eq!(&line.as_bytes()[..4], b"\xe2\x80\xa2 ");
        assert!(!output.contains("\u{e2}\u{20ac}\u{a2}"));
    }
}
